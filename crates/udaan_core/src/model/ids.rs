//! Typed identifiers for cross-entity references.
//!
//! # Responsibility
//! - Keep user/employee/activity/profile ids from being mixed up.
//! - Preserve the fixture's string ids on the wire (`"3"`, `"a1"`, `"sp1"`).
//!
//! # Invariants
//! - Ids are opaque; resolution always goes through the directory lookup,
//!   which returns `Option` for unknown ids.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Returns whether the id is empty after trimming.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a login-capable user.
    UserId
);
string_id!(
    /// Identifier of an employee record.
    ///
    /// Employees and users share the same id space in the fixture: the
    /// employee user `"3"` owns employee record `"3"`, and a manager user's
    /// id is what employee records carry in `managerId`.
    EmployeeId
);
string_id!(
    /// Identifier of one IDP activity.
    ActivityId
);
string_id!(
    /// Identifier of one success profile.
    SuccessProfileId
);

impl From<&UserId> for EmployeeId {
    fn from(value: &UserId) -> Self {
        Self(value.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeId, UserId};

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = EmployeeId::new("3");
        let json = serde_json::to_value(&id).expect("serialize id");
        assert_eq!(json, serde_json::json!("3"));
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(UserId::new("  ").is_blank());
        assert!(!UserId::new("1").is_blank());
    }

    #[test]
    fn user_id_maps_onto_employee_id() {
        let user = UserId::new("3");
        assert_eq!(EmployeeId::from(&user).as_str(), "3");
    }
}
