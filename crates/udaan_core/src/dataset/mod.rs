//! Dataset aggregate: the immutable records every dashboard reads.
//!
//! # Responsibility
//! - Provide the built-in demo fixture.
//! - Load a replacement dataset from JSON with the same shape.
//! - Validate record-level invariants and id uniqueness on load.
//!
//! # Invariants
//! - A `Dataset` is never mutated after construction.
//! - Out-of-range 9-box coordinates are accepted here; the matrix drops and
//!   reports them when bucketing.

pub mod fixture;

use crate::model::activity::{ActivityValidationError, IdpActivity};
use crate::model::employee::{Employee, EmployeeValidationError};
use crate::model::profile::SuccessProfile;
use crate::model::user::User;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// All records backing one dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub activities: Vec<IdpActivity>,
    #[serde(default)]
    pub success_profiles: Vec<SuccessProfile>,
}

/// Dataset load/validation errors.
#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Employee(EmployeeValidationError),
    Activity(ActivityValidationError),
    /// Blank user or profile id.
    BlankId(&'static str),
    DuplicateId {
        entity: &'static str,
        id: String,
    },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid dataset json: {err}"),
            Self::Employee(err) => write!(f, "{err}"),
            Self::Activity(err) => write!(f, "{err}"),
            Self::BlankId(entity) => write!(f, "{entity} id must not be blank"),
            Self::DuplicateId { entity, id } => write!(f, "duplicate {entity} id: {id}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Employee(err) => Some(err),
            Self::Activity(err) => Some(err),
            Self::BlankId(_) | Self::DuplicateId { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<EmployeeValidationError> for DatasetError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Employee(value)
    }
}

impl From<ActivityValidationError> for DatasetError {
    fn from(value: ActivityValidationError) -> Self {
        Self::Activity(value)
    }
}

impl Dataset {
    /// Returns the built-in demo dataset.
    pub fn fixture() -> Self {
        fixture::fixture_dataset()
    }

    /// Parses and validates a dataset from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reads, parses and validates a dataset file.
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(raw.as_str()).inspect_err(|err| {
            warn!("event=dataset_load module=dataset status=error error={err}");
        })?;
        info!(
            "event=dataset_load module=dataset status=ok users={} employees={} activities={} profiles={}",
            dataset.users.len(),
            dataset.employees.len(),
            dataset.activities.len(),
            dataset.success_profiles.len()
        );
        Ok(dataset)
    }

    /// Validates every record and id uniqueness per entity kind.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        for user in &self.users {
            if user.id.is_blank() {
                return Err(DatasetError::BlankId("user"));
            }
            ensure_unique(&mut seen, "user", user.id.as_str())?;
        }

        seen.clear();
        for employee in &self.employees {
            employee.validate()?;
            ensure_unique(&mut seen, "employee", employee.id.as_str())?;
        }

        seen.clear();
        for activity in &self.activities {
            activity.validate()?;
            ensure_unique(&mut seen, "activity", activity.id.as_str())?;
        }

        seen.clear();
        for profile in &self.success_profiles {
            if profile.id.is_blank() {
                return Err(DatasetError::BlankId("success profile"));
            }
            ensure_unique(&mut seen, "success profile", profile.id.as_str())?;
        }

        Ok(())
    }
}

fn ensure_unique<'a>(
    seen: &mut HashSet<&'a str>,
    entity: &'static str,
    id: &'a str,
) -> Result<(), DatasetError> {
    if !seen.insert(id) {
        return Err(DatasetError::DuplicateId {
            entity,
            id: id.to_string(),
        });
    }
    Ok(())
}
