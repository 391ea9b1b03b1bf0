//! Built-in demo dataset.
//!
//! Manager `"2"` owns employees `"3"` through `"7"`; every activity belongs
//! to employee `"3"`.

use crate::dataset::Dataset;
use crate::model::activity::{ActivityStatus, ActivityType, IdpActivity};
use crate::model::employee::{
    AppraisalScores, CompetencyScores, Employee, IdpStatus, NineBoxPosition, ReadinessLevel,
};
use crate::model::profile::SuccessProfile;
use crate::model::user::{User, UserRole};

/// Competencies tracked by the organization-level gap analysis, in display
/// order.
pub const ORG_COMPETENCIES: [&str; 6] = [
    "Strategic Thinking",
    "Leadership",
    "Financial Acumen",
    "Operational Excellence",
    "Stakeholder Management",
    "Digital Transformation",
];

/// Demo user produced by login for a given role.
pub fn demo_user(role: UserRole) -> User {
    match role {
        UserRole::Hr => User::new("1", "HR Admin", UserRole::Hr, "hr@powergrid.com"),
        UserRole::Manager => User::new(
            "2",
            "Rajesh Kumar",
            UserRole::Manager,
            "rajesh@powergrid.com",
        )
        .with_department("Operations")
        .with_title("Department Head"),
        UserRole::Employee => User::new(
            "3",
            "Anya Sharma",
            UserRole::Employee,
            "anya@powergrid.com",
        )
        .with_department("Operations")
        .with_title("Senior Engineer"),
    }
}

pub(crate) fn fixture_dataset() -> Dataset {
    Dataset {
        users: UserRole::ALL.into_iter().map(demo_user).collect(),
        employees: employees(),
        activities: activities(),
        success_profiles: success_profiles(),
    }
}

fn scores(values: [i32; 6]) -> CompetencyScores {
    ORG_COMPETENCIES
        .iter()
        .zip(values)
        .map(|(name, score)| ((*name).to_string(), score))
        .collect()
}

fn appraisal(values: [i32; 5]) -> AppraisalScores {
    let [quality_of_work, dependability, initiative, collaboration, leadership] = values;
    AppraisalScores {
        quality_of_work,
        dependability,
        initiative,
        collaboration,
        leadership,
    }
}

struct EmployeeSeed {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    department: &'static str,
    position: (i32, i32),
    competencies: [i32; 6],
    target_role: &'static str,
    progress: u32,
    status: IdpStatus,
    readiness: ReadinessLevel,
    appraisal: [i32; 5],
}

impl EmployeeSeed {
    fn build(self) -> Employee {
        Employee {
            id: self.id.into(),
            name: self.name.to_string(),
            title: self.title.to_string(),
            department: self.department.to_string(),
            manager_id: "2".into(),
            nine_box_position: NineBoxPosition::new(self.position.0, self.position.1),
            competencies: scores(self.competencies),
            target_role: self.target_role.to_string(),
            overall_progress: self.progress,
            idp_status: self.status,
            readiness_level: self.readiness,
            appraisal_scores: Some(appraisal(self.appraisal)),
        }
    }
}

fn employees() -> Vec<Employee> {
    [
        EmployeeSeed {
            id: "3",
            name: "Anya Sharma",
            title: "Senior Engineer",
            department: "Operations",
            position: (3, 3),
            competencies: [7, 6, 5, 8, 6, 4],
            target_role: "General Manager",
            progress: 65,
            status: IdpStatus::ManagerApproved,
            readiness: ReadinessLevel::OneYear,
            appraisal: [4, 5, 4, 4, 3],
        },
        EmployeeSeed {
            id: "4",
            name: "Priya Desai",
            title: "Manager, Finance",
            department: "Finance",
            position: (3, 2),
            competencies: [6, 7, 9, 6, 7, 5],
            target_role: "CFO",
            progress: 45,
            status: IdpStatus::CommitteeApproved,
            readiness: ReadinessLevel::ThreeYears,
            appraisal: [4, 4, 4, 5, 4],
        },
        EmployeeSeed {
            id: "5",
            name: "Vikram Singh",
            title: "Senior Project Manager",
            department: "Operations",
            position: (2, 3),
            competencies: [5, 8, 4, 7, 8, 6],
            target_role: "Director of Operations",
            progress: 30,
            status: IdpStatus::Draft,
            readiness: ReadinessLevel::OneYear,
            appraisal: [3, 4, 5, 4, 4],
        },
        EmployeeSeed {
            id: "6",
            name: "Meera Patel",
            title: "Technical Lead",
            department: "Engineering",
            position: (3, 3),
            competencies: [6, 5, 4, 9, 5, 9],
            target_role: "VP Engineering",
            progress: 55,
            status: IdpStatus::ManagerApproved,
            readiness: ReadinessLevel::OneYear,
            appraisal: [5, 4, 4, 4, 3],
        },
        EmployeeSeed {
            id: "7",
            name: "Amit Verma",
            title: "Operations Manager",
            department: "Operations",
            position: (2, 2),
            competencies: [5, 5, 5, 6, 6, 4],
            target_role: "Senior Manager",
            progress: 20,
            status: IdpStatus::Draft,
            readiness: ReadinessLevel::ThreeYears,
            appraisal: [3, 3, 3, 4, 3],
        },
    ]
    .into_iter()
    .map(EmployeeSeed::build)
    .collect()
}

fn activity(
    id: &str,
    title: &str,
    kind: ActivityType,
    description: &str,
    status: ActivityStatus,
    progress: u32,
    target_date: &str,
) -> IdpActivity {
    IdpActivity {
        id: id.into(),
        employee_id: "3".into(),
        title: title.to_string(),
        kind,
        description: description.to_string(),
        status,
        progress,
        target_date: target_date.to_string(),
        remarks: None,
    }
}

fn activities() -> Vec<IdpActivity> {
    let mut digital_project = activity(
        "a2",
        "Lead Q4 Digital Transformation Project",
        ActivityType::Project,
        "Lead the digital transformation initiative for the operations division",
        ActivityStatus::InProgress,
        65,
        "2025-12-31",
    );
    digital_project.remarks = Some("Project is on track. Completed phase 1 and 2.".to_string());

    vec![
        activity(
            "a1",
            "Advanced Financial Modelling Course",
            ActivityType::Training,
            "Complete certification in advanced financial modelling and analysis",
            ActivityStatus::Completed,
            100,
            "2025-06-30",
        ),
        digital_project,
        activity(
            "a3",
            "Mentorship with GM",
            ActivityType::Mentorship,
            "Monthly mentorship sessions with current General Manager",
            ActivityStatus::InProgress,
            50,
            "2026-03-31",
        ),
        activity(
            "a4",
            "Strategic Leadership Workshop",
            ActivityType::Training,
            "Attend executive leadership program at IIM",
            ActivityStatus::NotStarted,
            0,
            "2026-06-30",
        ),
        activity(
            "a5",
            "Cross-functional Rotation - Finance",
            ActivityType::Rotation,
            "3-month rotation in Finance department",
            ActivityStatus::NotStarted,
            0,
            "2026-09-30",
        ),
    ]
}

fn profile(
    id: &str,
    role_title: &str,
    competencies: [i32; 6],
    functional_skills: &[&str],
    geographical_experience: &[&str],
    minimum_experience: u32,
) -> SuccessProfile {
    SuccessProfile {
        id: id.into(),
        role_title: role_title.to_string(),
        required_competencies: scores(competencies),
        functional_skills: functional_skills.iter().map(|s| s.to_string()).collect(),
        geographical_experience: geographical_experience
            .iter()
            .map(|s| s.to_string())
            .collect(),
        minimum_experience,
    }
}

fn success_profiles() -> Vec<SuccessProfile> {
    vec![
        profile(
            "sp1",
            "General Manager",
            [8, 8, 7, 8, 9, 7],
            &[
                "Operations Management",
                "P&L Management",
                "Team Leadership",
                "Strategic Planning",
            ],
            &["North", "South", "West"],
            15,
        ),
        profile(
            "sp2",
            "CFO",
            [9, 8, 10, 7, 9, 6],
            &[
                "Financial Planning",
                "Risk Management",
                "Compliance",
                "Investment Strategy",
            ],
            &["Pan-India"],
            20,
        ),
        profile(
            "sp3",
            "Director of Operations",
            [7, 9, 6, 9, 8, 7],
            &[
                "Process Optimization",
                "Team Management",
                "Project Execution",
                "Quality Control",
            ],
            &["Regional"],
            12,
        ),
    ]
}
