//! Plain-text rendering of app screens.

use udaan_core::matrix::nine_box::{CellMembers, NineBoxMatrix};
use udaan_core::view::cards::KpiCard;
use udaan_core::view::employee_dashboard::EmployeeScreen;
use udaan_core::view::hr_dashboard::{HrOverview, HrScreen};
use udaan_core::view::manager_dashboard::{ManagerOverview, ManagerScreen};
use udaan_core::Screen;

pub fn screen_text(screen: &Screen) -> String {
    let mut lines = Vec::new();
    match screen {
        Screen::Landing(view) => {
            lines.push(view.content.hero.headline.clone());
            lines.push(view.content.hero.tagline.clone());
        }
        Screen::Login(view) => {
            lines.push(format!("{} - {}", view.title, view.subtitle));
        }
        Screen::Signup(view) => {
            lines.push(view.title.clone());
            lines.extend(view.alert.clone());
        }
        Screen::HrDashboard(HrScreen::Overview(overview)) => hr_overview(overview, &mut lines),
        Screen::HrDashboard(HrScreen::EmployeeDetail(detail)) => {
            let employee = &detail.employee;
            lines.push(format!("{} ({})", employee.name, employee.id));
            lines.push(format!("{} → {}", employee.title, employee.target_role));
            lines.push(format!(
                "Progress {}% | {}",
                detail.progress.progress,
                employee.readiness_level.label()
            ));
            for activity in &detail.activities {
                lines.push(format!(
                    "  - {} [{}] {}%",
                    activity.title,
                    activity.status.as_str(),
                    activity.progress
                ));
            }
        }
        Screen::HrDashboard(HrScreen::DataUpload(view)) => lines.push(view.title.clone()),
        Screen::HrDashboard(HrScreen::SuccessProfiles(view)) => {
            lines.push(view.title.clone());
            for profile in &view.profiles {
                lines.push(format!(
                    "  - {} (min {} yrs)",
                    profile.role_title, profile.minimum_experience
                ));
            }
        }
        Screen::ManagerDashboard(ManagerScreen::Overview(overview)) => {
            manager_overview(overview, &mut lines)
        }
        Screen::ManagerDashboard(ManagerScreen::InputForm(view)) => {
            lines.push(format!("Appraisal input for {}", view.employee.name));
        }
        Screen::ManagerDashboard(ManagerScreen::IdpApproval(view)) => {
            lines.push(format!(
                "IDP review for {} ({} activities)",
                view.employee.name,
                view.activities.len()
            ));
        }
        Screen::EmployeeDashboard(EmployeeScreen::Plan(plan)) => {
            lines.push(plan.heading.clone());
            lines.push(format!(
                "Target {} | {} | {}% complete",
                plan.target_role,
                plan.readiness.label(),
                plan.progress.progress
            ));
            kpi_line(&plan.kpi_cards, &mut lines);
            for activity in &plan.activities {
                lines.push(format!(
                    "  - {} [{}] {} due {}",
                    activity.title,
                    activity.status.as_str(),
                    activity.progress_label,
                    activity.target_date
                ));
            }
        }
        Screen::EmployeeDashboard(EmployeeScreen::NoPlan { message }) => {
            lines.push(message.clone());
        }
    }
    lines.join("\n")
}

fn hr_overview(overview: &HrOverview, lines: &mut Vec<String>) {
    lines.push(overview.heading.clone());
    kpi_line(&overview.kpi_cards, lines);
    matrix(&overview.matrix, lines);

    lines.push("Approval queue:".to_string());
    lines.extend(
        overview
            .approval_queue
            .iter()
            .map(|item| format!("  - {} {}", item.employee.name, item.target_badge.label)),
    );
    lines.extend(overview.approval_queue_empty_message.clone());

    if let Some(panel) = &overview.selected_cell {
        lines.push(panel.title.clone());
        lines.extend(
            panel
                .members
                .iter()
                .map(|card| format!("  - {} {}", card.employee.name, card.progress_label)),
        );
    }

    lines.push("Competency gaps:".to_string());
    lines.extend(overview.competency_gaps.iter().map(|gap| {
        format!(
            "  - {}: avg {} / target {} (gap {})",
            gap.competency, gap.average, gap.target, gap.gap
        )
    }));
}

fn manager_overview(overview: &ManagerOverview, lines: &mut Vec<String>) {
    lines.push(overview.heading.clone());
    kpi_line(&overview.kpi_cards, lines);

    lines.push("Pending appraisal inputs:".to_string());
    lines.extend(
        overview
            .pending_inputs
            .iter()
            .map(|item| format!("  - {} ({})", item.name, item.subtitle)),
    );
    lines.extend(overview.pending_inputs_empty_message.clone());

    lines.push("Pending IDP reviews:".to_string());
    lines.extend(
        overview
            .pending_reviews
            .iter()
            .map(|item| format!("  - {} ({})", item.name, item.subtitle)),
    );
    lines.extend(overview.pending_reviews_empty_message.clone());

    matrix(&overview.matrix, lines);

    lines.push("Team:".to_string());
    lines.extend(overview.team.iter().map(|row| {
        format!(
            "  [{}] {} → {} {} {}",
            row.initial, row.name, row.target_role, row.progress_label, row.badge.label
        )
    }));
}

fn kpi_line(cards: &[KpiCard], lines: &mut Vec<String>) {
    lines.push(
        cards
            .iter()
            .map(|card| format!("{}: {}", card.label, card.value))
            .collect::<Vec<_>>()
            .join(" | "),
    );
}

fn matrix(matrix: &NineBoxMatrix, lines: &mut Vec<String>) {
    lines.push(format!("{} ({})", matrix.title, matrix.y_axis_label));
    for row in matrix.cells.chunks(3) {
        let cells = row
            .iter()
            .map(|cell| {
                let members = match &cell.members {
                    CellMembers::Empty => String::new(),
                    CellMembers::Names(names) => names.join(", "),
                    CellMembers::CountOnly => "...".to_string(),
                };
                let marker = if cell.selected { "*" } else { "" };
                format!(
                    "{marker}{} ({}) {members}",
                    cell.label.replace('\n', " "),
                    cell.count
                )
            })
            .collect::<Vec<_>>();
        lines.push(format!("  {}", cells.join(" | ")));
    }
    lines.push(format!("  {}", matrix.x_axis_label));
}
