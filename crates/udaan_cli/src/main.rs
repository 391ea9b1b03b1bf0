//! Terminal shell for UdaanSetu.
//!
//! # Responsibility
//! - Drive the same `App` controllers the Flutter shell uses.
//! - Print the resulting screen as text or JSON.

mod render;

use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use udaan_core::{
    default_log_level, init_logging, App, CellKey, Dataset, EmployeeId, InMemoryDirectory, Screen,
};

#[derive(Parser)]
#[command(
    name = "udaansetu",
    version = env!("CARGO_PKG_VERSION"),
    about = "IDP and succession-planning dashboards in the terminal"
)]
struct Cli {
    /// JSON dataset replacing the built-in fixture
    #[arg(long, value_name = "FILE", env = "UDAANSETU_DATASET_PATH", global = true)]
    dataset: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, value_name = "DIR", global = true)]
    log_dir: Option<String>,

    /// Print the rendered screen as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core linkage and version
    Ping,
    /// Load and validate the dataset, then print record counts
    Check,
    /// Log in with a demo username and print the dashboard
    Dashboard {
        /// `hr`/`admin`, `manager`/`rajesh`, anything else logs in as employee
        #[arg(short, long, default_value = "")]
        username: String,

        /// HR only: select the matrix cell `performance,potential`
        #[arg(long, value_name = "P,Q", value_parser = parse_cell)]
        cell: Option<CellKey>,

        /// HR only: open the detail view of one employee
        #[arg(long, value_name = "ID")]
        employee: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    match &cli.command {
        Command::Ping => Ok(format!(
            "udaan_core ping={}\nudaan_core version={}",
            udaan_core::ping(),
            udaan_core::core_version()
        )),
        Command::Check => {
            let dataset = load_dataset(cli.dataset.as_ref())?;
            Ok(format!(
                "dataset ok: users={} employees={} activities={} success_profiles={}",
                dataset.users.len(),
                dataset.employees.len(),
                dataset.activities.len(),
                dataset.success_profiles.len()
            ))
        }
        Command::Dashboard {
            username,
            cell,
            employee,
        } => {
            let dataset = load_dataset(cli.dataset.as_ref())?;
            let mut app = App::new(Arc::new(InMemoryDirectory::new(dataset)));
            app.login_mut().set_username(username.as_str());
            let user = app.submit_login();
            info!(
                "event=cli_dashboard module=cli status=ok role={}",
                user.role.as_str()
            );

            if cell.is_some() || employee.is_some() {
                let hr = app
                    .hr_mut()
                    .ok_or_else(|| "--cell and --employee need an HR login".to_string())?;
                if let Some(key) = cell {
                    hr.select_cell(*key);
                }
                if let Some(id) = employee {
                    hr.open_employee(&EmployeeId::new(id.as_str()))
                        .map_err(|err| err.to_string())?;
                }
            }
            print_screen(&app.screen(), cli.json)
        }
    }
}

fn load_dataset(path: Option<&PathBuf>) -> Result<Dataset, String> {
    match path {
        Some(path) => Dataset::load_json_file(path).map_err(|err| err.to_string()),
        None => Ok(Dataset::fixture()),
    }
}

fn print_screen(screen: &Screen, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(screen).map_err(|err| err.to_string());
    }
    Ok(render::screen_text(screen))
}

fn parse_cell(raw: &str) -> Result<CellKey, String> {
    let (performance, potential) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `performance,potential`, got `{raw}`"))?;
    let performance = performance
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid performance `{performance}`: {err}"))?;
    let potential = potential
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid potential `{potential}`: {err}"))?;
    CellKey::from_scores(performance, potential)
        .ok_or_else(|| format!("cell ({performance}, {potential}) is outside the 3x3 grid"))
}

#[cfg(test)]
mod tests {
    use super::{parse_cell, run, Cli, Command};
    use clap::Parser;
    use udaan_core::CellKey;

    #[test]
    fn parse_cell_accepts_grid_coordinates() {
        assert_eq!(parse_cell("3, 1"), Ok(CellKey::from_scores(3, 1).expect("in grid")));
        assert!(parse_cell("4,1").is_err());
        assert!(parse_cell("2").is_err());
    }

    #[test]
    fn dashboard_flags_parse() {
        let cli = Cli::try_parse_from([
            "udaansetu",
            "dashboard",
            "--username",
            "hr",
            "--cell",
            "3,3",
            "--json",
        ])
        .expect("valid args");
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Dashboard { cell: Some(_), .. }));
    }

    #[test]
    fn manager_dashboard_prints_team_heading() {
        let cli = Cli::try_parse_from(["udaansetu", "dashboard", "-u", "manager"])
            .expect("valid args");
        let output = run(&cli).expect("dashboard renders");
        assert!(output.contains("Team Dashboard"));
    }

    #[test]
    fn cell_selection_requires_hr() {
        let cli = Cli::try_parse_from(["udaansetu", "dashboard", "--cell", "1,1"])
            .expect("valid args");
        assert!(run(&cli).is_err());
    }
}
