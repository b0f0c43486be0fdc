//! Wiring between the command line and the state store.

use anyhow::{Context, Result};
use clap::Subcommand;
use gradebook_core::storage::{KeyValueStore, MemoryStoreFactory, StorageConfig, StorageRegistry};
use gradebook_core::{Grade, ManualEntry, Mode, ReportSnapshot, StateStore, Theme};
use gradebook_store_fs::FileStoreFactory;
use tracing::{debug, info};

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the scorecard and what the current mode is editing.
    Show,

    /// Set (or clear, with `N/A`) the grade of a course.
    Grade {
        semester: String,
        course: String,
        /// A+, A, A-, B+, B, B-, C+, C, D, F or N/A.
        grade: String,
    },

    /// Clear every grade in a semester.
    Reset { semester: String },

    /// Enter a semester's GPA for the CGPA calculation.
    Manual {
        semester: String,
        gpa: String,
        /// Credits for the semester; defaults to its displayed credit total.
        #[arg(long)]
        credits: Option<String>,
    },

    /// Zero every manual credit/GPA entry.
    ResetManual,

    /// Switch between the GPA and CGPA views.
    Mode { mode: String },

    /// Choose the semester the GPA view shows.
    Select { semester: String },

    /// Print the report for the current view.
    Report,

    /// Show the theme preference, or store a new one.
    Theme { theme: Option<String> },
}

/// Registry with every backend this binary knows about.
pub fn build_registry() -> StorageRegistry {
    let mut registry = StorageRegistry::new();
    registry.register(Box::new(MemoryStoreFactory));
    registry.register(Box::new(FileStoreFactory));
    registry
}

/// Opens the configured store and restores the state from it.
pub fn open_store(config: &StorageConfig) -> Result<StateStore<Box<dyn KeyValueStore>>> {
    debug!(backend = %config.backend, location = %config.location, "opening storage");
    let storage = build_registry()
        .create(config)
        .with_context(|| format!("failed to open '{}' storage", config.backend))?;
    Ok(StateStore::open(storage))
}

/// Terminal colour scheme from `COLORFGBG` (`"<fg>;<bg>"`), light when unset.
pub fn system_theme() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
        .unwrap_or_default()
}

fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match background {
        0..=6 | 8 => Theme::Dark,
        _ => Theme::Light,
    })
}

/// Runs one command against `store` and returns what to print.
pub fn execute<S: KeyValueStore>(
    store: &mut StateStore<S>,
    command: Command,
    system: Theme,
) -> Result<String> {
    match command {
        Command::Show => {}
        Command::Grade {
            semester,
            course,
            grade,
        } => {
            let grade: Grade = grade.parse()?;
            store.set_grade(&semester, &course, grade);
        }
        Command::Reset { semester } => {
            store.reset_semester_grades(&semester);
        }
        Command::Manual {
            semester,
            gpa,
            credits,
        } => {
            let credits = match credits {
                Some(credits) => credits,
                None => store
                    .state()
                    .semester(&semester)
                    .map(|s| s.display_credits().to_string())
                    .unwrap_or_default(),
            };
            let entry = ManualEntry::parse(&credits, &gpa)?;
            store.set_manual(&semester, entry.credits, entry.gpa);
        }
        Command::ResetManual => {
            store.reset_all_manual();
        }
        Command::Mode { mode } => {
            let mode: Mode = mode.parse()?;
            store.set_mode(mode);
        }
        Command::Select { semester } => {
            store.set_active_semester(&semester);
        }
        Command::Report => {
            let snapshot = ReportSnapshot::build(store.state());
            if !snapshot.exportable {
                info!("nothing to report yet");
            }
            return Ok(render::report(&snapshot));
        }
        Command::Theme { theme } => {
            if let Some(theme) = theme {
                let theme: Theme = theme.parse()?;
                store.set_theme(theme);
            }
            return Ok(format!("{}\n", store.theme(system)));
        }
    }

    Ok(format!(
        "{}\n{}",
        render::scorecard(&store.stats()),
        render::listing(store.state())
    ))
}

#[cfg(test)]
mod tests {
    use gradebook_core::MemoryStore;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn store() -> StateStore<MemoryStore> {
        StateStore::open(MemoryStore::new())
    }

    #[test]
    fn registry_knows_memory_and_fs() {
        assert_eq!(build_registry().available_backends(), vec!["fs", "memory"]);
    }

    #[test]
    fn colorfgbg_background_decides_theme() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("12;default;8"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn grade_command_updates_scorecard() {
        let mut store = store();

        let out = execute(
            &mut store,
            Command::Grade {
                semester: "1.1".to_string(),
                course: "1.1-0".to_string(),
                grade: "B+".to_string(),
            },
            Theme::Light,
        )
        .unwrap();

        assert!(out.starts_with("SEMESTER 1.1 GPA\n  3.250\n"));
    }

    #[test]
    fn unknown_grade_is_rejected_without_change() {
        let mut store = store();

        let result = execute(
            &mut store,
            Command::Grade {
                semester: "1.1".to_string(),
                course: "1.1-0".to_string(),
                grade: "Q".to_string(),
            },
            Theme::Light,
        );

        assert!(result.is_err());
        assert!(!store.state().semesters[0].has_graded_course());
    }

    #[test]
    fn manual_defaults_credits_to_display_credits() {
        let mut store = store();

        execute(
            &mut store,
            Command::Manual {
                semester: "1.1".to_string(),
                gpa: "3.6".to_string(),
                credits: None,
            },
            Theme::Light,
        )
        .unwrap();

        let semester = store.state().semester("1.1").unwrap();
        assert_eq!(semester.manual_credits, Some(dec!(19)));
        assert_eq!(semester.manual_gpa, Some(dec!(3.6)));
    }

    #[test]
    fn manual_clamps_gpa() {
        let mut store = store();

        execute(
            &mut store,
            Command::Manual {
                semester: "2.1".to_string(),
                gpa: "4.8".to_string(),
                credits: Some("20".to_string()),
            },
            Theme::Light,
        )
        .unwrap();

        assert_eq!(store.state().semester("2.1").unwrap().manual_gpa, Some(dec!(4)));
    }

    #[test]
    fn mode_command_switches_view() {
        let mut store = store();

        let out = execute(
            &mut store,
            Command::Mode {
                mode: "cgpa".to_string(),
            },
            Theme::Light,
        )
        .unwrap();

        assert_eq!(store.state().mode, Mode::Cgpa);
        assert!(out.starts_with("OVERALL CGPA\n  0.00\n"));
    }

    #[test]
    fn theme_command_reads_and_writes() {
        let mut store = store();

        let shown = execute(&mut store, Command::Theme { theme: None }, Theme::Dark).unwrap();
        assert_eq!(shown, "dark\n");

        let stored = execute(
            &mut store,
            Command::Theme {
                theme: Some("light".to_string()),
            },
            Theme::Dark,
        )
        .unwrap();
        assert_eq!(stored, "light\n");
    }

    #[test]
    fn open_store_rejects_unknown_backend() {
        let config = StorageConfig {
            backend: "cloud".to_string(),
            location: String::new(),
        };

        assert!(open_store(&config).is_err());
    }
}
