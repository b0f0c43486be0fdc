use std::path::Path;

use gradebook_cli::app::{self, Command};
use gradebook_cli::config::Config;
use gradebook_core::storage::StorageConfig;
use gradebook_core::{Mode, Theme};
use pretty_assertions::assert_eq;

fn fs_config(dir: &Path) -> StorageConfig {
    StorageConfig {
        backend: "fs".to_string(),
        location: dir.display().to_string(),
    }
}

fn run(
    config: &StorageConfig,
    command: Command,
) -> String {
    let mut store = app::open_store(config).unwrap();
    app::execute(&mut store, command, Theme::Light).unwrap()
}

#[test]
fn state_survives_between_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let config = fs_config(dir.path());

    run(
        &config,
        Command::Grade {
            semester: "1.1".to_string(),
            course: "1.1-0".to_string(),
            grade: "A+".to_string(),
        },
    );
    let shown = run(&config, Command::Show);

    assert!(shown.starts_with("SEMESTER 1.1 GPA\n  4.000\n"));
    assert!(dir.path().join("cgpa_calc_state").exists());
    assert!(dir.path().join("cgpa_calc_version").exists());
}

#[test]
fn cgpa_session_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = fs_config(dir.path());

    run(
        &config,
        Command::Manual {
            semester: "1.1".to_string(),
            gpa: "3.5".to_string(),
            credits: Some("20".to_string()),
        },
    );
    run(
        &config,
        Command::Manual {
            semester: "1.2".to_string(),
            gpa: "3.8".to_string(),
            credits: Some("20".to_string()),
        },
    );
    let shown = run(
        &config,
        Command::Mode {
            mode: "CGPA".to_string(),
        },
    );

    assert!(shown.starts_with("OVERALL CGPA\n  3.65\n"));

    let report = run(&config, Command::Report);
    assert!(report.starts_with("CGPA Summary Report\n"));
    assert!(report.contains("Semesters Counted: 2"));

    let store = app::open_store(&config).unwrap();
    assert_eq!(store.state().mode, Mode::Cgpa);
}

#[test]
fn reset_manual_clears_entries_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = fs_config(dir.path());

    run(
        &config,
        Command::Manual {
            semester: "2.1".to_string(),
            gpa: "3.0".to_string(),
            credits: Some("18".to_string()),
        },
    );
    run(&config, Command::ResetManual);

    let store = app::open_store(&config).unwrap();
    assert!(
        store
            .state()
            .semesters
            .iter()
            .all(|s| s.manual_gpa.is_none_or(|gpa| gpa.is_zero()))
    );
}

#[test]
fn theme_choice_is_remembered() {
    let dir = tempfile::tempdir().unwrap();
    let config = fs_config(dir.path());

    assert_eq!(run(&config, Command::Theme { theme: None }), "light\n");
    run(
        &config,
        Command::Theme {
            theme: Some("dark".to_string()),
        },
    );

    assert_eq!(run(&config, Command::Theme { theme: None }), "dark\n");
}

#[test]
fn configured_storage_is_opened() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let data_dir = dir.path().join("data");
    std::fs::write(
        &config_path,
        format!("[storage]\nbackend = \"fs\"\nlocation = {:?}\n", data_dir.display().to_string()),
    )
    .unwrap();

    let config = Config::load(Some(&config_path)).unwrap();
    run(
        &config.storage_config(),
        Command::Select {
            semester: "2.2".to_string(),
        },
    );

    let store = app::open_store(&config.storage_config()).unwrap();
    assert_eq!(store.state().active_semester_id, "2.2");
    assert!(data_dir.join("cgpa_calc_state").is_file());
}

#[test]
fn oversized_manual_credits_are_capped_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = fs_config(dir.path());

    run(
        &config,
        Command::Manual {
            semester: "2.1".to_string(),
            gpa: "4".to_string(),
            credits: Some("30000000000000000000000000000".to_string()),
        },
    );
    let shown = run(
        &config,
        Command::Mode {
            mode: "cgpa".to_string(),
        },
    );

    assert!(shown.starts_with("OVERALL CGPA\n  4.00\n  Total Credit: 999  |  Total Semester: 1\n"));
    assert!(run(&config, Command::Report).trim_end().ends_with("CGPA 4.00"));
}
