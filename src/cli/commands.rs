//! CLI command implementations
//!
//! Every command loads the config, opens the roster from its data
//! directory, does one thing, and exits. View state (search, sort, page)
//! lives only for the duration of a `list` call.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::export::{export_to_file, export_to_writer};
use crate::observability::Event;
use crate::roster::{LoadOutcome, RosterStore};
use crate::storage::FileBackend;

use super::args::{Command, RecordArgs};
use super::config::{Config, DEFAULT_DATA_DIR};
use super::errors::{CliError, CliResult};
use super::io::{write_page, write_stats};

/// Export target that means "write to stdout"
const STDOUT_TARGET: &str = "-";

/// Run the appropriate command, writing user-facing output to `out`
pub fn run_command<W: Write>(cmd: Command, config_path: &Path, out: &mut W) -> CliResult<()> {
    match cmd {
        Command::Init { data_dir } => init(config_path, data_dir.as_deref(), out),
        Command::List { search, sort, page } => {
            let mut store = open_store(&load_config(config_path)?)?;
            if let Some(query) = search {
                store.set_search(query);
            }
            for field in sort {
                store.set_sort(field);
            }
            if let Some(page) = page {
                if !store.go_to_page(page) {
                    return Err(CliError::PageOutOfRange {
                        page,
                        page_count: store.page_count(),
                    });
                }
            }
            list(&store, out)
        }
        Command::Add(record) => add(config_path, &record, out),
        Command::Update { position, record } => update(config_path, position, &record, out),
        Command::Remove { position } => remove(config_path, position, out),
        Command::Export { output } => export(config_path, output, out),
        Command::Stats => stats(config_path, out),
    }
}

/// Writes a default config and seeds the roster.
///
/// Fails if the config file already exists.
pub fn init<W: Write>(config_path: &Path, data_dir: Option<&Path>, out: &mut W) -> CliResult<()> {
    let data_dir = data_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let config = Config::new(data_dir);
    config.write_new(config_path)?;

    let store = open_store(&config)?;
    writeln!(out, "Wrote {}", config_path.display())?;
    writeln!(out, "{}", describe_load(store.load_outcome()))?;
    Ok(())
}

/// Prints the current page of `store`.
pub fn list<W: Write>(store: &RosterStore<FileBackend>, out: &mut W) -> CliResult<()> {
    write_page(out, &store.page_view(), &store.page_window())
}

pub fn add<W: Write>(config_path: &Path, record: &RecordArgs, out: &mut W) -> CliResult<()> {
    let mut store = open_store(&load_config(config_path)?)?;
    store.add_draft(&record.to_draft())?;
    writeln!(out, "Added {} at position {}", record.id, store.len() - 1)?;
    Ok(())
}

pub fn update<W: Write>(
    config_path: &Path,
    position: usize,
    record: &RecordArgs,
    out: &mut W,
) -> CliResult<()> {
    let mut store = open_store(&load_config(config_path)?)?;
    store.update_draft(position, &record.to_draft())?;
    writeln!(out, "Updated position {}", position)?;
    Ok(())
}

pub fn remove<W: Write>(config_path: &Path, position: usize, out: &mut W) -> CliResult<()> {
    let mut store = open_store(&load_config(config_path)?)?;
    let removed = store.remove(position)?;
    writeln!(out, "Removed {} ({})", removed.id(), removed.full_name())?;
    Ok(())
}

/// Writes the CSV to `output`, the configured export file, or stdout for `-`.
pub fn export<W: Write>(config_path: &Path, output: Option<PathBuf>, out: &mut W) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;
    let target = output.unwrap_or_else(|| config.export_path());

    if target == Path::new(STDOUT_TARGET) {
        export_to_writer(&store, &mut *out)?;
    } else {
        let rows = export_to_file(&store, &target)?;
        writeln!(out, "Exported {} students to {}", rows, target.display())?;
    }
    Ok(())
}

pub fn stats<W: Write>(config_path: &Path, out: &mut W) -> CliResult<()> {
    let store = open_store(&load_config(config_path)?)?;
    write_stats(out, store.len(), store.average_gpa())
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    info!(
        event = %Event::ConfigLoaded,
        path = %config_path.display(),
        data_dir = %config.data_dir,
        "config loaded"
    );
    Ok(config)
}

fn open_store(config: &Config) -> CliResult<RosterStore<FileBackend>> {
    let backend = FileBackend::open(config.data_path())?;
    let store = RosterStore::open_with_key(backend, &config.storage_key)?;
    if let LoadOutcome::Recovered { backup_key, .. } = store.load_outcome() {
        eprintln!(
            "warning: stored roster was unreadable; sample roster restored, original kept as {}",
            backup_key
        );
    }
    Ok(store)
}

fn describe_load(outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Loaded { count } => format!("Loaded {} existing students", count),
        LoadOutcome::Seeded { count } => format!("Seeded {} sample students", count),
        LoadOutcome::Recovered { backup_key, .. } => {
            format!("Restored sample students; unreadable data kept as {}", backup_key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("roster.json");
        let data_dir = temp.path().join("data");
        let mut out = Vec::new();
        init(&config_path, Some(data_dir.as_path()), &mut out).unwrap();
        (temp, config_path)
    }

    fn run(cmd: Command, config_path: &Path) -> CliResult<String> {
        let mut out = Vec::new();
        run_command(cmd, config_path, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn record_args(id: &str) -> RecordArgs {
        RecordArgs {
            id: id.into(),
            name: "Test Student".into(),
            dob: "2001-02-03".into(),
            class: "CT09".into(),
            gpa: "3.0".into(),
        }
    }

    #[test]
    fn test_init_seeds_and_refuses_second_run() {
        let (_temp, config_path) = setup();
        let mut out = Vec::new();
        let err = init(&config_path, None, &mut out).unwrap_err();
        assert!(matches!(err, CliError::AlreadyInitialized { .. }));
    }

    #[test]
    fn test_list_first_page() {
        let (_temp, config_path) = setup();
        let text = run(
            Command::List {
                search: None,
                sort: Vec::new(),
                page: None,
            },
            &config_path,
        )
        .unwrap();
        assert!(text.contains("2023045"));
        assert!(text.contains("Showing 1-5 of 10"));
        assert!(text.contains("[1] 2"));
    }

    #[test]
    fn test_list_page_out_of_range() {
        let (_temp, config_path) = setup();
        let err = run(
            Command::List {
                search: None,
                sort: Vec::new(),
                page: Some(3),
            },
            &config_path,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::PageOutOfRange {
                page: 3,
                page_count: 2
            }
        ));
    }

    #[test]
    fn test_add_then_duplicate() {
        let (_temp, config_path) = setup();
        let text = run(Command::Add(record_args("999")), &config_path).unwrap();
        assert_eq!(text, "Added 999 at position 10\n");

        let err = run(Command::Add(record_args("999")), &config_path).unwrap_err();
        assert_eq!(err.code(), "ROSTER_DUPLICATE_ID");
    }

    #[test]
    fn test_remove_out_of_range() {
        let (_temp, config_path) = setup();
        let err = run(Command::Remove { position: 10 }, &config_path).unwrap_err();
        assert_eq!(err.code(), "ROSTER_OUT_OF_RANGE");
    }

    #[test]
    fn test_export_to_stdout() {
        let (_temp, config_path) = setup();
        let text = run(
            Command::Export {
                output: Some(PathBuf::from("-")),
            },
            &config_path,
        )
        .unwrap();
        assert!(text.starts_with("ID,Full Name,Date of Birth,Class,GPA\n\"2023045\","));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn test_stats() {
        let (_temp, config_path) = setup();
        let text = run(Command::Stats, &config_path).unwrap();
        assert_eq!(text, "Students: 10\nAverage GPA: 3.5\n");
    }
}
