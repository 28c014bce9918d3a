mod console;
pub use console::ConsoleInteraction;

use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::controller::{DeleteOutcome, EditOutcome, TaskManager};
use crate::io::config_io;
use crate::io::lock::FileLock;
use crate::io::recovery;
use crate::io::store::resolve_data_dir;
use crate::model::{Category, CategoryFilter, StatusFilter, TaskFilter, ThemeMode};
use crate::ops::task_ops::TaskError;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// A failure the user has already been told about. `main` exits non-zero
/// without printing it again.
#[derive(Debug, thiserror::Error)]
#[error("already reported")]
pub struct AlreadyReported;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref().map(Path::new));

    match cli.command {
        // No subcommand launches the TUI
        None => crate::tui::run(Some(data_dir.as_path())),
        Some(cmd) => match cmd {
            // Read commands
            Commands::List(args) => cmd_list(&data_dir, args, json),
            Commands::Stats => cmd_stats(&data_dir, json),

            // Write commands
            Commands::Add(args) => cmd_add(&data_dir, args, json),
            Commands::Toggle(args) => cmd_toggle(&data_dir, args, json),
            Commands::Edit(args) => cmd_edit(&data_dir, args, json),
            Commands::Delete(args) => cmd_delete(&data_dir, args, json),
            Commands::Theme(args) => cmd_theme(&data_dir, args, json),

            // Settings and maintenance
            Commands::Config(args) => cmd_config(&data_dir, args),
            Commands::Recovery(args) => cmd_recovery(&data_dir, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn console(json: bool) -> ConsoleInteraction<std::io::StdinLock<'static>, std::io::Stdout, std::io::Stderr> {
    let mut ui = ConsoleInteraction::stdio();
    ui.quiet = json;
    ui
}

/// Category for a new task: the flag, else the configured default.
fn add_category(data_dir: &Path, flag: Option<&str>) -> Result<Category, String> {
    if let Some(name) = flag {
        return name.parse();
    }
    match config_io::read_config(data_dir) {
        Ok(config) => Ok(config.ui.default_category),
        Err(e) => {
            eprintln!("warning: {}, using default category", e);
            Ok(Category::default())
        }
    }
}

fn print_task(manager: &TaskManager, id: u64, json: bool) -> CmdResult {
    let filter = TaskFilter::default();
    let view = crate::ops::view::build_view(
        manager.tasks(),
        &filter,
        chrono::Local::now().date_naive(),
    );
    let (Some(task), Some(row)) = (manager.task(id), view.rows.iter().find(|r| r.id == id)) else {
        return Err(TaskError::NotFound(id).into());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(task, row))?);
    } else {
        println!("{}", format_task_line(row));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> CmdResult {
    let status: StatusFilter = args.status.parse()?;
    let category: CategoryFilter = args.category.parse()?;
    let mut manager = TaskManager::open(data_dir);
    manager.set_filter(TaskFilter::new(
        status,
        category,
        args.search.as_deref().unwrap_or(""),
    ));

    let view = manager.render();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view_to_json(manager.tasks(), &view))?
        );
    } else {
        for line in format_view(&view) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_stats(data_dir: &Path, json: bool) -> CmdResult {
    let manager = TaskManager::open(data_dir);
    let stats = manager.render().stats;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", format_stats(&stats));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> CmdResult {
    let category = add_category(data_dir, args.category.as_deref())?;
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut manager = TaskManager::open(data_dir);
    let mut ui = console(json);

    let id = manager
        .add_task(&args.text, category, &mut ui)?
        // The blank-text warning went out through `ui`
        .ok_or(AlreadyReported)?;
    if json {
        println!("{}", serde_json::json!({ "id": id }));
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_toggle(data_dir: &Path, args: IdArgs, json: bool) -> CmdResult {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut manager = TaskManager::open(data_dir);
    manager
        .toggle_task(args.id)?
        .ok_or(TaskError::NotFound(args.id))?;
    print_task(&manager, args.id, json)
}

fn cmd_edit(data_dir: &Path, args: EditArgs, json: bool) -> CmdResult {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut manager = TaskManager::open(data_dir);
    let mut ui = console(json);
    ui.reply = args.text;

    match manager.edit_task(args.id, &mut ui)? {
        EditOutcome::Updated if json => print_task(&manager, args.id, json),
        // A blank reply is dropped like a cancelled prompt
        EditOutcome::Updated | EditOutcome::Cancelled | EditOutcome::Blank => Ok(()),
        EditOutcome::NotFound => Err(TaskError::NotFound(args.id).into()),
    }
}

fn cmd_delete(data_dir: &Path, args: DeleteArgs, json: bool) -> CmdResult {
    let _lock = FileLock::acquire_default(data_dir)?;
    let mut manager = TaskManager::open(data_dir);
    let mut ui = console(json);
    ui.assume_yes = args.yes;

    match manager.delete_task(args.id, &mut ui)? {
        DeleteOutcome::Deleted(count) => {
            if json {
                println!("{}", serde_json::json!({ "deleted": count }));
            }
            Ok(())
        }
        DeleteOutcome::Declined => Ok(()),
        DeleteOutcome::NotFound => Err(TaskError::NotFound(args.id).into()),
    }
}

fn cmd_theme(data_dir: &Path, args: ThemeArgs, json: bool) -> CmdResult {
    let mode = match args.mode.as_deref() {
        None => TaskManager::open(data_dir).theme(),
        Some(choice) => {
            let _lock = FileLock::acquire_default(data_dir)?;
            let mut manager = TaskManager::open(data_dir);
            if choice.eq_ignore_ascii_case("toggle") {
                manager.toggle_theme()?
            } else {
                let mode: ThemeMode = choice.parse()?;
                manager.set_theme(mode)?;
                mode
            }
        }
    };
    if json {
        let out = ThemeJson {
            theme: mode.to_string(),
            icon: mode.icon().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} {}", mode, mode.icon());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Settings and maintenance
// ---------------------------------------------------------------------------

fn cmd_config(data_dir: &Path, args: ConfigCmd) -> CmdResult {
    match args.action {
        ConfigAction::Get(get) => {
            let doc = config_io::read_config_doc(data_dir)?;
            let value = config_io::get_config_value(&doc, &get.key)?
                .ok_or_else(|| format!("{} is not set", get.key))?;
            println!("{}", value);
        }
        ConfigAction::Set(set) => {
            let _lock = FileLock::acquire_default(data_dir)?;
            let mut doc = config_io::read_config_doc(data_dir)?;
            config_io::set_config_value(&mut doc, &set.key, &set.value)?;
            config_io::write_config_doc(data_dir, &doc)?;
            println!("{} = {}", set.key, set.value);
        }
    }
    Ok(())
}

fn cmd_recovery(data_dir: &Path, args: RecoveryCmd, json: bool) -> CmdResult {
    match args.action {
        Some(RecoveryAction::Prune(prune)) => {
            let removed = recovery::prune_recovery(data_dir, None, prune.all)?;
            println!("pruned {} entries", removed);
        }
        Some(RecoveryAction::Path) => {
            let path: PathBuf = std::path::absolute(recovery::recovery_log_path(data_dir))?;
            println!("{}", path.display());
        }
        None => {
            let entries = recovery::read_recovery_entries(data_dir, Some(args.limit.unwrap_or(10)));
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("recovery log is empty");
            } else {
                for entry in &entries {
                    println!("{}", format_recovery_entry(entry));
                }
            }
        }
    }
    Ok(())
}
