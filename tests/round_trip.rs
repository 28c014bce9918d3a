use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tasklist::controller::{PresetAnswers, TaskManager};
use tasklist::io::config_io::{read_config, read_config_doc, set_config_value, write_config_doc};
use tasklist::io::store::{FileStore, KeyValueStore};
use tasklist::io::task_io::{TASKS_KEY, load_tasks, save_tasks};
use tasklist::model::{Category, ThemeMode};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Could not read fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh data directory under its stored key.
fn data_dir_with(name: &str, key: &str) -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join(key), fixture(name)).unwrap();
    tmp
}

// ============================================================================
// Task list
// ============================================================================

#[test]
fn round_trip_saved_task_list() {
    let source = fixture("tasks.json");
    let tmp = data_dir_with("tasks.json", TASKS_KEY);
    let mut store = FileStore::new(tmp.path());

    let tasks = load_tasks(&store, None);
    save_tasks(&mut store, &tasks).unwrap();

    assert_eq!(store.get(TASKS_KEY).unwrap().unwrap(), source);
}

#[test]
fn saved_task_list_parse_correctness() {
    let tmp = data_dir_with("tasks.json", TASKS_KEY);
    let tasks = load_tasks(&FileStore::new(tmp.path()), None);

    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].id, 1715679000000);
    assert_eq!(tasks[0].display_category(), Category::Work);
    assert_eq!(tasks[1].text, "Café mit Jana ☕");
    assert!(tasks[1].completed);
    // Unknown tags stay on disk but display as general
    assert_eq!(tasks[2].category, "errands");
    assert_eq!(tasks[2].display_category(), Category::General);
}

#[test]
fn toggle_rewrites_only_the_target_task() {
    let source = fixture("tasks.json");
    let tmp = data_dir_with("tasks.json", TASKS_KEY);

    let mut manager = TaskManager::open(tmp.path());
    assert_eq!(manager.toggle_task(1715623200000).unwrap(), Some(false));

    let saved = fs::read_to_string(tmp.path().join(TASKS_KEY)).unwrap();
    let expected = source.replace(
        r#""Café mit Jana ☕","category":"personal","completed":true"#,
        r#""Café mit Jana ☕","category":"personal","completed":false"#,
    );
    assert_eq!(saved, expected);
}

#[test]
fn edit_keeps_unknown_category_tag() {
    let tmp = data_dir_with("tasks.json", TASKS_KEY);
    let mut manager = TaskManager::open(tmp.path());
    let mut ui = PresetAnswers::replying("Return all library books");
    manager.edit_task(1715500000000, &mut ui).unwrap();

    let reopened = TaskManager::open(tmp.path());
    let task = reopened.task(1715500000000).unwrap();
    assert_eq!(task.text, "Return all library books");
    assert_eq!(task.category, "errands");
}

#[test]
fn theme_survives_reopen() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut manager = TaskManager::open(tmp.path());
    assert_eq!(manager.theme(), ThemeMode::Light);
    manager.toggle_theme().unwrap();

    assert_eq!(TaskManager::open(tmp.path()).theme(), ThemeMode::Dark);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn round_trip_config() {
    let source = fixture("config.toml");
    let tmp = data_dir_with("config.toml", "config.toml");

    let doc = read_config_doc(tmp.path()).unwrap();
    write_config_doc(tmp.path(), &doc).unwrap();

    assert_eq!(fs::read_to_string(tmp.path().join("config.toml")).unwrap(), source);
}

#[test]
fn config_parse_correctness() {
    let tmp = data_dir_with("config.toml", "config.toml");
    let config = read_config(tmp.path()).unwrap();

    assert_eq!(config.ui.default_category, Category::Work);
    assert!(!config.ui.show_key_hints);
    assert_eq!(
        config.ui.colors.dark.get("background").map(String::as_str),
        Some("#002B36")
    );
    assert!(config.ui.colors.light.is_empty());
}

#[test]
fn config_set_keeps_comments_and_other_keys() {
    let tmp = data_dir_with("config.toml", "config.toml");

    let mut doc = read_config_doc(tmp.path()).unwrap();
    set_config_value(&mut doc, "colors.dark.text", "#93A1A1").unwrap();
    set_config_value(&mut doc, "colors.light.background", "#FDF6E3").unwrap();
    write_config_doc(tmp.path(), &doc).unwrap();

    let written = fs::read_to_string(tmp.path().join("config.toml")).unwrap();
    assert!(written.starts_with("# tasklist settings\n"));
    assert!(written.contains("# Solarized-ish dark palette"));
    assert!(written.contains(r##"background = "#002B36""##));

    let config = read_config(tmp.path()).unwrap();
    assert_eq!(config.ui.colors.dark["text"], "#93A1A1");
    assert_eq!(config.ui.colors.light["background"], "#FDF6E3");
    assert_eq!(config.ui.default_category, Category::Work);
}
