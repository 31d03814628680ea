use counter_store::persistence::{PersistenceError, PersistentContainer};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn saved_values_survive_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut container = PersistentContainer::load("app", dir.path()).unwrap();
        container.set("counter", 3);
        container.set("name", "demo");
        assert!(container.has_changes());
        container.save_context().unwrap();
        assert!(!container.has_changes());
    }

    let container = PersistentContainer::load("app", dir.path()).unwrap();
    assert_eq!(container.get("counter"), Some(&json!(3)));
    assert_eq!(container.get("name"), Some(&json!("demo")));
    assert_eq!(container.name(), "app");
    assert!(container.path().ends_with("app.json"));
}

#[test]
fn remove_marks_dirty() {
    let dir = TempDir::new().unwrap();
    let mut container = PersistentContainer::load("app", dir.path()).unwrap();
    assert!(container.remove("missing").is_none());
    assert!(!container.has_changes());

    container.set("k", true);
    container.save_context().unwrap();
    assert_eq!(container.remove("k"), Some(json!(true)));
    assert!(container.has_changes());
}

#[test]
fn second_load_is_locked() {
    let dir = TempDir::new().unwrap();
    let _held = PersistentContainer::load("app", dir.path()).unwrap();
    let err = PersistentContainer::load("app", dir.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::Locked { .. }));
}

#[test]
fn lock_released_on_drop() {
    let dir = TempDir::new().unwrap();
    drop(PersistentContainer::load("app", dir.path()).unwrap());
    assert!(PersistentContainer::load("app", dir.path()).is_ok());
}

#[test]
fn corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.json"), "{ not json").unwrap();
    let err = PersistentContainer::load("app", dir.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::Corrupt { .. }));
}

#[test]
fn save_without_changes_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut container = PersistentContainer::load("app", dir.path()).unwrap();
    container.save_context().unwrap();
    let content = std::fs::read_to_string(dir.path().join("app.json")).unwrap();
    assert!(content.is_empty());
}

#[test]
fn creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    PersistentContainer::load("app", &nested).unwrap();
    assert!(nested.join("app.json").exists());
}
