use campo::constants::ASISTENCIA_TOMADA_KEY;
use campo::ui_state::UiStateStore;
use std::path::PathBuf;

fn temp_state_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("campo_ui_state_{}_{}.json", std::process::id(), name))
}

#[test]
fn flag_defaults_to_false_when_absent() {
    let path = temp_state_path("default");
    let _ = std::fs::remove_file(&path);

    let store = UiStateStore::load_from(&path);
    assert!(!store.asistencia_tomada());
    assert!(!store.get_bool("otra_cosa"));
    // A plain read creates nothing.
    assert!(!path.exists());
}

#[test]
fn flag_survives_a_reload() {
    let path = temp_state_path("reload");
    let _ = std::fs::remove_file(&path);

    let mut store = UiStateStore::load_from(&path);
    store.set_asistencia_tomada(true).unwrap();
    drop(store);

    // A fresh store over the same file observes the last value set.
    let reloaded = UiStateStore::load_from(&path);
    assert!(reloaded.asistencia_tomada());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn every_toggle_overwrites_the_stored_value() {
    let path = temp_state_path("toggle");
    let _ = std::fs::remove_file(&path);

    let mut store = UiStateStore::load_from(&path);
    store.set_asistencia_tomada(true).unwrap();
    store.set_asistencia_tomada(false).unwrap();

    let reloaded = UiStateStore::load_from(&path);
    assert!(!reloaded.asistencia_tomada());

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json[ASISTENCIA_TOMADA_KEY], serde_json::Value::Bool(false));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn corrupt_state_file_reads_as_empty() {
    let path = temp_state_path("corrupt");
    std::fs::write(&path, "not json at all").unwrap();

    let store = UiStateStore::load_from(&path);
    assert!(!store.asistencia_tomada());

    let _ = std::fs::remove_file(&path);
}
