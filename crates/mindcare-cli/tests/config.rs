use mindcare_cli::config::{MindcareConfig, load_config, save_config};

#[test]
fn missing_config_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(dir.path()).unwrap().is_none());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = MindcareConfig::new(dir.path().join("records"));
    config.catalog_path = Some(dir.path().join("catalog.json"));
    save_config(dir.path(), &config).unwrap();

    let loaded = load_config(dir.path()).unwrap().unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_dir, dir.path().join("records"));
    assert_eq!(loaded.catalog_path, config.catalog_path);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "data_dir": "/srv/mindcare", "created_at": "2024-05-01T12:00:00Z" }"#,
    )
    .unwrap();

    let loaded = load_config(dir.path()).unwrap().unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_dir.to_str(), Some("/srv/mindcare"));
    assert!(loaded.catalog_path.is_none());
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "config_version": 9, "data_dir": "/srv/mindcare", "created_at": "2024-05-01T12:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("written by a newer mindcare"));
}
