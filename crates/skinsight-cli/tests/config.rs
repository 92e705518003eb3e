use pretty_assertions::assert_eq;
use skinsight_cli::config::{
    CURRENT_VERSION, SkinsightConfig, delete_config, load_config, save_config,
};
use skinsight_engine::{EngineConfig, StopPolicy};

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, SkinsightConfig::default());
}

#[test]
fn save_then_load_keeps_every_setting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = SkinsightConfig {
        config_version: 0,
        engine: EngineConfig {
            top_k: 3,
            stop: StopPolicy::ShareOfTop { min_questions: 4 },
            ..EngineConfig::default()
        },
        thinking_delay_ms: 1500,
    };
    save_config(&config, &path).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.engine, config.engine);
    assert_eq!(loaded.thinking_delay_ms, 1500);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"engine": {"top_k": 2, "initial_score": 4.0}, "thinking_delay_ms": 250}"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.engine.top_k, 2);
    assert_eq!(config.engine.initial_score, 4.0);
    assert_eq!(config.engine.stop, StopPolicy::default());
    assert_eq!(config.thinking_delay_ms, 250);
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 99}"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn delete_removes_the_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&SkinsightConfig::default(), &path).unwrap();

    delete_config(&path).unwrap();
    assert!(!path.exists());
    delete_config(&path).unwrap();
}
