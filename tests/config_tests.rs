use arena_fixtures::Config;
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_config_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("arena_fixtures.toml");
    fs::write(&path, r#"
[generator]
count = 3
seed = 99

[output]
directory = "out/svgs"
file_prefix = "case_"

[logging]
file = "logs/arena.log"
"#).unwrap();

    let config = Config::from_file(&path).await.unwrap();
    assert_eq!(config.generator.count, 3);
    assert_eq!(config.generator.seed, 99);
    assert_eq!(config.output.directory, "out/svgs");
    assert_eq!(config.output.file_prefix, "case_");
    assert_eq!(config.logging.file.as_deref(), Some("logs/arena.log"));
}

#[tokio::test]
async fn test_malformed_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[generator]\ncount = \"many\"\n").unwrap();

    assert!(Config::from_file(&path).await.is_err());
}

#[tokio::test]
async fn test_missing_config_file_errors_from_file() {
    let dir = tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("nope.toml")).await.is_err());
}
