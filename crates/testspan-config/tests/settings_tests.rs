use pretty_assertions::assert_eq;
use testspan_config::{Config, Error};

#[test]
fn load_reads_global_and_integration_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("testspan.toml");
    std::fs::write(
        &path,
        r#"
service = "mysvc"
env = "ci"
version = "1.2.3"

[tags]
team = "infra"

[integrations.pytest]
service = "pymysvc"
operation_name = "mytest"

[integrations.pytest.tags]
suite = "unit"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.global.service.as_deref(), Some("mysvc"));
    assert_eq!(config.global.env.as_deref(), Some("ci"));
    assert_eq!(config.global.version.as_deref(), Some("1.2.3"));
    assert_eq!(config.global.tags["team"], "infra");

    let pytest = config.integration("pytest").unwrap();
    assert_eq!(pytest.service.as_deref(), Some("pymysvc"));
    assert_eq!(pytest.operation_name.as_deref(), Some("mytest"));
    assert_eq!(pytest.tags["suite"], "unit");
    assert_eq!(
        config.int_service(None, pytest, Some("pytest")).as_deref(),
        Some("pymysvc")
    );
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.toml"), "{err}");
}

#[test]
fn invalid_toml_is_an_error() {
    let err = Config::from_toml_str("service = [").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}
