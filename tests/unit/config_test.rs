//! Unit tests for config module

use std::fs;

use kbtidy::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.snipd.namespace_prefix, "Podcasts");
    assert_eq!(config.snipd.separator, "___");
    assert!(config.snipd.output_dir.is_none());
    assert!(config.journal.directory.is_none());
    assert_eq!(config.journal.lookback_days, 365);
    assert_eq!(config.outline.indent_width, 2);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.snipd.namespace_prefix, config.snipd.namespace_prefix);
    assert_eq!(parsed.journal.lookback_days, config.journal.lookback_days);
    assert_eq!(parsed.outline.indent_width, config.outline.indent_width);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let toml_str = r#"
[journal]
directory = "~/logseq/journals"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.journal.directory.as_deref(), Some("~/logseq/journals"));
    assert_eq!(config.journal.lookback_days, 365);
    assert_eq!(config.snipd.namespace_prefix, "Podcasts");
    assert_eq!(config.outline.indent_width, 2);
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config.snipd.separator, "___");
}

#[test]
fn load_from_reads_custom_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[snipd]\nnamespace_prefix = \"Shows\"\noutput_dir = \"/tmp/pages\"\n\n[outline]\nindent_width = 4\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.snipd.namespace_prefix, "Shows");
    assert_eq!(config.snipd.separator, "___");
    assert_eq!(config.snipd_output_dir(), std::path::PathBuf::from("/tmp/pages"));
    assert_eq!(config.outline.indent_width, 4);
}

#[test]
fn load_from_rejects_zero_lookback() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[journal]\nlookback_days = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("lookback_days"));
}

#[test]
fn load_from_rejects_separator_with_slash() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[snipd]\nseparator = \"/\"\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn load_from_reports_malformed_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[snipd\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
