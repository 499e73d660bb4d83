use std::fs;
use std::path::PathBuf;

use filelog_config::{LoggerConfig, load_file, load_toml};
use rstest::rstest;
use tempfile::tempdir;

#[rstest]
fn full_table_parses() {
    let cfg = load_toml(
        r#"
        [logger]
        path = "var/log"
        filename = "run.csv"
        level = "ALERT"
        type = "billing"
        "#,
    )
    .unwrap();
    assert_eq!(
        cfg.logger,
        LoggerConfig {
            path: PathBuf::from("var/log"),
            filename: Some("run.csv".into()),
            level: "ALERT".into(),
            log_type: Some("billing".into()),
        }
    );
    cfg.logger.validate().unwrap();
}

#[rstest]
#[case::empty_path("[logger]\npath = \"\"\n", "logger.path")]
#[case::blank_filename("[logger]\nfilename = \"  \"\n", "logger.filename")]
#[case::nested_filename("[logger]\nfilename = \"a/b.log\"\n", "bare file name")]
#[case::blank_level("[logger]\nlevel = \"\"\n", "logger.level")]
#[case::multiline_type("[logger]\ntype = \"a\\nb\"\n", "single line")]
fn invalid_values_are_named(#[case] doc: &str, #[case] needle: &str) {
    let cfg = load_toml(doc).unwrap();
    let err = cfg.logger.validate().expect_err("should be rejected");
    assert!(
        err.to_string().contains(needle),
        "{err} does not mention {needle}"
    );
}

#[rstest]
fn free_form_level_is_accepted() {
    let cfg = load_toml("[logger]\nlevel = \"NOTICE\"\n").unwrap();
    assert!(cfg.logger.validate().is_ok());
}

#[rstest]
fn load_file_reads_and_validates() {
    let dir = tempdir().unwrap();
    let ok = dir.path().join("ok.toml");
    fs::write(&ok, "[logger]\nlevel = \"INFO\"\n").unwrap();
    assert_eq!(load_file(&ok).unwrap().logger.level, "INFO");

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[logger]\nlevel = \"\"\n").unwrap();
    assert!(load_file(&bad).is_err());

    let missing = dir.path().join("missing.toml");
    let err = load_file(&missing).expect_err("missing file");
    assert!(err.to_string().contains("read config"));
}
