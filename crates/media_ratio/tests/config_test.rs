use media_ratio::{MediaRatioConfig, MediaRatioErrorKind};
use std::io::Write;

#[test]
fn file_overrides_only_what_it_sets() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[measure]\ndefault_time_limit = 120\n\n[storage]\ndata_dir = \"/srv/media\"\n"
    )
    .unwrap();

    let config = MediaRatioConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.measure().default_time_limit(), 120);
    assert_eq!(*config.measure().safety_margin_secs(), 3);
    assert_eq!(config.storage().data_dir().to_str(), Some("/srv/media"));
    assert_eq!(config.storage().option_prefix(), "media-by-aspect-ratio-");
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MediaRatioConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err.kind(), MediaRatioErrorKind::Config(_)));
}

#[test]
fn malformed_file_is_a_config_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[measure]\ndefault_time_limit = \"soon\"").unwrap();

    let err = MediaRatioConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), MediaRatioErrorKind::Config(_)));
}
