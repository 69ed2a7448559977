// tests/parser_test.rs
use chrono::NaiveDate;
use isis_version::domain::ReleaseLevel;
use isis_version::parser::{self, VersionParser, ISIS_ROOT_KEY};
use isis_version::IsisVersionError;
use serial_test::serial;
use std::collections::HashMap;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_parse_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"3.6.0\n2019-04-22\nv007\n").unwrap();
    temp_file.flush().unwrap();

    let record = VersionParser::new().parse_file(temp_file.path()).unwrap();
    assert_eq!(record.major, 3);
    assert_eq!(record.minor, 6);
    assert_eq!(record.patch, 0);
    assert_eq!(
        record.release_date,
        Some(NaiveDate::from_ymd_opt(2019, 4, 22).unwrap())
    );
    assert_eq!(record.release_level, None);
}

#[test]
fn test_parse_file_with_level() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"beta 3.5.2.0 2019-01-15\n").unwrap();
    temp_file.flush().unwrap();

    let record = VersionParser::new().parse_file(temp_file.path()).unwrap();
    assert_eq!(record.release_level, Some(ReleaseLevel::Beta));
}

#[test]
fn test_parse_file_missing() {
    let err = VersionParser::new()
        .parse_file("does/not/exist/version")
        .unwrap_err();
    assert!(matches!(err, IsisVersionError::Io(_)));
}

#[test]
fn test_parse_file_malformed() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not a version file\n").unwrap();
    temp_file.flush().unwrap();

    let err = VersionParser::new()
        .parse_file(temp_file.path())
        .unwrap_err();
    assert!(matches!(err, IsisVersionError::Malformed(_)));
}

#[test]
fn test_current_version_from_explicit_environment() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("version"), "beta 3.5.2.0 2019-01-15\n").unwrap();

    let mut environment = HashMap::new();
    environment.insert(ISIS_ROOT_KEY.to_string(), dir.path().display().to_string());

    let record = VersionParser::new().current_version(&environment).unwrap();
    assert_eq!(record.major, 3);
    assert_eq!(record.minor, 5);
    assert_eq!(record.patch, 2);
    assert_eq!(record.release_level, Some(ReleaseLevel::Beta));
    assert_eq!(
        record.release_date,
        Some(NaiveDate::from_ymd_opt(2019, 1, 15).unwrap())
    );
}

#[test]
fn test_current_version_missing_key() {
    let environment = HashMap::new();
    let err = VersionParser::new()
        .current_version(&environment)
        .unwrap_err();
    assert!(matches!(err, IsisVersionError::MissingConfiguration(_)));
    assert!(err.to_string().contains("ISISROOT"));
}

#[test]
fn test_current_version_missing_file() {
    let dir = tempdir().unwrap();
    let mut environment = HashMap::new();
    environment.insert(ISIS_ROOT_KEY.to_string(), dir.path().display().to_string());

    let err = VersionParser::new()
        .current_version(&environment)
        .unwrap_err();
    assert!(matches!(err, IsisVersionError::Io(_)));
}

#[test]
#[serial]
fn test_current_version_from_process_environment() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("version"), "7.2.0\n").unwrap();
    std::env::set_var(ISIS_ROOT_KEY, dir.path());

    let environment = parser::process_environment();
    let record = VersionParser::new().current_version(&environment).unwrap();
    assert_eq!(record.to_string(), "7.2.0");

    std::env::remove_var(ISIS_ROOT_KEY);
}

#[test]
#[serial]
fn test_process_environment_without_root() {
    std::env::remove_var(ISIS_ROOT_KEY);

    let environment = parser::process_environment();
    let err = VersionParser::new()
        .current_version(&environment)
        .unwrap_err();
    assert!(matches!(err, IsisVersionError::MissingConfiguration(_)));
}
