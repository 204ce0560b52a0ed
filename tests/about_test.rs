// tests/about_test.rs
use apptemplate::{about, SemanticVersion};

#[test]
fn test_package_version_is_stamped_once() {
    let first = about::about().unwrap();
    let second = about::about().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_stamped_version_round_trips() {
    let about = about::about().unwrap();
    let reparsed = SemanticVersion::from_string(&about.version.to_string()).unwrap();
    assert_eq!(reparsed, about.version);
}

#[test]
fn test_env_datadir_nested_under_base() {
    let about = about::about().unwrap();
    assert!(about.env_datadir("production").starts_with(&about.datadir));
}
