//! Allow-list extraction and membership tests.

use super::{StaticLoader, UnreachableLoader, selecting};
use crate::error::{ConfigError, ErrorKind};
use crate::format::Format;
use crate::resolver::{
    Resolver, allowed_environments, is_environment_allowed, is_environment_configured,
};
use crate::tree::ConfigTree;

fn parse(source: &str) -> ConfigTree {
    Format::Toml.decode(source, "inline").unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_missing_allow_list() {
    let config = parse(r#"testing = ["a", "b", "c"]"#);
    let err = allowed_environments(&config).unwrap_err();
    assert!(matches!(err, ConfigError::NoAllowedEnvironments { .. }));
    assert_eq!(err.kind(), ErrorKind::NotAllowedEnvironmentConfiguration);
    assert!(err.to_string().contains("[allowed-environments]"));
}

#[test]
fn test_allow_list_that_is_not_a_list() {
    let config = parse(r#"allowed-environments = "a""#);
    let err = allowed_environments(&config).unwrap_err();
    assert!(matches!(err, ConfigError::AllowedEnvironmentsNotList { ref value } if value == "a"));
    assert_eq!(err.kind(), ErrorKind::NotAllowedEnvironmentConfiguration);
}

#[test]
fn test_allow_list_with_non_string_elements() {
    let config = parse(r#"allowed-environments = ["a", 1]"#);
    let err = allowed_environments(&config).unwrap_err();
    assert!(matches!(err, ConfigError::AllowedEnvironmentsNotList { .. }));
    assert!(err.to_string().contains("[a, 1]"));
}

#[test]
fn test_valid_allow_list() {
    let config = parse(r#"allowed-environments = ["a", "b"]"#);
    assert_eq!(allowed_environments(&config).unwrap(), strings(&["a", "b"]));
}

#[test]
fn test_environment_not_allowed() {
    assert!(!is_environment_allowed("test", &strings(&["a", "b"])));
}

#[test]
fn test_environment_allowed() {
    assert!(is_environment_allowed("test", &strings(&["test", "b"])));
    assert!(is_environment_allowed("test", &strings(&["b", "test"])));
}

#[test]
fn test_membership_is_case_sensitive() {
    assert!(!is_environment_allowed("Test", &strings(&["test"])));
    assert!(!is_environment_allowed("test ", &strings(&["test"])));
    assert!(!is_environment_allowed("test", &[]));
}

#[test]
fn test_environment_configured() {
    let config = parse(r#"test = { first = "hej" }"#);
    assert!(!is_environment_configured("meh", &config));
    assert!(is_environment_configured("test", &config));
}

#[test]
fn test_allow_list_checked_before_environment_table_is_loaded() {
    let resolver = Resolver::new(selecting("test"))
        .with_local_loader(StaticLoader(parse(r#"allowed-environments = ["a", "b"]"#)))
        .with_environment_loader(UnreachableLoader)
        .with_base_loader(UnreachableLoader);

    let err = resolver.resolve().unwrap_err();
    match err {
        ConfigError::EnvironmentNotAllowed { selected, allowed } => {
            assert_eq!(selected, "test");
            assert_eq!(allowed, strings(&["a", "b"]));
        }
        other => panic!("expected EnvironmentNotAllowed, got {other:?}"),
    }
}

#[test]
fn test_allowed_but_not_configured() {
    let resolver = Resolver::new(selecting("test"))
        .with_local_loader(StaticLoader(parse(r#"allowed-environments = ["test"]"#)))
        .with_environment_loader(StaticLoader(parse("[dev]\na = 1\n")))
        .with_base_loader(UnreachableLoader);

    let err = resolver.resolve().unwrap_err();
    assert!(matches!(err, ConfigError::EnvironmentNotConfigured { ref selected } if selected == "test"));
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn test_configured_but_not_allowed() {
    let resolver = Resolver::new(selecting("test"))
        .with_local_loader(StaticLoader(parse(r#"allowed-environments = ["dev"]"#)))
        .with_environment_loader(StaticLoader(parse("[test]\na = 1\n")))
        .with_base_loader(UnreachableLoader);

    let err = resolver.resolve().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAllowedEnvironmentConfiguration);
}

#[test]
fn test_environment_entry_that_is_not_a_table() {
    let resolver = Resolver::new(selecting("test"))
        .with_local_loader(StaticLoader(parse(r#"allowed-environments = ["test"]"#)))
        .with_environment_loader(StaticLoader(parse(r#"test = "flat""#)))
        .with_base_loader(UnreachableLoader);

    let err = resolver.resolve().unwrap_err();
    assert!(matches!(err, ConfigError::EnvironmentNotConfigured { .. }));
}

fn resolver_with_local(source: &str) -> Resolver {
    Resolver::new(selecting("test"))
        .with_local_loader(StaticLoader(parse(source)))
        .with_environment_loader(UnreachableLoader)
        .with_base_loader(UnreachableLoader)
}

#[test]
fn test_missing_allow_list_fails_before_other_layers_are_loaded() {
    let err = resolver_with_local(r#"test = ["a", "b"]"#).resolve().unwrap_err();
    assert!(matches!(err, ConfigError::NoAllowedEnvironments { .. }));
    assert_eq!(err.kind(), ErrorKind::NotAllowedEnvironmentConfiguration);
}

#[test]
fn test_non_list_allow_list_fails_before_other_layers_are_loaded() {
    let err = resolver_with_local(r#"allowed-environments = "a""#)
        .resolve()
        .unwrap_err();
    assert!(matches!(err, ConfigError::AllowedEnvironmentsNotList { .. }));
    assert_eq!(err.kind(), ErrorKind::NotAllowedEnvironmentConfiguration);
}
