use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.lexicon_path, PathBuf::from("./data/lexicon.json"));
    assert!(cfg.locale_path.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("AFFECTLEX_LOG_LEVEL", "debug");
    map.insert("AFFECTLEX_LEXICON_PATH", "/srv/lexica/affect.yaml");
    map.insert("AFFECTLEX_LOCALE_PATH", "/srv/lexica/gb_us.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.lexicon_path, PathBuf::from("/srv/lexica/affect.yaml"));
    assert_eq!(cfg.locale_path, Some(PathBuf::from("/srv/lexica/gb_us.yaml")));
}

#[test]
fn build_app_config_rejects_empty_lexicon_path() {
    let mut map = HashMap::new();
    map.insert("AFFECTLEX_LEXICON_PATH", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AFFECTLEX_LEXICON_PATH"),
        "expected InvalidEnvVar(AFFECTLEX_LEXICON_PATH), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_empty_locale_path() {
    let mut map = HashMap::new();
    map.insert("AFFECTLEX_LOCALE_PATH", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AFFECTLEX_LOCALE_PATH"),
        "expected InvalidEnvVar(AFFECTLEX_LOCALE_PATH), got: {result:?}"
    );
}

#[test]
fn build_app_config_ignores_unrelated_vars() {
    let mut map = HashMap::new();
    map.insert("AFFECTLEX_ENV", "staging");
    map.insert("RUST_LOG", "trace");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
}
