use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty_path = |var: &str| -> Result<Option<PathBuf>, ConfigError> {
        match lookup(var) {
            Ok(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "path must not be empty".to_string(),
            }),
            Ok(raw) => Ok(Some(PathBuf::from(raw))),
            Err(_) => Ok(None),
        }
    };

    let log_level = or_default("AFFECTLEX_LOG_LEVEL", "info");
    let lexicon_path = non_empty_path("AFFECTLEX_LEXICON_PATH")?
        .unwrap_or_else(|| PathBuf::from("./data/lexicon.json"));
    let locale_path = non_empty_path("AFFECTLEX_LOCALE_PATH")?;

    Ok(AppConfig {
        log_level,
        lexicon_path,
        locale_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
