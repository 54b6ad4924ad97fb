use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every variable is optional; missing values fall back to defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("HWSEARCH_LOG_LEVEL", "info");

    let extract_request_timeout_secs = parse_u64("HWSEARCH_EXTRACT_REQUEST_TIMEOUT_SECS", "30")?;
    let extract_user_agent = or_default(
        "HWSEARCH_EXTRACT_USER_AGENT",
        "hwsearch/0.1 (page-text-extraction)",
    );
    let extract_max_retries = parse_u32("HWSEARCH_EXTRACT_MAX_RETRIES", "3")?;
    let extract_retry_backoff_base_secs =
        parse_u64("HWSEARCH_EXTRACT_RETRY_BACKOFF_BASE_SECS", "5")?;
    let extract_cache_capacity = parse_usize("HWSEARCH_EXTRACT_CACHE_CAPACITY", "256")?;

    Ok(AppConfig {
        log_level,
        extract_request_timeout_secs,
        extract_user_agent,
        extract_max_retries,
        extract_retry_backoff_base_secs,
        extract_cache_capacity,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

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
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.extract_request_timeout_secs, 30);
        assert_eq!(config.extract_max_retries, 3);
        assert_eq!(config.extract_retry_backoff_base_secs, 5);
        assert_eq!(config.extract_cache_capacity, 256);
    }

    #[test]
    fn set_vars_override_defaults() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HWSEARCH_LOG_LEVEL", "debug");
        map.insert("HWSEARCH_EXTRACT_REQUEST_TIMEOUT_SECS", "10");
        map.insert("HWSEARCH_EXTRACT_USER_AGENT", "test-agent/1.0");
        map.insert("HWSEARCH_EXTRACT_MAX_RETRIES", "0");
        map.insert("HWSEARCH_EXTRACT_CACHE_CAPACITY", "8");

        let config = build_app_config(lookup_from_map(&map)).expect("overrides should parse");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.extract_request_timeout_secs, 10);
        assert_eq!(config.extract_user_agent, "test-agent/1.0");
        assert_eq!(config.extract_max_retries, 0);
        assert_eq!(config.extract_cache_capacity, 8);
    }

    #[test]
    fn invalid_numeric_value_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HWSEARCH_EXTRACT_MAX_RETRIES", "not-a-number");

        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. })
                    if var == "HWSEARCH_EXTRACT_MAX_RETRIES"
            ),
            "expected InvalidEnvVar(HWSEARCH_EXTRACT_MAX_RETRIES), got: {result:?}"
        );
    }

    #[test]
    fn negative_cache_capacity_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HWSEARCH_EXTRACT_CACHE_CAPACITY", "-1");

        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { .. })),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }
}
