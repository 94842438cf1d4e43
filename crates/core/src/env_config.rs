//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PAGE_SIZE_ENV};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Default listing page size, from `PLANT_CATALOG_PAGE_SIZE` when set.
///
/// Zero falls back to [`DEFAULT_PAGE_SIZE`]; larger values are capped at [`MAX_PAGE_SIZE`].
#[must_use]
pub fn default_page_size() -> u32 {
    match env_parse_with_default(PAGE_SIZE_ENV, DEFAULT_PAGE_SIZE) {
        0 => DEFAULT_PAGE_SIZE,
        n => n.min(MAX_PAGE_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all tests): each test owns a unique variable name, nothing else reads it.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_PLANT_ENV_PARSE_VALID_41871";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_PLANT_ENV_PARSE_INVALID_41872";
        unsafe { std::env::set_var(var_name, "sunflower") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_PLANT_ENV_PARSE_MISSING_41873";
        unsafe { std::env::remove_var(var_name) };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_parse_negative_for_unsigned() {
        let var_name = "TEST_PLANT_ENV_PARSE_NEGATIVE_41874";
        unsafe { std::env::set_var(var_name, "-5") };
        let result: u32 = env_parse_with_default(var_name, 7);
        assert_eq!(result, 7);
        unsafe { std::env::remove_var(var_name) };
    }
}
