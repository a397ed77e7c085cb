//! Environment variable parsing with warn-level logging for invalid values.

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_value_is_used() {
        let var = "FIELDSENSE_TEST_ENV_VALID_31337";
        unsafe { std::env::set_var(var, "9090") };
        let port: u16 = env_parse_with_default(var, 8080);
        assert_eq!(port, 9090);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn unparseable_value_falls_back() {
        let var = "FIELDSENSE_TEST_ENV_INVALID_31338";
        unsafe { std::env::set_var(var, "not-a-port") };
        let port: u16 = env_parse_with_default(var, 8080);
        assert_eq!(port, 8080);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn missing_var_falls_back() {
        let var = "FIELDSENSE_TEST_ENV_MISSING_31339";
        unsafe { std::env::remove_var(var) };
        let port: u16 = env_parse_with_default(var, 8080);
        assert_eq!(port, 8080);
    }
}
