//! Environment-variable expansion for configuration values.
//!
//! Credentials rarely belong in a config file. String values may reference
//! the environment with `${VAR}`, `$VAR`, or `%VAR%` and are expanded once
//! after the file is loaded.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Matches `${VAR}` (capture 1), `$VAR` (capture 2), and `%VAR%`
    /// (capture 3) references.
    static ref ENV_REFERENCE: Regex = Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)|%([A-Za-z_][A-Za-z0-9_]*)%"
    )
    .unwrap();
}

/// Expand environment-variable references against the process environment.
///
/// `${VAR}` expands to the empty string when the variable is unset; the
/// bare `$VAR` and `%VAR%` forms are left untouched in that case, so
/// literal values containing `$` or `%` survive unexpanded.
pub fn expand_env_vars(value: &str) -> String {
    ENV_REFERENCE
        .replace_all(value, |caps: &Captures| {
            if let Some(name) = caps.get(1) {
                std::env::var(name.as_str()).unwrap_or_default()
            } else if let Some(name) = caps.get(2).or_else(|| caps.get(3)) {
                std::env::var(name.as_str()).unwrap_or_else(|_| caps[0].to_string())
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn expands_brace_style() {
        env::set_var("BUILDLOG_TEST_BRACE", "minio.internal:9000");
        assert_eq!(
            expand_env_vars("http://${BUILDLOG_TEST_BRACE}"),
            "http://minio.internal:9000"
        );
        env::remove_var("BUILDLOG_TEST_BRACE");
    }

    #[test]
    fn expands_dollar_style() {
        env::set_var("BUILDLOG_TEST_DOLLAR", "secretvalue");
        assert_eq!(expand_env_vars("$BUILDLOG_TEST_DOLLAR"), "secretvalue");
        env::remove_var("BUILDLOG_TEST_DOLLAR");
    }

    #[test]
    fn expands_percent_style() {
        env::set_var("BUILDLOG_TEST_PERCENT", "windows-style");
        assert_eq!(expand_env_vars("%BUILDLOG_TEST_PERCENT%"), "windows-style");
        env::remove_var("BUILDLOG_TEST_PERCENT");
    }

    #[test]
    fn unset_brace_reference_expands_to_empty() {
        assert_eq!(expand_env_vars("${BUILDLOG_TEST_UNSET_BRACE}"), "");
    }

    #[test]
    fn unset_dollar_and_percent_are_preserved() {
        assert_eq!(
            expand_env_vars("$BUILDLOG_TEST_UNSET/key"),
            "$BUILDLOG_TEST_UNSET/key"
        );
        assert_eq!(
            expand_env_vars("%BUILDLOG_TEST_UNSET%"),
            "%BUILDLOG_TEST_UNSET%"
        );
    }

    #[test]
    fn expands_multiple_references() {
        env::set_var("BUILDLOG_TEST_A", "one");
        env::set_var("BUILDLOG_TEST_B", "two");
        assert_eq!(
            expand_env_vars("${BUILDLOG_TEST_A}/$BUILDLOG_TEST_B/tail"),
            "one/two/tail"
        );
        env::remove_var("BUILDLOG_TEST_A");
        env::remove_var("BUILDLOG_TEST_B");
    }

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(expand_env_vars("public-read"), "public-read");
        assert_eq!(expand_env_vars(""), "");
        assert_eq!(expand_env_vars("50% done"), "50% done");
    }
}
