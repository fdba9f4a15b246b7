//! Gateway configuration.
//!
//! The remote store needs exactly two external parameters, both supplied
//! via the process environment. Their absence is fatal for the gateway,
//! not for the core.

use lunchpick_core::error::{LunchError, Result};

/// Connection parameters for the hosted restaurant table.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project endpoint, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Anonymous access key sent with every request.
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Environment variable holding the store endpoint URL.
    pub const URL_VAR: &'static str = "SUPABASE_URL";
    /// Environment variable holding the anonymous access key.
    pub const ANON_KEY_VAR: &'static str = "SUPABASE_ANON_KEY";

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(Self::URL_VAR).ok(),
            std::env::var(Self::ANON_KEY_VAR).ok(),
        )
    }

    /// Builds the configuration from already-looked-up values. Split out
    /// of [`from_env`](Self::from_env) so tests never touch process-wide
    /// environment state.
    pub fn from_vars(url: Option<String>, anon_key: Option<String>) -> Result<Self> {
        let url = url
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| LunchError::config(format!("{} is not set", Self::URL_VAR)))?;
        let anon_key = anon_key
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| LunchError::config(format!("{} is not set", Self::ANON_KEY_VAR)))?;

        Ok(Self { url, anon_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_values_present() {
        let config = SupabaseConfig::from_vars(
            Some("https://demo.supabase.co".to_string()),
            Some("anon-key".to_string()),
        )
        .unwrap();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
    }

    #[test]
    fn missing_or_blank_values_are_config_errors() {
        let err = SupabaseConfig::from_vars(None, Some("anon-key".to_string())).unwrap_err();
        assert!(matches!(err, LunchError::Config(_)));

        let err = SupabaseConfig::from_vars(
            Some("https://demo.supabase.co".to_string()),
            Some("   ".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, LunchError::Config(_)));
    }
}
