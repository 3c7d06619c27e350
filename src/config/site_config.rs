use crate::adapters::formsubmit::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::domain::model::SiteInfo;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_socket_addr, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub server: ServerConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl SiteConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_url("site.origin", &self.site.origin)?;
        validate_non_empty_string("site.contact_email", &self.site.contact_email)?;
        validate_url("site.github_url", &self.site.github_url)?;
        validate_socket_addr("server.listen", &self.server.listen)?;
        validate_url("contact.endpoint", &self.contact.endpoint)?;
        validate_range("contact.timeout_seconds", self.contact.timeout_seconds, 1, 120)?;
        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn contact_endpoint(&self) -> &str {
        &self.contact.endpoint
    }

    fn contact_timeout_seconds(&self) -> u64 {
        self.contact.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.name, "MonDesa");
        assert_eq!(config.contact_endpoint(), DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml_content = r#"
[site]
origin = "https://staging.mondesa.org"

[server]
listen = "0.0.0.0:3000"

[contact]
timeout_seconds = 5
"#;
        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.origin, "https://staging.mondesa.org");
        assert_eq!(config.site.name, "MonDesa");
        assert_eq!(config.server.listen, "0.0.0.0:3000");
        assert_eq!(config.contact_timeout_seconds(), 5);
        assert_eq!(config.contact.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MONDESA_TEST_RELAY", "https://relay.test/ajax/inbox");

        let toml_content = r#"
[contact]
endpoint = "${MONDESA_TEST_RELAY}"
"#;
        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.contact.endpoint, "https://relay.test/ajax/inbox");

        std::env::remove_var("MONDESA_TEST_RELAY");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[contact]
endpoint = "invalid-url"
"#;
        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.contact.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.server.listen = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = SiteConfig::from_toml_str("[site\nname = 1");
        assert!(matches!(result, Err(SiteError::ConfigValidationError { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nname = \"MonDesa Labs\"").unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.site.name, "MonDesa Labs");
    }
}
