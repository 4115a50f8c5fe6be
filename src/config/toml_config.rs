use crate::utils::error::{FetchError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub service: ServiceSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub host: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR
        .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[source]
url = "https://dados.example.org/incendios.csv"
timeout_seconds = 20

[output]
path = "data/incendios.csv"

[service]
host = "http://x:8000"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source.url, "https://dados.example.org/incendios.csv");
        assert_eq!(config.source.timeout_seconds, Some(20));
        assert_eq!(config.output.path.as_deref(), Some("data/incendios.csv"));
        assert_eq!(config.service.host.as_deref(), Some("http://x:8000"));
    }

    #[test]
    fn test_optional_sections_default_to_none() {
        let toml_content = r#"
[source]
url = "https://dados.example.org/incendios.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output.path, None);
        assert_eq!(config.service.host, None);
        assert_eq!(config.source.timeout_seconds, None);
    }

    #[test]
    fn test_missing_source_is_parse_error() {
        let err = TomlConfig::from_toml_str("[service]\nhost = \"http://x:8000\"\n").unwrap_err();
        assert!(matches!(err, FetchError::ConfigParse { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INCENDIOS_TEST_HOST", "http://service.test:8000");

        let toml_content = r#"
[source]
url = "https://dados.example.org/incendios.csv"

[service]
host = "${INCENDIOS_TEST_HOST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.service.host.as_deref(),
            Some("http://service.test:8000")
        );

        std::env::remove_var("INCENDIOS_TEST_HOST");
    }

    #[test]
    fn test_unknown_env_var_is_left_literal() {
        let out = substitute_env_vars("host = \"${INCENDIOS_SURELY_UNSET_VAR}\"");
        assert_eq!(out, "host = \"${INCENDIOS_SURELY_UNSET_VAR}\"");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nurl = \"https://dados.example.org/a.csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.url, "https://dados.example.org/a.csv");
    }
}
