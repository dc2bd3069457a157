use crate::domain::model::CardFailurePolicy;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub profile: ProfileConfig,
    pub card: CardConfig,
    pub readme: ReadmeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub birth_date: Option<String>,
    pub name_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub enabled: Option<bool>,
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub working_dir: Option<String>,
    pub echo_output: Option<bool>,
    pub on_failure: Option<CardFailurePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    pub path: Option<String>,
    pub require_match: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProfileError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProfileError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are kept as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProfileError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn card_enabled(&self) -> bool {
        self.card.enabled.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(date) = &self.profile.birth_date {
            validation::parse_date("profile.birth_date", date)?;
        }
        if let Some(label) = &self.profile.name_label {
            validation::validate_non_empty_string("profile.name_label", label)?;
        }
        if let Some(program) = &self.card.program {
            validation::validate_non_empty_string("card.program", program)?;
        }
        if let Some(dir) = &self.card.working_dir {
            validation::validate_path("card.working_dir", dir)?;
        }
        if let Some(path) = &self.readme.path {
            validation::validate_path("readme.path", path)?;
        }
        Ok(())
    }
}
