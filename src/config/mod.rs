pub mod toml_config;

use crate::domain::model::{
    CardCommand, CardFailurePolicy, UpdaterSettings, DEFAULT_BIRTH_DATE, DEFAULT_CARD_ARGS,
    DEFAULT_CARD_PROGRAM, DEFAULT_NAME_LABEL, DEFAULT_README_PATH,
};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

/// Command line flags. Every flag is optional; with none given the tool runs
/// `node generate.js` and updates `README.md` in the current directory.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "profile-updater")]
#[command(about = "Regenerate the profile card and refresh the age in README.md")]
pub struct CliConfig {
    /// Document holding the age marker
    #[arg(long)]
    pub readme: Option<String>,

    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Name preceding the age marker
    #[arg(long)]
    pub name_label: Option<String>,

    /// Card generator executable
    #[arg(long)]
    pub card_program: Option<String>,

    /// Comma separated card generator arguments
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub card_args: Option<Vec<String>>,

    /// Working directory for the card generator
    #[arg(long)]
    pub card_dir: Option<String>,

    /// Print the card generator's stdout (`--echo-card-output=false` overrides the file)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub echo_card_output: Option<bool>,

    /// Do not run the card generator (`--skip-card=false` runs it even if the file disables it)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub skip_card: Option<bool>,

    /// What to do with the README when card generation fails
    #[arg(long, value_enum)]
    pub on_card_failure: Option<CardFailurePolicy>,

    /// Fail when the README has no age marker (`--require-match=false` overrides the file)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub require_match: Option<bool>,

    /// Compute the age as of this date instead of today, YYYY-MM-DD
    #[arg(long)]
    pub today: Option<String>,

    /// Report what would change without running the card or writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Merges flags over the file values over the built-in defaults.
    pub fn resolve(&self, file: &TomlConfig) -> Result<UpdaterSettings> {
        let birth_date = self
            .birth_date
            .as_deref()
            .or(file.profile.birth_date.as_deref())
            .unwrap_or(DEFAULT_BIRTH_DATE);

        let name_label = self
            .name_label
            .clone()
            .or_else(|| file.profile.name_label.clone())
            .unwrap_or_else(|| DEFAULT_NAME_LABEL.to_string());

        let readme_path = self
            .readme
            .clone()
            .or_else(|| file.readme.path.clone())
            .unwrap_or_else(|| DEFAULT_README_PATH.to_string());

        let program = self
            .card_program
            .clone()
            .or_else(|| file.card.program.clone())
            .unwrap_or_else(|| DEFAULT_CARD_PROGRAM.to_string());

        let args = self
            .card_args
            .clone()
            .or_else(|| file.card.args.clone())
            .unwrap_or_else(|| DEFAULT_CARD_ARGS.iter().map(|a| a.to_string()).collect());

        let card = CardCommand {
            program,
            args,
            working_dir: self
                .card_dir
                .clone()
                .or_else(|| file.card.working_dir.clone())
                .map(PathBuf::from),
            echo_output: self
                .echo_card_output
                .or(file.card.echo_output)
                .unwrap_or(false),
        };

        Ok(UpdaterSettings {
            birth_date: validation::parse_date("birth_date", birth_date)?,
            name_label,
            readme_path: PathBuf::from(readme_path),
            require_match: self
                .require_match
                .or(file.readme.require_match)
                .unwrap_or(false),
            card,
            skip_card: self.skip_card.unwrap_or(!file.card_enabled()),
            on_card_failure: self
                .on_card_failure
                .or(file.card.on_failure)
                .unwrap_or_default(),
            dry_run: self.dry_run,
        })
    }

    pub fn today_override(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|d| validation::parse_date("today", d))
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.readme {
            validation::validate_path("readme", path)?;
        }
        if let Some(date) = &self.birth_date {
            validation::parse_date("birth_date", date)?;
        }
        if let Some(label) = &self.name_label {
            validation::validate_non_empty_string("name_label", label)?;
        }
        if let Some(program) = &self.card_program {
            validation::validate_non_empty_string("card_program", program)?;
        }
        if let Some(dir) = &self.card_dir {
            validation::validate_path("card_dir", dir)?;
        }
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        self.today_override()?;
        Ok(())
    }
}

impl Validate for UpdaterSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name_label", &self.name_label)?;
        validation::validate_non_empty_string("card.program", &self.card.program)?;
        validation::validate_path("readme", &self.readme_path.to_string_lossy())
    }
}
