use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::ExitStatus;

pub const DEFAULT_BIRTH_DATE: &str = "2001-07-01";
pub const DEFAULT_NAME_LABEL: &str = "Kiizuha Kanazawa";
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_CARD_PROGRAM: &str = "node";
pub const DEFAULT_CARD_ARGS: &[&str] = &["generate.js"];

/// What to do with the README when the card command fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CardFailurePolicy {
    /// Stop before the document is touched.
    #[default]
    Abort,
    /// Log the failure and update the document anyway.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub echo_output: bool,
}

impl CardCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            echo_output: false,
        }
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CardCommand {
    fn default() -> Self {
        Self::new(
            DEFAULT_CARD_PROGRAM,
            DEFAULT_CARD_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct CardOutcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub path: PathBuf,
    pub age: u32,
    pub replacements: usize,
    pub written: bool,
}

#[derive(Debug)]
pub struct RunReport {
    pub card: Option<CardOutcome>,
    /// Set when the card command failed under `CardFailurePolicy::Continue`.
    pub card_error: Option<String>,
    pub readme: UpdateReport,
}

impl RunReport {
    pub fn card_failed(&self) -> bool {
        self.card_error.is_some()
    }
}

/// Settings for one run of the updater, already merged from flags and file.
#[derive(Debug, Clone)]
pub struct UpdaterSettings {
    pub birth_date: NaiveDate,
    pub name_label: String,
    pub readme_path: PathBuf,
    pub require_match: bool,
    pub card: CardCommand,
    pub skip_card: bool,
    pub on_card_failure: CardFailurePolicy,
    pub dry_run: bool,
}
