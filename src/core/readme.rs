use crate::core::substitution::SubstitutionPattern;
use crate::domain::model::UpdateReport;
use crate::utils::error::{ProfileError, Result};
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

/// Rewrites the age marker of a single document in place.
#[derive(Debug, Clone)]
pub struct ReadmeUpdater {
    path: PathBuf,
    pattern: SubstitutionPattern,
    require_match: bool,
    dry_run: bool,
}

impl ReadmeUpdater {
    pub fn new(path: impl Into<PathBuf>, pattern: SubstitutionPattern) -> Self {
        Self {
            path: path.into(),
            pattern,
            require_match: false,
            dry_run: false,
        }
    }

    /// Fail with `PatternNotFound` instead of warning when nothing matches.
    pub fn require_match(mut self, require: bool) -> Self {
        self.require_match = require;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn update(&self, age: u32) -> Result<UpdateReport> {
        // A dry run never writes, so a read-only document is enough.
        let mut file = OpenOptions::new()
            .read(true)
            .write(!self.dry_run)
            .open(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProfileError::DocumentNotFound {
                    path: self.path.clone(),
                },
                _ => ProfileError::IoError(e),
            })?;

        let mut text = String::new();
        file.read_to_string(&mut text).await?;

        let substitution = self.pattern.substitute(age, &text);
        tracing::debug!(
            "{} marker(s) for '{}' in {}",
            substitution.replacements,
            self.pattern.label(),
            self.path.display()
        );

        if substitution.replacements == 0 {
            if self.require_match {
                return Err(ProfileError::PatternNotFound {
                    path: self.path.clone(),
                    label: self.pattern.label().to_string(),
                });
            }
            tracing::warn!(
                "⚠️ No age marker for '{}' found in {}; document left unchanged",
                self.pattern.label(),
                self.path.display()
            );
        } else if substitution.replacements > 1 {
            tracing::warn!(
                "Found {} age markers in {}; all were updated",
                substitution.replacements,
                self.path.display()
            );
        }

        let changed = substitution.text != text;
        let written = changed && !self.dry_run;

        if written {
            // Truncate before writing so a shorter age leaves no stale tail.
            file.seek(SeekFrom::Start(0)).await?;
            file.set_len(0).await?;
            file.write_all(substitution.text.as_bytes()).await?;
            file.flush().await?;
            tracing::info!("📝 Updated age to {} in {}", age, self.path.display());
        } else if changed {
            tracing::info!(
                "🔍 Dry run: would set age to {} in {}",
                age,
                self.path.display()
            );
        } else {
            tracing::info!("{} already up to date", self.path.display());
        }

        Ok(UpdateReport {
            path: self.path.clone(),
            age,
            replacements: substitution.replacements,
            written,
        })
    }
}
