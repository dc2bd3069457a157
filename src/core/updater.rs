use crate::core::age::calculate_age;
use crate::core::readme::ReadmeUpdater;
use crate::core::substitution::SubstitutionPattern;
use crate::domain::model::{CardFailurePolicy, RunReport, UpdaterSettings};
use crate::domain::ports::{CardRunner, Clock};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Runs card generation, then the README age update, in that order.
pub struct ProfileUpdater<R: CardRunner, C: Clock> {
    card: R,
    clock: C,
    readme: ReadmeUpdater,
    birth_date: NaiveDate,
    skip_card: bool,
    on_card_failure: CardFailurePolicy,
}

impl<R: CardRunner, C: Clock> ProfileUpdater<R, C> {
    pub fn new(settings: &UpdaterSettings, card: R, clock: C) -> Result<Self> {
        let pattern = SubstitutionPattern::new(&settings.name_label)?;
        let readme = ReadmeUpdater::new(settings.readme_path.clone(), pattern)
            .require_match(settings.require_match)
            .dry_run(settings.dry_run);

        Ok(Self {
            card,
            clock,
            readme,
            birth_date: settings.birth_date,
            // A dry run never has side effects outside the process.
            skip_card: settings.skip_card || settings.dry_run,
            on_card_failure: settings.on_card_failure,
        })
    }

    pub async fn run(&self) -> Result<RunReport> {
        let today = self.clock.today();
        let age = calculate_age(self.birth_date, today)?;
        tracing::debug!("Age on {} for birth date {}: {}", today, self.birth_date, age);

        let mut card = None;
        let mut card_error = None;

        if self.skip_card {
            tracing::info!("⏭️ Skipping card generation");
        } else {
            match self.card.generate().await {
                Ok(outcome) => {
                    tracing::info!("✅ Card generated");
                    card = Some(outcome);
                }
                Err(e) => match self.on_card_failure {
                    CardFailurePolicy::Abort => {
                        tracing::error!(
                            "❌ Card generation failed, {} left untouched",
                            self.readme.path().display()
                        );
                        return Err(e);
                    }
                    CardFailurePolicy::Continue => {
                        tracing::warn!("⚠️ Card generation failed: {}; updating README anyway", e);
                        card_error = Some(e.to_string());
                    }
                },
            }
        }

        let readme = self.readme.update(age).await?;

        Ok(RunReport {
            card,
            card_error,
            readme,
        })
    }
}
