use clap::Parser;
use profile_updater::domain::ports::Clock;
use profile_updater::utils::{logger, validation::Validate};
use profile_updater::{
    CardGenerator, CliConfig, FixedClock, ProfileError, ProfileUpdater, SystemClock,
    UpdaterSettings,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting profile-updater");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match prepare(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let result = match config.today_override() {
        Ok(Some(today)) => {
            tracing::info!("📅 Using fixed date {}", today);
            run(&settings, FixedClock(today)).await
        }
        Ok(None) => run(&settings, SystemClock).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Update failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn prepare(config: &CliConfig) -> Result<UpdaterSettings, ProfileError> {
    config.validate()?;
    let file = config.load_file()?;
    let settings = config.resolve(&file)?;
    settings.validate()?;
    Ok(settings)
}

async fn run<C: Clock>(settings: &UpdaterSettings, clock: C) -> Result<(), ProfileError> {
    let card = CardGenerator::new(settings.card.clone());
    let updater = ProfileUpdater::new(settings, card, clock)?;
    let report = updater.run().await?;

    if let Some(reason) = &report.card_error {
        println!("⚠️ Card generation failed: {}", reason);
    }
    if report.readme.written {
        println!(
            "✅ Age set to {} in {}",
            report.readme.age,
            report.readme.path.display()
        );
    } else if report.readme.replacements == 0 {
        println!(
            "⚠️ No age marker found in {}; nothing changed",
            report.readme.path.display()
        );
    } else if settings.dry_run {
        println!(
            "🔍 Dry run: {} would show age {}",
            report.readme.path.display(),
            report.readme.age
        );
    } else {
        println!(
            "✅ {} already shows age {}",
            report.readme.path.display(),
            report.readme.age
        );
    }

    Ok(())
}
