pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use self::core::{
    age::{calculate_age, FixedClock, SystemClock},
    card::CardGenerator,
    readme::ReadmeUpdater,
    substitution::SubstitutionPattern,
    updater::ProfileUpdater,
};
pub use domain::model::UpdaterSettings;
pub use utils::error::{ProfileError, Result};
