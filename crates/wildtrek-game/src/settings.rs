//! Config resolution for the game: file on disk plus command-line overrides.

use std::path::{Path, PathBuf};

use tracing::info;
use wildtrek_config::{CliArgs, Config, ConfigError};

const APP_DIR: &str = "wildtrek";

/// The effective config together with what it was built from, so a reload
/// can re-apply the same overrides to the changed file.
#[derive(Debug)]
pub struct Settings {
    dir: Option<PathBuf>,
    on_disk: Config,
    overrides: CliArgs,
    effective: Config,
}

impl Settings {
    /// Load (or create) `config.ron`, apply CLI overrides, and validate.
    ///
    /// The directory is `--config` if given, else `<os config dir>/wildtrek`.
    /// Without either, defaults are used in memory and reloading is a no-op.
    pub fn load(overrides: CliArgs) -> Result<Self, ConfigError> {
        let dir = overrides
            .config
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR)));
        let on_disk = match &dir {
            Some(dir) => Config::load_or_create(dir)?,
            None => Config::default(),
        };
        let effective = effective_config(&on_disk, &overrides)?;
        Ok(Self {
            dir,
            on_disk,
            overrides,
            effective,
        })
    }

    /// The config in force: file values with CLI overrides on top.
    pub fn config(&self) -> &Config {
        &self.effective
    }

    /// Directory holding `config.ron`, if any.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Re-read `config.ron`. Returns `true` if the effective config changed.
    ///
    /// On error the previous config stays in force.
    pub fn reload(&mut self) -> Result<bool, ConfigError> {
        let Some(dir) = &self.dir else {
            return Ok(false);
        };
        let Some(on_disk) = self.on_disk.reload(dir)? else {
            return Ok(false);
        };

        let effective = effective_config(&on_disk, &self.overrides)?;
        self.on_disk = on_disk;
        if effective == self.effective {
            return Ok(false);
        }
        info!("Applied reloaded config from {}", dir.display());
        self.effective = effective;
        Ok(true)
    }
}

fn effective_config(on_disk: &Config, overrides: &CliArgs) -> Result<Config, ConfigError> {
    let mut config = on_disk.clone();
    config.apply_cli_overrides(overrides);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildtrek_config::WeightScheme;

    fn overrides_in(dir: &Path) -> CliArgs {
        CliArgs {
            config: Some(dir.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_creates_file_and_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliArgs {
            null_chance: Some(0.0),
            ..overrides_in(dir.path())
        };
        let settings = Settings::load(overrides).unwrap();
        assert_eq!(settings.config().encounter.null_encounter_chance, 0.0);
        assert_eq!(settings.dir(), Some(dir.path()));
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliArgs {
            null_chance: Some(-1.0),
            ..overrides_in(dir.path())
        };
        assert!(matches!(
            Settings::load(overrides),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_reload_unchanged_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::load(overrides_in(dir.path())).unwrap();
        assert!(!settings.reload().unwrap());
    }

    #[test]
    fn test_reload_picks_up_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::load(overrides_in(dir.path())).unwrap();

        let mut edited = Config::default();
        edited.encounter.scheme = WeightScheme::Normalized;
        edited.save(dir.path()).unwrap();

        assert!(settings.reload().unwrap());
        assert_eq!(settings.config().encounter.scheme, WeightScheme::Normalized);
        assert!(!settings.reload().unwrap());
    }

    #[test]
    fn test_reload_keeps_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliArgs {
            null_chance: Some(0.0),
            ..overrides_in(dir.path())
        };
        let mut settings = Settings::load(overrides).unwrap();

        let mut edited = Config::default();
        edited.encounter.null_encounter_chance = 0.9;
        edited.encounter.seed = Some(5);
        edited.save(dir.path()).unwrap();

        assert!(settings.reload().unwrap());
        assert_eq!(settings.config().encounter.null_encounter_chance, 0.0);
        assert_eq!(settings.config().encounter.seed, Some(5));
    }

    #[test]
    fn test_reload_with_override_masking_the_change() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = CliArgs {
            null_chance: Some(0.0),
            ..overrides_in(dir.path())
        };
        let mut settings = Settings::load(overrides).unwrap();

        let mut edited = Config::default();
        edited.encounter.null_encounter_chance = 0.9;
        edited.save(dir.path()).unwrap();

        assert!(!settings.reload().unwrap());
    }

    #[test]
    fn test_invalid_reload_keeps_previous_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::load(overrides_in(dir.path())).unwrap();

        let mut edited = Config::default();
        edited.encounter.null_encounter_chance = 3.0;
        edited.save(dir.path()).unwrap();

        assert!(matches!(settings.reload(), Err(ConfigError::Invalid(_))));
        assert_eq!(settings.config(), &Config::default());
    }
}
