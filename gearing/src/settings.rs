/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-speed.
 *
 * gear-speed is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-speed is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-speed. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use config::{Config, ConfigBuilder, Environment, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utils::numeric::{all_positive_finite, is_positive_finite};
use crate::error::{Error, ErrorKind, Result};
use crate::model::combination::{DEFAULT_GEAR_SIZES, DEFAULT_INPUT_SPEEDS};
use crate::model::tier::{DEFAULT_HIGH_SPEED_THRESHOLD, DEFAULT_MEDIUM_SPEED_THRESHOLD};
use crate::model::{generate_combinations, GearCombination, TierThresholds};
use crate::query::{DEFAULT_MATCH_TOLERANCE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EngineSettings {
    input_speeds: Vec<f64>,
    driving_teeth: Vec<f64>,
    driven_teeth: Vec<f64>,
    page_size: NonZeroUsize,
    match_tolerance: f64,
    tier_thresholds: TierThresholds
}

impl EngineSettings {
    const INPUT_SPEEDS: &'static str = "input_speeds";
    const DRIVING_TEETH: &'static str = "driving_teeth";
    const DRIVEN_TEETH: &'static str = "driven_teeth";
    const PAGE_SIZE: &'static str = "page_size";
    const MATCH_TOLERANCE: &'static str = "match_tolerance";
    const HIGH_THRESHOLD: &'static str = "tier_thresholds.high";
    const MEDIUM_THRESHOLD: &'static str = "tier_thresholds.medium";
    pub const CONFIG_FILENAME: &'static str = "gear-speed-conf";
    pub const ENV_PREFIX: &'static str = "GEAR_SPEED";

    fn default_builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default(EngineSettings::INPUT_SPEEDS, DEFAULT_INPUT_SPEEDS.to_vec())?
            .set_default(EngineSettings::DRIVING_TEETH, DEFAULT_GEAR_SIZES.to_vec())?
            .set_default(EngineSettings::DRIVEN_TEETH, DEFAULT_GEAR_SIZES.to_vec())?
            .set_default(EngineSettings::PAGE_SIZE, DEFAULT_PAGE_SIZE.get() as i64)?
            .set_default(EngineSettings::MATCH_TOLERANCE, DEFAULT_MATCH_TOLERANCE)?
            .set_default(EngineSettings::HIGH_THRESHOLD, DEFAULT_HIGH_SPEED_THRESHOLD)?
            .set_default(EngineSettings::MEDIUM_THRESHOLD, DEFAULT_MEDIUM_SPEED_THRESHOLD)?)
    }

    fn environment() -> Environment {
        Environment::with_prefix(EngineSettings::ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key(EngineSettings::INPUT_SPEEDS)
            .with_list_parse_key(EngineSettings::DRIVING_TEETH)
            .with_list_parse_key(EngineSettings::DRIVEN_TEETH)
    }

    /// Load from `gear-speed-conf.toml` in the working directory plus
    /// `GEAR_SPEED_*` environment overrides.
    ///
    /// Any failure to read or decode these sources falls back to the defaults.
    pub fn load() -> Result<Self> {
        let layered = EngineSettings::default_builder()?
            .add_source(config::File::with_name(EngineSettings::CONFIG_FILENAME).required(false))
            .add_source(EngineSettings::environment())
            .build()
            .and_then(|settings| settings.try_deserialize::<EngineSettings>());
        let settings = match layered {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                EngineSettings::default()
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Load from an explicit TOML file. Unlike [`EngineSettings::load`], a
    /// missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings: EngineSettings = EngineSettings::default_builder()?
            .add_source(config::File::from(path).format(FileFormat::Toml).required(true))
            .add_source(EngineSettings::environment())
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, values) in [(EngineSettings::INPUT_SPEEDS, &self.input_speeds),
                               (EngineSettings::DRIVING_TEETH, &self.driving_teeth),
                               (EngineSettings::DRIVEN_TEETH, &self.driven_teeth)] {
            if !all_positive_finite(values) {
                return Err(Error::new(ErrorKind::InvalidSettings,
                                      format!("every value in {} must be positive", name)));
            }
        }
        if !is_positive_finite(self.match_tolerance) {
            return Err(Error::new(ErrorKind::InvalidSettings,
                                  format!("{} must be positive, got {}", EngineSettings::MATCH_TOLERANCE, self.match_tolerance)));
        }
        if !self.tier_thresholds.is_ordered() {
            return Err(Error::new(ErrorKind::InvalidSettings,
                                  format!("high speed threshold {} is below medium threshold {}",
                                          self.tier_thresholds.high, self.tier_thresholds.medium)));
        }
        Ok(())
    }

    pub fn input_speeds(&self) -> &[f64] {
        &self.input_speeds
    }

    pub fn driving_teeth(&self) -> &[f64] {
        &self.driving_teeth
    }

    pub fn driven_teeth(&self) -> &[f64] {
        &self.driven_teeth
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn match_tolerance(&self) -> f64 {
        self.match_tolerance
    }

    pub fn tier_thresholds(&self) -> &TierThresholds {
        &self.tier_thresholds
    }

    pub fn generate_combinations(&self) -> Result<Vec<GearCombination>> {
        generate_combinations(&self.input_speeds, &self.driving_teeth, &self.driven_teeth, &self.tier_thresholds)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&self)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            input_speeds: DEFAULT_INPUT_SPEEDS.to_vec(),
            driving_teeth: DEFAULT_GEAR_SIZES.to_vec(),
            driven_teeth: DEFAULT_GEAR_SIZES.to_vec(),
            page_size: DEFAULT_PAGE_SIZE,
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
            tier_thresholds: TierThresholds::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use crate::error::ErrorKind;
    use crate::model::SpeedTier;
    use crate::settings::EngineSettings;

    fn write_conf(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("gear-speed-conf.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.input_speeds(), &[100.0, 200.0, 600.0]);
        assert_eq!(settings.driving_teeth().len(), 7);
        assert_eq!(settings.page_size().get(), 10);
        assert_eq!(settings.match_tolerance(), 0.1);
        assert_eq!(settings.tier_thresholds().high, 500.0);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.generate_combinations().unwrap().len(), 147);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "input_speeds = [50, 150]\npage_size = 5\n\n[tier_thresholds]\nhigh = 300.0\nmedium = 60.0\n");
        let settings = EngineSettings::load_from(&path).unwrap();
        assert_eq!(settings.input_speeds(), &[50.0, 150.0]);
        assert_eq!(settings.page_size().get(), 5);
        assert_eq!(settings.driven_teeth().len(), 7);
        assert_eq!(settings.match_tolerance(), 0.1);

        let data = settings.generate_combinations().unwrap();
        assert_eq!(data.len(), 2 * 7 * 7);
        // 150 * 80 / 36 = 333.3
        let combo = data.iter()
            .find(|c| c.input_speed() == 150.0 && c.driving_teeth() == 80.0 && c.driven_teeth() == 36.0)
            .unwrap();
        assert_eq!(combo.tier(), SpeedTier::High);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("written.toml");
        let settings = EngineSettings::default();
        settings.write(&path).unwrap();
        assert_eq!(EngineSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "driving_teeth = [12, 0, 24]\n");
        assert_eq!(EngineSettings::load_from(&path).unwrap_err().kind(), ErrorKind::InvalidSettings);

        let path = write_conf(&dir, "match_tolerance = -0.5\n");
        assert_eq!(EngineSettings::load_from(&path).unwrap_err().kind(), ErrorKind::InvalidSettings);

        let path = write_conf(&dir, "[tier_thresholds]\nhigh = 50.0\nmedium = 100.0\n");
        assert_eq!(EngineSettings::load_from(&path).unwrap_err().kind(), ErrorKind::InvalidSettings);

        let path = write_conf(&dir, "page_size = 0\n");
        assert_eq!(EngineSettings::load_from(&path).unwrap_err().kind(), ErrorKind::ConfigError);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = EngineSettings::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigError);
    }
}
