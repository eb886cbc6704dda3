//! Configuration management for ridefare
//!
//! Config stored at: ~/.config/ridefare/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ridefare_domain::model::PricingConfig;
use ridefare_infra::distance_csv::load_fallback_distances;
use ridefare_infra::PricingLoader;
use ridefare_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for bookings/users/admin JSON files
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Pricing tables override (TOML); built-in tables when unset
    #[serde(default)]
    pub pricing_file: Option<PathBuf>,

    /// Extra fallback distances (CSV), consulted after the pricing tables' own
    #[serde(default)]
    pub fallback_csv: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Vehicle preselected when a request names none
    #[serde(default)]
    pub default_vehicle: Option<String>,

    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_city() -> String {
    "Ahmedabad".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            pricing_file: None,
            fallback_csv: None,
            output_format: default_output_format(),
            default_vehicle: None,
            default_city: default_city(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ridefare");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ridefare");
        Ok(data_dir)
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Pricing tables from `pricing_file`, or the built-in ones, with the
    /// `fallback_csv` entries appended to the fallback distance table.
    ///
    /// `default_vehicle` overrides the tables' own default when it names a
    /// known vehicle.
    pub fn pricing(&self) -> Result<PricingConfig> {
        let mut pricing = match self.pricing_file {
            Some(ref path) => PricingLoader::load_from_file(path)?,
            None => PricingLoader::load_default()?,
        };

        if let Some(ref path) = self.fallback_csv {
            let entries = load_fallback_distances(path)?;
            tracing::info!(path = %path.display(), count = entries.len(), "fallback distances loaded");
            pricing.fallback_distances.extend(entries);
        }

        if let Some(ref vehicle) = self.default_vehicle {
            if !pricing.tariffs.contains(vehicle) {
                return Err(ConfigError::Invalid(format!(
                    "default vehicle '{}' is not in the tariff table",
                    vehicle
                ))
                .into());
            }
            pricing.default_vehicle = vehicle.clone();
        }
        Ok(pricing)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ridefare Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:       {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Pricing file:    {}",
            self.pricing_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Fallback CSV:    {}",
            self.fallback_csv
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(
            f,
            "Default vehicle: {}",
            self.default_vehicle.as_deref().unwrap_or("(from tables)")
        )?;
        writeln!(f, "Default city:    {}", self.default_city)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridefare_types::Error;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_city, "Ahmedabad");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            store_dir: Some(dir.path().join("store")),
            output_format: OutputFormat::Json,
            default_vehicle: Some("auto".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_store_dir_override() {
        let config = Config {
            store_dir: Some(PathBuf::from("/tmp/ridefare-test")),
            ..Config::default()
        };
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/tmp/ridefare-test"));
    }

    #[test]
    fn test_pricing_default_vehicle_override() {
        let config = Config {
            default_vehicle: Some("bike".to_string()),
            ..Config::default()
        };
        assert_eq!(config.pricing().unwrap().default_vehicle, "bike");

        let bad = Config {
            default_vehicle: Some("jet".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            bad.pricing().unwrap_err(),
            Error::Config(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_fallback_csv_appended() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("distances.csv");
        std::fs::write(
            &csv_path,
            "origin,destination,distance_km\nSector 17,Sector 43,10\n",
        )
        .unwrap();

        let builtin = Config::default().pricing().unwrap();
        let config = Config {
            fallback_csv: Some(csv_path),
            ..Config::default()
        };
        let pricing = config.pricing().unwrap();

        let entries = pricing.fallback_distances.entries();
        assert_eq!(entries.len(), builtin.fallback_distances.entries().len() + 1);
        let last = entries.last().unwrap();
        assert_eq!(last.origin, "Sector 17");
        assert_eq!(last.distance_km, 10.0);
    }

    #[test]
    fn test_missing_fallback_csv() {
        let config = Config {
            fallback_csv: Some(PathBuf::from("/nonexistent/ridefare/distances.csv")),
            ..Config::default()
        };
        assert!(config.pricing().is_err());
    }
}
