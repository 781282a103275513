//! TOML-based scenario configuration and preset definitions for the
//! CLI: a named trip (three locations plus cycle hours used) the
//! binary can plan without hand-typed coordinates.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::hos::types::{Location, PlanRequest};

/// A trip scenario parsed from TOML: three locations and the driver's
/// starting cycle hours.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub current_location: LocationConfig,
    #[serde(default)]
    pub pickup_location: LocationConfig,
    #[serde(default)]
    pub dropoff_location: LocationConfig,
    #[serde(default = "default_cycle_hours_used")]
    pub cycle_hours_used: u32,
}

fn default_cycle_hours_used() -> u32 {
    0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            label: "Unnamed".to_string(),
            lat: 0.0,
            lng: 0.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"cycle_hours_used"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// A short local trip: New York pickup run to New Jersey, well
    /// within all HOS limits for a single day.
    pub fn short_hop() -> Self {
        Self {
            current_location: LocationConfig {
                label: "New York, NY".to_string(),
                lat: 40.7128,
                lng: -74.0060,
            },
            pickup_location: LocationConfig {
                label: "Newark, NJ".to_string(),
                lat: 40.8,
                lng: -74.1,
            },
            dropoff_location: LocationConfig {
                label: "Jersey City, NJ".to_string(),
                lat: 40.9,
                lng: -74.2,
            },
            cycle_hours_used: 0,
        }
    }

    /// A coast-to-coast haul: New York to the Pacific Northwest,
    /// guaranteed to require multiple rests and at least one fuel stop.
    pub fn transcontinental() -> Self {
        Self {
            current_location: LocationConfig {
                label: "New York, NY".to_string(),
                lat: 40.7128,
                lng: -74.0060,
            },
            pickup_location: LocationConfig {
                label: "Seattle, WA".to_string(),
                lat: 47.6062,
                lng: -122.3321,
            },
            dropoff_location: LocationConfig {
                label: "Portland, OR".to_string(),
                lat: 45.5152,
                lng: -122.6784,
            },
            cycle_hours_used: 0,
        }
    }

    /// Same short trip as [`Self::short_hop`], but the driver starts
    /// with 69 of their 70 cycle hours already used — exercises the
    /// cycle-overrun warning path.
    pub fn near_cap_cycle() -> Self {
        Self {
            cycle_hours_used: 69,
            ..Self::short_hop()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["short_hop", "transcontinental", "near_cap_cycle"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "short_hop" => Ok(Self::short_hop()),
            "transcontinental" => Ok(Self::transcontinental()),
            "near_cap_cycle" => Ok(Self::near_cap_cycle()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, loc) in [
            ("current_location", &self.current_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ] {
            if !(-90.0..=90.0).contains(&loc.lat) {
                errors.push(ConfigError {
                    field: format!("{field}.lat"),
                    message: "must be in [-90, 90]".to_string(),
                });
            }
            if !(-180.0..=180.0).contains(&loc.lng) {
                errors.push(ConfigError {
                    field: format!("{field}.lng"),
                    message: "must be in [-180, 180]".to_string(),
                });
            }
        }

        if self.cycle_hours_used > 70 {
            errors.push(ConfigError {
                field: "cycle_hours_used".to_string(),
                message: "must be in [0, 70]".to_string(),
            });
        }

        errors
    }

    /// Converts a validated scenario into a [`PlanRequest`] ready for
    /// [`crate::hos::plan_trip`].
    pub fn into_plan_request(self) -> PlanRequest {
        PlanRequest {
            current: Location::new(self.current_location.label, self.current_location.lat, self.current_location.lng),
            pickup: Location::new(self.pickup_location.label, self.pickup_location.lat, self.pickup_location.lng),
            dropoff: Location::new(self.dropoff_location.label, self.dropoff_location.lat, self.dropoff_location.lng),
            cycle_hours_used: self.cycle_hours_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_are_loadable_and_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name).unwrap();
            assert!(cfg.validate().is_empty(), "preset {name} failed validation");
        }
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(ScenarioConfig::from_preset("nonexistent").is_err());
    }

    #[test]
    fn near_cap_cycle_starts_at_sixty_nine_hours() {
        let cfg = ScenarioConfig::near_cap_cycle();
        assert_eq!(cfg.cycle_hours_used, 69);
    }

    #[test]
    fn toml_round_trip_parses_minimal_scenario() {
        let toml_str = r#"
            cycle_hours_used = 5

            [current_location]
            label = "A"
            lat = 1.0
            lng = 2.0

            [pickup_location]
            label = "B"
            lat = 3.0
            lng = 4.0

            [dropoff_location]
            label = "C"
            lat = 5.0
            lng = 6.0
        "#;
        let cfg = ScenarioConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.cycle_hours_used, 5);
        assert_eq!(cfg.current_location.label, "A");
    }

    #[test]
    fn invalid_latitude_is_flagged_by_validate() {
        let mut cfg = ScenarioConfig::short_hop();
        cfg.current_location.lat = 500.0;
        let errors = cfg.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "current_location.lat");
    }

    #[test]
    fn unknown_field_in_toml_is_rejected() {
        let toml_str = r#"
            cycle_hours_used = 0
            bogus = true
        "#;
        assert!(ScenarioConfig::from_toml_str(toml_str).is_err());
    }
}
