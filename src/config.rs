//! # config.rs – Centralized Parameter Store
//!
//! This module holds the static program parameters used throughout the simulation, and the
//! building description ([`SimConfig`]) the binary reads from a JSON file.
//! Keeping configuration in one place makes tuning, experimentation, and testing easier.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::elevator::CarSettings;
use crate::error::SimError;
use crate::passenger::{PassengerSettings, PassengerStatus, Shift};

//
// ──────────────────────────────────────────────────────────────
//   1. BUILDING & ELEVATOR PARAMETERS
// ──────────────────────────────────────────────────────────────
//

/// Default number of floors in the building
pub const DEFAULT_NUM_FLOORS: usize = 5;

/// Default number of cars in the bank
pub const DEFAULT_NUM_CARS: usize = 3;

/// Default primary floor of the built-in passenger
pub const DEFAULT_PRIMARY_FLOOR: usize = 3;

/// Floor passengers return to when their shift ends
pub const GROUND_FLOOR: usize = 0;

/// Score added per pending stop when a car bids for a call
pub const STOP_PENALTY: i32 = 5;

//
// ──────────────────────────────────────────────────────────────
//   2. TIMING
// ──────────────────────────────────────────────────────────────
//

/// Wall-clock time between ticks in the binary
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Simulated minutes per tick
pub const MINUTES_PER_TICK: i64 = 1;

//
// ──────────────────────────────────────────────────────────────
//   3. LOGGING CONFIGURATION
// ──────────────────────────────────────────────────────────────
//

/// Enable/disable printing of the simulation state table
pub static PRINT_SIM_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of errors
pub static PRINT_ERR_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of warnings
pub static PRINT_WARN_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of success messages
pub static PRINT_OK_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of general info
pub static PRINT_INFO_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

//
// ──────────────────────────────────────────────────────────────
//   4. BUILDING DESCRIPTION
// ──────────────────────────────────────────────────────────────
//

/// A passenger's shift in the configuration file: a preset name or a custom window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ShiftConfig {
    /// One of `default`, `early`, `late`, `night`, `weekend`
    Preset(String),
    /// A custom shift
    Custom {
        /// Time of day the shift begins, e.g. `"19:00:00"`
        begin: NaiveTime,
        /// Length of the shift in minutes
        duration_minutes: i64,
        /// Days the shift begins on, e.g. `["Mon", "Tue"]`
        days: Vec<Weekday>,
    },
}

impl Default for ShiftConfig {
    fn default() -> Self {
        ShiftConfig::Preset("default".to_string())
    }
}

impl ShiftConfig {
    /// Resolves the configured shift.
    pub fn to_shift(&self) -> Result<Shift, SimError> {
        match self {
            ShiftConfig::Preset(name) => Shift::preset(name),
            ShiftConfig::Custom { begin, duration_minutes, days } => {
                let duration = TimeDelta::try_minutes(*duration_minutes)
                    .ok_or(SimError::InvalidShift(*duration_minutes))?;
                Shift::new(*begin, duration, days.clone())
            }
        }
    }
}

/// A passenger in the configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PassengerConfig {
    /// The floor the passenger works on
    pub primary_floor: usize,
    /// Starting floor
    pub floor: usize,
    /// Starting status
    pub status: PassengerStatus,
    /// Working schedule
    pub shift: ShiftConfig,
}

impl Default for PassengerConfig {
    fn default() -> Self {
        Self {
            primary_floor: 0,
            floor: 0,
            status: PassengerStatus::Idle,
            shift: ShiftConfig::default(),
        }
    }
}

impl PassengerConfig {
    /// Resolves the shift and checks the floors against the building.
    pub fn to_settings(&self, num_floors: usize) -> Result<PassengerSettings, SimError> {
        let settings = PassengerSettings {
            primary_floor: self.primary_floor,
            floor: self.floor,
            status: self.status,
            shift: self.shift.to_shift()?,
        };
        settings.validate(num_floors)?;
        Ok(settings)
    }
}

/// Description of the building and everyone in it.
///
/// Missing fields fall back to the built-in building: 5 floors, 3 cars parked on the ground
/// floor, one office worker on floor 3, starting Monday 2024-11-18 at midnight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimConfig {
    /// Number of floors, shared by every car
    pub num_floors: usize,
    /// Initial state of each car, in dispatch order
    pub cars: Vec<CarSettings>,
    /// Initial state of each passenger
    pub passengers: Vec<PassengerConfig>,
    /// Simulated time of the first tick
    pub start: NaiveDateTime,
    /// Simulated minutes per tick
    pub minutes_per_tick: i64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_floors: DEFAULT_NUM_FLOORS,
            cars: vec![CarSettings::default(); DEFAULT_NUM_CARS],
            passengers: vec![PassengerConfig {
                primary_floor: DEFAULT_PRIMARY_FLOOR,
                ..PassengerConfig::default()
            }],
            start: default_start(),
            minutes_per_tick: MINUTES_PER_TICK,
        }
    }
}

fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 18)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN)
}

impl SimConfig {
    /// Reads a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<SimConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        SimConfig::from_json(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> anyhow::Result<SimConfig> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every floor against the building and resolves every shift.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_floors == 0 {
            return Err(SimError::NoFloors);
        }
        if self.cars.is_empty() {
            return Err(SimError::EmptyBank);
        }
        if self.minutes_per_tick <= 0 {
            return Err(SimError::InvalidStep(self.minutes_per_tick));
        }
        for car in &self.cars {
            car.validate(self.num_floors)?;
        }
        for passenger in &self.passengers {
            passenger.to_settings(self.num_floors)?;
        }
        Ok(())
    }
}
