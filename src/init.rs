//! Start-up: command line arguments and building the simulation.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::config::{self, SimConfig};
use crate::print;
use crate::simulation::Simulation;

/// Command line arguments of the simulator.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "simuvator", about = "Simulates a bank of elevator cars serving passengers")]
pub struct Args {
    /// JSON file describing the building, cars and passengers
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of ticks to run, 0 runs forever
    #[arg(short, long, default_value_t = 0)]
    pub ticks: u64,

    /// Wall-clock milliseconds between ticks
    #[arg(short, long, default_value_t = config::TICK_PERIOD.as_millis() as u64)]
    pub period_ms: u64,

    /// Do not print the state table every tick
    #[arg(short, long)]
    pub quiet: bool,

    /// Only print errors
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Wall-clock time between ticks
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms.max(1))
    }
}

fn set_flag(flag: &Mutex<bool>, value: bool) {
    if let Ok(mut on) = flag.lock() {
        *on = value;
    }
}

/// Parses the command line and applies the print toggles.
pub fn parse_args() -> Args {
    let args = Args::parse();
    apply_print_flags(&args);
    if args.period_ms == 0 {
        print::warn("A period of 0 ms is not allowed, using 1 ms".to_string());
    }
    args
}

/// Turns the print toggles in [config] on or off from `args`.
pub fn apply_print_flags(args: &Args) {
    if args.quiet {
        set_flag(&config::PRINT_SIM_ON, false);
    }
    // Debug mode: only error messages
    if args.debug {
        set_flag(&config::PRINT_SIM_ON, false);
        set_flag(&config::PRINT_WARN_ON, false);
        set_flag(&config::PRINT_OK_ON, false);
        set_flag(&config::PRINT_INFO_ON, false);
    }
}

/// Reads the configuration named in `args`, or the built-in building.
pub fn load_config(args: &Args) -> anyhow::Result<SimConfig> {
    match &args.config {
        Some(path) => {
            print::info(format!("Reading building from {}", path.display()));
            SimConfig::load(path)
        }
        None => {
            print::info("No config file given, using the built-in building".to_string());
            Ok(SimConfig::default())
        }
    }
}

/// Builds the simulation described by `args`.
pub fn build_simulation(args: &Args) -> anyhow::Result<Simulation> {
    let config = load_config(args)?;
    let sim = Simulation::from_config(&config).context("could not build the simulation")?;
    print::ok(format!(
        "Built {} floors, {} cars and {} passengers",
        sim.bank().num_floors(),
        sim.bank().len(),
        sim.passengers().len()
    ));
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["simuvator"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.ticks, 0);
        assert_eq!(args.period(), config::TICK_PERIOD);
        assert!(!args.quiet);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "simuvator",
            "--config",
            "building.json",
            "--ticks",
            "60",
            "--period-ms",
            "10",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("building.json")));
        assert_eq!(args.ticks, 60);
        assert_eq!(args.period(), Duration::from_millis(10));
        assert!(args.quiet);
    }

    #[test]
    fn builds_default_building() {
        let args = Args::try_parse_from(["simuvator"]).unwrap();
        let sim = build_simulation(&args).unwrap();
        assert_eq!(sim.bank().len(), config::DEFAULT_NUM_CARS);
        assert_eq!(sim.passengers().len(), 1);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["simuvator", "--config", "/does/not/exist.json"]).unwrap();
        assert!(build_simulation(&args).is_err());
    }
}
