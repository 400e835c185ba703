//! # Simulation driver
//!
//! Owns the bank and every passenger and advances them in lockstep with simulated time.
//! Each tick moves every car first and only then lets the passengers look around, so a
//! passenger always reacts to where the cars are after they moved.

use chrono::{NaiveDateTime, TimeDelta};

use crate::config::SimConfig;
use crate::elevator::{Bank, Car};
use crate::error::SimError;
use crate::passenger::Passenger;

/// A bank of cars and the passengers using it.
#[derive(Debug, Clone)]
pub struct Simulation {
    bank: Bank<Car>,
    passengers: Vec<Passenger>,
    time: NaiveDateTime,
    step: TimeDelta,
    ticks: u64,
}

impl Simulation {
    /// Creates a simulation starting at `start`, advancing `step` per tick.
    ///
    /// ## Errors
    /// [`SimError::InvalidStep`] if `step` is not positive.
    pub fn new(
        bank: Bank<Car>,
        passengers: Vec<Passenger>,
        start: NaiveDateTime,
        step: TimeDelta,
    ) -> Result<Simulation, SimError> {
        if step <= TimeDelta::zero() {
            return Err(SimError::InvalidStep(step.num_minutes()));
        }
        Ok(Simulation { bank, passengers, time: start, step, ticks: 0 })
    }

    /// Builds the bank and passengers described by `config`.
    pub fn from_config(config: &SimConfig) -> Result<Simulation, SimError> {
        config.validate()?;

        let cars: Vec<Car> = config
            .cars
            .iter()
            .map(|settings| Car::new(config.num_floors, settings.clone()))
            .collect();
        let bank = Bank::new(config.num_floors, cars)?;

        let passengers = config
            .passengers
            .iter()
            .map(|p| p.to_settings(config.num_floors).map(Passenger::new))
            .collect::<Result<Vec<_>, _>>()?;

        let step = TimeDelta::try_minutes(config.minutes_per_tick)
            .ok_or(SimError::InvalidStep(config.minutes_per_tick))?;
        Simulation::new(bank, passengers, config.start, step)
    }

    /// Advances simulated time by one step, then ticks every car, then every passenger.
    pub fn tick(&mut self) {
        self.time += self.step;
        self.ticks += 1;

        self.bank.tick();
        for passenger in self.passengers.iter_mut() {
            passenger.tick(&mut self.bank, self.time);
        }
        log::trace!("tick {} at {}", self.ticks, self.time);
    }

    /// Runs `ticks` ticks.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Current simulated time
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Number of ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The bank
    pub fn bank(&self) -> &Bank<Car> {
        &self.bank
    }

    /// Mutable access to the bank, e.g. to press buttons by hand
    pub fn bank_mut(&mut self) -> &mut Bank<Car> {
        &mut self.bank
    }

    /// All passengers
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }
}
