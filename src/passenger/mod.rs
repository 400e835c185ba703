//! # Passenger Module
//!
//! A passenger is both a demand generator and a rider. Once per tick it looks at its shift,
//! its own state and the car it is waiting for or riding, and moves through
//! [`PassengerStatus`]:
//!
//! - `Idle` → `WaitingUp`/`WaitingDown` when the shift starts and it is away from its primary floor.
//! - `Active` → `WaitingUp`/`WaitingDown` when the shift ends and it is away from the ground floor.
//! - `WaitingUp`/`WaitingDown` → `Riding` when a car is loading at its floor in the right direction.
//! - `Riding` → `Active`/`Idle` when the car is loading at the destination.
//! - `Idle` → `Active` and `Active` → `Idle` directly when no ride is needed.
//!
//! Only one transition fires per tick. The passenger never owns a car, it only remembers the
//! index of the car it boarded in the bank and lets go of it when it gets off.

/// Shift schedules
pub mod shift;

mod status;

pub use shift::Shift;
pub use status::PassengerStatus;

use chrono::NaiveDateTime;

use crate::config;
use crate::elevator::{Bank, CarStatus, Direction, LandingStatus, Member};
use crate::error::{check_floor, SimError};

/// Initial state of a [`Passenger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerSettings {
    /// The floor the passenger works on. Default: 0
    pub primary_floor: usize,
    /// Starting floor. Default: 0
    pub floor: usize,
    /// Starting status. Default: [`PassengerStatus::Idle`]
    pub status: PassengerStatus,
    /// Working schedule. Default: [`shift::DEFAULT_SHIFT`]
    pub shift: Shift,
}

impl Default for PassengerSettings {
    fn default() -> Self {
        Self {
            primary_floor: 0,
            floor: 0,
            status: PassengerStatus::Idle,
            shift: Shift::default(),
        }
    }
}

impl PassengerSettings {
    /// Checks the primary and starting floors against the building.
    pub fn validate(&self, num_floors: usize) -> Result<(), SimError> {
        check_floor(self.primary_floor, num_floors)?;
        check_floor(self.floor, num_floors)
    }
}

/// A person who rides the elevators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    primary_floor: usize,
    shift: Shift,
    floor: usize,
    status: PassengerStatus,
    dest_floor: usize,
    car: Option<usize>,
}

impl Passenger {
    /// Creates a passenger from `settings`.
    pub fn new(settings: PassengerSettings) -> Passenger {
        Passenger {
            primary_floor: settings.primary_floor,
            shift: settings.shift,
            floor: settings.floor,
            status: settings.status,
            dest_floor: settings.floor,
            car: None,
        }
    }

    /// Current floor. Follows the car while riding.
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Current status
    pub fn status(&self) -> PassengerStatus {
        self.status
    }

    /// The floor the passenger works on
    pub fn primary_floor(&self) -> usize {
        self.primary_floor
    }

    /// Destination of the current trip. Only meaningful while waiting or riding.
    pub fn dest_floor(&self) -> usize {
        self.dest_floor
    }

    /// Index of the car being ridden, if any
    pub fn assigned_car(&self) -> Option<usize> {
        self.car
    }

    /// Working schedule
    pub fn shift(&self) -> &Shift {
        &self.shift
    }

    /// Evaluates the passenger once for `sim_time`.
    ///
    /// Must run after every car has ticked for the same instant. Calls placed here are picked
    /// up by the cars on the next tick.
    pub fn tick<M: Member>(&mut self, bank: &mut Bank<M>, sim_time: NaiveDateTime) {
        let in_shift = self.shift.is_in_shift(sim_time);

        match self.status {
            // coming to work
            PassengerStatus::Idle if in_shift && self.floor != self.primary_floor => {
                self.call(bank, self.primary_floor);
            }
            // already there, no ride needed
            PassengerStatus::Idle if in_shift => {
                self.status = PassengerStatus::Active;
            }
            // done for the day
            PassengerStatus::Active if !in_shift && self.floor != config::GROUND_FLOOR => {
                self.call(bank, config::GROUND_FLOOR);
            }
            PassengerStatus::Active if !in_shift => {
                self.status = PassengerStatus::Idle;
            }
            PassengerStatus::WaitingUp | PassengerStatus::WaitingDown => {
                self.board(bank);
            }
            PassengerStatus::Riding => {
                self.ride(bank, in_shift);
            }
            _ => {}
        }
    }

    fn call<M: Member>(&mut self, bank: &mut Bank<M>, dest: usize) {
        self.dest_floor = dest;
        let direction = Direction::toward(self.floor, dest);

        let car = bank.call(self.floor, direction);
        self.status = match direction {
            Direction::Up => PassengerStatus::WaitingUp,
            Direction::Down => PassengerStatus::WaitingDown,
        };
        log::debug!(
            "passenger on floor {} called {:?} toward {}, car {} answering",
            self.floor, direction, dest, car
        );
    }

    fn board<M: Member>(&mut self, bank: &mut Bank<M>) {
        // a car may be loading here but headed the wrong way, so ask for our direction only
        let direction = match self.status {
            PassengerStatus::WaitingUp => Direction::Up,
            _ => Direction::Down,
        };

        if let (LandingStatus::Loading, Some(index)) = bank.status(self.floor, direction) {
            self.status = PassengerStatus::Riding;
            self.car = Some(index);
            bank.car_mut(index).call(self.dest_floor);
            log::debug!(
                "passenger boarded car {} on floor {} for {}",
                index,
                self.floor,
                self.dest_floor
            );
        }
    }

    fn ride<M: Member>(&mut self, bank: &Bank<M>, in_shift: bool) {
        let Some(index) = self.car else {
            return;
        };
        let car = bank.car(index);
        self.floor = car.floor();

        if car.floor() == self.dest_floor && car.status() == CarStatus::Loading {
            self.car = None;
            self.status = if in_shift { PassengerStatus::Active } else { PassengerStatus::Idle };
            log::debug!(
                "passenger left car {} on floor {}, now {:?}",
                index,
                self.floor,
                self.status
            );
        }
    }
}
