//! Errors raised while building a simulation.
//!
//! Every error here is a construction or configuration error. Once a [crate::simulation::Simulation]
//! is built, ticking it cannot fail. Out-of-range floors passed to a car at runtime are programming
//! errors and panic instead.

use thiserror::Error;

#[allow(missing_docs)]
/// Errors from constructing banks, cars, shifts and simulations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("elevator: a bank requires a non-empty set of cars")]
    EmptyBank,

    #[error("a building needs at least one floor")]
    NoFloors,

    #[error("car {car} serves {car_floors} floors but the bank has {num_floors}")]
    FloorMismatch { car: usize, car_floors: usize, num_floors: usize },

    #[error("floor {floor} is outside the building (0..{num_floors})")]
    InvalidFloor { floor: usize, num_floors: usize },

    #[error("unknown shift preset `{0}`")]
    UnknownShift(String),

    #[error("shift duration must be positive, got {0} minutes")]
    InvalidShift(i64),

    #[error("simulated time step must be positive, got {0} minutes")]
    InvalidStep(i64),
}

/// Checks that `floor` exists in a building with `num_floors` floors.
pub fn check_floor(floor: usize, num_floors: usize) -> Result<(), SimError> {
    if floor < num_floors {
        Ok(())
    } else {
        Err(SimError::InvalidFloor { floor, num_floors })
    }
}
