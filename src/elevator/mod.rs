//! # Elevator Module
//!
//! The cars and the bank that dispatches landing calls between them.
//!
//! - [`car`]: A single car, its SCAN motion and its bid for new calls.
//! - [`bank`]: The dispatcher, picking the cheapest car for a landing call and reporting landing status.

/// A single elevator car.
pub mod car;

/// The bank of cars sharing the same landings.
pub mod bank;

pub use bank::{Bank, LandingStatus, Member};
pub use car::{Car, CarSettings, CarStatus, Direction};
