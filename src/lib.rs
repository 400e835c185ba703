#![warn(missing_docs)]
//! # This projects library
//!
//! This library simulates a bank of elevator cars serving passengers in one building, advancing in discrete ticks.
//!
//! ## Overview
//! - **config**: Global parameters and the building configuration.
//! - **error**: Construction and configuration errors.
//! - **init**: Argument parsing and building the simulation.
//! - **print**: Colour coded terminal output.
//! - **elevator**: The cars (SCAN motion and bidding) and the bank dispatching landing calls to them.
//! - **passenger**: Shift schedules and the passenger demand state machine.
//! - **simulation**: The driver advancing cars, then passengers, once per tick.

pub mod config;

pub mod error;

pub mod init;

pub mod print;

pub mod elevator;

pub mod passenger;

pub mod simulation;
