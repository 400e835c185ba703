//! # Elevator bank
//!
//! A bank is the set of cars reached from the same landings. When a passenger presses a
//! landing button the bank asks every car for a bid and sends the cheapest one.
//!
//! The bank only relies on the [`Member`] capabilities of its cars, so any car type or
//! test double can be dispatched.

use crate::elevator::car::{Car, CarStatus, Direction};
use crate::error::SimError;

/// Capabilities a car needs to be a member of a [`Bank`].
pub trait Member {
    /// Cost of additionally serving a call at `floor` heading `direction`. Lower is better.
    fn score(&self, floor: usize, direction: Direction) -> i32;

    /// Requests a stop at `floor`, returning the full request set.
    fn call(&mut self, floor: usize) -> &[bool];

    /// Current floor
    fn floor(&self) -> usize;

    /// Current direction
    fn direction(&self) -> Direction;

    /// Current status
    fn status(&self) -> CarStatus;

    /// Number of floors the car can be called to
    fn num_floors(&self) -> usize;

    /// True when the car is loading with nothing left to serve and can leave in either direction.
    fn is_free(&self) -> bool {
        false
    }
}

impl Member for Car {
    fn score(&self, floor: usize, direction: Direction) -> i32 {
        Car::score(self, floor, direction)
    }

    fn call(&mut self, floor: usize) -> &[bool] {
        Car::call(self, floor)
    }

    fn floor(&self) -> usize {
        Car::floor(self)
    }

    fn direction(&self) -> Direction {
        Car::direction(self)
    }

    fn status(&self) -> CarStatus {
        Car::status(self)
    }

    fn num_floors(&self) -> usize {
        Car::num_floors(self)
    }

    fn is_free(&self) -> bool {
        Car::is_free(self)
    }
}

/// Status of a landing for one direction.
///
/// If any car is loading at the landing in the right direction, the status is `Loading`.
/// If a call has been made but no car has arrived yet, the status is `Waiting`.
/// Otherwise the status is `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingStatus {
    /// No unserved call at the landing. Only the landing itself can know this.
    Idle,
    /// A call has been made but no car has arrived yet.
    Waiting,
    /// A car is loading at the landing.
    Loading,
}

/// A collection of cars accessed from the same landings.
#[derive(Debug, Clone)]
pub struct Bank<M = Car> {
    cars: Vec<M>,
    num_floors: usize,
}

impl<M: Member> Bank<M> {
    /// Creates a bank of `cars` serving `num_floors` floors.
    ///
    /// ## Errors
    /// [`SimError::EmptyBank`] when `cars` is empty, [`SimError::NoFloors`] when `num_floors` is 0,
    /// [`SimError::FloorMismatch`] when a car serves a different number of floors.
    pub fn new(num_floors: usize, cars: Vec<M>) -> Result<Self, SimError> {
        if cars.is_empty() {
            return Err(SimError::EmptyBank);
        }
        if num_floors == 0 {
            return Err(SimError::NoFloors);
        }
        let mismatch = cars.iter().enumerate().find(|(_, c)| c.num_floors() != num_floors);
        if let Some((car, member)) = mismatch {
            return Err(SimError::FloorMismatch {
                car,
                car_floors: member.num_floors(),
                num_floors,
            });
        }
        Ok(Bank { cars, num_floors })
    }

    /// Dispatches a car to a landing call at `floor` heading `direction`.
    ///
    /// Every car is scored, the lowest score wins and ties go to the lowest index.
    /// The winning car is called to `floor` before its index is returned.
    pub fn call(&mut self, floor: usize, direction: Direction) -> usize {
        let mut car_index = 0;
        let mut lowest_score = i32::MAX;

        for (i, car) in self.cars.iter().enumerate() {
            let score = car.score(floor, direction);
            if score < lowest_score {
                lowest_score = score;
                car_index = i;
            }
        }

        log::debug!(
            "landing call at floor {} {:?} dispatched to car {} (score {})",
            floor,
            direction,
            car_index,
            lowest_score
        );
        self.cars[car_index].call(floor);

        car_index
    }

    /// Status of the landing at `floor` for `direction`, and the car loading there if any.
    ///
    /// A car counts when it is at `floor`, [`CarStatus::Loading`], and either heading `direction`
    /// or free to go both ways. The first such car is reported.
    pub fn status(&self, floor: usize, direction: Direction) -> (LandingStatus, Option<usize>) {
        let loading = self.cars.iter().position(|c| {
            c.floor() == floor
                && c.status() == CarStatus::Loading
                && (c.direction() == direction || c.is_free())
        });

        match loading {
            Some(i) => (LandingStatus::Loading, Some(i)),
            None => (LandingStatus::Waiting, None),
        }
    }

    /// The car at `index`.
    ///
    /// # Panics
    /// If `index` is not a car in this bank.
    pub fn car(&self, index: usize) -> &M {
        &self.cars[index]
    }

    /// Mutable access to the car at `index`.
    ///
    /// # Panics
    /// If `index` is not a car in this bank.
    pub fn car_mut(&mut self, index: usize) -> &mut M {
        &mut self.cars[index]
    }

    /// All cars, in dispatch order
    pub fn cars(&self) -> &[M] {
        &self.cars
    }

    /// Number of cars. Never 0.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Always false, a bank has at least one car.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Number of floors served
    pub fn num_floors(&self) -> usize {
        self.num_floors
    }
}

impl Bank<Car> {
    /// Advances every car one step, in order.
    pub fn tick(&mut self) {
        for car in self.cars.iter_mut() {
            car.tick();
        }
    }
}
