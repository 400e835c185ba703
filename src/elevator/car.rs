//! # Elevator car
//!
//! A single car in a bank. The car owns its pending floor requests, its position,
//! its direction of travel and its status, and moves at most one floor per tick.
//!
//! # Overview
//! - **Target selection (SCAN)**: keep serving requests in the current direction,
//!   and only turn around once nothing is left that way.
//! - **Direction hysteresis**: the direction only flips when the target lies strictly
//!   on the other side of the car.
//! - **Arrival**: when the car reaches its target the request is cleared and the next
//!   target and direction are derived in the same tick, without moving again.
//! - **Bidding**: [`Car::score`] estimates the cost of also serving a landing call,
//!   used by [`crate::elevator::bank::Bank`] to pick a car.
//!
//! # Status
//! After each tick the car is [`CarStatus::Loading`] if it cleared a request at its
//! current floor, [`CarStatus::Traveling`] if it moved without stopping, and
//! [`CarStatus::Parked`] otherwise.

use serde::{Deserialize, Serialize};

use crate::config;

/// Direction a car is taking calls in.
///
/// Ordered so that the greater direction points to greater floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards floor 0
    Down,
    /// Towards the top floor
    Up,
}

impl Direction {
    /// Direction to travel from `from` to reach `to`. `Down` when the floors are equal.
    pub fn toward(from: usize, to: usize) -> Direction {
        if from < to {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Status of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarStatus {
    /// Standing still with nothing to do
    Parked,
    /// Stopped at a floor with doors open, passengers may board or leave this tick
    Loading,
    /// Moving between floors
    Traveling,
}

/// Initial state of a [`Car`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarSettings {
    /// Starting floor. Default: 0
    pub floor: usize,
    /// Starting direction. Default: [`Direction::Up`]
    pub direction: Direction,
    /// Starting status. Default: [`CarStatus::Parked`]
    pub status: CarStatus,
    /// Floors already requested. Default: none
    pub calls: Vec<usize>,
}

impl Default for CarSettings {
    fn default() -> Self {
        Self {
            floor: 0,
            direction: Direction::Up,
            status: CarStatus::Parked,
            calls: Vec::new(),
        }
    }
}

/// An elevator car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    requests: Vec<bool>,
    floor: usize,
    direction: Direction,
    status: CarStatus,
}

impl Car {
    /// Creates a car in a building with `num_floors` floors.
    ///
    /// # Panics
    /// If `num_floors` is 0, or the starting floor or any starting call is outside the building.
    /// Validate untrusted settings with [`CarSettings::validate`] first.
    pub fn new(num_floors: usize, settings: CarSettings) -> Car {
        assert!(num_floors > 0, "a car needs at least one floor");
        if let Err(e) = settings.validate(num_floors) {
            panic!("invalid car settings: {e}");
        }

        let mut requests = vec![false; num_floors];
        for floor in settings.calls {
            requests[floor] = true;
        }

        Car {
            requests,
            floor: settings.floor,
            direction: settings.direction,
            status: settings.status,
        }
    }

    /// Current floor
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current status
    pub fn status(&self) -> CarStatus {
        self.status
    }

    /// Number of floors the car serves
    pub fn num_floors(&self) -> usize {
        self.requests.len()
    }

    /// Pending requested floors, lowest first.
    pub fn calls(&self) -> Vec<usize> {
        self.requests
            .iter()
            .enumerate()
            .filter_map(|(floor, &called)| called.then_some(floor))
            .collect()
    }

    /// Requests the car to stop at `floor` and returns the full request set.
    ///
    /// Calling a floor that is already requested changes nothing.
    ///
    /// # Panics
    /// If `floor` is outside the building.
    pub fn call(&mut self, floor: usize) -> &[bool] {
        self.assert_floor(floor);
        self.requests[floor] = true;
        &self.requests
    }

    /// Advances the car one step.
    ///
    /// ## Behavior
    /// - Picks the target with SCAN, updates the direction and moves one floor toward it.
    /// - If the car is now at the target, the request there is cleared and the next target
    ///   is used to update the direction. The car does not move again this tick.
    /// - With no pending requests, floor and direction are left untouched.
    pub fn tick(&mut self) {
        let target = self.target_floor();

        self.update_direction(target);
        let moved = self.update_floor(target);
        self.status = if moved { CarStatus::Traveling } else { CarStatus::Parked };

        if target == self.floor {
            if self.requests[target] {
                self.requests[target] = false;
                self.status = CarStatus::Loading;
                log::debug!("car stopped at floor {} heading {:?}", self.floor, self.direction);
            }

            let next = self.target_floor();
            self.update_direction(next);
        }
    }

    /// Cost for this car to additionally serve a landing call at `floor`.
    ///
    /// `score = distance + STOP_PENALTY * pending stops`, where the distance includes the detour
    /// to the farthest pending stop when the call lies behind the car. Lower is better.
    /// The requested direction does not change the score.
    ///
    /// # Panics
    /// If `floor` is outside the building.
    pub fn score(&self, floor: usize, _direction: Direction) -> i32 {
        self.assert_floor(floor);
        let distance = self.distance(floor) as i32;
        let stops = self.count_stops() as i32;

        distance + stops * config::STOP_PENALTY
    }

    /// True when the car is stopped with its doors open and nothing left to serve,
    /// so it may leave in either direction.
    pub fn is_free(&self) -> bool {
        self.status == CarStatus::Loading && !self.requests.iter().any(|&r| r)
    }

    fn assert_floor(&self, floor: usize) {
        assert!(
            floor < self.requests.len(),
            "floor {} is outside the building (0..{})",
            floor,
            self.requests.len()
        );
    }

    fn update_floor(&mut self, target: usize) -> bool {
        if target > self.floor {
            self.floor += 1;
            true
        } else if target < self.floor {
            self.floor -= 1;
            true
        } else {
            false
        }
    }

    fn update_direction(&mut self, target: usize) {
        match self.direction {
            Direction::Up if target < self.floor => self.direction = Direction::Down,
            Direction::Down if target > self.floor => self.direction = Direction::Up,
            _ => {}
        }
    }

    fn target_floor(&self) -> usize {
        let (first, second) = match self.direction {
            Direction::Up => (self.next_up_call(), self.next_down_call()),
            Direction::Down => (self.next_down_call(), self.next_up_call()),
        };

        first.or(second).unwrap_or(self.floor)
    }

    /// Nearest request at or below the current floor
    fn next_down_call(&self) -> Option<usize> {
        (0..=self.floor).rev().find(|&f| self.requests[f])
    }

    /// Nearest request at or above the current floor
    fn next_up_call(&self) -> Option<usize> {
        (self.floor..self.requests.len()).find(|&f| self.requests[f])
    }

    fn count_stops(&self) -> usize {
        self.requests.iter().filter(|&&r| r).count()
    }

    fn distance(&self, floor: usize) -> usize {
        if floor < self.floor {
            let detour = match self.direction {
                Direction::Up => (self.top_stop() - self.floor) * 2,
                Direction::Down => 0,
            };
            detour + self.floor - floor
        } else if floor > self.floor {
            let detour = match self.direction {
                Direction::Down => (self.floor - self.bottom_stop()) * 2,
                Direction::Up => 0,
            };
            detour + floor - self.floor
        } else {
            0
        }
    }

    // Falls back to the bottom floor when nothing is requested
    fn bottom_stop(&self) -> usize {
        self.requests.iter().position(|&r| r).unwrap_or(0)
    }

    // Falls back to the top floor when nothing is requested
    fn top_stop(&self) -> usize {
        self.requests
            .iter()
            .rposition(|&r| r)
            .unwrap_or(self.requests.len() - 1)
    }
}

impl CarSettings {
    /// Checks the starting floor and starting calls against the building.
    pub fn validate(&self, num_floors: usize) -> Result<(), crate::error::SimError> {
        crate::error::check_floor(self.floor, num_floors)?;
        for &floor in &self.calls {
            crate::error::check_floor(floor, num_floors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(floor: usize, direction: Direction, calls: &[usize]) -> Car {
        Car::new(
            5,
            CarSettings {
                floor,
                direction,
                status: CarStatus::Parked,
                calls: calls.to_vec(),
            },
        )
    }

    #[test]
    fn score_matches_distance_plus_stop_penalty() {
        // (name, calls, floor, direction, call floor, expected score)
        let cases: [(&str, &[usize], usize, Direction, usize, i32); 8] = [
            // 0 -> 1
            ("idle on ground, call to 1", &[], 0, Direction::Up, 1, 1),
            // 0 -> 1 -> 2
            ("idle on ground, call to 2", &[], 0, Direction::Up, 2, 2),
            // 0 -> 3 is 3 floors, plus one stop on 2
            ("2 pending, call to 3", &[2], 0, Direction::Up, 3, 8),
            // 2 -> 4 -> 0 is 6 floors, plus one stop on 4
            ("going up to 4, call behind to 0", &[4], 2, Direction::Up, 0, 11),
            // 2 -> 0 -> 4 is 6 floors, plus one stop on 0
            ("going down to 0, call behind to 4", &[0], 2, Direction::Down, 4, 11),
            ("call at current floor", &[], 2, Direction::Down, 2, 0),
            // no stops pending, so the detour runs to the top floor
            ("idle going up, call below", &[], 2, Direction::Up, 1, 5),
            ("idle going down, call above", &[], 3, Direction::Down, 4, 7),
        ];

        for (name, calls, floor, direction, call_floor, expected) in cases {
            let c = car(floor, direction, calls);
            assert_eq!(c.score(call_floor, Direction::Up), expected, "{}", name);
        }
    }

    #[test]
    fn score_is_pure() {
        let c = car(2, Direction::Up, &[0, 4]);
        let before = c.clone();
        let first = c.score(1, Direction::Down);
        let second = c.score(1, Direction::Up);
        assert_eq!(first, second);
        assert_eq!(c, before);
    }

    struct TickCase {
        name: &'static str,
        calls: &'static [usize],
        floor: usize,
        direction: Direction,
        expected_floor: usize,
        expected_direction: Direction,
        expected_calls: &'static [usize],
        expected_status: CarStatus,
    }

    #[test]
    fn tick_follows_scan() {
        let cases = [
            TickCase {
                name: "no calls, nothing changes",
                calls: &[],
                floor: 2,
                direction: Direction::Up,
                expected_floor: 2,
                expected_direction: Direction::Up,
                expected_calls: &[],
                expected_status: CarStatus::Parked,
            },
            TickCase {
                name: "going up to 3",
                calls: &[3],
                floor: 2,
                direction: Direction::Up,
                expected_floor: 3,
                expected_direction: Direction::Up,
                expected_calls: &[],
                expected_status: CarStatus::Loading,
            },
            TickCase {
                name: "turns around to reach 3",
                calls: &[3],
                floor: 2,
                direction: Direction::Down,
                expected_floor: 3,
                expected_direction: Direction::Up,
                expected_calls: &[],
                expected_status: CarStatus::Loading,
            },
            TickCase {
                name: "keeps going up past a call below",
                calls: &[0, 4],
                floor: 2,
                direction: Direction::Up,
                expected_floor: 3,
                expected_direction: Direction::Up,
                expected_calls: &[0, 4],
                expected_status: CarStatus::Traveling,
            },
            TickCase {
                name: "reverses in the same tick it reaches the top call",
                calls: &[0, 4],
                floor: 3,
                direction: Direction::Up,
                expected_floor: 4,
                expected_direction: Direction::Down,
                expected_calls: &[0],
                expected_status: CarStatus::Loading,
            },
            TickCase {
                name: "reverses in the same tick it reaches the bottom call",
                calls: &[0, 4],
                floor: 1,
                direction: Direction::Down,
                expected_floor: 0,
                expected_direction: Direction::Up,
                expected_calls: &[4],
                expected_status: CarStatus::Loading,
            },
            TickCase {
                name: "call at current floor opens the doors without moving",
                calls: &[2],
                floor: 2,
                direction: Direction::Down,
                expected_floor: 2,
                expected_direction: Direction::Down,
                expected_calls: &[],
                expected_status: CarStatus::Loading,
            },
        ];

        for case in cases {
            let mut c = car(case.floor, case.direction, case.calls);
            c.tick();
            assert_eq!(c.floor(), case.expected_floor, "{}: floor", case.name);
            assert_eq!(c.direction(), case.expected_direction, "{}: direction", case.name);
            assert_eq!(c.calls(), case.expected_calls.to_vec(), "{}: calls", case.name);
            assert_eq!(c.status(), case.expected_status, "{}: status", case.name);
        }
    }

    #[test]
    fn idle_car_stays_put() {
        for direction in [Direction::Up, Direction::Down] {
            let mut c = car(3, direction, &[]);
            for _ in 0..5 {
                c.tick();
                assert_eq!(c.floor(), 3);
                assert_eq!(c.direction(), direction);
                assert_eq!(c.status(), CarStatus::Parked);
            }
        }
    }

    #[test]
    fn never_reverses_with_requests_ahead() {
        let mut c = car(1, Direction::Up, &[0, 4]);
        let mut floors = Vec::new();
        while !c.calls().is_empty() {
            c.tick();
            floors.push(c.floor());
            if c.calls().contains(&4) {
                assert_eq!(c.direction(), Direction::Up);
            }
        }
        assert_eq!(floors, vec![2, 3, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn call_sets_request_and_is_idempotent() {
        let mut c = Car::new(10, CarSettings::default());
        let expected = [false, false, true, false, false, false, false, false, false, false];
        assert_eq!(c.call(2), &expected[..]);
        assert_eq!(c.call(2), &expected[..]);
        assert_eq!(c.calls(), vec![2]);
    }

    #[test]
    #[should_panic]
    fn call_outside_building_panics() {
        let mut c = Car::new(5, CarSettings::default());
        c.call(5);
    }

    #[test]
    fn settings_outside_building_are_rejected() {
        let settings = CarSettings { calls: vec![1, 7], ..CarSettings::default() };
        assert!(settings.validate(5).is_err());
        assert!(CarSettings::default().validate(5).is_ok());
    }

    #[test]
    fn free_only_when_loading_without_requests() {
        let mut c = car(0, Direction::Up, &[0]);
        assert!(!c.is_free());
        c.tick();
        assert_eq!(c.status(), CarStatus::Loading);
        assert!(c.is_free());
        c.call(3);
        assert!(!c.is_free());
        c.tick();
        assert_eq!(c.status(), CarStatus::Traveling);
    }

    #[test]
    fn direction_toward() {
        assert_eq!(Direction::toward(0, 3), Direction::Up);
        assert_eq!(Direction::toward(3, 0), Direction::Down);
        assert_eq!(Direction::toward(2, 2), Direction::Down);
        assert!(Direction::Up > Direction::Down);
    }
}
