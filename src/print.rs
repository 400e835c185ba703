//! ## Printing Module
//!
//! This module is only here to make the terminal output easier to read.
//! It prints messages in appropriate colours depending on the situation,
//! and draws the state of the simulation as a table every tick.
use crate::config;
use crate::elevator::{CarStatus, Direction};
use crate::passenger::PassengerStatus;
use crate::simulation::Simulation;
use ansi_term::Colour::{self, Green, Purple, Red, Yellow};

use std::sync::Mutex;
use unicode_width::UnicodeWidthStr;

fn is_on(flag: &Mutex<bool>) -> bool {
    flag.lock().map(|on| *on).unwrap_or(true)
}

/// Prints an error message in red to the terminal.
///
/// If `PRINT_ERR_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[ERROR\]:   {}", msg
///
/// ## Example
/// ```
/// use simuvator::print;
///
/// print::err("Something went wrong!".to_string());
/// ```
pub fn err(msg: String) {
    if is_on(&config::PRINT_ERR_ON) {
        println!("{}{}\n", Red.paint("[ERROR]:   "), Red.paint(msg));
    }
}

/// Prints a warning message in yellow to the terminal.
///
/// If `PRINT_WARN_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[WARNING\]: {}", msg
pub fn warn(msg: String) {
    if is_on(&config::PRINT_WARN_ON) {
        println!("{}{}\n", Yellow.paint("[WARNING]: "), Yellow.paint(msg));
    }
}

/// Prints a success message in green to the terminal.
///
/// If `PRINT_OK_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[OK\]:      {}", msg
pub fn ok(msg: String) {
    if is_on(&config::PRINT_OK_ON) {
        println!("{}{}\n", Green.paint("[OK]:      "), Green.paint(msg));
    }
}

/// Prints an informational message in light blue to the terminal.
///
/// If `PRINT_INFO_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[INFO\]:    {}", msg
pub fn info(msg: String) {
    let light_blue = Colour::RGB(102, 178, 255);
    if is_on(&config::PRINT_INFO_ON) {
        println!("{}{}\n", light_blue.paint("[INFO]:    "), light_blue.paint(msg));
    }
}

/// Pads the input text to a fixed display width using spaces.
///
/// Accounts for characters that take more than one column, so table cells line up.
fn pad_text(text: &str, width: usize) -> String {
    let visible_width = UnicodeWidthStr::width(text);
    let padding = width.saturating_sub(visible_width);
    format!("{}{}", text, " ".repeat(padding))
}

fn car_status_label(status: CarStatus, direction: Direction) -> String {
    let text = match (status, direction) {
        (CarStatus::Parked, _) => Green.paint(pad_text("Parked", 12)),
        (CarStatus::Loading, _) => Purple.paint(pad_text("Loading", 12)),
        (CarStatus::Traveling, Direction::Up) => Yellow.paint(pad_text("↑ Traveling", 12)),
        (CarStatus::Traveling, Direction::Down) => Yellow.paint(pad_text("↓ Traveling", 12)),
    };
    text.to_string()
}

fn passenger_status_label(status: PassengerStatus) -> String {
    let text = match status {
        PassengerStatus::Idle => Green.paint(pad_text("Idle", 12)),
        PassengerStatus::Active => Green.paint(pad_text("Active", 12)),
        PassengerStatus::WaitingUp => Yellow.paint(pad_text("Waiting ↑", 12)),
        PassengerStatus::WaitingDown => Yellow.paint(pad_text("Waiting ↓", 12)),
        PassengerStatus::Riding => Purple.paint(pad_text("Riding", 12)),
    };
    text.to_string()
}

/// Draws the current state of the simulation as a table.
///
/// Shows the simulated time, every car (floor, direction, status and pending calls) and every
/// passenger (floor, destination, status and assigned car).
///
/// If `PRINT_SIM_ON` is `false`, nothing is printed.
pub fn sim_state(sim: &Simulation) {
    if !is_on(&config::PRINT_SIM_ON) {
        return;
    }

    let time = sim.time().format("%a %Y-%m-%d %H:%M").to_string();
    println!("{}", Purple.bold().paint("┌──────────────────────────────────────────────────────┐"));
    let header = pad_text(&format!("{:<8} {}", sim.ticks(), time), 46);
    println!("{}", Purple.bold().paint(format!("│ Tick {} │", header)));
    println!("{}", Purple.bold().paint("└──────────────────────────────────────────────────────┘"));

    println!("┌──────┬───────┬──────────────┬────────────────────────┐");
    println!("{}", Colour::White.bold().paint("│ Car  │ Floor │ Status       │ Calls                  │"));
    println!("├──────┼───────┼──────────────┼────────────────────────┤");
    for (i, car) in sim.bank().cars().iter().enumerate() {
        let calls = car
            .calls()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "│ {} │ {} │ {} │ {} │",
            pad_text(&i.to_string(), 4),
            pad_text(&car.floor().to_string(), 5),
            car_status_label(car.status(), car.direction()),
            pad_text(&calls, 22)
        );
    }
    println!("└──────┴───────┴──────────────┴────────────────────────┘");

    if sim.passengers().is_empty() {
        return;
    }
    println!("┌──────┬───────┬───────┬──────────────┬─────┐");
    println!("{}", Colour::White.bold().paint("│ Pass │ Floor │ Dest  │ Status       │ Car │"));
    println!("├──────┼───────┼───────┼──────────────┼─────┤");
    for (i, p) in sim.passengers().iter().enumerate() {
        let dest = match p.status() {
            PassengerStatus::Idle | PassengerStatus::Active => "-".to_string(),
            _ => p.dest_floor().to_string(),
        };
        let car = p.assigned_car().map_or("-".to_string(), |c| c.to_string());
        println!(
            "│ {} │ {} │ {} │ {} │ {} │",
            pad_text(&i.to_string(), 4),
            pad_text(&p.floor().to_string(), 5),
            pad_text(&dest, 5),
            passenger_status_label(p.status()),
            pad_text(&car, 3)
        );
    }
    println!("└──────┴───────┴───────┴──────────────┴─────┘");
}
