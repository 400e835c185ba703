use serde::{Deserialize, Serialize};

/// The current state of a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassengerStatus {
    /// Not at work (outside the shift's time window)
    Idle,
    /// At work (inside the shift's time window)
    Active,
    /// Waiting at the landing to go down
    WaitingDown,
    /// Waiting at the landing to go up
    WaitingUp,
    /// Riding in an elevator car
    Riding,
}

impl PassengerStatus {
    /// True while a landing call is outstanding.
    pub fn is_waiting(self) -> bool {
        matches!(self, PassengerStatus::WaitingDown | PassengerStatus::WaitingUp)
    }
}
