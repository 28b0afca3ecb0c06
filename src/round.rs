//! Round lifecycle shared by both games: `Idle -> Running -> Ended`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// Level is laid out, waiting for the start signal.
    Idle,
    Running,
    /// Terminal for this round; only a new start signal leaves it.
    Ended(Outcome),
}

impl RoundStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RoundStatus::Running)
    }

    /// A start signal is honoured from `Idle` and `Ended`, never mid-round.
    pub fn accepts_start(&self) -> bool {
        !self.is_running()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundStatus::Ended(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
