use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingDraw,
    AwaitingSelection,
    AwaitingAction,
    Won,
    Lost,
}

impl RoundPhase {
    pub fn is_over(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Play,
    Discard,
    Cancel,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Play => "Play",
            Action::Discard => "Discard",
            Action::Cancel => "Cancel",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "play" | "p" => Ok(Action::Play),
            "discard" | "d" => Ok(Action::Discard),
            "cancel" | "c" => Ok(Action::Cancel),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundStats {
    pub hands_left: u8,
    pub discards_left: u8,
    pub total_score: i64,
    pub score_target: i64,
}
