use serde::{Deserialize, Serialize};

/// Body returned by `GET /api/multiply/{num1}/{num2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub result: i64,
    pub message: String,
    pub operation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationError(pub String);

impl CalculationError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// At most one of result or error is ever present.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Success(CalculationResult),
    Failure(CalculationError),
}

impl Outcome {
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Outcome::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CalculationError> {
        match self {
            Outcome::Failure(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

impl Key {
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Enter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

/// Point-in-time copy of the form, used for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub first: String,
    pub second: String,
    pub request_state: RequestState,
    pub outcome: Outcome,
}

impl Snapshot {
    pub fn is_loading(&self) -> bool {
        self.request_state == RequestState::Loading
    }
}
