use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::counter::CounterAction;
use crate::mvi::{Action, BootstrapAction};
use crate::other::OtherAction;

/// Every action the root reducer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Store bootstrap. Belongs to no family.
    Init,
    Counter(CounterAction),
    Other(OtherAction),
}

impl Action for AppAction {}

impl BootstrapAction for AppAction {
    fn init() -> Self {
        Self::Init
    }
}

impl AppAction {
    pub fn increase() -> Self {
        Self::Counter(CounterAction::Increase)
    }

    pub fn decrease() -> Self {
        Self::Counter(CounterAction::Decrease)
    }

    /// True for the counter family (increase or decrease).
    pub fn is_counter(&self) -> bool {
        matches!(self, Self::Counter(_))
    }

    /// The payload of the result-carrying family, if this is one.
    pub fn as_other(&self) -> Option<&OtherAction> {
        match self {
            Self::Other(action) => Some(action),
            _ => None,
        }
    }
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        Self::Counter(action)
    }
}

impl From<OtherAction> for AppAction {
    fn from(action: OtherAction) -> Self {
        Self::Other(action)
    }
}

/// Errors from parsing a textual command into an [`AppAction`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Invalid value '{value}' for ok: expected an integer")]
    InvalidValue { value: String },
}

impl FromStr for AppAction {
    type Err = ActionParseError;

    /// Accepts `increase`/`inc`/`+`, `decrease`/`dec`/`-`,
    /// `ok:<integer>` and `err:<message>`. Keywords are case-insensitive.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ActionParseError::Empty);
        }

        let (keyword, payload) = match input.split_once(':') {
            Some((keyword, payload)) => (keyword.trim(), Some(payload)),
            None => (input, None),
        };

        match (keyword.to_ascii_lowercase().as_str(), payload) {
            ("increase" | "inc" | "+", None) => Ok(Self::increase()),
            ("decrease" | "dec" | "-", None) => Ok(Self::decrease()),
            ("ok", Some(value)) => {
                let value = value.trim();
                value
                    .parse::<i64>()
                    .map(|v| Self::Other(OtherAction::Ok(v)))
                    .map_err(|_| ActionParseError::InvalidValue {
                        value: value.to_string(),
                    })
            }
            ("err", Some(message)) => Ok(Self::Other(OtherAction::Err(message.to_string()))),
            _ => Err(ActionParseError::UnknownCommand(input.to_string())),
        }
    }
}

impl fmt::Display for AppAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Counter(CounterAction::Increase) => write!(f, "increase"),
            Self::Counter(CounterAction::Decrease) => write!(f, "decrease"),
            Self::Other(OtherAction::Ok(value)) => write!(f, "ok:{}", value),
            Self::Other(OtherAction::Err(message)) => write!(f, "err:{}", message),
        }
    }
}
