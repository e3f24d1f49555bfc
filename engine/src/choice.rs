use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::Element;

/// What the player picked for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Choice {
    Cast(Element),
    Skip,
    /// Branch over every castable element plus skip.
    #[default]
    Auto,
}

/// A concrete per-character action. Unlike [`Choice`] it has no `Auto` arm,
/// so an unexpanded choice can never reach the turn simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    Cast(Element),
    Skip,
}

/// Character id → choice, as supplied by the caller.
pub type ChoiceMap = IndexMap<String, Choice>;

/// Character id → action, one fully concrete combination in turn order.
pub type Combination = IndexMap<String, Action>;

impl Choice {
    /// `None` for `Auto`, which has to be expanded first.
    pub fn resolve(self) -> Option<Action> {
        match self {
            Choice::Cast(e) => Some(Action::Cast(e)),
            Choice::Skip => Some(Action::Skip),
            Choice::Auto => None,
        }
    }
}

impl From<Action> for Choice {
    fn from(action: Action) -> Self {
        match action {
            Action::Cast(e) => Choice::Cast(e),
            Action::Skip => Choice::Skip,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Cast(e) => f.write_str(e.as_str()),
            Choice::Skip => f.write_str("skip"),
            Choice::Auto => f.write_str("auto"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Choice::from(*self), f)
    }
}

impl FromStr for Choice {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(Choice::Skip),
            "auto" => Ok(Choice::Auto),
            other => other
                .parse::<Element>()
                .map(Choice::Cast)
                .map_err(|_| EngineError::UnknownChoice(s.to_string())),
        }
    }
}

impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Choice>()?
            .resolve()
            .ok_or_else(|| EngineError::UnknownChoice(s.to_string()))
    }
}

impl TryFrom<String> for Choice {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Action {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        choice.to_string()
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

/// Lift a concrete combination back into a choice map for reporting.
pub fn to_choice_map(combination: &Combination) -> ChoiceMap {
    combination
        .iter()
        .map(|(id, action)| (id.clone(), Choice::from(*action)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("Fire".parse::<Choice>().unwrap(), Choice::Cast(Element::Fire));
        assert_eq!(" skip ".parse::<Choice>().unwrap(), Choice::Skip);
        assert_eq!("AUTO".parse::<Choice>().unwrap(), Choice::Auto);
        assert!("plasma".parse::<Choice>().is_err());
    }

    #[test]
    fn action_rejects_auto() {
        assert!("auto".parse::<Action>().is_err());
        assert_eq!("dark".parse::<Action>().unwrap(), Action::Cast(Element::Dark));
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&vec![Choice::Cast(Element::Wind), Choice::Skip, Choice::Auto])
            .unwrap();
        assert_eq!(json, r#"["wind","skip","auto"]"#);
        let back: Vec<Choice> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], Choice::Cast(Element::Wind));
        assert!(serde_json::from_str::<Choice>(r#""nope""#).is_err());
    }
}
