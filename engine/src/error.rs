use thiserror::Error;

use crate::Element;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown element '{0}'")]
    UnknownElement(String),

    #[error("unknown choice '{0}' (expected an element, 'skip' or 'auto')")]
    UnknownChoice(String),

    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    #[error("character '{character}' cannot cast {element}")]
    NotCastable { character: String, element: Element },

    #[error("character '{character}' has no residue skill '{skill}'")]
    UnknownSkill { character: String, skill: String },

    #[error("invalid skill reference '{0}' (expected CHARACTER:SKILL)")]
    InvalidSkillRef(String),

    #[error("duplicate character id '{0}' in roster")]
    DuplicateCharacter(String),

    #[error("invalid roster JSON")]
    RosterJson(#[source] serde_json::Error),

    #[error("invalid roster YAML")]
    RosterYaml(#[source] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
