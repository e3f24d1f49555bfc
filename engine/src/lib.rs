pub mod api;
pub mod calc;
pub mod choice;
pub mod content;
pub mod element;
pub mod error;
pub mod filter;
pub mod roster;
pub mod session;

pub use calc::{
    calculate, calculate_with, evaluate_all, new_counter, CalculationResult, TriggeredSkill,
    RESULT_LIMIT,
};
pub use choice::{Action, Choice, ChoiceMap, Combination};
pub use element::{Element, ElementCounter, SPELL_CHARGE};
pub use error::EngineError;
pub use filter::{SkillRef, TargetSelection};
pub use roster::{Character, ResidueSkill, Roster, SkillCondition};
pub use session::Session;
