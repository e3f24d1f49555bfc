use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Counter value an element is set to when it is cast.
pub const SPELL_CHARGE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Wind,
    Thunder,
    Light,
    Dark,
}

impl Element {
    /// Every element in declared order. Iteration order only; elements carry no ranking.
    pub const ALL: [Element; 7] = [
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Wind,
        Element::Thunder,
        Element::Light,
        Element::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Wind => "wind",
            Element::Thunder => "thunder",
            Element::Light => "light",
            Element::Dark => "dark",
        }
    }

    /// In-game display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Element::Fire => "火",
            Element::Water => "水",
            Element::Earth => "地",
            Element::Wind => "风",
            Element::Thunder => "雷",
            Element::Light => "光",
            Element::Dark => "暗",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Element::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| EngineError::UnknownElement(s.to_string()))
    }
}

/// Per-element counter. Every element always has a value; values never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementCounter {
    pub fire: u32,
    pub water: u32,
    pub earth: u32,
    pub wind: u32,
    pub thunder: u32,
    pub light: u32,
    pub dark: u32,
}

impl ElementCounter {
    /// All-zero counter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: Element, value: u32) -> Self {
        self[element] = value;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self[e]))
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0)
    }

    /// Apply one spell: the cast element is set to [`SPELL_CHARGE`] (not added to),
    /// every other element drops by one with a floor of zero.
    pub fn cast(&mut self, element: Element) {
        for e in Element::ALL {
            if e == element {
                self[e] = SPELL_CHARGE;
            } else {
                self[e] = self[e].saturating_sub(1);
            }
        }
    }
}

impl Index<Element> for ElementCounter {
    type Output = u32;

    fn index(&self, element: Element) -> &u32 {
        match element {
            Element::Fire => &self.fire,
            Element::Water => &self.water,
            Element::Earth => &self.earth,
            Element::Wind => &self.wind,
            Element::Thunder => &self.thunder,
            Element::Light => &self.light,
            Element::Dark => &self.dark,
        }
    }
}

impl IndexMut<Element> for ElementCounter {
    fn index_mut(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Fire => &mut self.fire,
            Element::Water => &mut self.water,
            Element::Earth => &mut self.earth,
            Element::Wind => &mut self.wind,
            Element::Thunder => &mut self.thunder,
            Element::Light => &mut self.light,
            Element::Dark => &mut self.dark,
        }
    }
}

impl fmt::Display for ElementCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .iter()
            .map(|(e, v)| format!("{}={}", e, v))
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&parts)
    }
}
