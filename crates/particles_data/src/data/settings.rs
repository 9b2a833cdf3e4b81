//! Settings exchange payload.
//!
//! The payload describes populations (sizes and display attributes) and the
//! ordered rule list. Entity positions are never part of it.
//!
//! Canonical JSON:
//!
//! ```json
//! {
//!   "populations": { "red": { "count": 20, "displayAttribute": "#FF0000" } },
//!   "rules": [
//!     { "source": "red", "target": "red", "forceCoefficient": 0.8, "effectRadius": 100.0 }
//!   ]
//! }
//! ```
//!
//! The compact form `{"c": {"#FF0000": 20}, "r": [{"c1": .., "c2": .., "f": .., "r": ..}]}`
//! is accepted on input as well. A bare count uses the population id as its
//! display attribute.

use crate::data::population::PopulationId;
use crate::data::rule::Rule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, alias = "c")]
    pub populations: BTreeMap<PopulationId, PopulationSettings>,
    #[serde(default, alias = "r")]
    pub rules: Vec<RuleSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PopulationEntry")]
pub struct PopulationSettings {
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_attribute: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PopulationEntry {
    Count(u32),
    Detailed {
        count: u32,
        #[serde(default, rename = "displayAttribute")]
        display_attribute: Option<String>,
    },
}

impl From<PopulationEntry> for PopulationSettings {
    fn from(entry: PopulationEntry) -> Self {
        match entry {
            PopulationEntry::Count(count) => Self {
                count,
                display_attribute: None,
            },
            PopulationEntry::Detailed {
                count,
                display_attribute,
            } => Self {
                count,
                display_attribute,
            },
        }
    }
}

impl PopulationSettings {
    pub fn new(count: u32, display_attribute: impl Into<String>) -> Self {
        Self {
            count,
            display_attribute: Some(display_attribute.into()),
        }
    }

    /// Display attribute to register, falling back to the population id.
    pub fn display_attribute_or<'a>(&'a self, id: &'a str) -> &'a str {
        self.display_attribute.as_deref().unwrap_or(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSettings {
    #[serde(alias = "c1")]
    pub source: PopulationId,
    #[serde(alias = "c2")]
    pub target: PopulationId,
    #[serde(default, alias = "f")]
    pub force_coefficient: f64,
    #[serde(default, alias = "r")]
    pub effect_radius: f64,
}

impl From<&Rule> for RuleSettings {
    fn from(rule: &Rule) -> Self {
        Self {
            source: rule.source.clone(),
            target: rule.target.clone(),
            force_coefficient: rule.force_coefficient,
            effect_radius: rule.effect_radius,
        }
    }
}

impl From<&RuleSettings> for Rule {
    fn from(rule: &RuleSettings) -> Self {
        Rule::new(
            rule.source.clone(),
            rule.target.clone(),
            rule.force_coefficient,
            rule.effect_radius,
        )
    }
}

impl Settings {
    /// Total number of entities the payload asks for.
    #[must_use]
    pub fn total_entities(&self) -> u64 {
        self.populations.values().map(|p| u64::from(p.count)).sum()
    }

    /// The payload used when a host supplies none: two populations, four rules,
    /// radii scaled to the world width.
    #[must_use]
    pub fn default_for_width(width: f64) -> Self {
        let mut populations = BTreeMap::new();
        populations.insert("red".to_string(), PopulationSettings::new(20, "red"));
        populations.insert("blue".to_string(), PopulationSettings::new(20, "blue"));

        let wide = width / 5.0;
        let narrow = width / 8.0;
        let rules = [
            Rule::new("blue", "blue", -0.1, wide),
            Rule::new("red", "red", 0.8, narrow),
            Rule::new("red", "blue", 0.5, wide),
            Rule::new("blue", "red", -0.8, narrow),
        ]
        .iter()
        .map(RuleSettings::from)
        .collect();

        Self { populations, rules }
    }
}
