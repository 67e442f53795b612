use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six buckets a diet-plan item can land in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Goals,
    GreenFoods,
    YellowFoods,
    RedFoods,
    Timing,
    Special,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Goals,
        SectionKey::GreenFoods,
        SectionKey::YellowFoods,
        SectionKey::RedFoods,
        SectionKey::Timing,
        SectionKey::Special,
    ];

    /// Serialized name, e.g. `greenFoods`
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Goals => "goals",
            SectionKey::GreenFoods => "greenFoods",
            SectionKey::YellowFoods => "yellowFoods",
            SectionKey::RedFoods => "redFoods",
            SectionKey::Timing => "timing",
            SectionKey::Special => "special",
        }
    }

    /// Human readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Goals => "Dietary Goals",
            SectionKey::GreenFoods => "Foods to Eat Freely",
            SectionKey::YellowFoods => "Foods in Moderation",
            SectionKey::RedFoods => "Foods to Avoid",
            SectionKey::Timing => "Meal Timing",
            SectionKey::Special => "Special Instructions",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// Items per section, in source order.
///
/// Every key is a named field, so a consumer never sees a missing section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanSections {
    pub goals: Vec<String>,
    pub green_foods: Vec<String>,
    pub yellow_foods: Vec<String>,
    pub red_foods: Vec<String>,
    pub timing: Vec<String>,
    pub special: Vec<String>,
}

impl DietPlanSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SectionKey) -> &[String] {
        match key {
            SectionKey::Goals => &self.goals,
            SectionKey::GreenFoods => &self.green_foods,
            SectionKey::YellowFoods => &self.yellow_foods,
            SectionKey::RedFoods => &self.red_foods,
            SectionKey::Timing => &self.timing,
            SectionKey::Special => &self.special,
        }
    }

    pub fn get_mut(&mut self, key: SectionKey) -> &mut Vec<String> {
        match key {
            SectionKey::Goals => &mut self.goals,
            SectionKey::GreenFoods => &mut self.green_foods,
            SectionKey::YellowFoods => &mut self.yellow_foods,
            SectionKey::RedFoods => &mut self.red_foods,
            SectionKey::Timing => &mut self.timing,
            SectionKey::Special => &mut self.special,
        }
    }

    /// Iterate all six sections in display order
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &[String])> {
        SectionKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn total_items(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}
