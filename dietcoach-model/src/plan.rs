use chrono::{DateTime, Utc};

use crate::metrics::BmiCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Goal {
    #[strum(to_string = "gain weight")]
    GainWeight,
    #[strum(to_string = "maintain weight")]
    MaintainWeight,
    #[strum(to_string = "lose weight")]
    LoseWeight,
}

impl From<BmiCategory> for Goal {
    fn from(category: BmiCategory) -> Self {
        match category {
            BmiCategory::Underweight => Goal::GainWeight,
            BmiCategory::Normal => Goal::MaintainWeight,
            BmiCategory::Overweight | BmiCategory::Obese => Goal::LoseWeight,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MealSplit {
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    pub snacks: i64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Macros {
    pub protein_grams: i64,
    pub carbs_grams: i64,
    pub fat_grams: i64,
}

/// Diet and exercise plan returned for non-chat requests.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Plan {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub goal: Goal,
    pub daily_calories: i64,
    pub meals: MealSplit,
    pub macros: Macros,
    pub water_liters: f64,
    pub exercise: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
