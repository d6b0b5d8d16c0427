#[cfg(feature = "serde")]
use serde::Deserializer;
#[cfg(feature = "serde")]
use serde_with::{As, DefaultOnError, DisplayFromStr, PickFirst, Same};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid metrics data received")]
    IncompleteMetrics,
}

/// Health metrics as submitted by the caller. Every field may be missing.
///
/// With the `serde` feature numbers are read leniently: a JSON number or a
/// numeric string is accepted, anything else (null, "", garbage) is treated
/// as absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserMetrics {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_number"))]
    pub weight: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_number"))]
    pub height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_number"))]
    pub bmi: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient_number"))]
    pub bmr: Option<f64>,
}

#[cfg(feature = "serde")]
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    As::<DefaultOnError<Option<PickFirst<(Same, DisplayFromStr)>>>>::deserialize(deserializer)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Sex {
    #[strum(to_string = "male", serialize = "m")]
    Male,
    #[strum(to_string = "female", serialize = "f")]
    Female,
}

impl UserMetrics {
    pub fn new(weight: f64, height: f64, bmi: f64, bmr: f64) -> Self {
        Self {
            weight: Some(weight),
            height: Some(height),
            bmi: Some(bmi),
            bmr: Some(bmr),
        }
    }

    /// Derives BMI from weight (kg) and height (cm), and BMR with the
    /// Mifflin-St Jeor equation when age and sex are known.
    pub fn from_measurements(weight: f64, height: f64, age: Option<u8>, sex: Option<Sex>) -> Self {
        let height_m = height / 100.0;
        let bmi = weight / (height_m * height_m);
        let bmr = age.zip(sex).map(|(age, sex)| {
            let base = 10.0 * weight + 6.25 * height - 5.0 * age as f64;
            match sex {
                Sex::Male => base + 5.0,
                Sex::Female => base - 161.0,
            }
        });

        Self {
            weight: Some(weight),
            height: Some(height),
            bmi: Some(bmi),
            bmr,
        }
    }
}

/// Metrics that passed [`validate`]: weight, height and BMI are known.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidMetrics {
    weight: f64,
    height: f64,
    bmi: f64,
    bmr: Option<f64>,
}

impl ValidMetrics {
    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn bmi(&self) -> f64 {
        self.bmi
    }
    pub fn bmr(&self) -> Option<f64> {
        self.bmr
    }
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }

    /// Calorie, protein and water targets. Needs BMR.
    pub fn targets(&self) -> Result<DailyTargets, ValidationError> {
        self.bmr
            .map(|bmr| DailyTargets::new(bmr, self.weight))
            .ok_or(ValidationError::IncompleteMetrics)
    }
}

// Zero and non-finite values count as missing.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

pub fn validate(metrics: &UserMetrics) -> Result<ValidMetrics, ValidationError> {
    match (
        present(metrics.weight),
        present(metrics.height),
        present(metrics.bmi),
    ) {
        (Some(weight), Some(height), Some(bmi)) => Ok(ValidMetrics {
            weight,
            height,
            bmi,
            bmr: present(metrics.bmr),
        }),
        _ => Err(ValidationError::IncompleteMetrics),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Daily intake targets derived from BMR and body weight.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyTargets {
    pub bmr: f64,
    pub calories: i64,
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    pub snacks: i64,
    pub protein: i64,
    /// Litres, already rounded to one decimal.
    pub water: f64,
}

impl DailyTargets {
    pub fn new(bmr: f64, weight: f64) -> Self {
        let calories = round(bmr * 1.2);
        let share = |fraction: f64| round(calories as f64 * fraction);

        Self {
            bmr,
            calories,
            breakfast: share(0.3),
            lunch: share(0.35),
            dinner: share(0.25),
            snacks: share(0.1),
            protein: round(weight * 1.8),
            water: round_one_decimal(weight * 0.033),
        }
    }

    pub fn protein_per_meal(&self) -> i64 {
        round(self.protein as f64 / 4.0)
    }

    pub fn water_glasses(&self) -> i64 {
        round(self.water * 4.0)
    }

    pub fn water_display(&self) -> String {
        one_decimal(self.water)
    }
}

pub fn round(value: f64) -> i64 {
    value.round() as i64
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a value with exactly one decimal place, rounding the exact
/// decimal value of `value` half up.
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    // Only odd quarters (x.25, x.75) sit exactly halfway; the formatter
    // would round those to even.
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", round_one_decimal(value))
    } else {
        format!("{:.1}", value)
    }
}
