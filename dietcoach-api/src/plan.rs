use chrono::Utc;
use dietcoach_model::{
    metrics::{round, BmiCategory, DailyTargets, ValidMetrics},
    plan::{Goal, Macros, MealSplit, Plan},
};
use itertools::Itertools;
use log::debug;

fn exercise_for(category: BmiCategory) -> &'static [&'static str] {
    match category {
        BmiCategory::Underweight => &[
            "Strength training 3x per week (full body)",
            "Light cardio 2x per week, 20 minutes",
            "Rest at least 2 days per week",
        ],
        BmiCategory::Normal => &[
            "Moderate cardio 3x per week, 30 minutes",
            "Strength training 2x per week",
            "Stretching or yoga 1x per week",
        ],
        BmiCategory::Overweight => &[
            "Brisk walking 5x per week, 30-45 minutes",
            "Strength training 2x per week",
            "Low-impact cardio such as cycling or swimming",
        ],
        BmiCategory::Obese => &[
            "Daily walking, starting with 15-20 minutes",
            "Water aerobics or stationary cycling 3x per week",
            "Light resistance band exercises 2x per week",
        ],
    }
}

/// Builds a placeholder plan from the BMI category and calorie target.
pub fn generate_plan(metrics: &ValidMetrics, targets: &DailyTargets) -> Plan {
    let category = metrics.bmi_category();
    let calories = targets.calories;
    let fat = round(calories as f64 * 0.25 / 9.0);
    let carbs = round((calories - targets.protein * 4 - fat * 9).max(0) as f64 / 4.0);
    let exercise = exercise_for(category);

    debug!(
        "Generated {} plan: {}",
        category,
        exercise.iter().join("; ")
    );

    Plan {
        bmi: (metrics.bmi() * 10.0).round() / 10.0,
        bmi_category: category,
        goal: Goal::from(category),
        daily_calories: calories,
        meals: MealSplit {
            breakfast: targets.breakfast,
            lunch: targets.lunch,
            dinner: targets.dinner,
            snacks: targets.snacks,
        },
        macros: Macros {
            protein_grams: targets.protein,
            carbs_grams: carbs,
            fat_grams: fat,
        },
        water_liters: targets.water,
        exercise: exercise.iter().map(|e| e.to_string()).collect(),
        generated_at: Utc::now(),
    }
}
