//! Rule-based advice used when remote generation is unavailable.
//!
//! Rules are checked in order against the lower-cased user input and the
//! first match produces the response. The final rule always matches.

use dietcoach_model::metrics::{one_decimal, DailyTargets, ValidMetrics};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    MealPlan,
    DailyPlan,
    Targets,
    Menu,
}

struct Context<'a> {
    metrics: &'a ValidMetrics,
    targets: &'a DailyTargets,
    username: &'a str,
}

struct Rule {
    topic: Topic,
    matches: fn(&str) -> bool,
    respond: fn(&Context) -> String,
}

static RULES: [Rule; 5] = [
    Rule {
        topic: Topic::Greeting,
        matches: |input| input.contains("hi") || input.contains("hello"),
        respond: greeting,
    },
    Rule {
        topic: Topic::MealPlan,
        matches: |input| {
            input.contains("yeah") || input.contains("yes") || input.contains("love to know")
        },
        respond: meal_plan,
    },
    Rule {
        topic: Topic::DailyPlan,
        // "mage" is kept as is. It looks like a typo of "manage", which
        // does not contain it.
        matches: |input| {
            input.contains("how") && (input.contains("achieve") || input.contains("mage"))
        },
        respond: daily_plan,
    },
    Rule {
        topic: Topic::Targets,
        matches: |input| input.contains("diet") || input.contains("eat"),
        respond: targets_summary,
    },
    Rule {
        topic: Topic::Menu,
        matches: |_| true,
        respond: menu,
    },
];

fn rule_for(user_input: &str) -> &'static Rule {
    let input = user_input.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&input))
        .unwrap_or(&RULES[RULES.len() - 1])
}

pub fn classify(user_input: &str) -> Topic {
    rule_for(user_input).topic
}

pub fn resolve(
    metrics: &ValidMetrics,
    targets: &DailyTargets,
    user_input: &str,
    username: &str,
) -> String {
    let context = Context {
        metrics,
        targets,
        username,
    };
    (rule_for(user_input).respond)(&context)
}

fn greeting(context: &Context) -> String {
    format!(
        "Hello {}! 👋 I can help you with personalized diet and exercise recommendations based on your metrics. What would you like to know?",
        context.username
    )
}

fn meal_plan(context: &Context) -> String {
    let t = context.targets;
    format!(
        "Here's a detailed meal plan to reach your {calories} calorie goal:

Breakfast ({breakfast} calories):
- Option 1: Oatmeal (150cal) + banana (105cal) + 2 eggs (140cal) + coffee
- Option 2: Greek yogurt (120cal) + granola (140cal) + berries (85cal) + almonds (50cal)

Lunch ({lunch} calories):
- Option 1: Grilled chicken breast (165cal) + brown rice (150cal) + mixed vegetables (100cal)
- Option 2: Tuna sandwich (320cal) + apple (95cal) + mixed salad (70cal)

Dinner ({dinner} calories):
- Option 1: Baked salmon (233cal) + quinoa (120cal) + roasted vegetables (100cal)
- Option 2: Lean beef stir-fry (250cal) + brown rice (150cal)

Snacks ({snacks} calories):
- Morning: 1 apple (95cal) + 12 almonds (80cal)
- Afternoon: Greek yogurt (120cal) OR protein bar (180cal)

Key Tips:
1. Track portions using a food scale or measuring cups
2. Prep meals in advance
3. Drink {water}L water throughout the day
4. Aim for {protein}g protein daily
5. Eat every 3-4 hours

Would you like specific recipes for any of these meals?",
        calories = t.calories,
        breakfast = t.breakfast,
        lunch = t.lunch,
        dinner = t.dinner,
        snacks = t.snacks,
        water = t.water_display(),
        protein = t.protein,
    )
}

fn daily_plan(context: &Context) -> String {
    let t = context.targets;
    format!(
        "To achieve your daily target of {calories} calories, here's a structured plan:

1. Meal Timing:
   - Breakfast (7-9 AM): {breakfast} calories
   - Lunch (12-2 PM): {lunch} calories
   - Dinner (6-8 PM): {dinner} calories
   - Snacks: {snacks} calories

2. Daily Targets:
   - Protein: {protein}g ({per_meal}g per meal)
   - Water: {water}L (about {glasses} glasses)
   - Vegetables: 3-4 servings
   - Whole grains: 2-3 servings

3. Practical Tips:
   - Use a calorie tracking app
   - Measure portions
   - Prep meals in advance
   - Keep healthy snacks ready

Would you like to see specific meal suggestions with calorie counts?",
        calories = t.calories,
        breakfast = t.breakfast,
        lunch = t.lunch,
        dinner = t.dinner,
        snacks = t.snacks,
        protein = t.protein,
        per_meal = t.protein_per_meal(),
        water = t.water_display(),
        glasses = t.water_glasses(),
    )
}

fn targets_summary(context: &Context) -> String {
    let t = context.targets;
    format!(
        "Based on your metrics (BMI: {bmi}, Weight: {weight}kg), here are your daily targets:

1. Calories: {calories} calories
2. Protein: {protein}g
3. Water: {water}L

Would you like to know how to achieve these targets with specific meal suggestions?",
        bmi = one_decimal(context.metrics.bmi()),
        weight = context.metrics.weight(),
        calories = t.calories,
        protein = t.protein,
        water = t.water_display(),
    )
}

fn menu(_: &Context) -> String {
    "I can help you with:
- Diet recommendations
- Exercise plans
- Calorie calculations
- Meal planning
What would you like to know about?"
        .to_owned()
}

#[cfg(test)]
mod tests {
    use dietcoach_model::metrics::{validate, UserMetrics};

    use super::*;

    fn inputs() -> (ValidMetrics, DailyTargets) {
        let metrics = validate(&UserMetrics::new(70.0, 175.0, 22.857, 2000.0)).unwrap();
        let targets = metrics.targets().unwrap();
        (metrics, targets)
    }

    fn respond(user_input: &str) -> String {
        let (metrics, targets) = inputs();
        resolve(&metrics, &targets, user_input, "Ana")
    }

    #[test]
    fn classify_follows_rule_order() {
        let test_data = [
            ("hello there", Topic::Greeting),
            ("HELLO", Topic::Greeting),
            ("hi, what diet suits me?", Topic::Greeting),
            ("this diet", Topic::Greeting),
            ("yes please", Topic::MealPlan),
            ("Yeah!", Topic::MealPlan),
            ("I would love to know", Topic::MealPlan),
            ("yes, how do I mage that", Topic::MealPlan),
            // "achieve" contains "hi", so it is answered with a greeting.
            ("how can I achieve my goal", Topic::Greeting),
            ("how do I mage my meals", Topic::DailyPlan),
            ("how do I manage my diet", Topic::Targets),
            ("what should I eat", Topic::Targets),
            ("tell me about my DIET", Topic::Targets),
            ("how are you", Topic::Menu),
            ("", Topic::Menu),
        ];

        for (input, expected) in test_data {
            assert_eq!(classify(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn greeting_is_personalized() {
        assert_eq!(
            respond("Hello"),
            "Hello Ana! 👋 I can help you with personalized diet and exercise recommendations based on your metrics. What would you like to know?"
        );
        assert_eq!(respond("HELLO"), respond("hello"));
    }

    #[test]
    fn greeting_wins_over_diet() {
        assert_eq!(respond("hi, what diet?"), respond("hello"));
    }

    #[test]
    fn meal_plan_uses_calorie_split() {
        let response = respond("yes");

        assert!(response.starts_with("Here's a detailed meal plan to reach your 2400 calorie goal:"));
        assert!(response.contains("Breakfast (720 calories):"));
        assert!(response.contains("Lunch (840 calories):"));
        assert!(response.contains("Dinner (600 calories):"));
        assert!(response.contains("Snacks (240 calories):"));
        assert!(response.contains("3. Drink 2.3L water throughout the day"));
        assert!(response.contains("4. Aim for 126g protein daily"));
        assert!(response.ends_with("Would you like specific recipes for any of these meals?"));
    }

    #[test]
    fn daily_plan_includes_per_meal_protein_and_glasses() {
        let response = respond("How do I mage my meals?");

        assert!(response.starts_with("To achieve your daily target of 2400 calories"));
        assert!(response.contains("   - Breakfast (7-9 AM): 720 calories\n"));
        assert!(response.contains("   - Snacks: 240 calories\n"));
        assert!(response.contains("   - Protein: 126g (32g per meal)\n"));
        assert!(response.contains("   - Water: 2.3L (about 9 glasses)\n"));
    }

    #[test]
    fn targets_summary_matches_expected_text() {
        assert_eq!(
            respond("what should I eat?"),
            "Based on your metrics (BMI: 22.9, Weight: 70kg), here are your daily targets:

1. Calories: 2400 calories
2. Protein: 126g
3. Water: 2.3L

Would you like to know how to achieve these targets with specific meal suggestions?"
        );
    }

    #[test]
    fn fallback_menu_for_unknown_and_empty_input() {
        let menu = respond("");
        assert!(menu.starts_with("I can help you with:"));
        assert_eq!(respond("what about running?"), menu);
    }

    #[test]
    fn every_topic_produces_text() {
        for input in ["hi", "yes", "how to mage", "diet", "", "???"] {
            assert!(!respond(input).is_empty(), "input {:?}", input);
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        for input in ["hi", "yes", "how to mage", "diet", "anything"] {
            assert_eq!(respond(input), respond(input));
        }
    }
}
