use dietcoach_client::Generator;
use dietcoach_model::metrics::{one_decimal, round, DailyTargets, ValidMetrics};

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote generation unavailable: {0}")]
    Unavailable(#[source] dietcoach_client::Error),
    #[error("remote generation returned no text")]
    Empty,
}

impl From<dietcoach_client::Error> for RemoteError {
    fn from(error: dietcoach_client::Error) -> Self {
        match error {
            dietcoach_client::Error::EmptyResponse => RemoteError::Empty,
            other => RemoteError::Unavailable(other),
        }
    }
}

pub fn build_prompt(metrics: &ValidMetrics, targets: &DailyTargets, user_input: &str) -> String {
    format!(
        "
User Health Profile:
- BMI: {bmi} ({category})
- Weight: {weight} kg
- Height: {height} cm
- Daily Calories (BMR): {bmr}
- Target Calories: {calories}

Question: {user_input}

Please provide health advice based on these metrics.",
        bmi = one_decimal(metrics.bmi()),
        category = metrics.bmi_category(),
        weight = metrics.weight(),
        height = metrics.height(),
        bmr = round(targets.bmr),
        calories = targets.calories,
    )
}

/// Asks the remote generator for advice and personalizes the answer.
pub async fn request_advice(
    generator: &dyn Generator,
    metrics: &ValidMetrics,
    targets: &DailyTargets,
    user_input: &str,
    username: &str,
) -> Result<String, RemoteError> {
    let prompt = build_prompt(metrics, targets, user_input);
    let text = generator.generate(&prompt).await?;

    Ok(format!("Hi {}, {}", username, text))
}
