use dietcoach_model::metrics::{Sex, UserMetrics};

use crate::store::Store;

/// Health details entered by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserProfile {
    pub age: Option<u8>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
    pub dietary_restrictions: String,
}

impl UserProfile {
    /// Metrics for an advice request, once weight and height are known.
    pub fn to_metrics(&self) -> Option<UserMetrics> {
        let weight = self.weight.filter(|w| *w > 0.0)?;
        let height = self.height.filter(|h| *h > 0.0)?;
        let sex = self.gender.parse::<Sex>().ok();
        Some(UserMetrics::from_measurements(weight, height, self.age, sex))
    }
}

pub type ProfileStore = Store<UserProfile>;

pub fn profile_store() -> ProfileStore {
    Store::new(UserProfile::default())
}
