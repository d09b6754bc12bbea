//! Daily wellness metrics shown on the dashboard panel.

use serde::{Deserialize, Serialize};

/// Tips the server rotates through on `GET /api/metrics`.
pub const HEALTH_TIPS: [&str; 5] = [
    "Stay hydrated by drinking at least 8 glasses of water daily.",
    "Regular exercise improves mental health and reduces stress.",
    "A good night's sleep is essential for overall wellness.",
    "Eat a balanced diet rich in fruits and vegetables.",
    "Take short breaks to stretch and move during work hours.",
];

/// One day of activity for the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub steps: u32,
    pub step_goal: u32,
    pub sleep_hours: f32,
    pub active_minutes: u32,
    pub tip: String,
}

impl Metrics {
    /// Step progress toward the goal, clamped to `0..=100`.
    #[must_use]
    pub fn step_progress_percent(&self) -> u32 {
        if self.step_goal == 0 {
            return 100;
        }
        let pct = u64::from(self.steps) * 100 / u64::from(self.step_goal);
        u32::try_from(pct.min(100)).unwrap_or(100)
    }
}
