//! Daily metrics for the dashboard panel.
//!
//! There is no tracker integration; every user sees the same sample day with
//! a tip drawn from the fixed rotation.

use rand::seq::IndexedRandom;
use wellness::{HEALTH_TIPS, Metrics};

const SAMPLE_STEPS: u32 = 8_500;
const SAMPLE_STEP_GOAL: u32 = 10_000;
const SAMPLE_SLEEP_HOURS: f32 = 7.5;
const SAMPLE_ACTIVE_MINUTES: u32 = 45;

/// Build the metrics payload, picking a tip at random.
#[must_use]
pub fn daily_metrics() -> Metrics {
    let tip = HEALTH_TIPS.choose(&mut rand::rng()).copied().unwrap_or(HEALTH_TIPS[0]);
    Metrics {
        steps: SAMPLE_STEPS,
        step_goal: SAMPLE_STEP_GOAL,
        sleep_hours: SAMPLE_SLEEP_HOURS,
        active_minutes: SAMPLE_ACTIVE_MINUTES,
        tip: tip.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_metrics_tip_comes_from_rotation() {
        for _ in 0..20 {
            let metrics = daily_metrics();
            assert!(HEALTH_TIPS.contains(&metrics.tip.as_str()));
        }
    }

    #[test]
    fn daily_metrics_reports_sample_day() {
        let metrics = daily_metrics();
        assert_eq!(metrics.steps, 8_500);
        assert_eq!(metrics.step_goal, 10_000);
        assert_eq!(metrics.active_minutes, 45);
        assert_eq!(metrics.step_progress_percent(), 85);
    }
}
