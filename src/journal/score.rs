use super::model::Grievance;

pub const MAX_LOVE_SCORE: u8 = 100;
pub const MIN_LOVE_SCORE: u8 = 50;

const BASE_SCORE: f64 = 70.0;
const FORGIVENESS_WEIGHT: f64 = 30.0;
const RECENT_WINDOW: usize = 5;
const RECENT_UNFORGIVEN_PENALTY: f64 = 5.0;

/// Derive the love score from a most-recent-first grievance collection.
///
/// An empty journal scores 100. Otherwise the forgiveness rate lifts a base of
/// 70 by up to 30 points, each unforgiven grievance among the five most recent
/// costs 5 points, and the result is clamped to `[50, 100]` and rounded.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn calculate_love_score(grievances: &[Grievance]) -> u8 {
    if grievances.is_empty() {
        return MAX_LOVE_SCORE;
    }

    let forgiven = grievances.iter().filter(|g| g.is_forgiven).count();
    let forgive_rate = forgiven as f64 / grievances.len() as f64;

    let recent_unforgiven = grievances
        .iter()
        .take(RECENT_WINDOW)
        .filter(|g| !g.is_forgiven)
        .count();

    let base = BASE_SCORE + forgive_rate * FORGIVENESS_WEIGHT;
    let adjusted = base - recent_unforgiven as f64 * RECENT_UNFORGIVEN_PENALTY;

    adjusted
        .clamp(f64::from(MIN_LOVE_SCORE), f64::from(MAX_LOVE_SCORE))
        .round() as u8
}
