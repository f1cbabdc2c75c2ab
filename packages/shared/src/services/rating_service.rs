//! Reward and rating math applied when a match result is settled.

/// Maximum rating swing per match.
const K_FACTOR: f64 = 32.0;

const VICTORY_GEMS: i32 = 450;
const DEFEAT_GEMS: i32 = 200;

/// Flat gem payout for a finished match. Does not scale with rating or
/// opponent strength.
pub fn reward_for(victory: bool) -> i32 {
    if victory {
        VICTORY_GEMS
    } else {
        DEFEAT_GEMS
    }
}

/// Rating adjustment from the logistic expected-score model. Rounds with
/// `f64::round`, so an exact half moves away from zero.
pub fn rating_delta(local_rating: i32, opposition_rating: i32, victory: bool) -> i32 {
    let exponent = f64::from(local_rating - opposition_rating) / 400.0;
    let expected_score = 1.0 / (1.0 + 10f64.powf(exponent));
    let actual_score = if victory { 1.0 } else { 0.0 };

    (K_FACTOR * (actual_score - expected_score)).round() as i32
}
