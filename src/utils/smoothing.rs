//! Dynamic speed smoothing for noisy positioning fixes.
//!
//! A raw speed derived from two consecutive fixes jumps around with
//! positioning error. Blending each new reading into the previous
//! smoothed value damps the noise; the blend weight is lowered when a
//! large turn or a poor accuracy radius makes the new reading suspect.

use log::trace;

/// Readings below this are treated as standstill and snap to zero.
pub const STANDSTILL_THRESHOLD: f64 = 0.5;

/// Direction change (degrees) above which a turn is assumed.
pub const TURN_THRESHOLD_DEGREES: f64 = 30.0;

/// Accuracy radius (meters) above which a fix counts as poor.
pub const POOR_ACCURACY_METERS: f64 = 50.0;

/// Blends a new speed reading into the previous smoothed speed.
///
/// The weight given to the new reading depends on the fix quality:
///
/// * direction change over [`TURN_THRESHOLD_DEGREES`] drops the weight
///   from 0.5 to 0.2, so a turn is not misread as deceleration;
/// * accuracy worse than [`POOR_ACCURACY_METERS`] overrides either
///   weight with 0.1;
/// * a reading below [`STANDSTILL_THRESHOLD`] returns 0 outright,
///   so the displayed speed does not linger above zero after a stop.
///
/// Thresholds are in the caller's speed unit; they were tuned for
/// km/h. The function keeps no state: the caller feeds the returned
/// value back as `last_speed` on the next fix.
///
/// # Arguments
/// * `last_speed` - The previously returned smoothed speed.
/// * `current_speed` - The speed derived from the newest fix.
/// * `direction_change` - Heading delta since the last fix, in degrees.
/// * `accuracy` - Reported accuracy radius of the newest fix, in meters.
///
/// # Returns
/// The smoothed speed, bounded between `last_speed` and
/// `current_speed` except when the standstill override fires.
pub fn dynamic_smoothing(
    last_speed: f64,
    current_speed: f64,
    direction_change: f64,
    accuracy: f64,
) -> f64 {
    if current_speed < STANDSTILL_THRESHOLD {
        trace!("standstill override: current_speed = {current_speed}");
        return 0.0;
    }

    let direction_weight = if direction_change > TURN_THRESHOLD_DEGREES {
        0.2
    } else {
        0.5
    };
    let accuracy_weight = if accuracy > POOR_ACCURACY_METERS {
        0.1
    } else {
        direction_weight
    };

    last_speed * (1.0 - accuracy_weight) + current_speed * accuracy_weight
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
