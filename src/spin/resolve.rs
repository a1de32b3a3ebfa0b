//! Target/resolve math
//!
//! `target_angle` and `resolve_winner` are inverses: the winner resolved
//! from a spin's final angle is the winner the target was computed for.
//! Rounding is round-half-up and `%` keeps the sign of the dividend, so
//! results match a JS renderer driving the same numbers bit for bit.

use crate::consts::*;

/// Round half toward +infinity (`Math.round` semantics)
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Whole extra turns a spin of `duration_ms` makes (one per second)
#[inline]
pub fn extra_turns(duration_ms: f64) -> f64 {
    (duration_ms / 1000.0).floor().max(0.0)
}

/// Total rotation (degrees) that lands `winner` under the pointer.
///
/// `365 - winner * (360 / N) + 360 * extra_turns`
pub fn target_angle(winner: usize, segment_count: usize, duration_ms: f64) -> f64 {
    let angle_by_segment = ONE_TURN / segment_count as f64;
    ONE_TURN + LANDING_NUDGE_DEG - winner as f64 * angle_by_segment
        + ONE_TURN * extra_turns(duration_ms)
}

/// Segment index under the pointer for a wheel rotated by `angle` degrees.
///
/// Negative angles mean the wheel turned counter-clockwise, which flips
/// which segment arrives under the pointer.
pub fn resolve_winner(angle: f64, segment_count: usize, angle_by_segment: f64) -> usize {
    let deg = round_half_up(angle % ONE_TURN).abs();
    let slot = (deg / angle_by_segment).floor() as usize;

    if angle < 0.0 {
        // counter-clockwise
        slot % segment_count
    } else {
        // clockwise
        (segment_count - slot % segment_count) % segment_count
    }
}

/// Knob phase keyframes: (phase, deflection in degrees)
const KNOB_CURVE: [(f64, f64); 6] = [
    (-1.0, 0.0),
    (-0.5, 0.0),
    (-0.0001, KNOB_DEFLECTION_DEG),
    (0.0001, -KNOB_DEFLECTION_DEG),
    (0.5, 0.0),
    (1.0, 0.0),
];

/// Position of the pointer within the current segment, in (-1, 1).
///
/// Zero crossings are segment boundaries passing the pointer.
pub fn knob_phase(angle: f64, angle_by_segment: f64) -> f64 {
    let angle_offset = angle_by_segment / 2.0;
    (((angle - angle_offset) % ONE_TURN) / angle_by_segment) % 1.0
}

/// Knob deflection (degrees) for a phase from `knob_phase`
pub fn knob_deflection(phase: f64) -> f64 {
    interpolate(phase, &KNOB_CURVE)
}

/// Piecewise-linear interpolation over sorted keyframes, clamped at the ends
fn interpolate(x: f64, points: &[(f64, f64)]) -> f64 {
    let (first_x, first_y) = points[0];
    let (last_x, last_y) = points[points.len() - 1];
    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            let t = (x - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    last_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(184.4), 184.0);
    }

    #[test]
    fn test_four_segment_example() {
        let target = target_angle(2, 4, 1000.0);
        assert_eq!(target, 545.0);
        assert_eq!(target % ONE_TURN, 185.0);
        assert_eq!(resolve_winner(target, 4, 90.0), 2);
    }

    #[test]
    fn test_default_duration_adds_ten_turns() {
        assert_eq!(target_angle(0, 4, DEFAULT_DURATION_MS), 365.0 + 3600.0);
        assert_eq!(resolve_winner(365.0 + 3600.0, 4, 90.0), 0);
    }

    #[test]
    fn test_fractional_duration_uses_whole_turns() {
        assert_eq!(target_angle(1, 4, 1500.0), target_angle(1, 4, 1000.0));
        assert_eq!(resolve_winner(target_angle(1, 4, 1500.0), 4, 90.0), 1);
    }

    #[test]
    fn test_clockwise_branch() {
        assert_eq!(resolve_winner(0.0, 4, 90.0), 0);
        assert_eq!(resolve_winner(10.0, 4, 90.0), 0);
        assert_eq!(resolve_winner(95.0, 4, 90.0), 3);
        assert_eq!(resolve_winner(275.0, 4, 90.0), 1);
        // Rounds up onto 360, which wraps to segment 0
        assert_eq!(resolve_winner(359.6, 4, 90.0), 0);
    }

    #[test]
    fn test_counter_clockwise_branch() {
        assert_eq!(resolve_winner(-10.0, 4, 90.0), 0);
        assert_eq!(resolve_winner(-100.0, 4, 90.0), 1);
        assert_eq!(resolve_winner(-545.0, 4, 90.0), 2);
        assert_eq!(resolve_winner(-275.0, 4, 90.0), 3);
        // -359.6 rounds to -360: stays in range
        assert_eq!(resolve_winner(-359.6, 4, 90.0), 0);
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(target_angle(0, 1, 3000.0), 365.0 + 1080.0);
        assert_eq!(resolve_winner(target_angle(0, 1, 3000.0), 1, 360.0), 0);
        assert_eq!(resolve_winner(-42.0, 1, 360.0), 0);
    }

    #[test]
    fn test_knob_phase_range() {
        // Pointer centered on a segment: half way between boundaries
        assert!((knob_phase(0.0, 90.0) + 0.5).abs() < 1e-12);
        // Exactly on a boundary
        assert_eq!(knob_phase(45.0, 90.0), 0.0);
        assert!((knob_phase(90.0, 90.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_knob_deflection_curve() {
        assert_eq!(knob_deflection(0.0), 0.0);
        assert_eq!(knob_deflection(-0.0001), 35.0);
        assert_eq!(knob_deflection(0.0001), -35.0);
        assert_eq!(knob_deflection(0.5), 0.0);
        assert_eq!(knob_deflection(-0.75), 0.0);
        assert!((knob_deflection(0.25) + 17.5).abs() < 0.01);
        // Clamped outside the keyframes
        assert_eq!(knob_deflection(2.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_resolve_inverts_target(
            n in 1usize..=MAX_SEGMENTS,
            pick in any::<prop::sample::Index>(),
            seconds in 0u32..=30,
        ) {
            let winner = pick.index(n);
            let duration_ms = seconds as f64 * 1000.0;
            let target = target_angle(winner, n, duration_ms);
            prop_assert_eq!(resolve_winner(target, n, ONE_TURN / n as f64), winner);
        }

        #[test]
        fn prop_resolve_always_in_range(angle in -1.0e6f64..1.0e6, n in 1usize..=MAX_SEGMENTS) {
            prop_assert!(resolve_winner(angle, n, ONE_TURN / n as f64) < n);
        }

        #[test]
        fn prop_knob_phase_bounded(angle in -1.0e6f64..1.0e6, n in 1usize..=MAX_SEGMENTS) {
            let phase = knob_phase(angle, ONE_TURN / n as f64);
            prop_assert!(phase > -1.0 && phase < 1.0);
        }
    }
}
