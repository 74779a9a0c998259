//! Scalar smoothing helpers (degrees for angles)

/// Linear interpolation with `t` clamped to [0, 1]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Round to two decimals (kills float noise before it reaches the animator)
pub fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// `t` looped into [0, length]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Shortest signed difference target - current, in (-180, 180]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Angle wrapped into [-180, 180)
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negatives
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Critically damped spring toward `target`
///
/// `velocity` is the caller-owned smoothing state. Never overshoots the
/// target: if a step would cross it, output snaps to the target.
/// dt <= 0 returns `current` unchanged.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade-style approximation of e^-x
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// `smooth_damp` over the shortest arc between two angles (degrees)
pub fn smooth_damp_angle(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_clamps_factor() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 3.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(1.23456), 1.23);
        assert_eq!(round_to_hundredths(0.005001), 0.01);
        assert_eq!(round_to_hundredths(4.999), 5.0);
    }

    #[test]
    fn test_delta_angle_takes_short_way() {
        assert_eq!(delta_angle(10.0, 30.0), 20.0);
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(-170.0, 170.0), -20.0);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(720.0 + 45.0), 45.0);
        assert_eq!(wrap_degrees(180.0), -180.0);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        for _ in 0..120 {
            value = smooth_damp(value, 30.0, &mut velocity, 0.12, 1.0 / 60.0);
            assert!(value <= 30.0 + 1e-4, "overshoot: {}", value);
        }
        assert!((value - 30.0).abs() < 0.01, "value = {}", value);
    }

    #[test]
    fn test_smooth_damp_zero_dt_holds() {
        let mut velocity = 3.0;
        assert_eq!(smooth_damp(5.0, 30.0, &mut velocity, 0.12, 0.0), 5.0);
        assert_eq!(velocity, 3.0);
    }

    #[test]
    fn test_smooth_damp_angle_crosses_wrap() {
        // 170 → -170 is a 20 degree turn, not 340
        let mut velocity = 0.0;
        let mut value = 170.0;
        for _ in 0..120 {
            value = smooth_damp_angle(value, -170.0, &mut velocity, 0.12, 1.0 / 60.0);
        }
        assert!((wrap_degrees(value) - (-170.0)).abs() < 0.05, "value = {}", value);
        assert!(value > 170.0, "went the long way: {}", value);
    }
}
