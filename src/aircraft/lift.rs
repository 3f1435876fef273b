//! Lift-off curves: target altitude and pitch as a function of traveled distance.

/// Distance at which pitch peaks when boundaries are fixed.
pub const PITCH_PEAK_DISTANCE: f32 = 12.5;
/// Distance at which the climb levels out when boundaries are fixed.
pub const ASCEND_PHASE_END: f32 = 25.0;

/// Where along the runway the pitch peak and the end of the climb sit.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LiftBoundaries {
    /// Peak at 12.5 and level out at 25 world units, whatever the stop distance.
    #[default]
    Fixed,
    /// Peak at a quarter and level out at half of the stop distance.
    ScaledToStopDistance,
}

impl LiftBoundaries {
    /// Returns `(pitch_peak, ascend_end)` for the given stop distance.
    pub fn resolve(self, stop_distance: f32) -> (f32, f32) {
        match self {
            LiftBoundaries::Fixed => (PITCH_PEAK_DISTANCE, ASCEND_PHASE_END),
            LiftBoundaries::ScaledToStopDistance => (stop_distance * 0.25, stop_distance * 0.5),
        }
    }
}

/// Resolved lift-off curve for one aircraft.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiftCurve {
    pub lift_off_distance: f32,
    pub pitch_peak: f32,
    pub ascend_end: f32,
    pub straighten_height: f32,
    pub max_angle: f32,
}

impl LiftCurve {
    /// Height above home the aircraft should have reached at `distance`.
    pub fn target_altitude(&self, distance: f32) -> f32 {
        let t = progress(self.lift_off_distance, self.ascend_end, distance);
        self.straighten_height * t
    }

    /// Nose-up pitch in degrees the aircraft should hold at `distance`.
    ///
    /// Ramps 0 → max between lift-off and the peak, then max → 0 until the
    /// climb ends.
    pub fn target_pitch(&self, distance: f32) -> f32 {
        if distance < self.lift_off_distance {
            return 0.0;
        }

        let angle = if distance >= self.pitch_peak {
            self.max_angle * (1.0 - progress(self.pitch_peak, self.ascend_end, distance))
        } else {
            self.max_angle * progress(self.lift_off_distance, self.pitch_peak, distance)
        };

        angle.clamp(0.0, self.max_angle.max(0.0))
    }
}

/// Clamped inverse lerp. A degenerate span counts as already complete.
fn progress(start: f32, end: f32, value: f32) -> f32 {
    let span = end - start;
    if span <= f32::EPSILON {
        return if value >= start { 1.0 } else { 0.0 };
    }
    ((value - start) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_curve() -> LiftCurve {
        let (pitch_peak, ascend_end) = LiftBoundaries::Fixed.resolve(50.0);
        LiftCurve {
            lift_off_distance: 5.0,
            pitch_peak,
            ascend_end,
            straighten_height: 5.0,
            max_angle: 20.0,
        }
    }

    #[test]
    fn pitch_hits_boundary_values_exactly() {
        let curve = default_curve();
        assert_eq!(curve.target_pitch(5.0), 0.0);
        assert_eq!(curve.target_pitch(12.5), 20.0);
        assert_eq!(curve.target_pitch(25.0), 0.0);
        assert_eq!(curve.target_pitch(40.0), 0.0);
        assert_eq!(curve.target_pitch(2.0), 0.0);
    }

    #[test]
    fn pitch_ramps_monotonically_on_each_side_of_peak() {
        let curve = default_curve();
        let mut previous = curve.target_pitch(5.0);
        let mut d = 5.0;
        while d < 12.5 {
            let pitch = curve.target_pitch(d);
            assert!(pitch >= previous);
            previous = pitch;
            d += 0.25;
        }

        let mut previous = curve.target_pitch(12.5);
        let mut d = 12.5;
        while d <= 25.0 {
            let pitch = curve.target_pitch(d);
            assert!(pitch <= previous);
            previous = pitch;
            d += 0.25;
        }
    }

    #[test]
    fn altitude_reaches_straighten_height_at_ascend_end() {
        let curve = default_curve();
        assert_eq!(curve.target_altitude(5.0), 0.0);
        assert!((curve.target_altitude(15.0) - 2.5).abs() < 1e-5);
        assert_eq!(curve.target_altitude(25.0), 5.0);
        assert_eq!(curve.target_altitude(60.0), 5.0);
    }

    #[test]
    fn scaled_boundaries_follow_stop_distance() {
        assert_eq!(LiftBoundaries::ScaledToStopDistance.resolve(100.0), (25.0, 50.0));
        assert_eq!(LiftBoundaries::Fixed.resolve(100.0), (12.5, 25.0));
    }

    #[test]
    fn degenerate_span_does_not_divide_by_zero() {
        let curve = LiftCurve {
            lift_off_distance: 12.5,
            ..default_curve()
        };
        assert_eq!(curve.target_pitch(12.5), 20.0);
        assert!(curve.target_pitch(13.0).is_finite());
    }
}
