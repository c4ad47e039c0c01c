//=========================================================================
// Easing Functions
//=========================================================================
//
// Interpolation curves for tweens.
//
// Each variant maps normalized time t ∈ [0, 1] to a progress factor.
// All curves satisfy sample(0) == 0 and sample(1) == 1.
//
//=========================================================================

//=== Easing ==============================================================

/// Easing curve applied to a tween's normalized elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    #[default]
    Linear,

    /// Accelerating from zero velocity (t²).
    QuadraticIn,

    /// Decelerating to zero velocity.
    QuadraticOut,

    /// Acceleration until halfway, then deceleration.
    QuadraticInOut,

    /// Accelerating from zero velocity (t³).
    CubicIn,

    /// Decelerating to zero velocity.
    CubicOut,

    /// Acceleration until halfway, then deceleration.
    CubicInOut,
}

impl Easing {
    /// Maps normalized time to eased progress.
    ///
    /// Input outside [0, 1] is clamped before sampling.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => t * (2.0 - t),
            Self::QuadraticInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t
                } else {
                    let t = t - 1.0;
                    -0.5 * (t * (t - 2.0) - 1.0)
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Self::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
