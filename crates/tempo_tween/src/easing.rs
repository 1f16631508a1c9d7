//! Easing curves for tweens
//!
//! Pure progress-shaping functions: each curve maps linear progress
//! `t` in [0, 1] to eased progress. Every `InOut*` variant is the symmetric
//! composition of its `In*` and `Out*` halves, so the curve families stay
//! consistent with each other.

use std::f32::consts::PI;

use crate::error::{Result, TweenError};

/// Easing curve selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EaseKind {
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
    InElasticOvershoot,
    OutElasticOvershoot,
    InOutElasticOvershoot,
    InSinusoidal,
    OutSinusoidal,
    InOutSinusoidal,
}

impl EaseKind {
    /// Every curve, in declaration order.
    pub const ALL: [EaseKind; 37] = [
        EaseKind::Linear,
        EaseKind::InSine,
        EaseKind::OutSine,
        EaseKind::InOutSine,
        EaseKind::InQuad,
        EaseKind::OutQuad,
        EaseKind::InOutQuad,
        EaseKind::InCubic,
        EaseKind::OutCubic,
        EaseKind::InOutCubic,
        EaseKind::InQuart,
        EaseKind::OutQuart,
        EaseKind::InOutQuart,
        EaseKind::InQuint,
        EaseKind::OutQuint,
        EaseKind::InOutQuint,
        EaseKind::InExpo,
        EaseKind::OutExpo,
        EaseKind::InOutExpo,
        EaseKind::InCirc,
        EaseKind::OutCirc,
        EaseKind::InOutCirc,
        EaseKind::InElastic,
        EaseKind::OutElastic,
        EaseKind::InOutElastic,
        EaseKind::InBack,
        EaseKind::OutBack,
        EaseKind::InOutBack,
        EaseKind::InBounce,
        EaseKind::OutBounce,
        EaseKind::InOutBounce,
        EaseKind::InElasticOvershoot,
        EaseKind::OutElasticOvershoot,
        EaseKind::InOutElasticOvershoot,
        EaseKind::InSinusoidal,
        EaseKind::OutSinusoidal,
        EaseKind::InOutSinusoidal,
    ];

    /// Apply the curve to a progress value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            EaseKind::Linear => t,
            EaseKind::InSine => in_sine(t),
            EaseKind::OutSine => out_sine(t),
            EaseKind::InOutSine => in_out(t, in_sine, out_sine),
            EaseKind::InQuad => in_quad(t),
            EaseKind::OutQuad => out_quad(t),
            EaseKind::InOutQuad => in_out(t, in_quad, out_quad),
            EaseKind::InCubic => in_cubic(t),
            EaseKind::OutCubic => out_cubic(t),
            EaseKind::InOutCubic => in_out(t, in_cubic, out_cubic),
            EaseKind::InQuart => in_quart(t),
            EaseKind::OutQuart => out_quart(t),
            EaseKind::InOutQuart => in_out(t, in_quart, out_quart),
            EaseKind::InQuint => in_quint(t),
            EaseKind::OutQuint => out_quint(t),
            EaseKind::InOutQuint => in_out(t, in_quint, out_quint),
            EaseKind::InExpo => in_expo(t),
            EaseKind::OutExpo => out_expo(t),
            EaseKind::InOutExpo => in_out(t, in_expo, out_expo),
            EaseKind::InCirc => in_circ(t),
            EaseKind::OutCirc => out_circ(t),
            EaseKind::InOutCirc => in_out(t, in_circ, out_circ),
            EaseKind::InElastic => in_elastic(t),
            EaseKind::OutElastic => out_elastic(t),
            EaseKind::InOutElastic => in_out(t, in_elastic, out_elastic),
            EaseKind::InBack => in_back(t),
            EaseKind::OutBack => out_back(t),
            EaseKind::InOutBack => in_out(t, in_back, out_back),
            EaseKind::InBounce => in_bounce(t),
            EaseKind::OutBounce => out_bounce(t),
            EaseKind::InOutBounce => in_out(t, in_bounce, out_bounce),
            EaseKind::InElasticOvershoot => in_elastic_overshoot(t),
            EaseKind::OutElasticOvershoot => out_elastic_overshoot(t),
            EaseKind::InOutElasticOvershoot => {
                in_out(t, in_elastic_overshoot, out_elastic_overshoot)
            }
            EaseKind::InSinusoidal => in_sine(t),
            EaseKind::OutSinusoidal => out_sine(t),
            EaseKind::InOutSinusoidal => in_out(t, in_sine, out_sine),
        }
    }

    /// Look up a curve by its snake_case name.
    ///
    /// This is the dispatch surface for hosts that select easings from data
    /// (config files, editor fields); unknown names are rejected instead of
    /// silently falling back to linear.
    pub fn from_name(name: &str) -> Result<Self> {
        let kind = match name {
            "linear" => EaseKind::Linear,
            "in_sine" => EaseKind::InSine,
            "out_sine" => EaseKind::OutSine,
            "in_out_sine" => EaseKind::InOutSine,
            "in_quad" => EaseKind::InQuad,
            "out_quad" => EaseKind::OutQuad,
            "in_out_quad" => EaseKind::InOutQuad,
            "in_cubic" => EaseKind::InCubic,
            "out_cubic" => EaseKind::OutCubic,
            "in_out_cubic" => EaseKind::InOutCubic,
            "in_quart" => EaseKind::InQuart,
            "out_quart" => EaseKind::OutQuart,
            "in_out_quart" => EaseKind::InOutQuart,
            "in_quint" => EaseKind::InQuint,
            "out_quint" => EaseKind::OutQuint,
            "in_out_quint" => EaseKind::InOutQuint,
            "in_expo" => EaseKind::InExpo,
            "out_expo" => EaseKind::OutExpo,
            "in_out_expo" => EaseKind::InOutExpo,
            "in_circ" => EaseKind::InCirc,
            "out_circ" => EaseKind::OutCirc,
            "in_out_circ" => EaseKind::InOutCirc,
            "in_elastic" => EaseKind::InElastic,
            "out_elastic" => EaseKind::OutElastic,
            "in_out_elastic" => EaseKind::InOutElastic,
            "in_back" => EaseKind::InBack,
            "out_back" => EaseKind::OutBack,
            "in_out_back" => EaseKind::InOutBack,
            "in_bounce" => EaseKind::InBounce,
            "out_bounce" => EaseKind::OutBounce,
            "in_out_bounce" => EaseKind::InOutBounce,
            "in_elastic_overshoot" => EaseKind::InElasticOvershoot,
            "out_elastic_overshoot" => EaseKind::OutElasticOvershoot,
            "in_out_elastic_overshoot" => EaseKind::InOutElasticOvershoot,
            "in_sinusoidal" => EaseKind::InSinusoidal,
            "out_sinusoidal" => EaseKind::OutSinusoidal,
            "in_out_sinusoidal" => EaseKind::InOutSinusoidal,
            _ => return Err(TweenError::UnsupportedEase(name.to_owned())),
        };
        Ok(kind)
    }

    /// The snake_case name `from_name` resolves.
    pub fn name(&self) -> &'static str {
        match self {
            EaseKind::Linear => "linear",
            EaseKind::InSine => "in_sine",
            EaseKind::OutSine => "out_sine",
            EaseKind::InOutSine => "in_out_sine",
            EaseKind::InQuad => "in_quad",
            EaseKind::OutQuad => "out_quad",
            EaseKind::InOutQuad => "in_out_quad",
            EaseKind::InCubic => "in_cubic",
            EaseKind::OutCubic => "out_cubic",
            EaseKind::InOutCubic => "in_out_cubic",
            EaseKind::InQuart => "in_quart",
            EaseKind::OutQuart => "out_quart",
            EaseKind::InOutQuart => "in_out_quart",
            EaseKind::InQuint => "in_quint",
            EaseKind::OutQuint => "out_quint",
            EaseKind::InOutQuint => "in_out_quint",
            EaseKind::InExpo => "in_expo",
            EaseKind::OutExpo => "out_expo",
            EaseKind::InOutExpo => "in_out_expo",
            EaseKind::InCirc => "in_circ",
            EaseKind::OutCirc => "out_circ",
            EaseKind::InOutCirc => "in_out_circ",
            EaseKind::InElastic => "in_elastic",
            EaseKind::OutElastic => "out_elastic",
            EaseKind::InOutElastic => "in_out_elastic",
            EaseKind::InBack => "in_back",
            EaseKind::OutBack => "out_back",
            EaseKind::InOutBack => "in_out_back",
            EaseKind::InBounce => "in_bounce",
            EaseKind::OutBounce => "out_bounce",
            EaseKind::InOutBounce => "in_out_bounce",
            EaseKind::InElasticOvershoot => "in_elastic_overshoot",
            EaseKind::OutElasticOvershoot => "out_elastic_overshoot",
            EaseKind::InOutElasticOvershoot => "in_out_elastic_overshoot",
            EaseKind::InSinusoidal => "in_sinusoidal",
            EaseKind::OutSinusoidal => "out_sinusoidal",
            EaseKind::InOutSinusoidal => "in_out_sinusoidal",
        }
    }
}

/// Symmetric In/Out composition: first half is the In curve on the doubled
/// progress, halved; second half is the Out curve shifted up by one half.
/// Endpoints stay exact regardless of the halves.
fn in_out(t: f32, ease_in: fn(f32) -> f32, ease_out: fn(f32) -> f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        ease_in(t / 0.5) / 2.0
    } else {
        0.5 + ease_out((t - 0.5) / 0.5) / 2.0
    }
}

fn in_sine(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

fn out_sine(t: f32) -> f32 {
    (t * PI / 2.0).sin()
}

fn in_quad(t: f32) -> f32 {
    t * t
}

fn out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

fn in_cubic(t: f32) -> f32 {
    t * t * t
}

fn out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn in_quart(t: f32) -> f32 {
    t * t * t * t
}

fn out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

fn in_quint(t: f32) -> f32 {
    t * t * t * t * t
}

fn out_quint(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(5)
}

fn in_expo(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * (t - 1.0))
    }
}

fn out_expo(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

fn in_circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

fn out_circ(t: f32) -> f32 {
    (1.0 - (t - 1.0) * (t - 1.0)).sqrt()
}

fn in_elastic(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(10.0 * (t - 1.0)) * ((t - 1.1) * -5.0 * PI).sin()
    }
}

fn out_elastic(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * t) * ((t - 0.1) * 5.0 * PI).sin() + 1.0
    }
}

fn in_back(t: f32) -> f32 {
    t * t * t - t * (t * PI).sin()
}

fn out_back(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t) - (t * PI).sin()
}

fn in_bounce(t: f32) -> f32 {
    1.0 - out_bounce(1.0 - t)
}

fn out_bounce(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Elastic with 1.5x amplitude on the spring term.
fn in_elastic_overshoot(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(10.0 * (t - 1.0)) * ((t - 1.1) * -5.0 * PI).sin() * 1.5
    }
}

fn out_elastic_overshoot(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * t) * ((t - 0.1) * 5.0 * PI).sin() * 1.5 + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_endpoints_anchor_every_curve() {
        for kind in EaseKind::ALL {
            assert!(
                kind.apply(0.0).abs() < TOLERANCE,
                "{}: apply(0) = {}",
                kind.name(),
                kind.apply(0.0)
            );
            assert!(
                (kind.apply(1.0) - 1.0).abs() < TOLERANCE,
                "{}: apply(1) = {}",
                kind.name(),
                kind.apply(1.0)
            );
        }
    }

    #[test]
    fn test_guarded_curves_hit_endpoints_exactly() {
        let guarded = [
            EaseKind::InExpo,
            EaseKind::OutExpo,
            EaseKind::InElastic,
            EaseKind::OutElastic,
            EaseKind::InElasticOvershoot,
            EaseKind::OutElasticOvershoot,
            EaseKind::InOutSine,
            EaseKind::InOutExpo,
            EaseKind::InOutElastic,
            EaseKind::InOutBounce,
        ];
        for kind in guarded {
            assert_eq!(kind.apply(0.0), 0.0, "{}", kind.name());
            assert_eq!(kind.apply(1.0), 1.0, "{}", kind.name());
        }
    }

    #[test]
    fn test_linear_is_identity() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(EaseKind::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_in_out_composition_law() {
        let families = [
            (EaseKind::InSine, EaseKind::OutSine, EaseKind::InOutSine),
            (EaseKind::InQuad, EaseKind::OutQuad, EaseKind::InOutQuad),
            (EaseKind::InCubic, EaseKind::OutCubic, EaseKind::InOutCubic),
            (EaseKind::InQuart, EaseKind::OutQuart, EaseKind::InOutQuart),
            (EaseKind::InQuint, EaseKind::OutQuint, EaseKind::InOutQuint),
            (EaseKind::InExpo, EaseKind::OutExpo, EaseKind::InOutExpo),
            (EaseKind::InCirc, EaseKind::OutCirc, EaseKind::InOutCirc),
            (
                EaseKind::InElastic,
                EaseKind::OutElastic,
                EaseKind::InOutElastic,
            ),
            (EaseKind::InBack, EaseKind::OutBack, EaseKind::InOutBack),
            (
                EaseKind::InBounce,
                EaseKind::OutBounce,
                EaseKind::InOutBounce,
            ),
        ];
        for (ease_in, ease_out, in_out) in families {
            for t in [0.1, 0.25, 0.4, 0.6, 0.75, 0.9] {
                let expected = if t < 0.5 {
                    ease_in.apply(t * 2.0) / 2.0
                } else {
                    0.5 + ease_out.apply(t * 2.0 - 1.0) / 2.0
                };
                assert!(
                    (in_out.apply(t) - expected).abs() < 1e-6,
                    "{} at t={}",
                    in_out.name(),
                    t
                );
            }
        }
    }

    #[test]
    fn test_overshoot_families_leave_unit_range() {
        // Back dips below zero early, elastic rings past one near the end.
        assert!(EaseKind::InBack.apply(0.3) < 0.0);
        assert!(EaseKind::OutElastic.apply(0.15) > 1.0);
        assert!(EaseKind::OutElasticOvershoot.apply(0.15) > EaseKind::OutElastic.apply(0.15));
    }

    #[test]
    fn test_bounce_segments_meet() {
        // Segment boundaries of the piecewise bounce stay continuous.
        for boundary in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let below = EaseKind::OutBounce.apply(boundary - 1e-4);
            let above = EaseKind::OutBounce.apply(boundary + 1e-4);
            assert!((below - above).abs() < 0.01);
        }
    }

    #[test]
    fn test_sinusoidal_aliases_sine() {
        for t in [0.0, 0.3, 0.5, 0.8, 1.0] {
            assert_eq!(
                EaseKind::InSinusoidal.apply(t),
                EaseKind::InSine.apply(t)
            );
            assert_eq!(
                EaseKind::OutSinusoidal.apply(t),
                EaseKind::OutSine.apply(t)
            );
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for kind in EaseKind::ALL {
            let resolved = EaseKind::from_name(kind.name()).expect(kind.name());
            assert_eq!(resolved, kind);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let err = EaseKind::from_name("in_out_wobble").unwrap_err();
        assert!(matches!(err, TweenError::UnsupportedEase(name) if name == "in_out_wobble"));
    }
}
