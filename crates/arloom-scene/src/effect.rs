use serde::{Deserialize, Serialize};

use arloom_core::ArloomError;

use crate::validate::clamp;

/// The parametric motion effect attached to a layer, or `None`.
///
/// Serialized names are the wire names used in exported attributes and
/// project files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialEffect {
    None,
    SwingToTarget,
    ZigzagToTarget,
    PendulumMove,
    WaveToTarget,
    ElasticMove,
    SlideDown,
    SlideUp,
    SlideLeft,
    SlideRight,
    FadeIn,
    ScaleIn,
    Rotate,
    Bounce,
    Spiral,
}

impl SpecialEffect {
    /// All effects, in catalogue order.
    pub const ALL: [SpecialEffect; 15] = [
        SpecialEffect::None,
        SpecialEffect::SwingToTarget,
        SpecialEffect::ZigzagToTarget,
        SpecialEffect::PendulumMove,
        SpecialEffect::WaveToTarget,
        SpecialEffect::ElasticMove,
        SpecialEffect::SlideDown,
        SpecialEffect::SlideUp,
        SpecialEffect::SlideLeft,
        SpecialEffect::SlideRight,
        SpecialEffect::FadeIn,
        SpecialEffect::ScaleIn,
        SpecialEffect::Rotate,
        SpecialEffect::Bounce,
        SpecialEffect::Spiral,
    ];

    /// The wire name of the effect ("swingToTarget", "none", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialEffect::None => "none",
            SpecialEffect::SwingToTarget => "swingToTarget",
            SpecialEffect::ZigzagToTarget => "zigzagToTarget",
            SpecialEffect::PendulumMove => "pendulumMove",
            SpecialEffect::WaveToTarget => "waveToTarget",
            SpecialEffect::ElasticMove => "elasticMove",
            SpecialEffect::SlideDown => "slideDown",
            SpecialEffect::SlideUp => "slideUp",
            SpecialEffect::SlideLeft => "slideLeft",
            SpecialEffect::SlideRight => "slideRight",
            SpecialEffect::FadeIn => "fadeIn",
            SpecialEffect::ScaleIn => "scaleIn",
            SpecialEffect::Rotate => "rotate",
            SpecialEffect::Bounce => "bounce",
            SpecialEffect::Spiral => "spiral",
        }
    }

    /// True for the no-op effect.
    pub fn is_none(&self) -> bool {
        matches!(self, SpecialEffect::None)
    }
}

impl Default for SpecialEffect {
    fn default() -> Self {
        SpecialEffect::None
    }
}

impl std::fmt::Display for SpecialEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpecialEffect {
    type Err = ArloomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpecialEffect::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ArloomError::UnknownEffect(s.to_string()))
    }
}

/// Per-effect tuning parameters — one flat record per layer, every field
/// independently clamped to its documented range at commit time.
///
/// Angle-typed fields (`swing_range`, `pendulum_range`) are in degrees;
/// amplitudes and target offsets are in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectSettings {
    pub swing_range: f64,
    pub swing_freq: f64,
    pub swing_target_x: f64,
    pub zigzag_amp: f64,
    pub zigzag_freq: f64,
    pub zigzag_target_x: f64,
    pub zigzag_target_y: f64,
    pub pendulum_range: f64,
    pub pendulum_speed: f64,
    pub wave_amp: f64,
    pub wave_freq: f64,
    pub wave_target_x: f64,
    pub wave_target_y: f64,
    pub bounce_height: f64,
    pub bounce_freq: f64,
    pub spiral_radius: f64,
    pub spiral_rotations: f64,
    pub slide_distance: f64,
    pub rotate_cycles: f64,
}

/// Valid range per settings field, `(min, max)`.
pub mod ranges {
    pub const SWING_RANGE: (f64, f64) = (10.0, 180.0);
    pub const SWING_FREQ: (f64, f64) = (2.0, 16.0);
    pub const SWING_TARGET_X: (f64, f64) = (0.0, 10.0);
    pub const ZIGZAG_AMP: (f64, f64) = (0.5, 5.0);
    pub const ZIGZAG_FREQ: (f64, f64) = (2.0, 12.0);
    pub const ZIGZAG_TARGET_X: (f64, f64) = (0.0, 10.0);
    pub const ZIGZAG_TARGET_Y: (f64, f64) = (0.0, 10.0);
    pub const PENDULUM_RANGE: (f64, f64) = (10.0, 120.0);
    pub const PENDULUM_SPEED: (f64, f64) = (0.5, 5.0);
    pub const WAVE_AMP: (f64, f64) = (0.5, 5.0);
    pub const WAVE_FREQ: (f64, f64) = (1.0, 10.0);
    pub const WAVE_TARGET_X: (f64, f64) = (0.0, 10.0);
    pub const WAVE_TARGET_Y: (f64, f64) = (0.0, 10.0);
    pub const BOUNCE_HEIGHT: (f64, f64) = (0.5, 10.0);
    pub const BOUNCE_FREQ: (f64, f64) = (1.0, 10.0);
    pub const SPIRAL_RADIUS: (f64, f64) = (1.0, 10.0);
    pub const SPIRAL_ROTATIONS: (f64, f64) = (1.0, 15.0);
    pub const SLIDE_DISTANCE: (f64, f64) = (2.0, 20.0);
    pub const ROTATE_CYCLES: (f64, f64) = (0.25, 5.0);
}

impl EffectSettings {
    /// A copy with every field clamped to its documented range.
    /// NaN inputs collapse to the range minimum.
    pub fn clamped(&self) -> Self {
        use ranges::*;
        let c = |v: f64, (min, max): (f64, f64)| clamp(v, min, max);
        Self {
            swing_range: c(self.swing_range, SWING_RANGE),
            swing_freq: c(self.swing_freq, SWING_FREQ),
            swing_target_x: c(self.swing_target_x, SWING_TARGET_X),
            zigzag_amp: c(self.zigzag_amp, ZIGZAG_AMP),
            zigzag_freq: c(self.zigzag_freq, ZIGZAG_FREQ),
            zigzag_target_x: c(self.zigzag_target_x, ZIGZAG_TARGET_X),
            zigzag_target_y: c(self.zigzag_target_y, ZIGZAG_TARGET_Y),
            pendulum_range: c(self.pendulum_range, PENDULUM_RANGE),
            pendulum_speed: c(self.pendulum_speed, PENDULUM_SPEED),
            wave_amp: c(self.wave_amp, WAVE_AMP),
            wave_freq: c(self.wave_freq, WAVE_FREQ),
            wave_target_x: c(self.wave_target_x, WAVE_TARGET_X),
            wave_target_y: c(self.wave_target_y, WAVE_TARGET_Y),
            bounce_height: c(self.bounce_height, BOUNCE_HEIGHT),
            bounce_freq: c(self.bounce_freq, BOUNCE_FREQ),
            spiral_radius: c(self.spiral_radius, SPIRAL_RADIUS),
            spiral_rotations: c(self.spiral_rotations, SPIRAL_ROTATIONS),
            slide_distance: c(self.slide_distance, SLIDE_DISTANCE),
            rotate_cycles: c(self.rotate_cycles, ROTATE_CYCLES),
        }
    }

    /// True if every field already lies within its documented range.
    pub fn is_valid(&self) -> bool {
        *self == self.clamped()
    }
}

impl Default for EffectSettings {
    /// The settings a freshly created layer starts with, and the record the
    /// exported page falls back to when its serialized settings fail to parse.
    fn default() -> Self {
        Self {
            swing_range: 90.0,
            swing_freq: 8.0,
            swing_target_x: 5.0,
            zigzag_amp: 2.0,
            zigzag_freq: 6.0,
            zigzag_target_x: 5.0,
            zigzag_target_y: 3.0,
            pendulum_range: 60.0,
            pendulum_speed: 2.0,
            wave_amp: 1.5,
            wave_freq: 4.0,
            wave_target_x: 4.0,
            wave_target_y: 2.0,
            bounce_height: 2.0,
            bounce_freq: 4.0,
            spiral_radius: 3.0,
            spiral_rotations: 6.0,
            slide_distance: 10.0,
            rotate_cycles: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_effect_name_round_trip() {
        for effect in SpecialEffect::ALL {
            assert_eq!(SpecialEffect::from_str(effect.as_str()).unwrap(), effect);
        }
    }

    #[test]
    fn test_effect_unknown_name() {
        assert!(SpecialEffect::from_str("wobble").is_err());
    }

    #[test]
    fn test_effect_serde_names() {
        let json = serde_json::to_string(&SpecialEffect::SwingToTarget).unwrap();
        assert_eq!(json, "\"swingToTarget\"");
        let json = serde_json::to_string(&SpecialEffect::None).unwrap();
        assert_eq!(json, "\"none\"");
    }

    #[test]
    fn test_defaults_are_in_range() {
        assert!(EffectSettings::default().is_valid());
    }

    #[test]
    fn test_clamped_pins_out_of_range_fields() {
        let mut settings = EffectSettings::default();
        settings.swing_range = 999.0;
        settings.zigzag_amp = -3.0;
        settings.rotate_cycles = f64::NAN;
        let clamped = settings.clamped();
        assert_eq!(clamped.swing_range, 180.0);
        assert_eq!(clamped.zigzag_amp, 0.5);
        // NaN collapses to the range minimum.
        assert_eq!(clamped.rotate_cycles, 0.25);
        // Untouched fields pass through.
        assert_eq!(clamped.bounce_height, 2.0);
    }

    #[test]
    fn test_settings_json_field_names() {
        let json = serde_json::to_string(&EffectSettings::default()).unwrap();
        assert!(json.contains("\"swingRange\":90.0"));
        assert!(json.contains("\"slideDistance\":10.0"));
    }
}
