use serde::{Deserialize, Serialize};

use arloom_core::Duration;

use crate::effect::{EffectSettings, SpecialEffect};
use crate::validate::clamp;

/// An authored endpoint pose for the keyframe blender.
///
/// `rotation` is in degrees here — the authored record keeps the unit the
/// editor exposes; conversion to radians happens once, at evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    pub opacity: f64,
    pub rotation: f64,
}

/// Valid range per keyframe field, `(min, max)`.
pub mod keyframe_ranges {
    pub const POSITION: (f64, f64) = (-15.0, 15.0);
    pub const SCALE: (f64, f64) = (0.1, 5.0);
    pub const OPACITY: (f64, f64) = (0.0, 1.0);
    pub const ROTATION: (f64, f64) = (-360.0, 360.0);
}

impl Keyframe {
    /// The keyframe of a layer at rest: origin, scale 1, opaque, unrotated.
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            scale: 1.0,
            opacity: 1.0,
            rotation: 0.0,
        }
    }

    /// A copy with every field clamped to its documented range.
    pub fn clamped(&self) -> Self {
        use keyframe_ranges::*;
        Self {
            x: clamp(self.x, POSITION.0, POSITION.1),
            y: clamp(self.y, POSITION.0, POSITION.1),
            z: clamp(self.z, POSITION.0, POSITION.1),
            scale: clamp(self.scale, SCALE.0, SCALE.1),
            opacity: clamp(self.opacity, OPACITY.0, OPACITY.1),
            rotation: clamp(self.rotation, ROTATION.0, ROTATION.1),
        }
    }

    /// True if every field already lies within its documented range.
    pub fn is_valid(&self) -> bool {
        *self == self.clamped()
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::identity()
    }
}

/// The authored start/end endpoints the blender interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyframeTrack {
    pub start: Keyframe,
    pub end: Keyframe,
}

impl KeyframeTrack {
    pub fn new(start: Keyframe, end: Keyframe) -> Self {
        Self { start, end }
    }

    /// A copy with both endpoints clamped.
    pub fn clamped(&self) -> Self {
        Self {
            start: self.start.clamped(),
            end: self.end.clamped(),
        }
    }
}

/// Valid range for the animation speed multiplier.
pub const SPEED_RANGE: (f64, f64) = (0.1, 10.0);
/// Valid range for the cycle duration, in seconds.
pub const DURATION_RANGE: (f64, f64) = (0.1, 60.0);

/// A layer's complete animation configuration — everything the evaluator
/// needs besides the base pose and a clock sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Whether the keyframe blender contributes to the final pose.
    pub enable_keyframes: bool,
    /// The attached catalogue effect, or `None`.
    pub effect: SpecialEffect,
    /// Elapsed-time multiplier. Strictly positive (validator-enforced).
    pub speed: f64,
    /// Seconds per cycle. Strictly positive (validator-enforced).
    pub duration: Duration,
    /// Whether progress wraps past 1.0 or holds there.
    pub looped: bool,
    /// Authored keyframe endpoints.
    pub track: KeyframeTrack,
    /// Effect tuning parameters.
    pub settings: EffectSettings,
}

impl AnimationSpec {
    /// True when neither the blender nor an effect would contribute —
    /// evaluating such a spec is a no-op and no handle should be created.
    pub fn is_inert(&self) -> bool {
        !self.enable_keyframes && self.effect.is_none()
    }

    /// A copy with speed, duration, keyframes, and settings clamped to
    /// their documented ranges.
    pub fn clamped(&self) -> Self {
        Self {
            enable_keyframes: self.enable_keyframes,
            effect: self.effect,
            speed: clamp(self.speed, SPEED_RANGE.0, SPEED_RANGE.1),
            duration: Duration::from_seconds(clamp(
                self.duration.as_seconds(),
                DURATION_RANGE.0,
                DURATION_RANGE.1,
            )),
            looped: self.looped,
            track: self.track.clamped(),
            settings: self.settings.clamped(),
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            enable_keyframes: false,
            effect: SpecialEffect::None,
            speed: 1.0,
            duration: Duration::from_seconds(2.0),
            looped: false,
            track: KeyframeTrack::default(),
            settings: EffectSettings::default(),
        }
    }
}
