use serde::{Deserialize, Serialize};

use arloom_core::math::deg_to_rad;
use arloom_core::{Pose, Vec3};

use crate::animation::{keyframe_ranges, AnimationSpec, KeyframeTrack};
use crate::effect::EffectSettings;
use crate::validate::clamp;

/// Unique identifier for a layer. Allocated by the project from a monotonic
/// counter; never reused within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A layer in the composition — one animated image plane with its own base
/// pose and animation configuration.
///
/// The base pose is what direct user edits mutate; the animation evaluator
/// never writes it, only the renderable's live pose derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Unique layer identifier.
    pub id: LayerId,
    /// Display name (the source image's file name in the editor).
    pub name: String,
    /// The pose when no animation is active. Rotation in radians.
    pub base: Pose,
    /// Animation configuration. All committed fields are in range.
    pub animation: AnimationSpec,
    /// Last raw (pre-clamp) settings input, kept for UI redisplay only.
    /// The evaluator must never read this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_settings: Option<EffectSettings>,
    /// Last raw (pre-clamp) keyframe input, kept for UI redisplay only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_track: Option<KeyframeTrack>,
}

impl Layer {
    /// Create a new layer with the given id and name at the default pose.
    pub fn new(id: LayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            base: Pose::identity(),
            animation: AnimationSpec::default(),
            raw_settings: None,
            raw_track: None,
        }
    }

    /// Builder: set the base position.
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.set_position(x, y, z);
        self
    }

    /// Builder: set the base opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.set_opacity(opacity);
        self
    }

    /// Builder: set the animation configuration (committed clamped).
    pub fn with_animation(mut self, spec: AnimationSpec) -> Self {
        self.animation = spec.clamped();
        self
    }

    /// Direct edit: move the layer. Axes clamp to the editor range.
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        let (min, max) = keyframe_ranges::POSITION;
        self.base.position = Vec3::new(clamp(x, min, max), clamp(y, min, max), clamp(z, min, max));
    }

    /// Direct edit: rotate the layer. Input in degrees (the editor's unit),
    /// stored in radians.
    pub fn set_rotation_degrees(&mut self, x: f64, y: f64, z: f64) {
        let (min, max) = keyframe_ranges::ROTATION;
        self.base.rotation = Vec3::new(
            deg_to_rad(clamp(x, min, max)),
            deg_to_rad(clamp(y, min, max)),
            deg_to_rad(clamp(z, min, max)),
        );
    }

    /// Direct edit: uniformly scale the layer.
    pub fn set_uniform_scale(&mut self, scale: f64) {
        let (min, max) = keyframe_ranges::SCALE;
        self.base.scale = Vec3::splat(clamp(scale, min, max));
    }

    /// Direct edit: set the layer's opacity.
    pub fn set_opacity(&mut self, opacity: f64) {
        let (min, max) = keyframe_ranges::OPACITY;
        self.base.opacity = clamp(opacity, min, max);
    }

    /// Commit an effect-settings edit: the clamped record is stored for the
    /// evaluator, the raw record retained for redisplay.
    pub fn commit_effect_settings(&mut self, raw: EffectSettings) {
        self.animation.settings = raw.clamped();
        self.raw_settings = Some(raw);
    }

    /// Commit a keyframe edit: clamped endpoints stored, raw retained.
    pub fn commit_track(&mut self, raw: KeyframeTrack) {
        self.animation.track = raw.clamped();
        self.raw_track = Some(raw);
    }

    /// Commit speed/duration edits, clamped strictly positive.
    pub fn commit_timing(&mut self, speed: f64, duration_seconds: f64) {
        use crate::animation::{DURATION_RANGE, SPEED_RANGE};
        self.animation.speed = clamp(speed, SPEED_RANGE.0, SPEED_RANGE.1);
        self.animation.duration = arloom_core::Duration::from_seconds(clamp(
            duration_seconds,
            DURATION_RANGE.0,
            DURATION_RANGE.1,
        ));
    }
}
