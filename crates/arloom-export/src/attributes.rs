use std::collections::BTreeMap;

use arloom_core::{ArloomError, ArloomResult, Duration, Pose, Vec3};
use arloom_scene::{AnimationSpec, EffectSettings, Keyframe, KeyframeTrack, Layer, SpecialEffect};

/// Attribute names of the flat per-layer serialization format.
pub mod names {
    pub const ANIMATION_ENABLED: &str = "animation-enabled";
    pub const SPECIAL_EFFECT: &str = "special-effect";
    pub const ANIMATION_SPEED: &str = "animation-speed";
    pub const ANIMATION_DURATION: &str = "animation-duration";
    pub const LOOP_ANIMATION: &str = "loop-animation";
    pub const CUSTOM_START: &str = "custom-start";
    pub const CUSTOM_END: &str = "custom-end";
    pub const SPECIAL_SETTINGS: &str = "special-settings";
    pub const ORIGINAL_POSITION: &str = "original-position";
    pub const ORIGINAL_ROTATION: &str = "original-rotation";
    pub const ORIGINAL_SCALE: &str = "original-scale";
    pub const ORIGINAL_OPACITY: &str = "original-opacity";
}

/// A layer's animation configuration flattened into named string attributes —
/// exactly what lands on the exported scene node, and the only thing the
/// exported runtime is allowed to read.
///
/// Keyframe and settings payloads are JSON with rotation in degrees (the
/// authored unit); the original-rotation payload is the live pose's radians.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerAttributes {
    values: BTreeMap<String, String>,
}

impl LayerAttributes {
    /// Serialize a layer's configuration into the attribute set.
    pub fn from_layer(layer: &Layer) -> ArloomResult<Self> {
        let spec = &layer.animation;
        let mut attrs = LayerAttributes::default();
        attrs.set(names::ANIMATION_ENABLED, spec.enable_keyframes.to_string());
        attrs.set(names::SPECIAL_EFFECT, spec.effect.to_string());
        attrs.set(names::ANIMATION_SPEED, spec.speed.to_string());
        attrs.set(
            names::ANIMATION_DURATION,
            spec.duration.as_seconds().to_string(),
        );
        attrs.set(names::LOOP_ANIMATION, spec.looped.to_string());
        attrs.set(names::CUSTOM_START, serde_json::to_string(&spec.track.start)?);
        attrs.set(names::CUSTOM_END, serde_json::to_string(&spec.track.end)?);
        attrs.set(names::SPECIAL_SETTINGS, serde_json::to_string(&spec.settings)?);
        attrs.set(
            names::ORIGINAL_POSITION,
            serde_json::to_string(&layer.base.position)?,
        );
        attrs.set(
            names::ORIGINAL_ROTATION,
            serde_json::to_string(&layer.base.rotation)?,
        );
        attrs.set(
            names::ORIGINAL_SCALE,
            serde_json::to_string(&layer.base.scale)?,
        );
        attrs.set(names::ORIGINAL_OPACITY, layer.base.opacity.to_string());
        Ok(attrs)
    }

    /// Set one attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up one attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterate `(name, value)` pairs in stable (sorted) order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reassemble the animation configuration from the attributes.
    ///
    /// Scalar attributes are required — a missing or unparsable one fails
    /// this layer (and only this layer). The JSON payloads degrade instead:
    /// malformed settings fall back to the documented defaults, malformed
    /// keyframes to the identity endpoints, each with a warning. The result
    /// is clamped, so the clock's strictly-positive invariant survives
    /// hand-edited attributes.
    pub fn to_spec(&self) -> ArloomResult<AnimationSpec> {
        let enable_keyframes = self.required_bool(names::ANIMATION_ENABLED)?;
        let effect: SpecialEffect = self.required(names::SPECIAL_EFFECT)?.parse()?;
        let speed = self.required_f64(names::ANIMATION_SPEED)?;
        let duration = self.required_f64(names::ANIMATION_DURATION)?;
        let looped = self.required_bool(names::LOOP_ANIMATION)?;

        let settings: EffectSettings = self
            .json_or(names::SPECIAL_SETTINGS)
            .unwrap_or_else(EffectSettings::default);
        let start: Keyframe = self
            .json_or(names::CUSTOM_START)
            .unwrap_or_else(Keyframe::identity);
        let end: Keyframe = self
            .json_or(names::CUSTOM_END)
            .unwrap_or_else(Keyframe::identity);

        let spec = AnimationSpec {
            enable_keyframes,
            effect,
            speed,
            duration: Duration::from_seconds(duration),
            looped,
            track: KeyframeTrack::new(start, end),
            settings,
        };
        Ok(spec.clamped())
    }

    /// Reassemble the layer's base pose from the attributes.
    pub fn base_pose(&self) -> ArloomResult<Pose> {
        let position: Vec3 = self.required_json(names::ORIGINAL_POSITION)?;
        let rotation: Vec3 = self.required_json(names::ORIGINAL_ROTATION)?;
        let scale: Vec3 = self.required_json(names::ORIGINAL_SCALE)?;
        let opacity = self.required_f64(names::ORIGINAL_OPACITY)?;
        Ok(Pose {
            position,
            rotation,
            scale,
            opacity,
        })
    }

    fn required(&self, name: &str) -> ArloomResult<&str> {
        self.get(name)
            .ok_or_else(|| ArloomError::attribute(name, "missing"))
    }

    fn required_f64(&self, name: &str) -> ArloomResult<f64> {
        let raw = self.required(name)?;
        raw.parse()
            .map_err(|_| ArloomError::attribute(name, format!("not a number: '{raw}'")))
    }

    fn required_bool(&self, name: &str) -> ArloomResult<bool> {
        match self.required(name)? {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ArloomError::attribute(
                name,
                format!("not a boolean: '{other}'"),
            )),
        }
    }

    fn required_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> ArloomResult<T> {
        let raw = self.required(name)?;
        serde_json::from_str(raw).map_err(|e| ArloomError::attribute(name, e.to_string()))
    }

    /// Parse a degradable JSON payload; None (with a warning) on failure.
    fn json_or<T: serde::de::DeserializeOwned>(&self, name: &str) -> Option<T> {
        let raw = self.get(name)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(attribute = name, error = %e, "falling back to defaults");
                None
            }
        }
    }
}
