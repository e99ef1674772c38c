//! # arloom-scene
//!
//! The Arloom scene model — layers with base poses and per-layer animation
//! configuration. This is the canonical data the live evaluator and the
//! exported attribute-driven evaluator both consume.

pub mod animation;
pub mod effect;
pub mod layer;
pub mod project;
pub mod validate;

pub use animation::{AnimationSpec, Keyframe, KeyframeTrack};
pub use effect::{EffectSettings, SpecialEffect};
pub use layer::{Layer, LayerId};
pub use project::{CameraPose, Project, ProjectSettings};
pub use validate::{clamp, validate_project};
