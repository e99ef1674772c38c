//! # arloom-export
//!
//! The serialization boundary of the Arloom engine. A layer's animation
//! configuration is flattened into a human-readable attribute set, embedded
//! in marker-anchored AR scene markup, and replayed by [`runtime`] — a
//! freestanding, timer-driven evaluator that reads configuration back out of
//! those attributes with no access to the in-memory model. Both playback
//! paths call the same pure evaluator in `arloom-anim`, so a serialized
//! scene animates exactly like the live editor did.

pub mod attributes;
pub mod markup;
pub mod runtime;

pub use attributes::LayerAttributes;
pub use markup::{layer_entity, scene_fragment};
pub use runtime::{ExportRuntime, SceneNode, TICK_INTERVAL_MS};
