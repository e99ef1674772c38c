//! # arloom-core
//!
//! Core types and primitives for the Arloom AR layer engine.
//! This crate contains foundational types shared across all Arloom crates:
//! vectors, poses, easing functions, durations, colors, and error types.

pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod math;
pub mod time;

pub use config::*;

pub use color::Color;
pub use easing::Easing;
pub use error::{ArloomError, ArloomResult};
pub use math::{Pose, Vec3};
pub use time::{Duration, Timestamp};
