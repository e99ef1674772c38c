use std::f64::consts::PI;

use arloom_core::math::deg_to_rad;
use arloom_core::Vec3;
use arloom_scene::{EffectSettings, SpecialEffect};

use crate::clock::CycleSample;

/// What one catalogue effect contributes on top of the blended (or base)
/// pose: additive position/rotation, multiplicative scale/opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectDelta {
    /// Added to the pose position.
    pub position: Vec3,
    /// Added to the pose's z rotation, in radians.
    pub rotation_z: f64,
    /// Multiplied into all three scale axes.
    pub scale: f64,
    /// Multiplied into the opacity.
    pub opacity: f64,
}

impl EffectDelta {
    /// The no-op delta.
    pub fn none() -> Self {
        Self {
            position: Vec3::zero(),
            rotation_z: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// Evaluate one catalogue effect at a clock sample.
///
/// `keyframes_enabled` gates the "to target" displacement terms: when the
/// keyframe blender is already driving position, the swing/zigzag/wave/
/// elastic target offsets are suppressed so the same axis is never driven
/// twice.
pub fn effect_delta(
    effect: SpecialEffect,
    sample: CycleSample,
    settings: &EffectSettings,
    keyframes_enabled: bool,
) -> EffectDelta {
    let CycleSample {
        elapsed,
        progress,
        eased,
    } = sample;
    let mut delta = EffectDelta::none();

    match effect {
        SpecialEffect::None => {}

        SpecialEffect::SwingToTarget => {
            // Oscillation decays as the layer eases toward its target.
            let amplitude = (1.0 - eased) * settings.swing_range;
            let angle = (progress * settings.swing_freq * PI).sin() * amplitude;
            delta.rotation_z += deg_to_rad(angle);
            if !keyframes_enabled {
                delta.position.x += settings.swing_target_x * eased;
            }
        }

        SpecialEffect::ZigzagToTarget => {
            let amplitude = (1.0 - eased) * settings.zigzag_amp;
            delta.position.x += (progress * settings.zigzag_freq * PI).sin() * amplitude;
            if !keyframes_enabled {
                delta.position.x += settings.zigzag_target_x * eased;
                delta.position.y += settings.zigzag_target_y * eased;
            }
        }

        SpecialEffect::PendulumMove => {
            let angle = (elapsed * settings.pendulum_speed).sin() * settings.pendulum_range;
            delta.rotation_z += deg_to_rad(angle);
        }

        SpecialEffect::WaveToTarget => {
            let wave_y =
                (progress * settings.wave_freq * PI).sin() * settings.wave_amp * (1.0 - eased);
            delta.position.y += wave_y;
            delta.rotation_z += wave_y * 0.2;
            if !keyframes_enabled {
                delta.position.x += settings.wave_target_x * eased;
                delta.position.y += settings.wave_target_y * eased;
            }
        }

        SpecialEffect::ElasticMove => {
            delta.scale = 1.0 + (progress * 10.0).sin() * 0.1 * (1.0 - progress);
            if !keyframes_enabled {
                let elastic = elastic_ease(progress);
                delta.position.x += 3.0 * elastic;
                delta.position.y += 3.0 * elastic;
            }
        }

        SpecialEffect::SlideDown => {
            delta.position.y += settings.slide_distance * (1.0 - eased);
        }
        SpecialEffect::SlideUp => {
            delta.position.y -= settings.slide_distance * (1.0 - eased);
        }
        SpecialEffect::SlideLeft => {
            delta.position.x += settings.slide_distance * (1.0 - eased);
        }
        SpecialEffect::SlideRight => {
            delta.position.x -= settings.slide_distance * (1.0 - eased);
        }

        SpecialEffect::FadeIn => {
            delta.opacity = eased;
        }

        SpecialEffect::ScaleIn => {
            delta.scale = eased;
        }

        SpecialEffect::Rotate => {
            delta.rotation_z += eased * 2.0 * PI * settings.rotate_cycles;
        }

        SpecialEffect::Bounce => {
            delta.position.y +=
                (eased * PI * settings.bounce_freq).sin().abs() * settings.bounce_height;
        }

        SpecialEffect::Spiral => {
            let radius = settings.spiral_radius * (1.0 - eased);
            let angle = eased * PI * settings.spiral_rotations;
            delta.position.x += radius * angle.cos();
            delta.position.y += radius * angle.sin();
        }
    }

    delta
}

/// Elastic in/out curve driving the elastic-move target displacement.
fn elastic_ease(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let c4 = (2.0 * PI) / 3.0;
    if t < 0.5 {
        -(2.0_f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c4).sin()) / 2.0
    } else {
        (2.0_f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c4).sin()) / 2.0 + 1.0
    }
}
