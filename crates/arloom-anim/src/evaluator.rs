use arloom_core::{Pose, Vec3};
use arloom_scene::AnimationSpec;

use crate::blend::blend;
use crate::clock::CycleSample;
use crate::effects::effect_delta;

/// Evaluate a layer's animation at one clock sample.
///
/// This is the single pose function both playback paths share: the live
/// scheduler calls it against the in-memory model, the exported runtime
/// calls it against a spec parsed back out of serialized attributes. Order
/// is fixed: start from the base pose, let the keyframe blender *replace*
/// position/scale/opacity/z-rotation if enabled, then *add* the catalogue
/// effect's delta on top.
pub fn evaluate(base: &Pose, spec: &AnimationSpec, sample: CycleSample) -> Pose {
    let mut pose = *base;

    if spec.enable_keyframes {
        let blended = blend(&spec.track, sample.eased);
        pose.position = blended.position;
        pose.scale = Vec3::splat(blended.scale);
        pose.opacity = blended.opacity;
        // x/y rotation stays at the base value; only z is authored.
        pose.rotation.z = blended.rotation_z;
    }

    if !spec.effect.is_none() {
        let delta = effect_delta(spec.effect, sample, &spec.settings, spec.enable_keyframes);
        pose.position.x += delta.position.x;
        pose.position.y += delta.position.y;
        pose.position.z += delta.position.z;
        pose.rotation.z += delta.rotation_z;
        pose.scale.x *= delta.scale;
        pose.scale.y *= delta.scale;
        pose.scale.z *= delta.scale;
        pose.opacity *= delta.opacity;
    }

    pose
}
