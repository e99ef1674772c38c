use arloom_core::math::deg_to_rad;
use arloom_core::Vec3;
use arloom_scene::KeyframeTrack;

/// The fields the keyframe blender produces. When keyframe animation is
/// enabled these replace the corresponding base-pose fields outright;
/// rotation on the x/y axes is untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendOutput {
    pub position: Vec3,
    /// Uniform scale factor.
    pub scale: f64,
    pub opacity: f64,
    /// Z rotation in radians (authored in degrees, converted here).
    pub rotation_z: f64,
}

/// Interpolate a layer's authored start/end keyframes by the eased progress
/// fraction. Every field lerps independently; rotation interpolates in its
/// authored degree unit and converts to radians once, on the way out.
pub fn blend(track: &KeyframeTrack, eased: f64) -> BlendOutput {
    let start = &track.start;
    let end = &track.end;
    let lerp = |a: f64, b: f64| a + (b - a) * eased;

    BlendOutput {
        position: Vec3::new(
            lerp(start.x, end.x),
            lerp(start.y, end.y),
            lerp(start.z, end.z),
        ),
        scale: lerp(start.scale, end.scale),
        opacity: lerp(start.opacity, end.opacity),
        rotation_z: deg_to_rad(lerp(start.rotation, end.rotation)),
    }
}
