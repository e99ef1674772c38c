use arloom_core::{Pose, Timestamp};
use arloom_scene::{Layer, LayerId, Project};

use crate::clock::AnimationClock;
use crate::evaluator::evaluate;

/// Whatever a rendering host exposes to receive poses — a 3D mesh wrapper
/// live, an attribute-backed scene node in the exported page.
pub trait Renderable {
    /// Apply a freshly evaluated pose to the given layer's visual.
    fn apply_pose(&mut self, layer: LayerId, pose: &Pose);
}

/// The ephemeral playback record for one layer: which layer, and when its
/// clock started. One per (layer, play-session); replaced wholesale when
/// playback restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationHandle {
    pub layer: LayerId,
    pub started_at: Timestamp,
}

/// Drives all active layer animations from a host's tick callback.
///
/// The scheduler owns every live handle, which makes the lifecycle rules
/// trivially enforceable: at most one handle per layer (playing again
/// replaces it), stop is idempotent, and a stopped layer is never touched
/// by a later tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    handles: Vec<AnimationHandle>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) playback for a layer. Any previous handle for the
    /// same layer is discarded first. Returns false without creating a
    /// handle when the layer's configuration is inert — there is nothing to
    /// animate, so there is nothing to schedule.
    pub fn play(&mut self, layer: &Layer, now: Timestamp) -> bool {
        self.stop(layer.id);
        if layer.animation.is_inert() {
            return false;
        }
        tracing::info!(layer = %layer.id, "starting animation");
        self.handles.push(AnimationHandle {
            layer: layer.id,
            started_at: now,
        });
        true
    }

    /// Stop playback for a layer. Idempotent; the layer's pose is left
    /// wherever the last tick put it.
    pub fn stop(&mut self, id: LayerId) {
        self.handles.retain(|h| h.layer != id);
    }

    /// Stop every active animation.
    pub fn stop_all(&mut self) {
        self.handles.clear();
    }

    /// Whether a layer currently has a live handle.
    pub fn is_playing(&self, id: LayerId) -> bool {
        self.handles.iter().any(|h| h.layer == id)
    }

    /// Number of live handles.
    pub fn active_count(&self) -> usize {
        self.handles.len()
    }

    /// Evaluate every active animation at `now` and hand the poses to the
    /// sink. Layers are processed in handle order; evaluation is pure, so
    /// ordering has no observable effect.
    ///
    /// A handle whose layer has been deleted, or whose configuration can no
    /// longer produce a finite pose, is dropped with a warning — one broken
    /// layer never stalls the rest.
    pub fn tick(&mut self, project: &Project, now: Timestamp, sink: &mut dyn Renderable) {
        self.handles.retain(|handle| {
            let Some(layer) = project.layer(handle.layer) else {
                tracing::warn!(layer = %handle.layer, "dropping handle for deleted layer");
                return false;
            };

            let spec = &layer.animation;
            if spec.speed <= 0.0 || spec.duration.as_seconds() <= 0.0 {
                tracing::warn!(
                    layer = %handle.layer,
                    "dropping handle: speed/duration no longer strictly positive"
                );
                return false;
            }

            let clock = AnimationClock::for_spec(spec, handle.started_at);
            let pose = evaluate(&layer.base, spec, clock.sample(now));
            sink.apply_pose(layer.id, &pose);
            true
        });
    }
}

/// Re-apply every layer's base pose — the host-side "reset all" action.
/// This is a host decision; the evaluator itself never rewinds a pose.
pub fn apply_base_poses(project: &Project, sink: &mut dyn Renderable) {
    for layer in &project.layers {
        sink.apply_pose(layer.id, &layer.base);
    }
}
