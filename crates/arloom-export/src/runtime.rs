use arloom_anim::{evaluate, AnimationClock};
use arloom_core::math::rad_to_deg;
use arloom_core::{ArloomResult, Pose, Timestamp};
use arloom_scene::{Layer, LayerId};

use crate::attributes::LayerAttributes;

/// Tick interval of the exported page's animation timer (~60 Hz).
pub const TICK_INTERVAL_MS: u64 = 16;

/// One scene node of the exported page: the serialized configuration it was
/// exported with, plus the display attributes the runtime writes each tick.
///
/// Display attributes hold the scene's native string encoding — rotation in
/// degrees, components space-separated — exactly what a scene-graph consumer
/// reads off the node.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: LayerId,
    /// The flat serialized configuration (read-only after export).
    pub config: LayerAttributes,
    /// "x y z" position attribute.
    pub position: String,
    /// "x y z" rotation attribute, in degrees.
    pub rotation: String,
    /// "x y z" scale attribute.
    pub scale: String,
    /// Material opacity attribute.
    pub opacity: String,
}

impl SceneNode {
    /// Build a node the way the exporter would: serialize the layer's
    /// configuration and initialize the display attributes from its base pose.
    pub fn from_layer(layer: &Layer) -> ArloomResult<Self> {
        let mut node = Self {
            id: layer.id,
            config: LayerAttributes::from_layer(layer)?,
            position: String::new(),
            rotation: String::new(),
            scale: String::new(),
            opacity: String::new(),
        };
        node.write_pose(&layer.base);
        Ok(node)
    }

    /// Write a pose into the display attributes.
    fn write_pose(&mut self, pose: &Pose) {
        self.position = format!(
            "{} {} {}",
            pose.position.x, pose.position.y, pose.position.z
        );
        self.rotation = format!(
            "{} {} {}",
            rad_to_deg(pose.rotation.x),
            rad_to_deg(pose.rotation.y),
            rad_to_deg(pose.rotation.z)
        );
        self.scale = format!("{} {} {}", pose.scale.x, pose.scale.y, pose.scale.z);
        self.opacity = pose.opacity.to_string();
    }
}

/// Playback state for one node whose attributes parsed successfully.
#[derive(Debug, Clone)]
struct ActiveAnimation {
    node_index: usize,
    clock: AnimationClock,
    base: Pose,
    spec: arloom_scene::AnimationSpec,
}

/// The exported page's animation loop: the freestanding reimplementation of
/// the live evaluator that knows nothing about the editor's data model.
///
/// All configuration comes from each node's serialized attributes, parsed
/// when the marker is found; every tick evaluates the shared pure evaluator
/// and writes the resulting pose back onto the node as attribute strings.
#[derive(Debug, Default)]
pub struct ExportRuntime {
    nodes: Vec<SceneNode>,
    active: Vec<ActiveAnimation>,
}

impl ExportRuntime {
    pub fn new(nodes: Vec<SceneNode>) -> Self {
        Self {
            nodes,
            active: Vec::new(),
        }
    }

    /// Access a node (and its current display attributes) by layer id.
    pub fn node(&self, id: LayerId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of animations currently running.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Marker found: start every animatable node's loop from `now`.
    ///
    /// A node whose attributes fail to parse is skipped with a warning; the
    /// sibling nodes animate regardless. Inert configurations (no keyframes,
    /// effect "none") get no loop at all.
    pub fn start_all(&mut self, now: Timestamp) {
        self.stop_all();
        for (index, node) in self.nodes.iter().enumerate() {
            let spec = match node.config.to_spec() {
                Ok(spec) => spec,
                Err(e) => {
                    tracing::warn!(layer = %node.id, error = %e, "skipping unparsable node");
                    continue;
                }
            };
            if spec.is_inert() {
                continue;
            }
            let base = match node.config.base_pose() {
                Ok(base) => base,
                Err(e) => {
                    tracing::warn!(layer = %node.id, error = %e, "skipping unparsable node");
                    continue;
                }
            };
            self.active.push(ActiveAnimation {
                node_index: index,
                clock: AnimationClock::for_spec(&spec, now),
                base,
                spec,
            });
        }
    }

    /// Marker lost: stop every loop. Idempotent; display attributes keep
    /// whatever the last tick wrote.
    pub fn stop_all(&mut self) {
        self.active.clear();
    }

    /// One timer tick: evaluate every running animation at `now` and write
    /// the poses into the nodes' display attributes.
    ///
    /// Held (non-looping, completed) animations keep writing their pinned
    /// end pose; dropping them from the tick is a host optimization the
    /// runtime does not depend on.
    pub fn tick(&mut self, now: Timestamp) {
        for anim in &self.active {
            let pose = evaluate(&anim.base, &anim.spec, anim.clock.sample(now));
            self.nodes[anim.node_index].write_pose(&pose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::names;
    use arloom_scene::{Layer, SpecialEffect};

    fn bounce_layer(id: u64) -> Layer {
        let mut layer = Layer::new(LayerId(id), "a.png");
        layer.animation.effect = SpecialEffect::Bounce;
        layer.animation.looped = true;
        layer
    }

    #[test]
    fn test_inert_node_gets_no_loop() {
        let layer = Layer::new(LayerId(0), "static.png");
        let mut runtime = ExportRuntime::new(vec![SceneNode::from_layer(&layer).unwrap()]);
        runtime.start_all(Timestamp::zero());
        assert_eq!(runtime.active_count(), 0);
    }

    #[test]
    fn test_tick_writes_attribute_strings() {
        let mut runtime = ExportRuntime::new(vec![SceneNode::from_layer(&bounce_layer(1)).unwrap()]);
        runtime.start_all(Timestamp::zero());
        runtime.tick(Timestamp::from_millis(250.0));

        let node = runtime.node(LayerId(1)).unwrap();
        let parts: Vec<f64> = node
            .position
            .split(' ')
            .map(|p| p.parse().unwrap())
            .collect();
        assert_eq!(parts.len(), 3);
        let expected = (0.03125 * std::f64::consts::PI * 4.0).sin().abs() * 2.0;
        assert!((parts[1] - expected).abs() < 1e-3);
    }

    #[test]
    fn test_unparsable_node_does_not_stop_siblings() {
        let good = SceneNode::from_layer(&bounce_layer(1)).unwrap();
        let mut bad = SceneNode::from_layer(&bounce_layer(2)).unwrap();
        bad.config.set(names::ANIMATION_SPEED, "fast");

        let mut runtime = ExportRuntime::new(vec![bad, good]);
        runtime.start_all(Timestamp::zero());
        assert_eq!(runtime.active_count(), 1);

        // The broken node freezes at its base pose; the good one animates.
        runtime.tick(Timestamp::from_millis(250.0));
        let frozen = runtime.node(LayerId(2)).unwrap();
        assert_eq!(frozen.position, "0 0 0");
    }

    #[test]
    fn test_malformed_settings_node_still_animates() {
        let mut node = SceneNode::from_layer(&bounce_layer(1)).unwrap();
        node.config.set(names::SPECIAL_SETTINGS, "garbage");
        let mut runtime = ExportRuntime::new(vec![node]);
        runtime.start_all(Timestamp::zero());
        // Defaults substituted, loop running.
        assert_eq!(runtime.active_count(), 1);
    }

    #[test]
    fn test_stop_all_idempotent_and_freezes_attributes() {
        let mut runtime = ExportRuntime::new(vec![SceneNode::from_layer(&bounce_layer(1)).unwrap()]);
        runtime.start_all(Timestamp::zero());
        runtime.tick(Timestamp::from_millis(250.0));
        let frozen = runtime.node(LayerId(1)).unwrap().position.clone();

        runtime.stop_all();
        runtime.stop_all();
        runtime.tick(Timestamp::from_millis(900.0));
        assert_eq!(runtime.node(LayerId(1)).unwrap().position, frozen);
    }

    #[test]
    fn test_restart_replaces_clocks() {
        let mut runtime = ExportRuntime::new(vec![SceneNode::from_layer(&bounce_layer(1)).unwrap()]);
        runtime.start_all(Timestamp::zero());
        runtime.start_all(Timestamp::from_seconds(10.0));
        assert_eq!(runtime.active_count(), 1);
    }
}
