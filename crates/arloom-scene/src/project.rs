use serde::{Deserialize, Serialize};

use arloom_core::{Color, Vec3};

use crate::layer::{Layer, LayerId};

/// The editor camera's pose, carried through export so the AR scene frames
/// layers the way the editor did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Rotation in radians.
    pub rotation: Vec3,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Project name, used for exported file naming.
    pub name: String,
    /// Scene background color.
    pub background: Color,
    /// Editor camera pose, if one was captured.
    pub camera: Option<CameraPose>,
}

impl ProjectSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BLACK,
            camera: None,
        }
    }
}

/// Top-level project — the ordered set of animated layers plus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project settings.
    pub settings: ProjectSettings,
    /// Ordered list of layers (bottom to top for compositing).
    pub layers: Vec<Layer>,
    /// Next layer id to allocate. Ids are never reused after deletion.
    next_layer_id: u64,
}

impl Project {
    /// Create a new empty project.
    pub fn new(settings: ProjectSettings) -> Self {
        Self {
            settings,
            layers: Vec::new(),
            next_layer_id: 0,
        }
    }

    /// Add a new layer with a freshly allocated id; returns the id.
    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        self.layers.push(Layer::new(id, name));
        id
    }

    /// Remove a layer by id. Returns the removed layer, if it existed.
    /// The id is retired — it will not be handed out again.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|l| l.id == id)?;
        Some(self.layers.remove(index))
    }

    /// Get a layer by its id.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Get a mutable reference to a layer by its id.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_layer() {
        let mut project = Project::new(ProjectSettings::new("demo"));
        let id = project.add_layer("bg.png");
        assert_eq!(project.layers.len(), 1);
        assert_eq!(project.layer(id).unwrap().name, "bg.png");
        assert!(project.layer(LayerId(99)).is_none());
    }

    #[test]
    fn test_ids_are_monotonic_and_not_reused() {
        let mut project = Project::new(ProjectSettings::new("demo"));
        let a = project.add_layer("a.png");
        let b = project.add_layer("b.png");
        assert_ne!(a, b);

        project.remove_layer(a);
        let c = project.add_layer("c.png");
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn test_remove_missing_layer() {
        let mut project = Project::new(ProjectSettings::new("demo"));
        assert!(project.remove_layer(LayerId(0)).is_none());
    }

    #[test]
    fn test_project_json_round_trip() {
        let mut project = Project::new(ProjectSettings::new("demo"));
        let id = project.add_layer("a.png");
        project.layer_mut(id).unwrap().set_position(1.0, 2.0, 3.0);

        let json = serde_json::to_string(&project).unwrap();
        let restored: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.layers.len(), 1);
        assert_eq!(restored.layer(id).unwrap().base.position.y, 2.0);
    }
}
