use arloom_core::math::rad_to_deg;
use arloom_core::ArloomResult;
use arloom_scene::{Layer, Project};

use crate::attributes::LayerAttributes;

/// Escape a value for embedding in a double-quoted markup attribute.
pub fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Reverse of [`escape_attr`].
pub fn unescape_attr(value: &str) -> String {
    value.replace("&quot;", "\"")
}

/// Render one layer as a marker-anchored image plane entity.
///
/// Display attributes (`position`/`rotation`/`scale`/`material`) carry the
/// base pose in the scene's native units — rotation in degrees, two-decimal
/// formatting. The full animation configuration rides along as `data-*`
/// attributes for the exported runtime.
pub fn layer_entity(layer: &Layer) -> ArloomResult<String> {
    let pose = &layer.base;
    let mut out = String::new();
    out.push_str(&format!(
        "<a-plane id=\"layer-{id}\" src=\"#img-{id}\"\n",
        id = layer.id
    ));
    out.push_str(&format!(
        "    position=\"{:.2} {:.2} {:.2}\"\n",
        pose.position.x, pose.position.y, pose.position.z
    ));
    out.push_str(&format!(
        "    rotation=\"{:.2} {:.2} {:.2}\"\n",
        rad_to_deg(pose.rotation.x),
        rad_to_deg(pose.rotation.y),
        rad_to_deg(pose.rotation.z)
    ));
    out.push_str(&format!(
        "    scale=\"{:.2} {:.2} {:.2}\"\n",
        pose.scale.x, pose.scale.y, pose.scale.z
    ));
    out.push_str(&format!(
        "    material=\"transparent: true; opacity: {:.2}\"\n",
        pose.opacity
    ));

    for (name, value) in LayerAttributes::from_layer(layer)?.pairs() {
        out.push_str(&format!(
            "    data-{}=\"{}\"\n",
            name,
            escape_attr(value)
        ));
    }
    out.push_str("></a-plane>");
    Ok(out)
}

/// Render the project's layers as a marker-anchored scene fragment.
///
/// Packaging (page chrome, assets, zip, QR) is the exporter host's job;
/// this fragment is the part the animation runtime defines the shape of.
pub fn scene_fragment(project: &Project, marker_pattern: &str) -> ArloomResult<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "<a-marker type=\"pattern\" url=\"{}.patt\">\n",
        marker_pattern
    ));
    for layer in &project.layers {
        for line in layer_entity(layer)?.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("</a-marker>");
    Ok(out)
}
