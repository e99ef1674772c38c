use arloom_core::ArloomError;

use crate::project::Project;

/// Clamp a numeric setting into `[min, max]`. NaN collapses to `min` so a
/// malformed edit can never smuggle NaN into the evaluator.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Validate a Project for structural correctness.
///
/// Commit-time clamping keeps each field in range; this pass catches what
/// clamping cannot — duplicate ids and configurations that were assembled
/// without going through the commit helpers (e.g. a hand-edited project
/// file).
pub fn validate_project(project: &Project) -> Result<(), Vec<ArloomError>> {
    let mut errors = Vec::new();

    if project.settings.name.trim().is_empty() {
        errors.push(ArloomError::Validation("project name must not be empty".into()));
    }

    // Check for duplicate layer ids
    let mut layer_ids = std::collections::HashSet::new();
    for layer in &project.layers {
        if !layer_ids.insert(layer.id) {
            errors.push(ArloomError::Validation(format!(
                "duplicate layer id: {}",
                layer.id
            )));
        }

        if layer.animation.speed <= 0.0 || !layer.animation.speed.is_finite() {
            errors.push(ArloomError::Validation(format!(
                "layer '{}' has non-positive animation speed",
                layer.name
            )));
        }

        if layer.animation.duration.as_seconds() <= 0.0 {
            errors.push(ArloomError::Validation(format!(
                "layer '{}' has non-positive animation duration",
                layer.name
            )));
        }

        if !layer.animation.settings.is_valid() {
            errors.push(ArloomError::Validation(format!(
                "layer '{}' has effect settings outside their documented ranges",
                layer.name
            )));
        }

        if !layer.animation.track.start.is_valid() || !layer.animation.track.end.is_valid() {
            errors.push(ArloomError::Validation(format!(
                "layer '{}' has keyframes outside their documented ranges",
                layer.name
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
