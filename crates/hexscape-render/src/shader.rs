//! WGSL source for the flat-shaded terrain pass.

/// Vertex and fragment stages for terrain and water.
///
/// Bind group 0, binding 0 holds a [`SceneUniforms`](crate::SceneUniforms).
/// Lighting matches [`LightingModel::shade`](crate::LightingModel::shade).
pub const TERRAIN_SHADER_WGSL: &str = include_str!("shaders/terrain.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_declares_entry_points() {
        assert!(TERRAIN_SHADER_WGSL.contains("fn vs_main"));
        assert!(TERRAIN_SHADER_WGSL.contains("fn fs_main"));
    }

    #[test]
    fn test_shader_uniform_layout_matches_struct() {
        let fields = ["model", "perspective", "camera", "color", "light_dir"];
        let mut last = 0;
        for field in fields {
            let at = TERRAIN_SHADER_WGSL
                .find(&format!("{field}:"))
                .unwrap_or_else(|| panic!("missing uniform field {field}"));
            assert!(at > last, "{field} out of order");
            last = at;
        }
    }

    #[test]
    fn test_shader_uses_lighting_constants() {
        assert!(TERRAIN_SHADER_WGSL.contains("AMBIENT: f32 = 0.5"));
        assert!(TERRAIN_SHADER_WGSL.contains("DIRECTIONAL: f32 = 1.0"));
    }
}
