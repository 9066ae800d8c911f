// settings.rs - Generation settings (level.toml)
//
// Every field has a default, so a settings file only needs the values it
// changes:
//
//   tile_size = 2.0
//   object_tag = "Level"
//
//   [wall_material]
//   name = "brick"
//   texture = "textures/brick.png"

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LevelError, Result};

/// Named material assigned to one surface kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRef {
    pub name: String,
    /// Diffuse colour (linear RGB, 0..1)
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    #[serde(default)]
    pub texture: Option<String>,
}

impl MaterialRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: default_color(), texture: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Half-extent of a tile; neighbouring segments sit 2 * tile_size apart
    pub tile_size: f32,
    pub tile_height: f32,
    pub uv_scale: [f32; 2],

    /// Empty string leaves segments untagged
    pub object_tag: String,
    pub add_collider: bool,

    pub create_floors: bool,
    pub create_walls: bool,
    pub create_ceilings: bool,

    pub floor_material: MaterialRef,
    pub wall_material: MaterialRef,
    pub ceiling_material: MaterialRef,
}

fn default_color() -> [f32; 3] { [0.8, 0.8, 0.8] }

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            tile_size: 1.0,
            tile_height: 2.0,
            uv_scale: [1.0, 1.0],
            object_tag: String::new(),
            add_collider: true,
            create_floors: true,
            create_walls: true,
            create_ceilings: true,
            floor_material: MaterialRef::named("floor"),
            wall_material: MaterialRef::named("wall"),
            ceiling_material: MaterialRef::named("ceiling"),
        }
    }
}

impl GenerationSettings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Tag to apply to generated segments, if any
    pub fn tag(&self) -> Option<&str> {
        if self.object_tag.is_empty() { None } else { Some(&self.object_tag) }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(LevelError::InvalidSettings(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if !(self.tile_height.is_finite() && self.tile_height > 0.0) {
            return Err(LevelError::InvalidSettings(format!(
                "tile_height must be positive, got {}",
                self.tile_height
            )));
        }
        if self.uv_scale.iter().any(|c| !c.is_finite() || *c == 0.0) {
            return Err(LevelError::InvalidSettings(format!(
                "uv_scale components must be finite and non-zero, got {:?}",
                self.uv_scale
            )));
        }
        for material in [&self.floor_material, &self.wall_material, &self.ceiling_material] {
            if material.name.trim().is_empty() || material.name.contains(char::is_whitespace) {
                return Err(LevelError::InvalidSettings(format!(
                    "material name {:?} must be a single non-empty word",
                    material.name
                )));
            }
            if material.texture.as_deref().is_some_and(|t| t.contains(char::is_control)) {
                return Err(LevelError::InvalidSettings(format!(
                    "texture path {:?} must not contain control characters",
                    material.texture
                )));
            }
        }
        if self.object_tag.contains(char::is_control) {
            return Err(LevelError::InvalidSettings(format!(
                "object_tag {:?} must not contain control characters",
                self.object_tag
            )));
        }

        // Exported materials are keyed by name
        let materials = [&self.floor_material, &self.wall_material, &self.ceiling_material];
        for (i, a) in materials.iter().enumerate() {
            if let Some(b) = materials[i + 1..].iter().find(|b| b.name == a.name && b != &a) {
                return Err(LevelError::InvalidSettings(format!(
                    "material {:?} is defined twice with different properties ({:?} vs {:?})",
                    a.name, a, b
                )));
            }
        }
        Ok(())
    }

    /// Resolved settings as a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GenerationSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tag(), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = GenerationSettings::from_toml_str(
            r#"
            tile_size = 3.0
            object_tag = "Level"
            create_ceilings = false

            [wall_material]
            name = "brick"
            texture = "textures/brick.png"
            "#,
        )
        .expect("valid settings");

        assert_eq!(settings.tile_size, 3.0);
        assert_eq!(settings.tile_height, 2.0);
        assert_eq!(settings.tag(), Some("Level"));
        assert!(!settings.create_ceilings);
        assert!(settings.create_floors);
        assert_eq!(settings.wall_material.name, "brick");
        assert_eq!(settings.wall_material.texture.as_deref(), Some("textures/brick.png"));
        assert_eq!(settings.wall_material.color, [0.8, 0.8, 0.8]);
        assert_eq!(settings.floor_material.name, "floor");
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let err = GenerationSettings::from_toml_str("tile_size = 0.0").unwrap_err();
        assert!(matches!(err, LevelError::InvalidSettings(_)));

        let err = GenerationSettings::from_toml_str("tile_height = -1.0").unwrap_err();
        assert!(matches!(err, LevelError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_zero_uv_scale() {
        let settings = GenerationSettings { uv_scale: [1.0, 0.0], ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_material_name() {
        let mut settings = GenerationSettings::default();
        settings.floor_material.name = "dark stone".into();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_control_characters_in_tag() {
        let err = GenerationSettings::from_toml_str("object_tag = \"Level\\nv 9 9 9\"")
            .unwrap_err();
        assert!(matches!(err, LevelError::InvalidSettings(_)));

        let settings = GenerationSettings { object_tag: "Level\t1".into(), ..Default::default() };
        assert!(settings.validate().is_err());

        let settings = GenerationSettings { object_tag: "Level One".into(), ..Default::default() };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_control_characters_in_texture() {
        let mut settings = GenerationSettings::default();
        settings.wall_material.texture = Some("brick.png\nnewmtl x".into());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_same_name_materials_must_match() {
        let mut settings = GenerationSettings::default();
        settings.floor_material =
            MaterialRef { name: "stone".into(), color: [1.0, 0.0, 0.0], texture: None };
        settings.wall_material = MaterialRef {
            name: "stone".into(),
            color: [0.0, 0.0, 1.0],
            texture: Some("blue.png".into()),
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, LevelError::InvalidSettings(_)));

        // Identical definitions may be shared
        settings.wall_material = settings.floor_material.clone();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_resolved_settings_reload() {
        let mut settings =
            GenerationSettings { tile_size: 2.5, object_tag: "Level".into(), ..Default::default() };
        settings.wall_material.texture = Some("brick.png".into());

        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("tile_size = 2.5"));
        assert!(text.contains("[wall_material]"));
        assert_eq!(GenerationSettings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = GenerationSettings::from_toml_str("tile_size = \"big\"").unwrap_err();
        assert!(matches!(err, LevelError::Config(_)));
    }
}
