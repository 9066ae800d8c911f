use wasm_bindgen::prelude::*;

pub mod error;
pub mod export;
pub mod level;
pub mod mesh;
pub mod scene;

pub use error::{LevelError, Result};
pub use level::{GenerationSettings, MaterialRef, TileGrid};
pub use mesh::{MeshBuilder, MeshCollider, SegmentMesh, Submesh};
pub use scene::{GenerationReport, LevelRoot, SegmentNode};

// ============================================================================
// LEVEL EDITOR - Browser-facing Generate / Delete panel
// ============================================================================
//
// Flattened output (level space, all segments concatenated):
//   positions  = xyz per vertex
//   normals    = xyz per vertex
//   uvs        = uv per vertex
//   indices    = 3 per triangle
//   groups     = material group per triangle (0=floor, 1=wall, 2=ceiling)

#[wasm_bindgen]
pub struct LevelEditor {
    root: LevelRoot,
    settings: GenerationSettings,

    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
    groups: Vec<u8>,
}

#[wasm_bindgen]
impl LevelEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            root: LevelRoot::new(),
            settings: GenerationSettings::default(),
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Replace settings from a TOML document
    pub fn load_settings(&mut self, source: &str) -> std::result::Result<(), JsError> {
        self.settings = GenerationSettings::from_toml_str(source)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(())
    }

    pub fn set_tile_size(&mut self, tile_size: f32, tile_height: f32) {
        self.settings.tile_size = tile_size;
        self.settings.tile_height = tile_height;
    }

    pub fn set_surfaces(&mut self, floors: bool, walls: bool, ceilings: bool) {
        self.settings.create_floors = floors;
        self.settings.create_walls = walls;
        self.settings.create_ceilings = ceilings;
    }

    /// Generate from canvas RGBA data; returns the number of segments
    pub fn generate(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> std::result::Result<u32, JsError> {
        let report = self
            .try_generate(rgba, width, height)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(report.segments as u32)
    }

    pub fn delete(&mut self) -> u32 {
        let n = self.root.destroy_children();
        self.flatten();
        n as u32
    }

    pub fn child_count(&self) -> u32 { self.root.child_count() as u32 }

    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    pub fn uvs(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.uvs[..])
    }

    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    pub fn groups(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.groups[..])
    }
}

impl LevelEditor {
    fn try_generate(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<GenerationReport> {
        let grid = TileGrid::from_rgba(width, height, rgba)?;
        let report = self.root.generate(&grid, &self.settings)?;
        self.flatten();
        Ok(report)
    }

    fn flatten(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
        self.groups.clear();

        for node in self.root.children() {
            let base = (self.positions.len() / 3) as u32;
            for p in node.world_positions() {
                self.positions.extend_from_slice(&p.to_array());
            }
            for n in &node.mesh.normals {
                self.normals.extend_from_slice(&n.to_array());
            }
            for uv in &node.mesh.uvs {
                self.uvs.extend_from_slice(&uv.to_array());
            }
            for (group, sub) in node.mesh.submeshes.iter().enumerate() {
                for tri in &sub.triangles {
                    self.indices.extend(tri.iter().map(|i| i + base));
                    self.groups.push(group as u8);
                }
            }
        }
    }

    pub fn root(&self) -> &LevelRoot { &self.root }
}

impl Default for LevelEditor {
    fn default() -> Self { Self::new() }
}
