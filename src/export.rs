// export.rs - Write a generated level as Wavefront OBJ + MTL
//
// One object per segment, vertices in level space. Faces are grouped
// under usemtl per non-empty submesh; the MTL lists every material used.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::level::MaterialRef;
use crate::scene::LevelRoot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub objects: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub materials: usize,
}

pub fn write_obj(obj_path: &Path, mtl_path: &Path, root: &LevelRoot) -> Result<ExportStats> {
    let mtl_name = mtl_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "level.mtl".into());

    let mut obj = BufWriter::new(File::create(obj_path)?);
    let mut stats = write_obj_to(&mut obj, &mtl_name, root)?;
    obj.flush()?;

    let mut mtl = BufWriter::new(File::create(mtl_path)?);
    stats.materials = write_mtl_to(&mut mtl, root)?;
    mtl.flush()?;

    tracing::info!(
        "Wrote {:?}: {} objects, {} vertices, {} triangles, {} materials",
        obj_path,
        stats.objects,
        stats.vertices,
        stats.triangles,
        stats.materials
    );
    Ok(stats)
}

pub fn write_obj_to<W: Write>(w: &mut W, mtl_name: &str, root: &LevelRoot) -> Result<ExportStats> {
    let mut stats = ExportStats::default();

    writeln!(w, "# Generated by level-engine")?;
    writeln!(w, "mtllib {}", mtl_name)?;

    // OBJ indices are 1-based and global to the file
    let mut base = 1u32;

    for node in root.children() {
        writeln!(w)?;
        if let Some(tag) = &node.tag {
            writeln!(w, "# tag: {}", tag)?;
        }
        if node.collider.is_some() {
            writeln!(w, "# collider")?;
        }
        writeln!(w, "o {}", node.name)?;

        for p in node.world_positions() {
            writeln!(w, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for uv in &node.mesh.uvs {
            writeln!(w, "vt {} {}", uv.x, uv.y)?;
        }
        for n in &node.mesh.normals {
            writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
        }

        for sub in node.mesh.submeshes.iter().filter(|s| !s.triangles.is_empty()) {
            writeln!(w, "usemtl {}", sub.material.name)?;
            for tri in &sub.triangles {
                let [a, b, c] = tri.map(|i| i + base);
                writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
            }
            stats.triangles += sub.triangles.len();
        }

        base += node.mesh.positions.len() as u32;
        stats.vertices += node.mesh.positions.len();
        stats.objects += 1;
    }

    Ok(stats)
}

/// Returns the number of materials written
pub fn write_mtl_to<W: Write>(w: &mut W, root: &LevelRoot) -> Result<usize> {
    let materials = used_materials(root);

    writeln!(w, "# Generated by level-engine")?;
    for m in &materials {
        writeln!(w)?;
        writeln!(w, "newmtl {}", m.name)?;
        let [r, g, b] = m.color;
        writeln!(w, "Kd {} {} {}", r, g, b)?;
        if let Some(tex) = &m.texture {
            writeln!(w, "map_Kd {}", tex)?;
        }
    }
    Ok(materials.len())
}

/// Distinct materials with at least one face, in first-use order
fn used_materials(root: &LevelRoot) -> Vec<&MaterialRef> {
    let mut out: Vec<&MaterialRef> = Vec::new();
    for node in root.children() {
        for sub in node.mesh.submeshes.iter().filter(|s| !s.triangles.is_empty()) {
            if !out.iter().any(|m| m.name == sub.material.name) {
                out.push(&sub.material);
            }
        }
    }
    out
}
