//! Integration tests for img2level
//!
//! Writes a test image, runs the binary, and checks the exported files.

use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// L-shaped room: three filled pixels in a 3x3 image
fn write_l_shape(path: &Path) {
    let mut img = RgbaImage::from_pixel(3, 3, WHITE);
    img.put_pixel(0, 0, BLACK);
    img.put_pixel(0, 1, BLACK);
    img.put_pixel(1, 1, BLACK);
    img.save(path).expect("Failed to write test image");
}

fn img2level(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_img2level"))
        .args(args)
        .output()
        .expect("Failed to run img2level")
}

#[test]
fn test_generate_then_delete() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png = dir.path().join("room.png");
    let obj = dir.path().join("room.obj");
    let mtl = dir.path().join("room.mtl");
    write_l_shape(&png);

    let out = img2level(&["generate", png.to_str().unwrap(), "-o", obj.to_str().unwrap()]);
    assert!(out.status.success(), "generate failed: {}", String::from_utf8_lossy(&out.stderr));
    assert!(obj.exists(), "OBJ file should exist");
    assert!(mtl.exists(), "MTL file should exist");

    let text = std::fs::read_to_string(&obj).unwrap();
    let objects = text.lines().filter(|l| l.starts_with("o ")).count();
    assert_eq!(objects, 3);
    // Image rows are flipped: the top-left pixel is cell (0, 2)
    assert!(text.contains("o 0, 2"));
    assert!(text.contains("o 0, 1"));
    assert!(text.contains("o 1, 1"));
    assert!(text.contains("mtllib room.mtl"));

    let out = img2level(&["delete", "-o", obj.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(!obj.exists());
    assert!(!mtl.exists());
}

#[test]
fn test_generate_with_config_and_overrides() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png = dir.path().join("room.png");
    let obj = dir.path().join("level.obj");
    let config = dir.path().join("level.toml");
    write_l_shape(&png);
    std::fs::write(
        &config,
        "object_tag = \"Dungeon\"\n\n[wall_material]\nname = \"brick\"\n",
    )
    .unwrap();

    let out = img2level(&[
        "generate",
        png.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-o",
        obj.to_str().unwrap(),
        "--no-ceilings",
        "--no-collider",
    ]);
    assert!(out.status.success(), "generate failed: {}", String::from_utf8_lossy(&out.stderr));

    let text = std::fs::read_to_string(&obj).unwrap();
    assert_eq!(text.matches("# tag: Dungeon").count(), 3);
    assert!(!text.contains("# collider"));
    assert!(!text.contains("usemtl ceiling"));

    let materials = std::fs::read_to_string(dir.path().join("level.mtl")).unwrap();
    assert!(materials.contains("newmtl brick"));
    assert!(!materials.contains("newmtl ceiling"));
}

#[test]
fn test_check_rejects_invalid_settings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let good = dir.path().join("good.toml");
    let bad = dir.path().join("bad.toml");
    std::fs::write(&good, "tile_size = 2.0\n").unwrap();
    std::fs::write(&bad, "tile_height = 0.0\n").unwrap();

    assert!(img2level(&["check", "--config", good.to_str().unwrap()]).status.success());
    assert!(!img2level(&["check", "--config", bad.to_str().unwrap()]).status.success());
}

#[test]
fn test_check_prints_resolved_settings() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = dir.path().join("level.toml");
    std::fs::write(&config, "tile_size = 2.5\n\n[wall_material]\nname = \"brick\"\n").unwrap();

    let out = img2level(&["check", "--config", config.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("tile_size = 2.5"));
    assert!(stdout.contains("tile_height = 2.0"));
    assert!(stdout.contains("name = \"brick\""));
}

#[test]
fn test_mtl_output_path_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png = dir.path().join("room.png");
    let out_path = dir.path().join("level.mtl");
    write_l_shape(&png);

    let out = img2level(&["generate", png.to_str().unwrap(), "-o", out_path.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!out_path.exists());
}

#[test]
fn test_missing_image_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.png");
    let obj = dir.path().join("level.obj");

    let out = img2level(&["generate", missing.to_str().unwrap(), "-o", obj.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!obj.exists());
}
