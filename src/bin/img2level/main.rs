// img2level - Build a tile level from a black/white image
//
// Pipeline:
//   1. Load settings (TOML file or defaults), apply flag overrides
//   2. Load image, classify opaque black pixels as filled
//   3. Generate one segment per filled pixel (floor, culled walls, ceiling)
//   4. Export to Wavefront OBJ + MTL
//
// Usage: img2level generate <image> [--config level.toml] [-o level.obj]
//        img2level delete [-o level.obj]
//        img2level check [--config level.toml]   (prints the resolved settings)

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use level_engine::{export, GenerationSettings, LevelRoot, TileGrid};

#[derive(Parser)]
#[command(name = "img2level")]
#[command(about = "Generate a tile-based level mesh from a black/white image")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a level and export it
    Generate {
        /// Input image (black pixels become tiles)
        image: PathBuf,

        /// Settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output OBJ file (MTL is written next to it)
        #[arg(short, long, default_value = "level.obj")]
        output: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Remove a previously exported level
    Delete {
        /// Exported OBJ file
        #[arg(short, long, default_value = "level.obj")]
        output: PathBuf,
    },

    /// Validate a settings file without generating
    Check {
        /// Settings file
        #[arg(short, long, default_value = "level.toml")]
        config: PathBuf,
    },
}

#[derive(Args)]
struct Overrides {
    /// Tile half-extent
    #[arg(long)]
    tile_size: Option<f32>,

    /// Wall height
    #[arg(long)]
    tile_height: Option<f32>,

    /// Tag applied to every segment
    #[arg(long)]
    tag: Option<String>,

    #[arg(long)]
    no_collider: bool,

    #[arg(long)]
    no_floors: bool,

    #[arg(long)]
    no_walls: bool,

    #[arg(long)]
    no_ceilings: bool,
}

impl Overrides {
    fn apply(&self, settings: &mut GenerationSettings) {
        if let Some(s) = self.tile_size { settings.tile_size = s; }
        if let Some(h) = self.tile_height { settings.tile_height = h; }
        if let Some(tag) = &self.tag { settings.object_tag = tag.clone(); }
        if self.no_collider { settings.add_collider = false; }
        if self.no_floors { settings.create_floors = false; }
        if self.no_walls { settings.create_walls = false; }
        if self.no_ceilings { settings.create_ceilings = false; }
    }
}

fn load_settings(config: Option<&Path>) -> Result<GenerationSettings> {
    match config {
        Some(path) => GenerationSettings::load(path)
            .with_context(|| format!("Failed to load settings: {:?}", path)),
        None => Ok(GenerationSettings::default()),
    }
}

/// Sibling MTL path; the OBJ itself must not end in .mtl
fn mtl_path(output: &Path) -> Result<PathBuf> {
    let is_mtl = output
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("mtl"));
    if is_mtl {
        anyhow::bail!("Output {:?} would be overwritten by its own MTL file", output);
    }
    Ok(output.with_extension("mtl"))
}

fn generate(
    image: &Path,
    config: Option<&Path>,
    output: &Path,
    overrides: &Overrides,
) -> Result<()> {
    let mtl = mtl_path(output)?;
    let mut settings = load_settings(config)?;
    overrides.apply(&mut settings);

    tracing::info!("Processing {:?}...", image);
    let grid = TileGrid::open(image)
        .with_context(|| format!("Failed to open image: {:?}", image))?;
    tracing::info!(
        "  {}x{} image, {} filled pixels",
        grid.width(),
        grid.height(),
        grid.filled_count()
    );

    let mut root = LevelRoot::new();
    let report = root.generate(&grid, &settings).context("Generation failed")?;
    tracing::info!(
        "  {} floors, {} walls, {} ceilings",
        report.floors,
        report.walls,
        report.ceilings
    );

    export::write_obj(output, &mtl, &root)
        .with_context(|| format!("Failed to write {:?}", output))?;

    tracing::info!("Done!");
    Ok(())
}

fn delete(output: &Path) -> Result<()> {
    let mut removed = 0;
    for path in [output.to_path_buf(), mtl_path(output)?] {
        if path.exists() {
            std::fs::remove_file(&path).with_context(|| format!("Failed to remove {:?}", path))?;
            tracing::info!("Removed {:?}", path);
            removed += 1;
        }
    }
    if removed == 0 {
        tracing::info!("Nothing to delete at {:?}", output);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { image, config, output, overrides } => {
            generate(&image, config.as_deref(), &output, &overrides)?;
        }

        Commands::Delete { output } => delete(&output)?,

        Commands::Check { config } => {
            tracing::info!("Checking settings {:?}", config);
            let settings = load_settings(Some(config.as_path()))?;
            tracing::info!("Settings are valid!");
            print!("{}", settings.to_toml_string()?);
        }
    }

    Ok(())
}
