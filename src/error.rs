// error.rs - Error type shared by the loader, generator and exporter

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Pixel buffer has {actual} bytes, expected {expected} (width * height * 4)")]
    PixelBuffer { expected: usize, actual: usize },

    #[error("Image {width}x{height} is too large")]
    ImageTooLarge { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, LevelError>;
