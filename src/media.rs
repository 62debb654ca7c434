//! File boundary for cover ingestion and stego output.
//!
//! The codec itself never touches the filesystem; this module decodes cover
//! files into the RGB representation the codec works on and writes stego
//! images back out. Output is PNG only: any lossy re-encoding would rewrite
//! the least significant bits the scheme lives in, so a lossy target path is
//! rejected here rather than silently corrupting the payload.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use log::error;

use crate::error::StegoShieldError;
use crate::result::Result;

/// Decode a cover file (PNG or JPEG) into the codec's RGB representation.
pub fn load_cover(path: &Path) -> Result<RgbImage> {
    let Some(ext) = path.extension() else {
        return Err(StegoShieldError::UnsupportedMedia);
    };

    let ext = ext.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" => Ok(image::open(path)
            .map_err(|e| {
                error!("Error decoding cover image {path:?}: {e}");
                StegoShieldError::InvalidImageMedia
            })?
            .to_rgb8()),
        _ => Err(StegoShieldError::UnsupportedMedia),
    }
}

/// Write a stego image to `path`, losslessly.
///
/// Only `.png` targets are accepted; see the module docs.
pub fn save_stego(image: &RgbImage, path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase() == "png")
        .unwrap_or(false);
    if !is_png {
        return Err(StegoShieldError::LossyOutputFormat);
    }

    let file = File::create(path).map_err(|e| {
        error!("Error creating stego file {path:?}: {e}");
        StegoShieldError::WriteError { source: e }
    })?;

    let mut writer = BufWriter::new(file);
    image
        .write_to(&mut writer, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Error encoding stego image: {e}");
            StegoShieldError::ImageEncodingError
        })
}
