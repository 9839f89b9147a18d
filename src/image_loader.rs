use crate::errors::{ComparatorError, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Display name for a slot: the file name, or the full path if it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Picks the first two supported images, in the order they were given.
pub fn select_pair<I>(paths: I) -> Result<[PathBuf; 2]>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut images = paths.into_iter().filter(|p| is_supported_image(p));

    match (images.next(), images.next()) {
        (Some(first), Some(second)) => Ok([first, second]),
        (first, _) => Err(ComparatorError::NotEnoughImages {
            found: usize::from(first.is_some()),
        }),
    }
}

/// Decodes `path`, refusing images above `max_megapixels`.
pub fn load_image(path: &Path, max_megapixels: u64) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ComparatorError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if !is_supported_image(path) {
        let format = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(ComparatorError::UnsupportedFormat { format });
    }

    let file_size = std::fs::metadata(path)?.len();

    // Header-only read, so oversized images are refused before decoding
    let (width, height) = image::image_dimensions(path).map_err(|e| ComparatorError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let pixels = width as u64 * height as u64;
    if pixels > max_megapixels.saturating_mul(1_000_000) {
        return Err(ComparatorError::ImageTooLarge {
            path: path.to_path_buf(),
            megapixels: pixels.div_ceil(1_000_000),
            limit: max_megapixels,
        });
    }

    let img = image::open(path).map_err(|e| ComparatorError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Decoded {:?} ({} bytes): {}x{}", path, file_size, width, height);
    Ok(img)
}
