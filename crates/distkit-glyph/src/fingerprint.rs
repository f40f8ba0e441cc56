use image::RgbaImage;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint of a raster.
///
/// Identity fields:
/// - width and height (little-endian u32)
/// - raw RGBA pixel bytes, row-major
pub fn fingerprint(img: &RgbaImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(img.width().to_le_bytes());
    hasher.update(img.height().to_le_bytes());
    hasher.update(img.as_raw());
    hex::encode(hasher.finalize())
}
