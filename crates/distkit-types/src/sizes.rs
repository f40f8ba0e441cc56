//! Fixed icon size tables and output file names.

/// Edge length of the master raster every other size is derived from.
pub const BASE_SIZE: u32 = 1024;

/// Point sizes of the macOS iconset; each is written at 1x and 2x.
pub const ICONSET_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Frames embedded in the Windows `.ico`.
pub const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Tray template icon edge length at 1x.
pub const TRAY_SIZE: u32 = 18;

pub const ICON_PNG: &str = "icon.png";
pub const ICONSET_DIR: &str = "icon.iconset";
pub const ICON_ICNS: &str = "icon.icns";
pub const ICON_ICO: &str = "icon.ico";
pub const TRAY_PNG: &str = "trayTemplate.png";
pub const TRAY_PNG_2X: &str = "trayTemplate@2x.png";

/// Pixel density of an iconset entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    X1,
    X2,
}

impl Scale {
    pub const ALL: [Scale; 2] = [Scale::X1, Scale::X2];

    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
        }
    }
}

/// One file of the iconset: a point size at a pixel density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconsetEntry {
    pub size: u32,
    pub scale: Scale,
}

impl IconsetEntry {
    /// Pixel edge length of the bitmap.
    pub fn pixels(self) -> u32 {
        self.size * self.scale.factor()
    }

    /// Apple iconset naming: `icon_16x16.png`, `icon_16x16@2x.png`.
    pub fn file_name(self) -> String {
        match self.scale {
            Scale::X1 => format!("icon_{0}x{0}.png", self.size),
            Scale::X2 => format!("icon_{0}x{0}@2x.png", self.size),
        }
    }
}

/// Every iconset entry in write order.
pub fn iconset_entries() -> Vec<IconsetEntry> {
    ICONSET_SIZES
        .iter()
        .flat_map(|&size| Scale::ALL.map(|scale| IconsetEntry { size, scale }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iconset_covers_every_size_at_both_scales() {
        let entries = iconset_entries();
        assert_eq!(entries.len(), ICONSET_SIZES.len() * 2);
        assert_eq!(entries[0].file_name(), "icon_16x16.png");
        assert_eq!(entries[1].file_name(), "icon_16x16@2x.png");
        assert_eq!(entries[1].pixels(), 32);
    }

    #[test]
    fn largest_entry_is_the_base_size() {
        let largest = iconset_entries()
            .into_iter()
            .max_by_key(|e| e.pixels())
            .expect("entries");
        assert_eq!(largest.file_name(), "icon_512x512@2x.png");
        assert_eq!(largest.pixels(), BASE_SIZE);
    }
}
