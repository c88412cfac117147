// craps-icons - core/iconset.rs
//
// The fixed table of files a macOS AppIcon.appiconset needs.

/// Pixel density tier of an icon file relative to its logical size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    X1,
    X2,
}

impl Scale {
    /// Pixel multiplier.
    pub fn factor(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
        }
    }

    /// Label used in the asset catalog manifest.
    pub fn label(self) -> &'static str {
        match self {
            Self::X1 => "1x",
            Self::X2 => "2x",
        }
    }
}

/// One file in the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub filename: &'static str,
    /// Logical edge in points; the `NxN` in the file name.
    pub logical: u32,
    pub scale: Scale,
}

impl IconSpec {
    const fn new(filename: &'static str, logical: u32, scale: Scale) -> Self {
        Self {
            filename,
            logical,
            scale,
        }
    }

    /// Edge of the rendered bitmap in pixels.
    pub fn pixels(&self) -> u32 {
        self.logical * self.scale.factor()
    }

    /// Logical size string for the manifest, e.g. `"16x16"`.
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.logical)
    }
}

/// Every icon the bundle requires, in manifest order.
pub const ICON_SET: [IconSpec; 10] = [
    IconSpec::new("icon_16x16.png", 16, Scale::X1),
    IconSpec::new("icon_16x16@2x.png", 16, Scale::X2),
    IconSpec::new("icon_32x32.png", 32, Scale::X1),
    IconSpec::new("icon_32x32@2x.png", 32, Scale::X2),
    IconSpec::new("icon_128x128.png", 128, Scale::X1),
    IconSpec::new("icon_128x128@2x.png", 128, Scale::X2),
    IconSpec::new("icon_256x256.png", 256, Scale::X1),
    IconSpec::new("icon_256x256@2x.png", 256, Scale::X2),
    IconSpec::new("icon_512x512.png", 512, Scale::X1),
    IconSpec::new("icon_512x512@2x.png", 512, Scale::X2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_sizes_in_order() {
        let pixels: Vec<u32> = ICON_SET.iter().map(IconSpec::pixels).collect();
        assert_eq!(pixels, vec![16, 32, 32, 64, 128, 256, 256, 512, 512, 1024]);
    }

    #[test]
    fn test_filename_agrees_with_size_and_scale() {
        for spec in &ICON_SET {
            let expected = match spec.scale {
                Scale::X1 => format!("icon_{}.png", spec.size_label()),
                Scale::X2 => format!("icon_{}@2x.png", spec.size_label()),
            };
            assert_eq!(spec.filename, expected);
        }
    }

    #[test]
    fn test_each_logical_size_has_both_tiers() {
        for pair in ICON_SET.chunks(2) {
            assert_eq!(pair[0].logical, pair[1].logical);
            assert_eq!(pair[0].scale, Scale::X1);
            assert_eq!(pair[1].scale, Scale::X2);
        }
    }

    #[test]
    fn test_retina_16_is_32_pixels() {
        let spec = ICON_SET[1];
        assert_eq!(spec.filename, "icon_16x16@2x.png");
        assert_eq!(spec.pixels(), 32);
        assert_eq!(spec.size_label(), "16x16");
        assert_eq!(spec.scale.label(), "2x");
    }
}
