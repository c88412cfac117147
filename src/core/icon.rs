// craps-icons - core/icon.rs
//
// Icon composer: felt background, gold-bordered rounded panel, and a pair of
// dice showing 4 and 3 staggered across the centre.

use crate::core::die;
use crate::core::raster::{self, RoundedRect};
use crate::util::constants;
use crate::util::error::RenderError;
use image::RgbaImage;

/// Where a die lands on the icon and which face it shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiePlacement {
    pub x: f32,
    pub y: f32,
    pub face: u8,
}

/// Border stroke width for an icon of `pixel_size`, in whole pixels.
pub fn border_width(pixel_size: u32) -> u32 {
    let scaled = (pixel_size as f32 * constants::BORDER_WIDTH_RATIO) as u32;
    scaled.max(constants::MIN_BORDER_WIDTH)
}

/// The inset border panel for an icon of `pixel_size`.
pub fn border_rect(pixel_size: u32) -> RoundedRect {
    let size = pixel_size as f32;
    let margin = size * constants::BORDER_MARGIN_RATIO;
    RoundedRect {
        x0: margin,
        y0: margin,
        x1: size - margin,
        y1: size - margin,
        radius: size * constants::BORDER_CORNER_RATIO,
    }
}

/// Die positions for an icon of `pixel_size`: upper-left 4, lower-right 3.
pub fn die_placements(pixel_size: u32) -> [DiePlacement; 2] {
    let size = pixel_size as f32;
    let center = size / 2.0;
    let offset = size * constants::DIE_OFFSET_RATIO;
    let stagger = offset * constants::DIE_STAGGER_RATIO;
    [
        DiePlacement {
            x: center - offset,
            y: center - stagger,
            face: constants::LEFT_DIE_FACE,
        },
        DiePlacement {
            x: center + offset,
            y: center + stagger,
            face: constants::RIGHT_DIE_FACE,
        },
    ]
}

/// Render the full icon at `pixel_size` x `pixel_size`.
///
/// The result is fully opaque and depends on nothing but `pixel_size`.
pub fn compose_icon(pixel_size: u32) -> Result<RgbaImage, RenderError> {
    if pixel_size == 0 {
        return Err(RenderError::InvalidCanvasSize { size: pixel_size });
    }

    let felt = raster::opaque(constants::FELT_GREEN);
    let mut canvas = RgbaImage::from_pixel(pixel_size, pixel_size, felt);

    // Fill repeats the background; only the gold outline is visible.
    raster::draw_rounded_rect(
        &mut canvas,
        &border_rect(pixel_size),
        felt,
        Some((
            raster::opaque(constants::BORDER_GOLD),
            border_width(pixel_size),
        )),
    );

    for placement in die_placements(pixel_size) {
        die::draw_die(
            &mut canvas,
            placement.x,
            placement.y,
            pixel_size as f32,
            placement.face,
        );
    }

    tracing::debug!(pixels = pixel_size, "Icon composed");
    Ok(canvas)
}
