// craps-icons - core/die.rs
//
// Die renderer: a rounded white square with the pip layout for a face value.
// All geometry scales with the size of the icon the die is drawn into.

use crate::core::raster::{self, RoundedRect};
use crate::util::constants;
use image::RgbaImage;

/// Pip positions for faces 1-6, in units of the pip offset, indexed by `face - 1`.
///
/// Every pattern maps onto itself under point reflection through the die centre.
const PIP_PATTERNS: [&[(i8, i8)]; 6] = [
    &[(0, 0)],
    &[(-1, -1), (1, 1)],
    &[(-1, -1), (0, 0), (1, 1)],
    &[(-1, -1), (1, -1), (-1, 1), (1, 1)],
    &[(-1, -1), (1, -1), (0, 0), (-1, 1), (1, 1)],
    &[(-1, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (1, 1)],
];

/// Pip pattern for `face`, or an empty slice for anything outside 1-6.
pub fn pip_pattern(face: u8) -> &'static [(i8, i8)] {
    match face {
        1..=6 => PIP_PATTERNS[usize::from(face - 1)],
        _ => &[],
    }
}

/// Die measurements derived from the size of the enclosing icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieGeometry {
    /// Edge length of the die body.
    pub edge: f32,
    pub corner_radius: f32,
    pub pip_radius: f32,
    /// Distance from the die centre to an off-centre pip along each axis.
    pub pip_offset: f32,
}

impl DieGeometry {
    /// Geometry for a die drawn into an icon whose edge is `reference_size` pixels.
    pub fn for_icon(reference_size: f32) -> Self {
        let edge = reference_size * constants::DIE_SIZE_RATIO;
        Self {
            edge,
            corner_radius: edge * constants::DIE_CORNER_RATIO,
            pip_radius: edge * constants::PIP_RADIUS_RATIO,
            pip_offset: edge * constants::PIP_OFFSET_RATIO,
        }
    }

    /// Absolute pip centres for a die showing `face` centred on (`cx`, `cy`).
    pub fn pip_centers(&self, cx: f32, cy: f32, face: u8) -> impl Iterator<Item = (f32, f32)> {
        let o = self.pip_offset;
        pip_pattern(face)
            .iter()
            .map(move |&(dx, dy)| (cx + f32::from(dx) * o, cy + f32::from(dy) * o))
    }
}

/// Draw a die showing `face` centred on (`center_x`, `center_y`).
///
/// `reference_size` is the edge of the whole icon, not of the die. The
/// outline stroke stays at a fixed pixel width at every icon size.
pub fn draw_die(
    canvas: &mut RgbaImage,
    center_x: f32,
    center_y: f32,
    reference_size: f32,
    face: u8,
) {
    let geometry = DieGeometry::for_icon(reference_size);

    let body = RoundedRect::centered_square(
        center_x,
        center_y,
        geometry.edge,
        geometry.corner_radius,
    );
    raster::draw_rounded_rect(
        canvas,
        &body,
        raster::opaque(constants::DIE_WHITE),
        Some((
            raster::opaque(constants::DIE_OUTLINE_GREY),
            constants::DIE_OUTLINE_WIDTH,
        )),
    );

    let pip = raster::opaque(constants::PIP_BLACK);
    for (px, py) in geometry.pip_centers(center_x, center_y, face) {
        raster::fill_circle(canvas, px, py, geometry.pip_radius, pip);
    }

    tracing::trace!(
        face,
        x = center_x,
        y = center_y,
        edge = geometry.edge,
        "Die drawn"
    );
}
