// craps-icons - core/raster.rs
//
// Minimal shape rasteriser over `image::RgbaImage`.
//
// Coverage is aliased: a pixel is painted when its integer coordinate lies
// inside the shape. No blending, so every write is a plain overwrite and an
// opaque canvas stays opaque. Output is bit-exact for identical inputs.

use image::{Rgba, RgbaImage};

/// Lift an RGB triple to an opaque RGBA pixel.
pub fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

/// Axis-aligned rectangle with rounded corners, in canvas coordinates.
///
/// Bounds are inclusive, matching the usual `[x0, y0, x1, y1]` box convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub radius: f32,
}

impl RoundedRect {
    /// Square of side `side` centred on (`cx`, `cy`).
    pub fn centered_square(cx: f32, cy: f32, side: f32, radius: f32) -> Self {
        let half = side / 2.0;
        Self {
            x0: cx - half,
            y0: cy - half,
            x1: cx + half,
            y1: cy + half,
            radius,
        }
    }

    /// Signed distance from (`px`, `py`) to the outline.
    ///
    /// Negative inside, zero on the edge, positive outside. The radius is
    /// clamped so it never exceeds half the shorter side.
    pub fn signed_distance(&self, px: f32, py: f32) -> f32 {
        let half_w = (self.x1 - self.x0) / 2.0;
        let half_h = (self.y1 - self.y0) / 2.0;
        let r = self.radius.clamp(0.0, half_w.min(half_h));
        let cx = self.x0 + half_w;
        let cy = self.y0 + half_h;

        let qx = (px - cx).abs() - (half_w - r);
        let qy = (py - cy).abs() - (half_h - r);
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        let inside = qx.max(qy).min(0.0);
        outside + inside - r
    }
}

/// Clamp a float span onto the pixel range `0..limit`, inclusive of both ends.
///
/// Returns `None` when the span misses the canvas entirely.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Option<(u32, u32)> {
    if limit == 0 || hi < 0.0 || lo > (limit - 1) as f32 {
        return None;
    }
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil() as u32).min(limit - 1);
    Some((start, end))
}

/// Fill a rounded rectangle, optionally with an outline drawn inward.
///
/// `outline` is `(colour, width_px)`. Pixels closer to the edge than the
/// stroke width take the outline colour, the rest take `fill`.
pub fn draw_rounded_rect(
    canvas: &mut RgbaImage,
    rect: &RoundedRect,
    fill: Rgba<u8>,
    outline: Option<(Rgba<u8>, u32)>,
) {
    let Some((xs, xe)) = pixel_span(rect.x0, rect.x1, canvas.width()) else {
        return;
    };
    let Some((ys, ye)) = pixel_span(rect.y0, rect.y1, canvas.height()) else {
        return;
    };

    for y in ys..=ye {
        for x in xs..=xe {
            let d = rect.signed_distance(x as f32, y as f32);
            if d > 0.0 {
                continue;
            }
            let colour = match outline {
                Some((stroke, width)) if d > -(width as f32) => stroke,
                _ => fill,
            };
            canvas.put_pixel(x, y, colour);
        }
    }
}

/// Fill a circle of radius `r` centred on (`cx`, `cy`).
///
/// A circle too small to cover any pixel coordinate still paints the pixel
/// nearest its centre, so no dot disappears at small sizes.
pub fn fill_circle(canvas: &mut RgbaImage, cx: f32, cy: f32, r: f32, colour: Rgba<u8>) {
    let Some((xs, xe)) = pixel_span(cx - r, cx + r, canvas.width()) else {
        return;
    };
    let Some((ys, ye)) = pixel_span(cy - r, cy + r, canvas.height()) else {
        return;
    };

    let r2 = r * r;
    let mut painted = false;
    for y in ys..=ye {
        for x in xs..=xe {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(x, y, colour);
                painted = true;
            }
        }
    }

    if !painted {
        let (nx, ny) = (cx.round(), cy.round());
        if nx >= 0.0 && ny >= 0.0 && nx < canvas.width() as f32 && ny < canvas.height() as f32 {
            canvas.put_pixel(nx as u32, ny as u32, colour);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_signed_distance_sign() {
        let rect = RoundedRect::centered_square(10.0, 10.0, 10.0, 2.0);
        assert!(rect.signed_distance(10.0, 10.0) < 0.0);
        assert!(rect.signed_distance(30.0, 10.0) > 0.0);
        assert!(rect.signed_distance(15.0, 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_rounded_corner_is_cut() {
        let rect = RoundedRect {
            x0: 0.0,
            y0: 0.0,
            x1: 20.0,
            y1: 20.0,
            radius: 8.0,
        };
        // The sharp corner lies outside the arc, the middle of an edge does not.
        assert!(rect.signed_distance(0.5, 0.5) > 0.0);
        assert!(rect.signed_distance(10.0, 0.5) < 0.0);
    }

    #[test]
    fn test_outline_and_fill_bands() {
        let mut canvas = RgbaImage::from_pixel(20, 20, CLEAR);
        let rect = RoundedRect {
            x0: 2.0,
            y0: 2.0,
            x1: 17.0,
            y1: 17.0,
            radius: 0.0,
        };
        draw_rounded_rect(&mut canvas, &rect, RED, Some((BLUE, 2)));

        assert_eq!(*canvas.get_pixel(0, 10), CLEAR);
        assert_eq!(*canvas.get_pixel(2, 10), BLUE);
        assert_eq!(*canvas.get_pixel(3, 10), BLUE);
        assert_eq!(*canvas.get_pixel(4, 10), RED);
        assert_eq!(*canvas.get_pixel(10, 10), RED);
        assert_eq!(*canvas.get_pixel(17, 10), BLUE);
        assert_eq!(*canvas.get_pixel(18, 10), CLEAR);
    }

    #[test]
    fn test_circle_stays_inside_radius() {
        let mut canvas = RgbaImage::from_pixel(21, 21, CLEAR);
        fill_circle(&mut canvas, 10.0, 10.0, 4.0, RED);

        assert_eq!(*canvas.get_pixel(10, 10), RED);
        assert_eq!(*canvas.get_pixel(14, 10), RED);
        assert_eq!(*canvas.get_pixel(15, 10), CLEAR);
        assert_eq!(*canvas.get_pixel(13, 13), CLEAR);
    }

    #[test]
    fn test_subpixel_circle_paints_nearest_pixel() {
        let mut canvas = RgbaImage::from_pixel(8, 8, CLEAR);
        // No integer coordinate lies within 0.3 of (3.6, 4.55).
        fill_circle(&mut canvas, 3.6, 4.55, 0.3, RED);

        assert_eq!(*canvas.get_pixel(4, 5), RED);
        assert_eq!(canvas.pixels().filter(|p| **p == RED).count(), 1);
    }

    #[test]
    fn test_subpixel_circle_off_canvas_paints_nothing() {
        let mut canvas = RgbaImage::from_pixel(4, 4, CLEAR);
        fill_circle(&mut canvas, -0.6, 2.0, 0.2, RED);
        fill_circle(&mut canvas, 2.0, 3.7, 0.1, RED);

        assert!(canvas.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_shapes_clip_to_canvas() {
        let mut canvas = RgbaImage::from_pixel(8, 8, CLEAR);
        fill_circle(&mut canvas, -2.0, -2.0, 5.0, RED);
        fill_circle(&mut canvas, 100.0, 100.0, 5.0, RED);
        let rect = RoundedRect::centered_square(8.0, 8.0, 6.0, 1.0);
        draw_rounded_rect(&mut canvas, &rect, BLUE, None);

        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(7, 7), BLUE);
        assert_eq!(*canvas.get_pixel(4, 0), CLEAR);
    }
}
