//! Procedural drawing of the lightning-bolt icon.
//!
//! The renderer is a pure function from an edge length to an RGB bitmap:
//! a two-color gradient background with a solid bolt polygon on top.

use image::{ImageBuffer, Rgb, RgbImage};

/// Gradient start color, `#667eea`.
pub const DEFAULT_TOP: Rgb<u8> = Rgb([102, 126, 234]);

/// Gradient end color, `#764ba2`.
pub const DEFAULT_BOTTOM: Rgb<u8> = Rgb([118, 75, 162]);

/// Bolt fill color.
pub const DEFAULT_BOLT: Rgb<u8> = Rgb([255, 255, 255]);

/// Bolt outline on a 16-unit reference grid.
pub const BOLT_POINTS: [(f32, f32); 6] = [
    (9.0, 2.0),
    (4.0, 9.0),
    (7.0, 9.0),
    (7.0, 14.0),
    (12.0, 7.0),
    (9.0, 7.0),
];

/// Edge length of the grid `BOLT_POINTS` is defined on.
pub const GRID_SIZE: f32 = 16.0;

/// Direction the background gradient runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gradient {
    /// Top edge to bottom edge
    #[default]
    Vertical,
    /// Top-left corner to bottom-right corner
    Diagonal,
}

/// Colors and gradient used to draw an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub top: Rgb<u8>,
    pub bottom: Rgb<u8>,
    pub bolt: Rgb<u8>,
    pub gradient: Gradient,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            bottom: DEFAULT_BOTTOM,
            bolt: DEFAULT_BOLT,
            gradient: Gradient::Vertical,
        }
    }
}

/// Render an icon with the default style
pub fn create_icon(size: u32) -> RgbImage {
    render_icon(size, &IconStyle::default())
}

/// Render a `size`×`size` icon: gradient background, then the bolt
pub fn render_icon(size: u32, style: &IconStyle) -> RgbImage {
    let mut img = gradient_fill(size, style);
    let points = scaled_bolt(size);
    fill_polygon(&mut img, &points, style.bolt);
    img
}

/// Allocate a bitmap filled with the style's background gradient
pub fn gradient_fill(size: u32, style: &IconStyle) -> RgbImage {
    let extent = f64::from(size);
    ImageBuffer::from_fn(size, size, |x, y| {
        // Position along the gradient as step / steps; the last row stays short of the end color
        let (step, steps) = match style.gradient {
            Gradient::Vertical => (f64::from(y), extent),
            Gradient::Diagonal => (f64::from(x) + f64::from(y), 2.0 * extent),
        };
        lerp_color(style.top, style.bottom, step, steps)
    })
}

/// Interpolate each channel, truncating toward zero
fn lerp_color(from: Rgb<u8>, to: Rgb<u8>, step: f64, steps: f64) -> Rgb<u8> {
    let channel = |a: u8, b: u8| -> u8 {
        let (a, b) = (f64::from(a), f64::from(b));
        let value = a + (b - a) * step / steps;
        value.clamp(0.0, 255.0) as u8
    };
    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}

/// Bolt vertices scaled from the reference grid to `size` pixels
pub fn scaled_bolt(size: u32) -> Vec<(f32, f32)> {
    let scale = size as f32 / GRID_SIZE;
    BOLT_POINTS
        .iter()
        .map(|&(x, y)| (x * scale, y * scale))
        .collect()
}

/// Fill a closed polygon with a solid color.
///
/// Pixel `(x, y)` is painted when the grid point `(x, y)` lies inside the
/// polygon or on its outline, so vertices and edges are always covered.
/// Interior spans follow the even-odd rule; anything outside the image is
/// clipped.
pub fn fill_polygon(img: &mut RgbImage, points: &[(f32, f32)], color: Rgb<u8>) {
    if points.len() < 3 || img.width() == 0 || img.height() == 0 {
        return;
    }

    let edges: Vec<((f32, f32), (f32, f32))> = points
        .iter()
        .enumerate()
        .map(|(i, &start)| (start, points[(i + 1) % points.len()]))
        .collect();

    let y_min = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let y_max = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
    let first_row = (y_min.ceil() as i64).max(0);
    let last_row = (y_max.floor() as i64).min(img.height() as i64 - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(edges.len());

    for y in first_row..=last_row {
        let scan_y = y as f32;
        crossings.clear();

        for &((x0, y0), (x1, y1)) in &edges {
            // Half-open span so shared vertices are counted once; flat edges never match
            let spans = (y0 <= scan_y && scan_y < y1) || (y1 <= scan_y && scan_y < y0);
            if spans {
                crossings.push(edge_x_at(x0, y0, x1, y1, scan_y));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            paint_span(img, y, pair[0], pair[1], color);
        }

        // Outline points on this row: tips, bottoms of edges and flat edges
        for &((x0, y0), (x1, y1)) in &edges {
            if scan_y < y0.min(y1) || scan_y > y0.max(y1) {
                continue;
            }
            if y0 == y1 {
                paint_span(img, y, x0.min(x1), x0.max(x1), color);
            } else {
                let x = edge_x_at(x0, y0, x1, y1, scan_y);
                paint_span(img, y, x, x, color);
            }
        }
    }
}

/// X coordinate where the edge meets row `y`, exact at the endpoints
fn edge_x_at(x0: f32, y0: f32, x1: f32, y1: f32, y: f32) -> f32 {
    if y == y0 {
        x0
    } else if y == y1 {
        x1
    } else {
        x0 + (y - y0) * (x1 - x0) / (y1 - y0)
    }
}

/// Paint every pixel whose x lies in `[from, to]` on row `y`
fn paint_span(img: &mut RgbImage, y: i64, from: f32, to: f32, color: Rgb<u8>) {
    let first = (from.ceil() as i64).max(0);
    let last = (to.floor() as i64).min(img.width() as i64 - 1);
    for x in first..=last {
        img.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt_bounds(img: &RgbImage, bolt: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, pixel) in img.enumerate_pixels() {
            if *pixel == bolt {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    #[test]
    fn test_dimensions_match_requested_size() {
        for size in [16, 48, 128] {
            let icon = create_icon(size);
            assert_eq!(icon.width(), size);
            assert_eq!(icon.height(), size);
        }
    }

    #[test]
    fn test_zero_size_is_empty() {
        let icon = create_icon(0);
        assert_eq!(icon.width(), 0);
        assert_eq!(icon.height(), 0);
    }

    #[test]
    fn test_vertical_gradient_rows() {
        let icon = create_icon(16);

        // Column 0 is clear of the bolt at every size
        assert_eq!(*icon.get_pixel(0, 0), DEFAULT_TOP);

        // 102 + 16 * 15/16 = 117, 126 - 51 * 15/16 = 78.19, 234 - 72 * 15/16 = 166.5
        assert_eq!(*icon.get_pixel(0, 15), Rgb([117, 78, 166]));

        // Every pixel of a row shares its color outside the bolt
        assert_eq!(icon.get_pixel(0, 5), icon.get_pixel(15, 5));
    }

    #[test]
    fn test_gradient_truncates_exact_thirds() {
        // 126 - 51 * 16/48 is exactly 109
        let icon = create_icon(48);
        assert_eq!(icon.get_pixel(0, 16)[1], 109);
    }

    #[test]
    fn test_bottom_row_approaches_end_color() {
        let icon = create_icon(128);
        let bottom = icon.get_pixel(0, 127);
        for c in 0..3 {
            let diff = (bottom[c] as i32 - DEFAULT_BOTTOM[c] as i32).abs();
            assert!(diff <= 2, "channel {c} off by {diff}");
        }
    }

    #[test]
    fn test_diagonal_gradient() {
        let style = IconStyle {
            gradient: Gradient::Diagonal,
            ..IconStyle::default()
        };
        let icon = render_icon(48, &style);

        assert_eq!(*icon.get_pixel(0, 0), DEFAULT_TOP);
        // Same distance along the diagonal, same color
        assert_eq!(icon.get_pixel(0, 47), icon.get_pixel(47, 0));
        assert_ne!(icon.get_pixel(0, 0), icon.get_pixel(47, 47));

        // t = 94/96: 102 + 16t = 117.7, 126 - 51t = 76.1, 234 - 72t = 163.5
        assert_eq!(*icon.get_pixel(47, 47), Rgb([117, 76, 163]));
        // t = 47/96: 102 + 16t = 109.8, 126 - 51t = 101.0, 234 - 72t = 198.75
        assert_eq!(*icon.get_pixel(47, 0), Rgb([109, 101, 198]));
    }

    #[test]
    fn test_bolt_bounds_at_16() {
        let icon = create_icon(16);
        let (x0, y0, x1, y1) = bolt_bounds(&icon, DEFAULT_BOLT).expect("bolt should be drawn");
        // Extreme vertices (4,9), (9,2), (12,7) and (7,14) are all painted
        assert_eq!((x0, y0, x1, y1), (4, 2, 12, 14));
    }

    #[test]
    fn test_bolt_scales_with_size() {
        for size in [16u32, 48, 128] {
            let icon = create_icon(size);
            let (x0, y0, x1, y1) = bolt_bounds(&icon, DEFAULT_BOLT).expect("bolt should be drawn");
            let width_ratio = (x1 - x0) as f32 / size as f32;
            let height_ratio = (y1 - y0) as f32 / size as f32;
            let tolerance = 1.0 / size as f32 + f32::EPSILON;
            assert!((width_ratio - 0.5).abs() <= tolerance, "size {size}: width {width_ratio}");
            assert!((height_ratio - 0.75).abs() <= tolerance, "size {size}: height {height_ratio}");
        }
    }

    #[test]
    fn test_bolt_tips_are_painted() {
        for size in [16u32, 48, 128] {
            let icon = create_icon(size);
            let scale = size / 16;
            for (x, y) in [(9, 2), (7, 14), (4, 9), (12, 7)] {
                assert_eq!(
                    *icon.get_pixel(x * scale, y * scale),
                    DEFAULT_BOLT,
                    "size {size}: vertex ({x}, {y})"
                );
            }
            // Just past each pointed tip stays background
            assert_ne!(*icon.get_pixel(9 * scale, 2 * scale - 1), DEFAULT_BOLT);
            assert_ne!(*icon.get_pixel(7 * scale, 14 * scale + 1), DEFAULT_BOLT);
        }
    }

    #[test]
    fn test_bolt_center_is_filled() {
        // (8, 8) on the reference grid sits inside the bolt body
        for size in [16u32, 48, 128] {
            let icon = create_icon(size);
            let c = size / 2;
            assert_eq!(*icon.get_pixel(c, c), DEFAULT_BOLT, "size {size}");
        }
    }

    #[test]
    fn test_custom_bolt_color() {
        let style = IconStyle {
            bolt: Rgb([255, 200, 0]),
            ..IconStyle::default()
        };
        let icon = render_icon(48, &style);
        assert_eq!(*icon.get_pixel(24, 24), Rgb([255, 200, 0]));
        assert!(icon.pixels().all(|p| *p != DEFAULT_BOLT));
    }

    #[test]
    fn test_fill_polygon_clips_to_image() {
        let mut img = RgbImage::new(4, 4);
        let square = [(-2.0, -2.0), (10.0, -2.0), (10.0, 10.0), (-2.0, 10.0)];
        fill_polygon(&mut img, &square, Rgb([1, 2, 3]));
        assert!(img.pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn test_fill_polygon_ignores_degenerate() {
        let mut img = RgbImage::new(4, 4);
        fill_polygon(&mut img, &[(0.0, 0.0), (4.0, 4.0)], Rgb([9, 9, 9]));
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
