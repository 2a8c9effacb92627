//! Polygon masking for non-quad regions
//!
//! Pixels of a cropped region that fall outside the command's UV polygon
//! are cleared to transparent. The containment test checks that a point
//! is on the same side of every edge, so it is only correct for convex
//! polygons with a consistent winding.

use image::{Rgba, RgbaImage};

use crate::scf::types::Uv;
use super::region::UvBounds;

/// Whether `p2` lies strictly to the right of the edge `p0 -> p1`
fn is_outside_edge(p0: (i64, i64), p1: (i64, i64), p2: (i64, i64)) -> bool {
    let area2 = (p1.0 - p0.0) * (p2.1 - p0.1) - (p2.0 - p0.0) * (p1.1 - p0.1);
    area2 < 0
}

/// Convex containment test; points on an edge count as inside
pub fn point_in_polygon(u: i64, v: i64, polygon: &[Uv]) -> bool {
    let n = polygon.len();
    (0..n).all(|i| {
        let p0 = polygon[i];
        let p1 = polygon[(i + 1) % n];
        !is_outside_edge((p0.u as i64, p0.v as i64), (p1.u as i64, p1.v as i64), (u, v))
    })
}

/// Clear every pixel of `image` whose texel lies outside `polygon`
///
/// # Arguments
/// * `image` - Crop of `bounds`, modified in place
/// * `bounds` - Box the crop was taken from, giving each pixel's texel position
/// * `polygon` - UV points of the draw command
///
/// # Returns
/// Number of pixels cleared
pub fn apply_polygon_mask(image: &mut RgbaImage, bounds: &UvBounds, polygon: &[Uv]) -> usize {
    let mut cleared = 0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let u = bounds.min_u as i64 + x as i64;
        let v = bounds.min_v as i64 + y as i64;
        if !point_in_polygon(u, v, polygon) {
            *pixel = Rgba([0, 0, 0, 0]);
            cleared += 1;
        }
    }

    cleared
}
