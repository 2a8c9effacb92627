//! UV bounding boxes and region cropping
//!
//! A region is the axis-aligned box around a draw command's UV points,
//! in texel coordinates of its texture. (min_u, min_v) is the top-left
//! corner; the max edges are exclusive.

use image::{Rgba, RgbaImage};

use crate::scf::types::{TextureId, Uv};

/// Axis-aligned UV box of a draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UvBounds {
    pub min_u: i32,
    pub min_v: i32,
    pub max_u: i32,
    pub max_v: i32,
}

impl UvBounds {
    /// Bounding box of a set of UV points, `None` when there are none
    pub fn from_uvs(uvs: &[Uv]) -> Option<Self> {
        let first = uvs.first()?;
        let mut bounds = UvBounds {
            min_u: first.u as i32,
            min_v: first.v as i32,
            max_u: first.u as i32,
            max_v: first.v as i32,
        };

        for uv in &uvs[1..] {
            bounds.min_u = bounds.min_u.min(uv.u as i32);
            bounds.min_v = bounds.min_v.min(uv.v as i32);
            bounds.max_u = bounds.max_u.max(uv.u as i32);
            bounds.max_v = bounds.max_v.max(uv.v as i32);
        }

        Some(bounds)
    }

    pub fn width(&self) -> u32 {
        (self.max_u - self.min_u) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_v - self.min_v) as u32
    }

    /// Zero width or zero height; nothing to export
    pub fn is_degenerate(&self) -> bool {
        self.min_u == self.max_u || self.min_v == self.max_v
    }

    /// Whether the box reaches more than one texture size past any edge
    ///
    /// Such boxes are mostly transparent fill and can be far larger than
    /// the texture itself, so they are not cropped.
    pub fn overreaches(&self, texture_width: u32, texture_height: u32) -> bool {
        let (w, h) = (texture_width as i32, texture_height as i32);
        self.min_u < -w || self.min_v < -h || self.max_u > 2 * w || self.max_v > 2 * h
    }

    /// Copy this box out of `source`
    ///
    /// Parts of the box outside the source image come out transparent.
    pub fn crop(&self, source: &RgbaImage) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let sx = self.min_u + x as i32;
            let sy = self.min_v + y as i32;
            if sx >= 0 && sy >= 0 && (sx as u32) < source.width() && (sy as u32) < source.height() {
                *source.get_pixel(sx as u32, sy as u32)
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }
}

/// Identity of an exported crop: which texture and which box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionKey {
    pub texture: TextureId,
    pub bounds: UvBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uvs(points: &[(i16, i16)]) -> Vec<Uv> {
        points.iter().map(|&(u, v)| Uv::new(u, v)).collect()
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = UvBounds::from_uvs(&uvs(&[(5, 9), (1, 3), (7, 4)])).unwrap();
        assert_eq!(bounds, UvBounds { min_u: 1, min_v: 3, max_u: 7, max_v: 9 });
        assert_eq!((bounds.width(), bounds.height()), (6, 6));
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn flat_boxes_are_degenerate() {
        assert!(UvBounds::from_uvs(&uvs(&[(2, 0), (2, 5), (2, 9)])).unwrap().is_degenerate());
        assert!(UvBounds::from_uvs(&uvs(&[(0, 4), (8, 4)])).unwrap().is_degenerate());
        assert!(UvBounds::from_uvs(&[]).is_none());
    }

    #[test]
    fn overreach_allows_one_texture_size_of_margin() {
        let edge = UvBounds { min_u: -8, min_v: -4, max_u: 16, max_v: 8 };
        assert!(!edge.overreaches(8, 4));

        let full_range = UvBounds { min_u: -32768, min_v: -32768, max_u: 32767, max_v: 32767 };
        assert!(full_range.overreaches(8, 4));
        assert!(UvBounds { min_u: 0, min_v: 0, max_u: 17, max_v: 2 }.overreaches(8, 4));
        assert!(UvBounds { min_u: 0, min_v: -5, max_u: 2, max_v: 2 }.overreaches(8, 4));
    }

    #[test]
    fn crop_copies_texels() {
        let source = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let bounds = UvBounds { min_u: 1, min_v: 2, max_u: 3, max_v: 4 };

        let crop = bounds.crop(&source);
        assert_eq!(crop.dimensions(), (2, 2));
        assert_eq!(crop.get_pixel(0, 0).0, [1, 2, 0, 255]);
        assert_eq!(crop.get_pixel(1, 1).0, [2, 3, 0, 255]);
    }

    #[test]
    fn crop_outside_source_is_transparent() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        let bounds = UvBounds { min_u: -1, min_v: 0, max_u: 3, max_v: 1 };

        let crop = bounds.crop(&source);
        assert_eq!(crop.dimensions(), (4, 1));
        assert_eq!(crop.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(crop.get_pixel(1, 0).0, [9, 9, 9, 255]);
        assert_eq!(crop.get_pixel(3, 0).0, [0, 0, 0, 0]);
    }
}
