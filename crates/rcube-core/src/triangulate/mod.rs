//! Triangle index generation
//!
//! Every list is preallocated to its exact size from the [`Layout`] and
//! filled through [`set_quad`] with a running cursor. A cursor that does not
//! land exactly on the end of its list means the index arithmetic is wrong.
//!
//! [`Layout`]: crate::layout::Layout

mod caps;
mod sides;

pub use caps::{CapSide, triangulate_cap, triangulate_caps};
pub use sides::{SideIndices, triangulate_sides};

/// Write one quad as two triangles and return the advanced cursor
///
/// `v00`-`v10` and `v01`-`v11` are the parallel edges. The triangles are
/// `(v00, v01, v10)` and `(v10, v01, v11)`; with the orientation used by
/// the triangulators, `(b - a) × (c - a)` points out of the surface.
///
/// Panics if the quad does not fit; the lists are sized exactly, so that
/// is an index arithmetic bug.
#[inline]
pub fn set_quad(triangles: &mut [u32], i: usize, v00: u32, v10: u32, v01: u32, v11: u32) -> usize {
    triangles[i..i + 6].copy_from_slice(&[v00, v01, v10, v10, v01, v11]);
    i + 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_quad_layout() {
        let mut triangles = [0u32; 6];
        let next = set_quad(&mut triangles, 0, 10, 11, 20, 21);
        assert_eq!(next, 6);
        assert_eq!(triangles, [10, 20, 11, 11, 20, 21]);
    }

    #[test]
    fn test_set_quad_advances_cursor() {
        let mut triangles = vec![0u32; 12];
        let t = set_quad(&mut triangles, 0, 0, 1, 2, 3);
        let t = set_quad(&mut triangles, t, 4, 5, 6, 7);
        assert_eq!(t, 12);
        assert_eq!(&triangles[6..], &[4, 6, 5, 5, 6, 7]);
    }

    #[test]
    #[should_panic]
    fn test_set_quad_overflow_panics() {
        let mut triangles = vec![0u32; 6];
        set_quad(&mut triangles, 6, 0, 1, 2, 3);
    }
}
