//! Top and bottom caps
//!
//! A cap is an `(X + 1) × (Z + 1)` logical grid. Its border is the top (or
//! bottom) ring and its inner cells are the cap's interior vertices. The cap
//! is peeled row by row:
//!
//! ```text
//! row Z    border, ring segment z = Z walked backwards from x = 0
//! row z    inner:  ring (x = 0) | interior run of X - 1 | ring (x = X)
//! row 1    inner:  starts at the last ring vertex, the first interior
//!          vertex and ring vertex X + 1
//! row 0    border, ring segment z = 0
//! ```
//!
//! Going up one inner row moves the left pointer one step back along the
//! ring, the interior pointer forward by one interior row and the right
//! pointer one step forward along the ring.

use super::set_quad;
use crate::layout::Layout;
use crate::mesh::Submesh;

/// Which cap to triangulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapSide {
    /// y = Y, facing +y
    Top,
    /// y = 0, facing -y
    Bottom,
}

/// One row of the logical cap grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapRow {
    /// Row running along a ring segment
    Border { start: u32, reversed: bool },
    /// Row crossing the cap between the two x-side ring segments
    Inner { left: u32, mid: u32, right: u32 },
}

impl CapRow {
    /// Vertex index at column `x` of a row with `columns` cells
    fn at(&self, x: u32, columns: u32) -> u32 {
        match *self {
            CapRow::Border {
                start,
                reversed: false,
            } => start + x,
            CapRow::Border {
                start,
                reversed: true,
            } => start - x,
            CapRow::Inner { left, mid, right } => {
                if x == 0 {
                    left
                } else if x == columns {
                    right
                } else {
                    mid + x - 1
                }
            }
        }
    }
}

/// Yields consecutive row pairs `(near, far)` from z = 0 to z = Z
struct CapWalker {
    /// First vertex of the cap's ring
    base: u32,
    ring: u32,
    columns: u32,
    rows: u32,
    /// Interior vertices per inner row
    row_length: u32,
    interior_start: u32,
    row: u32,
    current: CapRow,
}

impl CapWalker {
    fn new(layout: &Layout, side: CapSide) -> Self {
        let resolution = layout.resolution();
        let (layer, interior_start) = match side {
            CapSide::Top => (resolution.y, layout.top_interior_start()),
            CapSide::Bottom => (0, layout.bottom_interior_start()),
        };
        let base = layout.ring_start(layer);

        Self {
            base,
            ring: layout.ring_length(),
            columns: resolution.x,
            rows: resolution.z,
            row_length: layout.interior_row_length(),
            interior_start,
            row: 0,
            current: CapRow::Border {
                start: base,
                reversed: false,
            },
        }
    }

    fn following_row(&self) -> CapRow {
        if self.row + 1 == self.rows {
            // Ring index of (0, Z) is X + Z + X
            return CapRow::Border {
                start: self.base + 2 * self.columns + self.rows,
                reversed: true,
            };
        }

        match self.current {
            CapRow::Border { .. } => CapRow::Inner {
                left: self.base + self.ring - 1,
                mid: self.interior_start,
                right: self.base + self.columns + 1,
            },
            CapRow::Inner { left, mid, right } => CapRow::Inner {
                left: left - 1,
                mid: mid + self.row_length,
                right: right + 1,
            },
        }
    }
}

impl Iterator for CapWalker {
    type Item = (CapRow, CapRow);

    fn next(&mut self) -> Option<Self::Item> {
        if self.row == self.rows {
            return None;
        }
        let far = self.following_row();
        let near = std::mem::replace(&mut self.current, far);
        self.row += 1;
        Some((near, far))
    }
}

/// Triangulate one cap into `triangles` starting at cursor `t`
///
/// The bottom cap swaps the near and far rows so both caps face outward.
pub fn triangulate_cap(layout: &Layout, side: CapSide, triangles: &mut [u32], mut t: usize) -> usize {
    let columns = layout.resolution().x;

    for (near, far) in CapWalker::new(layout, side) {
        for x in 0..columns {
            let (n0, n1) = (near.at(x, columns), near.at(x + 1, columns));
            let (f0, f1) = (far.at(x, columns), far.at(x + 1, columns));
            t = match side {
                CapSide::Top => set_quad(triangles, t, n0, n1, f0, f1),
                CapSide::Bottom => set_quad(triangles, t, f0, f1, n0, n1),
            };
        }
    }

    t
}

/// Index list for both caps, top first
pub fn triangulate_caps(layout: &Layout) -> Vec<u32> {
    let mut triangles = vec![0u32; layout.index_count(Submesh::FacingY)];
    let t = triangulate_cap(layout, CapSide::Top, &mut triangles, 0);
    let t = triangulate_cap(layout, CapSide::Bottom, &mut triangles, t);
    debug_assert_eq!(t, triangles.len());
    triangles
}
