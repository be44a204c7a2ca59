//! Region copy between buffers
//!
//! The one drawing primitive every extraction-style operation is built
//! on: copy a rectangular region from a source raster into a mutable
//! destination, clipped to both extents.

use super::{Raster, RasterMut};

impl RasterMut {
    /// Copy a `w x h` region of `src` starting at (`src_x`, `src_y`)
    /// into this buffer at (`dest_x`, `dest_y`).
    ///
    /// The region is clipped against both the source and the destination
    /// extent; out-of-range portions are silently dropped, so the call
    /// never fails. Pixels are copied verbatim with no blending.
    pub fn blit_from(
        &mut self,
        src: &Raster,
        dest_x: u32,
        dest_y: u32,
        src_x: u32,
        src_y: u32,
        w: u32,
        h: u32,
    ) {
        let copy_w = w
            .min(src.width().saturating_sub(src_x))
            .min(self.width().saturating_sub(dest_x));
        let copy_h = h
            .min(src.height().saturating_sub(src_y))
            .min(self.height().saturating_sub(dest_y));
        if copy_w == 0 || copy_h == 0 {
            return;
        }

        for row in 0..copy_h {
            let src_row = src.row_data(src_y + row);
            let src_slice = &src_row[src_x as usize..(src_x + copy_w) as usize];
            let dst_row = self.row_data_mut(dest_y + row);
            dst_row[dest_x as usize..(dest_x + copy_w) as usize].copy_from_slice(src_slice);
        }
    }
}
