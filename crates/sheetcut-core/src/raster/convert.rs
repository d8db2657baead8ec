//! Conversion from RGB to single-channel intensity
//!
//! All blank-detection decisions are made on luminance rather than on
//! individual channels.

use super::Raster;
use crate::color;
use crate::intensity::IntensityGrid;

impl Raster {
    /// Project the raster to an 8-bit luminance grid.
    ///
    /// Uses [`color::luma`] (BT.601 weights) on every pixel. The output has
    /// the same dimensions as the input.
    pub fn to_intensity(&self) -> IntensityGrid {
        let values = self
            .data()
            .iter()
            .map(|&p| {
                let (r, g, b) = color::extract_rgb(p);
                color::luma(r, g, b)
            })
            .collect();
        IntensityGrid::from_raw(self.width(), self.height(), values)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Raster, color};

    #[test]
    fn test_to_intensity_dimensions_and_values() {
        let mut m = Raster::new_filled(3, 2, color::WHITE).unwrap().to_mut();
        m.set_rgb(1, 1, 255, 0, 0).unwrap();
        let r: Raster = m.into();
        let g = r.to_intensity();
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g.get(0, 0), Some(255));
        assert_eq!(g.get(1, 1), Some(76));
    }
}
