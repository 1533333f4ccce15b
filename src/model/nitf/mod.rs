//! NITF related module

use std::fmt;

use log::debug;

use crate::base::{FieldReader, Parse};
use crate::error::Result;

mod image_band;
mod lut;

pub use image_band::{ImageBand, MIN_BAND_LENGTH};
pub use lut::ImageBandLut;

/// The band descriptors of one NITF image subheader, in band order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageBands {
    bands: Vec<ImageBand>,
}

impl ImageBands {
    /// Returns `count` band descriptors read back to back.
    ///
    /// Bands share the reader's cursor, so they are decoded one after the
    /// other and the first fault aborts the whole read.
    ///
    /// # Arguments
    ///
    /// * `reader` - A reader positioned at the first band (IREPBAND1).
    /// * `count` - Number of bands, NBANDS or XBANDS of the image subheader.
    pub fn parse<R: FieldReader + ?Sized>(reader: &mut R, count: usize) -> Result<ImageBands> {
        let mut bands = Vec::with_capacity(count);
        for n in 1..=count {
            debug!("reading band {} of {} at offset {}", n, count, reader.position());
            bands.push(ImageBand::parse(reader)?);
        }
        Ok(ImageBands { bands })
    }

    pub fn bands(&self) -> &[ImageBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl fmt::Display for ImageBands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut retval = "".to_string();
        for (index, band) in self.bands.iter().enumerate() {
            let n = index + 1;
            retval = format!("{}\nNITF::BAND{:03}::IREPBAND: {}", retval, n, band.image_representation());
            retval = format!("{}\nNITF::BAND{:03}::ISUBCAT: {}", retval, n, band.subcategory());
            retval = format!("{}\nNITF::BAND{:03}::NLUTS: {}", retval, n, band.num_luts());
            if band.num_luts() > 0 {
                retval = format!("{}\nNITF::BAND{:03}::NELUT: {}", retval, n, band.num_lut_entries());
            }
            for (m, lut) in band.luts().iter().enumerate() {
                retval = format!("{}\nNITF::BAND{:03}::LUTD{}: {}", retval, n, m + 1, lut);
            }
        }
        write!(f, "{}", retval)
    }
}
