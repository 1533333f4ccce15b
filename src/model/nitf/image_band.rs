//! Image band descriptor (IREPBANDn through LUTDnm)

use std::fmt;

use log::debug;

use super::lut::ImageBandLut;
use crate::base::{FieldReader, Parse};
use crate::error::{Error, Result};

const IREPBAND_LENGTH: usize = 2;
const ISUBCAT_LENGTH: usize = 6;
const IFC_LENGTH: usize = 1;
const IMFLT_LENGTH: usize = 3;
const NLUTS_LENGTH: usize = 1;
const NELUT_LENGTH: usize = 5;

/// Length of a band descriptor that carries no lookup tables.
pub const MIN_BAND_LENGTH: usize =
    IREPBAND_LENGTH + ISUBCAT_LENGTH + IFC_LENGTH + IMFLT_LENGTH + NLUTS_LENGTH;

/// One band of an image subheader.
///
/// The image filter condition (IFC) and filter code (IMFLT) are consumed while
/// parsing but not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBand {
    // Open tags rather than an enum: MIL-STD-2500C leaves room for new codes.
    image_representation: String,
    subcategory: String,
    num_lut_entries: usize,
    luts: Vec<ImageBandLut>,
}

impl Parse for ImageBand {
    /// Returns the band descriptor at the reader's position, leaving the
    /// reader on the first byte after it.
    fn parse<R: FieldReader + ?Sized>(reader: &mut R) -> Result<ImageBand> {
        let start = reader.position();

        // Image Representation
        let image_representation = reader.read_trimmed_bytes(IREPBAND_LENGTH, "IREPBAND")?;

        // Image Subcategory
        let subcategory = reader.read_trimmed_bytes(ISUBCAT_LENGTH, "ISUBCAT")?;

        // Image Filter Condition
        reader.skip(IFC_LENGTH, "IFC")?;

        // Image Filter Code
        reader.skip(IMFLT_LENGTH, "IMFLT")?;

        // Number of LUTs
        let num_luts = reader.read_bytes_as_integer(NLUTS_LENGTH, "NLUTS")? as usize;

        let mut num_lut_entries = 0;
        let mut luts = Vec::with_capacity(num_luts);
        if num_luts > 0 {
            // Number of LUT Entries, omitted when NLUTS is 0
            num_lut_entries = reader.read_bytes_as_integer(NELUT_LENGTH, "NELUT")? as usize;

            for _ in 0..num_luts {
                let entries = reader.read_bytes_raw(num_lut_entries, "LUTD")?;
                debug_assert_eq!(entries.len(), num_lut_entries);
                luts.push(ImageBandLut::new(entries));
            }
        }

        debug!(
            "band at {}: IREPBAND={:?} ISUBCAT={:?} NLUTS={} NELUT={} ({} bytes)",
            start,
            image_representation,
            subcategory,
            num_luts,
            num_lut_entries,
            reader.position() - start
        );

        Ok(ImageBand {
            image_representation,
            subcategory,
            num_lut_entries,
            luts,
        })
    }
}

impl ImageBand {
    /// Returns the image representation of the band (IREPBAND).
    ///
    /// See MIL-STD-2500C Table A-3 for the interpretation of this field,
    /// e.g. `R`, `G`, `B`, `M` or `LU`. Blank when unspecified.
    pub fn image_representation(&self) -> &str {
        &self.image_representation
    }

    /// Returns the band subcategory within the image category (ISUBCAT).
    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// Returns the number of lookup tables for the band (NLUTS).
    ///
    /// A monochrome band may carry 1 or 2; with 2 the first maps the most
    /// significant byte and the second the least significant byte of 16 bit
    /// values. A color-coded (`LU`) band carries 3, mapping to red, green and
    /// blue in that order. 4 is reserved.
    pub fn num_luts(&self) -> usize {
        self.luts.len()
    }

    /// Returns the number of entries in each lookup table (NELUT), zero when
    /// the band has none.
    pub fn num_lut_entries(&self) -> usize {
        self.num_lut_entries
    }

    /// Returns the lookup table at `lut_number`, counting from 1.
    pub fn lut(&self, lut_number: usize) -> Result<&ImageBandLut> {
        match lut_number.checked_sub(1) {
            Some(index) => self.lut_zero_based(index),
            None => Err(Error::LutIndexOutOfRange {
                index: lut_number,
                count: self.luts.len(),
            }),
        }
    }

    /// Returns the lookup table at `index`, counting from 0.
    pub fn lut_zero_based(&self, index: usize) -> Result<&ImageBandLut> {
        self.luts.get(index).ok_or(Error::LutIndexOutOfRange {
            index,
            count: self.luts.len(),
        })
    }

    /// Returns all lookup tables in the order they were read.
    pub fn luts(&self) -> &[ImageBandLut] {
        &self.luts
    }
}

impl fmt::Display for ImageBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IREPBAND: {}", self.image_representation)?;
        write!(f, "\nISUBCAT: {}", self.subcategory)?;
        write!(f, "\nNLUTS: {}", self.num_luts())?;
        if !self.luts.is_empty() {
            write!(f, "\nNELUT: {}", self.num_lut_entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SliceReader;

    fn color_coded() -> Vec<u8> {
        let mut bytes = b"LUMONOCHN   300004".to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        bytes.extend_from_slice(&[5, 6, 7, 8]);
        bytes.extend_from_slice(&[9, 10, 11, 12]);
        bytes
    }

    #[test]
    fn band_with_three_luts() {
        let bytes = color_coded();
        assert_eq!(bytes.len(), 30);
        let mut reader = SliceReader::new(&bytes);
        let band = ImageBand::parse(&mut reader).unwrap();

        assert_eq!(band.image_representation(), "LU");
        assert_eq!(band.subcategory(), "MONOCH");
        assert_eq!(band.num_luts(), 3);
        assert_eq!(band.num_lut_entries(), 4);
        assert_eq!(reader.position(), 30);

        for (index, block) in bytes[18..].chunks(4).enumerate() {
            assert_eq!(band.lut_zero_based(index).unwrap().entries(), block);
            assert_eq!(band.lut(index + 1).unwrap(), band.lut_zero_based(index).unwrap());
        }
        assert!(matches!(
            band.lut_zero_based(3),
            Err(Error::LutIndexOutOfRange { index: 3, count: 3 })
        ));
        assert!(matches!(
            band.lut(0),
            Err(Error::LutIndexOutOfRange { index: 0, count: 3 })
        ));
        assert!(band.lut(4).is_err());
    }

    #[test]
    fn band_without_luts() {
        let bytes = b"RG      N   0NEXT";
        let mut reader = SliceReader::new(bytes);
        let band = ImageBand::parse(&mut reader).unwrap();

        assert_eq!(band.image_representation(), "RG");
        assert_eq!(band.subcategory(), "");
        assert_eq!(band.num_luts(), 0);
        assert_eq!(band.num_lut_entries(), 0);
        assert!(band.luts().is_empty());
        assert_eq!(reader.position(), MIN_BAND_LENGTH as u64);
        assert!(matches!(
            band.lut_zero_based(0),
            Err(Error::LutIndexOutOfRange { index: 0, count: 0 })
        ));
    }

    #[test]
    fn skipped_fields_are_not_interpreted() {
        // IFC and IMFLT hold arbitrary bytes.
        let bytes = [b'M', b' ', b' ', b' ', b' ', b' ', b' ', b' ', 0xFF, 0x00, 0x80, b'?', b'0'];
        let mut reader = SliceReader::new(&bytes);
        let band = ImageBand::parse(&mut reader).unwrap();
        assert_eq!(band.image_representation(), "M");
        assert_eq!(reader.position(), 13);
    }

    #[test]
    fn zero_entry_luts() {
        let mut reader = SliceReader::new(b"M       N   200000");
        let band = ImageBand::parse(&mut reader).unwrap();
        assert_eq!(band.num_luts(), 2);
        assert_eq!(band.num_lut_entries(), 0);
        assert!(band.luts().iter().all(ImageBandLut::is_empty));
        assert_eq!(reader.position(), 18);
    }

    #[test]
    fn truncated_prefix() {
        let bytes = b"RG      N   0";
        for len in 0..bytes.len() {
            let mut reader = SliceReader::new(&bytes[..len]);
            assert!(matches!(
                ImageBand::parse(&mut reader),
                Err(Error::Truncated { .. })
            ));
        }
    }

    #[test]
    fn truncated_lut_data() {
        let bytes = color_coded();
        let mut reader = SliceReader::new(&bytes[..29]);
        match ImageBand::parse(&mut reader) {
            Err(Error::Truncated { field, offset, needed, available }) => {
                assert_eq!(field, "LUTD");
                assert_eq!(offset, 26);
                assert_eq!(needed, 4);
                assert_eq!(available, 3);
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn malformed_counts() {
        let mut reader = SliceReader::new(b"RG      N   X");
        assert!(matches!(
            ImageBand::parse(&mut reader),
            Err(Error::Malformed { field: "NLUTS", offset: 12, .. })
        ));

        let mut reader = SliceReader::new(b"LU      N   10004A");
        assert!(matches!(
            ImageBand::parse(&mut reader),
            Err(Error::Malformed { field: "NELUT", offset: 13, .. })
        ));
    }

    #[test]
    fn display() {
        let bytes = color_coded();
        let band = ImageBand::parse(&mut SliceReader::new(&bytes)).unwrap();
        assert_eq!(band.to_string(), "IREPBAND: LU\nISUBCAT: MONOCH\nNLUTS: 3\nNELUT: 4");

        let band = ImageBand::parse(&mut SliceReader::new(b"RG      N   0")).unwrap();
        assert_eq!(band.to_string(), "IREPBAND: RG\nISUBCAT: \nNLUTS: 0");
    }
}
