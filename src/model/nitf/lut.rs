//! Image band lookup tables (LUTDnm)

use std::fmt;

/// One lookup table of an image band.
///
/// The entries are kept as read. Whether they map 8 bit or 16 bit values is
/// decided by whoever renders the band.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageBandLut {
    entries: Vec<u8>,
}

impl ImageBandLut {
    /// Returns a lookup table holding `entries`.
    ///
    /// # Arguments
    ///
    /// * `entries` - The table data, exactly NELUT bytes long.
    pub fn new(entries: Vec<u8>) -> ImageBandLut {
        ImageBandLut { entries }
    }

    pub fn entries(&self) -> &[u8] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<u8> {
        self.entries.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ImageBandLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", entry)?;
        }
        Ok(())
    }
}
