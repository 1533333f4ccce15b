//! Base module containing common structs and traits

mod reader;

pub use reader::{SliceReader, StreamReader};

use crate::error::{Error, Result};

/// Trait that defines a positioned, forward-only reader of fixed-width fields.
///
/// Every read names the field it serves so that a fault can report the field
/// and the byte offset it started at.
pub trait FieldReader {
    /// Returns the offset of the next byte to be read.
    fn position(&self) -> u64;

    /// Returns exactly `len` bytes and advances past them.
    ///
    /// # Arguments
    ///
    /// * `len` - Width of the field in bytes.
    /// * `field` - Mnemonic of the field being read.
    fn read_bytes_raw(&mut self, len: usize, field: &'static str) -> Result<Vec<u8>>;

    /// Advances past `len` bytes without retaining them.
    fn skip(&mut self, len: usize, field: &'static str) -> Result<()>;

    /// Reads a text field and trims surrounding whitespace.
    fn read_trimmed_bytes(&mut self, len: usize, field: &'static str) -> Result<String> {
        let offset = self.position();
        let bytes = self.read_bytes_raw(len, field)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => Err(Error::Malformed {
                field,
                offset,
                value: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            }),
        }
    }

    /// Reads a fixed-width ASCII decimal field as an unsigned integer.
    fn read_bytes_as_integer(&mut self, len: usize, field: &'static str) -> Result<u32> {
        let offset = self.position();
        let bytes = self.read_bytes_raw(len, field)?;
        parse_ascii_integer(&bytes).ok_or_else(|| Error::Malformed {
            field,
            offset,
            value: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Trait that defines a record decoded from a [`FieldReader`].
pub trait Parse: Sized {
    /// Returns the record read from the reader's current position.
    ///
    /// # Arguments
    ///
    /// * `reader` - A reader positioned at the first byte of the record.
    fn parse<R: FieldReader + ?Sized>(reader: &mut R) -> Result<Self>;
}

/// Space padding is tolerated on either side, nothing else.
fn parse_ascii_integer(bytes: &[u8]) -> Option<u32> {
    let start = bytes.iter().position(|b| *b != b' ')?;
    let end = bytes.iter().rposition(|b| *b != b' ')? + 1;
    bytes[start..end].iter().try_fold(0u32, |acc, b| {
        if b.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        } else {
            None
        }
    })
}
