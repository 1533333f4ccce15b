use std::io::{self, Read};

use log::trace;

use super::FieldReader;
use crate::error::{Error, Result};

/// Cursor over an in-memory buffer.
///
/// Bounds are checked before the cursor moves, so a failed read leaves the
/// position where it was.
pub struct SliceReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> SliceReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SliceReader { data, cursor: 0 }
    }

    /// Starts reading at `offset` into `data`.
    pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
        SliceReader {
            data,
            cursor: offset.min(data.len()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::Truncated {
                field,
                offset: self.cursor as u64,
                needed: len,
                available: self.remaining(),
            });
        }
        let data: &'a [u8] = self.data;
        let slice = &data[self.cursor..self.cursor + len];
        self.cursor += len;
        trace!("{}: {} bytes at offset {}", field, len, self.cursor - len);
        Ok(slice)
    }
}

impl FieldReader for SliceReader<'_> {
    fn position(&self) -> u64 {
        self.cursor as u64
    }

    fn read_bytes_raw(&mut self, len: usize, field: &'static str) -> Result<Vec<u8>> {
        self.take(len, field).map(<[u8]>::to_vec)
    }

    fn skip(&mut self, len: usize, field: &'static str) -> Result<()> {
        self.take(len, field).map(|_| ())
    }
}

/// Cursor over any [`Read`] source such as a file or stdin.
///
/// Bytes consumed before a truncation are gone; the position reflects them.
pub struct StreamReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        StreamReader { inner, position: 0 }
    }

    /// Wraps a source that has already been advanced to `position`.
    pub fn with_position(inner: R, position: u64) -> Self {
        StreamReader { inner, position }
    }

    fn truncated(&self, field: &'static str, start: u64, needed: usize, read: usize) -> Error {
        Error::Truncated {
            field,
            offset: start,
            needed,
            available: read,
        }
    }
}

impl<R: Read> FieldReader for StreamReader<R> {
    fn position(&self) -> u64 {
        self.position
    }

    fn read_bytes_raw(&mut self, len: usize, field: &'static str) -> Result<Vec<u8>> {
        let start = self.position;
        let mut buf = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.position += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        if filled < len {
            return Err(self.truncated(field, start, len, filled));
        }
        trace!("{}: {} bytes at offset {}", field, len, start);
        Ok(buf)
    }

    fn skip(&mut self, len: usize, field: &'static str) -> Result<()> {
        let start = self.position;
        let skipped = io::copy(&mut self.inner.by_ref().take(len as u64), &mut io::sink())?;
        self.position += skipped;
        if skipped < len as u64 {
            return Err(self.truncated(field, start, len, skipped as usize));
        }
        Ok(())
    }
}
