use std::io::SeekFrom;

use serde::{Serialize, Deserialize};

use crate::{Result, ScanError};

/// A byte-level reader over an in-memory stream. Keeps an absolute cursor
/// position that can be repositioned from the start, the current position,
/// or the end of the stream.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub struct ByteReader {
    is: Box<[u8]>,
    pub position: usize,
}

impl ByteReader {
    pub fn new(input_stream: Box<[u8]>) -> Self {
        ByteReader {
            is: input_stream,
            position: 0,
        }
    }

    #[inline(always)]
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.position >= self.is.len() {
            return Err(ScanError::UnexpectedEndOfStream { offset: self.position as u64 });
        }

        self.position += 1;
        Ok(self.is[self.position - 1])
    }

    /// Reads two bytes and combines them big-endian, the byte order marker
    /// and size words are stored in.
    #[inline(always)]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        let high = self.read_byte()?;
        let low = self.read_byte()?;

        Ok((high as u16) << 8 | low as u16)
    }

    /// Repositions the cursor. Seeking past the end of the stream is legal
    /// (later reads fail instead); a negative target position is not, and
    /// leaves the cursor where it was.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => offset as i64,
            SeekFrom::Current(delta) => self.position as i64 + delta,
            SeekFrom::End(delta) => self.is.len() as i64 + delta,
        };

        if target < 0 {
            return Err(ScanError::InvalidSeek { position: target });
        }

        self.position = target as usize;
        Ok(target as u64)
    }

    #[inline(always)]
    pub fn tell(&self) -> u64 {
        self.position as u64
    }

    pub fn len(&self) -> usize {
        self.is.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is.is_empty()
    }
}

#[cfg(test)]
mod tests;
