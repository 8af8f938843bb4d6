use std::io::SeekFrom;

use log::debug;
use serde::Serialize;

use crate::bytestreams::ByteReader;
use crate::huffman_tables::HuffmanTableSet;
use crate::markers::{self, Marker, MARKER_BASE};
use crate::{Result, ScanError};

/// A marker paired with the absolute offset of its first byte.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
pub struct Segment {
    pub marker: Marker,
    pub offset: u64,
}

/// A single-pass iterator over the segments of a stream.
///
/// The underlying cursor is stateful and forward-only, so the sequence is
/// not restartable. Each table-definition segment's payload is decoded into
/// `tables` as a side effect. The payload work for a segment (size reads,
/// seeks, table decoding) runs when the following element is pulled, so a
/// caller that stops pulling never pays for it.
///
/// The first error is also the last element: after yielding it, or after
/// the end-of-image marker, the iterator only returns `None`.
pub struct SegmentScanner<'a> {
    /// The byte stream segments are read from.
    reader: &'a mut ByteReader,
    /// The table set table-definition payloads accumulate into.
    tables: &'a mut HuffmanTableSet,
    /// The marker whose payload still has to be processed.
    pending: Option<Marker>,
    /// Set once the scan has terminated or failed.
    done: bool,
}

impl<'a> Iterator for SegmentScanner<'a> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(marker) = self.pending.take() {
            match self.dispatch(marker) {
                Ok(true) => {
                    self.done = true;
                    return None;
                }
                Ok(false) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        let segment = self.read_segment();
        if segment.is_err() {
            self.done = true;
        }

        Some(segment)
    }
}

impl<'a> SegmentScanner<'a> {
    pub fn new(reader: &'a mut ByteReader, tables: &'a mut HuffmanTableSet) -> Self {
        Self {
            reader,
            tables,
            pending: None,
            done: false,
        }
    }

    fn read_segment(&mut self) -> Result<Segment> {
        let offset = self.reader.tell();
        let value = self.reader.read_u16_be()?;

        if value < MARKER_BASE {
            return Err(ScanError::MalformedMarker { value, offset });
        }

        let marker = Marker(value);
        debug!("found marker {:#06x} at offset {}", value, offset);
        self.pending = Some(marker);

        Ok(Segment { marker, offset })
    }

    /// Processes the payload of the given marker. Returns `true` when the
    /// marker ends the stream.
    fn dispatch(&mut self, marker: Marker) -> Result<bool> {
        match marker {
            markers::EOI => return Ok(true),
            markers::SOS => {
                // The entropy-coded data is never decoded; jump straight to
                // the last marker of the stream instead of searching it for
                // a non-stuffed marker prefix.
                self.reader.seek(SeekFrom::End(-2))?;
            }
            markers::SOI => {}
            markers::DHT => {
                let declared = self.reader.read_u16_be()?.saturating_sub(2) as usize;
                let consumed = self.tables.decode_table(self.reader)?;
                if consumed != declared {
                    return Err(ScanError::SegmentLengthMismatch { declared, consumed });
                }
            }
            _ => {
                // A two-byte size that counts itself, followed by a payload
                // this scanner does not interpret.
                let size = self.reader.read_u16_be()?;
                self.reader.seek(SeekFrom::Current(size as i64 - 2))?;
            }
        }

        Ok(false)
    }
}
