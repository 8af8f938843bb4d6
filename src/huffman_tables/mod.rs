use std::collections::BTreeMap;

use log::debug;

use crate::bytestreams::ByteReader;
use crate::Result;

/// Longest code length a table definition can declare.
pub const K_MAX_CODE_BITS: usize = 16;

/// One table's code assignment: maps a (bit length, code value) pair to the
/// symbol that code decodes to.
pub type HuffmanCodeMap = BTreeMap<(u8, u16), u8>;

/// The Huffman tables accumulated over one scan, keyed by table identifier.
/// Created empty, filled incrementally as table-definition segments are
/// encountered, and handed to the caller once the scan ends.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct HuffmanTableSet {
    tables: BTreeMap<u8, HuffmanCodeMap>,
}

impl HuffmanTableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes one table definition starting at the reader's current
    /// position and merges it into the set, returning the number of bytes
    /// consumed.
    ///
    /// The payload stores no explicit code values, only a 16-entry
    /// per-length count histogram followed by the symbols: codes are
    /// assigned canonically, in ascending numeric order within each bit
    /// length, with the code space doubling on every transition to the
    /// next length. A histogram declaring more codes than a length can
    /// hold is not rejected; the extra codes overwrite earlier entries.
    pub fn decode_table(&mut self, reader: &mut ByteReader) -> Result<usize> {
        let mut consumed = 0;

        let table_id = reader.read_byte()?;
        consumed += 1;

        let mut counts = [0u8; K_MAX_CODE_BITS];
        for count in counts.iter_mut() {
            *count = reader.read_byte()?;
            consumed += 1;
        }

        let mut code: u32 = 0;
        for (i, &count) in counts.iter().enumerate() {
            let len = i as u8 + 1;
            for _ in 0..count {
                let symbol = reader.read_byte()?;
                self.tables
                    .entry(table_id)
                    .or_default()
                    .insert((len, code as u16), symbol);
                code += 1;
                consumed += 1;
            }
            code <<= 1;
        }

        debug!("decoded huffman table {} ({} bytes)", table_id, consumed);

        Ok(consumed)
    }

    pub fn get(&self, table_id: u8) -> Option<&HuffmanCodeMap> {
        self.tables.get(&table_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u8, &HuffmanCodeMap)> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
