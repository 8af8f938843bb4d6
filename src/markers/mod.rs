use serde::Serialize;

/// Lowest valid marker word; any two-byte value read below this where a
/// marker is expected aborts the scan.
pub const MARKER_BASE: u16 = 0xFFC0;

/// Start of image.
pub const SOI: Marker = Marker(0xFFD8);
/// End of image.
pub const EOI: Marker = Marker(0xFFD9);
/// Start of scan; everything after it is entropy-coded data.
pub const SOS: Marker = Marker(0xFFDA);
/// Define Huffman table(s).
pub const DHT: Marker = Marker(0xFFC4);

/// A two-byte code identifying a segment's type, in `0xFFC0..=0xFFFF`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Debug)]
pub struct Marker(pub u16);

/// The broad role a marker plays in the stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MarkerKind {
    /// Frame types whose entropy coding is Huffman.
    HuffmanFrame,
    /// Frame types whose entropy coding is arithmetic.
    ArithmeticFrame,
    /// Restart markers interleaved with entropy-coded data.
    Restart,
    /// Stream structure: start of image, end of image, start of scan.
    Structural,
    /// Table and decoding-parameter definitions.
    TableDefinition,
    /// Application, comment, and reserved segments.
    Reserved,
}

// Table B.1, indexed by `marker - 0xFFC0`.
const SEGMENT_NAMES: [&str; 64] = [
    "Baseline DCT; Huffman",
    "Extended sequential DCT; Huffman",
    "Progressive DCT; Huffman",
    "Spatial lossless; Huffman",
    "Huffman table",
    "Differential sequential DCT; Huffman",
    "Differential progressive DCT; Huffman",
    "Differential spatial; Huffman",
    "[Reserved: JPEG extension]",
    "Extended sequential DCT; Arithmetic",
    "Progressive DCT; Arithmetic",
    "Spatial lossless; Arithmetic",
    "Arithmetic coding conditioning",
    "Differential sequential DCT; Arithmetic",
    "Differential progressive DCT; Arithmetic",
    "Differential spatial; Arithmetic",
    "Restart",
    "Restart",
    "Restart",
    "Restart",
    "Restart",
    "Restart",
    "Restart",
    "Restart",
    "Start of image",
    "End of image",
    "Start of scan",
    "Quantisation table",
    "Number of lines",
    "Restart interval",
    "Hierarchical progression",
    "Expand reference components",
    "JFIF header",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: application extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "[Reserved: JPEG extension]",
    "Comment",
    "[Invalid]",
];

impl Marker {
    #[inline(always)]
    pub fn kind(self) -> MarkerKind {
        match self.0 {
            0xFFC0..=0xFFC3 | 0xFFC5..=0xFFC7 => MarkerKind::HuffmanFrame,
            0xFFC9..=0xFFCB | 0xFFCD..=0xFFCF => MarkerKind::ArithmeticFrame,
            0xFFC4 | 0xFFCC | 0xFFDB | 0xFFDD => MarkerKind::TableDefinition,
            0xFFD0..=0xFFD7 => MarkerKind::Restart,
            0xFFD8..=0xFFDA => MarkerKind::Structural,
            _ => MarkerKind::Reserved,
        }
    }

    pub fn name(self) -> &'static str {
        SEGMENT_NAMES[(self.0.wrapping_sub(MARKER_BASE)) as usize & 0x3F]
    }
}

#[cfg(test)]
mod tests;
