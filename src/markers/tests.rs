use super::*;

#[test]
fn test_dispatch_marker_values() {
    assert_eq!(SOI, Marker(0xFFD8));
    assert_eq!(EOI, Marker(0xFFD9));
    assert_eq!(SOS, Marker(0xFFDA));
    assert_eq!(DHT, Marker(0xFFC4));
}

#[test]
fn test_kind_classification() {
    assert_eq!(Marker(0xFFC0).kind(), MarkerKind::HuffmanFrame);
    assert_eq!(Marker(0xFFC2).kind(), MarkerKind::HuffmanFrame);
    assert_eq!(Marker(0xFFC7).kind(), MarkerKind::HuffmanFrame);

    assert_eq!(Marker(0xFFC9).kind(), MarkerKind::ArithmeticFrame);
    assert_eq!(Marker(0xFFCF).kind(), MarkerKind::ArithmeticFrame);

    assert_eq!(DHT.kind(), MarkerKind::TableDefinition);
    assert_eq!(Marker(0xFFCC).kind(), MarkerKind::TableDefinition);
    assert_eq!(Marker(0xFFDB).kind(), MarkerKind::TableDefinition);
    assert_eq!(Marker(0xFFDD).kind(), MarkerKind::TableDefinition);

    assert_eq!(Marker(0xFFD0).kind(), MarkerKind::Restart);
    assert_eq!(Marker(0xFFD7).kind(), MarkerKind::Restart);

    assert_eq!(SOI.kind(), MarkerKind::Structural);
    assert_eq!(EOI.kind(), MarkerKind::Structural);
    assert_eq!(SOS.kind(), MarkerKind::Structural);

    assert_eq!(Marker(0xFFC8).kind(), MarkerKind::Reserved);
    assert_eq!(Marker(0xFFE0).kind(), MarkerKind::Reserved);
    assert_eq!(Marker(0xFFFE).kind(), MarkerKind::Reserved);
}

#[test]
fn test_names() {
    assert_eq!(SOI.name(), "Start of image");
    assert_eq!(EOI.name(), "End of image");
    assert_eq!(SOS.name(), "Start of scan");
    assert_eq!(DHT.name(), "Huffman table");
    assert_eq!(Marker(0xFFC0).name(), "Baseline DCT; Huffman");
    assert_eq!(Marker(0xFFD3).name(), "Restart");
    assert_eq!(Marker(0xFFE0).name(), "JFIF header");
    assert_eq!(Marker(0xFFFE).name(), "Comment");
    assert_eq!(Marker(0xFFFF).name(), "[Invalid]");
}
