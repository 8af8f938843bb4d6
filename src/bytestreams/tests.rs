use std::io::SeekFrom;

use crate::ScanError;

use super::ByteReader;

fn reader(bytes: &[u8]) -> ByteReader {
    ByteReader::new(bytes.to_vec().into_boxed_slice())
}

#[test]
fn test_read_byte_advances() {
    let mut r = reader(&[0xFF, 0xD8]);

    assert_eq!(r.read_byte(), Ok(0xFF));
    assert_eq!(r.read_byte(), Ok(0xD8));
    assert_eq!(r.tell(), 2);
}

#[test]
fn test_read_byte_past_end() {
    let mut r = reader(&[]);

    assert_eq!(r.read_byte(), Err(ScanError::UnexpectedEndOfStream { offset: 0 }));
}

#[test]
fn test_read_word_big_endian() {
    let mut r = reader(&[0xFF, 0xC4, 0x00]);

    assert_eq!(r.read_u16_be(), Ok(0xFFC4));
    assert_eq!(r.tell(), 2);
}

#[test]
fn test_read_word_fails_on_second_byte() {
    let mut r = reader(&[0xFF]);

    assert_eq!(r.read_u16_be(), Err(ScanError::UnexpectedEndOfStream { offset: 1 }));
}

#[test]
fn test_seek_from_all_origins() {
    let mut r = reader(&[0, 1, 2, 3, 4, 5]);

    assert_eq!(r.seek(SeekFrom::Start(4)), Ok(4));
    assert_eq!(r.read_byte(), Ok(4));

    assert_eq!(r.seek(SeekFrom::Current(-3)), Ok(2));
    assert_eq!(r.read_byte(), Ok(2));

    assert_eq!(r.seek(SeekFrom::End(-2)), Ok(4));
    assert_eq!(r.read_byte(), Ok(4));
}

#[test]
fn test_seek_past_end_is_allowed() {
    let mut r = reader(&[0, 1]);

    assert_eq!(r.seek(SeekFrom::End(3)), Ok(5));
    assert_eq!(r.read_byte(), Err(ScanError::UnexpectedEndOfStream { offset: 5 }));
}

#[test]
fn test_seek_to_negative_position() {
    let mut r = reader(&[0, 1]);

    assert_eq!(r.seek(SeekFrom::Current(-1)), Err(ScanError::InvalidSeek { position: -1 }));
    // The failed seek leaves the cursor untouched.
    assert_eq!(r.tell(), 0);

    assert_eq!(r.seek(SeekFrom::End(-3)), Err(ScanError::InvalidSeek { position: -1 }));
    assert_eq!(r.tell(), 0);
}

#[test]
fn test_tell_has_no_side_effects() {
    let mut r = reader(&[7]);

    assert_eq!(r.tell(), 0);
    assert_eq!(r.tell(), 0);
    assert_eq!(r.read_byte(), Ok(7));
    assert_eq!(r.tell(), 1);
}
