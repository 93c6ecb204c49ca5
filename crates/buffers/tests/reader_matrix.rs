//! Cursor and formatting behavior the CBOR decoders rely on.

use cbor_serializer_buffers::{print_octets, print_octets_default, BufferError, Reader};

#[test]
fn big_endian_read_matrix() {
    let data = [
        0x01, // u8
        0x23, 0x28, // u16
        0x00, 0x01, 0x5f, 0x90, // u32
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, // u64
    ];
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0x01));
    assert_eq!(r.u16(), Ok(9000));
    assert_eq!(r.u32(), Ok(90000));
    assert_eq!(r.u64(), Ok(0x0123_4567_89ab_cdef));
    assert!(r.is_empty());
    assert_eq!(r.peek(), None);
}

#[test]
fn short_reads_leave_the_cursor() {
    let data = [0xff, 0x00, 0x01];
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0xff));
    assert_eq!(r.u32(), Err(BufferError::EndOfBuffer));
    assert_eq!(r.u64(), Err(BufferError::EndOfBuffer));
    assert_eq!(r.buf(3), Err(BufferError::EndOfBuffer));
    assert_eq!(r.skip(3), Err(BufferError::EndOfBuffer));
    assert_eq!(r.x, 1);
    assert_eq!(r.remaining(), &[0x00, 0x01]);
    assert_eq!(r.u16(), Ok(1));
}

#[test]
fn reset_switches_buffers() {
    let first = [0x01, 0x02];
    let second = [0x03];
    let mut r = Reader::new(&first);
    r.skip(2).unwrap();
    r.reset(&second);
    assert_eq!(r.size(), 1);
    assert_eq!(r.u8(), Ok(0x03));
}

#[test]
fn error_display() {
    assert_eq!(BufferError::EndOfBuffer.to_string(), "end of buffer");
}

#[test]
fn octet_rendering() {
    assert_eq!(print_octets(&[], 4), "");
    assert_eq!(print_octets(&[0x0a, 0xff], 4), "0a ff");
    assert_eq!(print_octets(&[0x01, 0x02, 0x03], 1), "01... (2 more)");
    let long = [0u8; 40];
    assert!(print_octets_default(&long).ends_with("... (8 more)"));
}
