//! Hex rendering of byte runs for logs and assertion messages.

use std::fmt::Write;

/// Renders up to `max` bytes as space-separated lowercase hex pairs.
///
/// Bytes beyond `max` are summarized as `... (N more)`.
///
/// ```
/// use cbor_serializer_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0xd9, 0xd9, 0xf7], 16), "d9 d9 f7");
/// assert_eq!(print_octets(&[0x83, 0x01, 0x02, 0x03], 2), "83 01... (2 more)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = String::with_capacity(octets.len().min(max) * 3);
    for (i, byte) in octets.iter().take(max).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let _ = write!(result, "{:02x}", byte);
    }
    if octets.len() > max {
        let _ = write!(result, "... ({} more)", octets.len() - max);
    }
    result
}

/// [`print_octets`] capped at 32 bytes, the width used in trace logs.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(print_octets(&[], 16), "");
        assert_eq!(print_octets_default(&[]), "");
    }

    #[test]
    fn single_byte_has_no_separator() {
        assert_eq!(print_octets(&[0x0a], 16), "0a");
    }

    #[test]
    fn long_runs_are_summarized() {
        let data: Vec<u8> = (0..40).collect();
        let result = print_octets_default(&data);
        assert!(result.starts_with("00 01 02"));
        assert!(result.ends_with("1f... (8 more)"));
    }
}
