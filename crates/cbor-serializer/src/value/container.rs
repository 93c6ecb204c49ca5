//! Arrays and maps over already-encoded items.

use super::{write_header, write_str};
use crate::constants::*;
use crate::types::CborValue;

/// Order in which [`map`] writes its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapOrder {
    /// Entries in the order they were given.
    #[default]
    Insertion,
    /// Entries sorted lexicographically by key (stable output).
    Sorted,
}

/// Encodes an array of CBOR items.
pub fn array(items: &[CborValue]) -> CborValue {
    let size = items.iter().map(CborValue::len).sum::<usize>();
    let mut out = Vec::with_capacity(9 + size);
    write_header(&mut out, MAJOR_ARR, items.len() as u64);
    for item in items {
        out.extend_from_slice(item.as_bytes());
    }
    CborValue::from_vec(out)
}

/// Encodes a map with text keys and CBOR-encoded values.
///
/// `entries` is never reordered in place; [`MapOrder::Sorted`] sorts a
/// view of it.
pub fn map<K: AsRef<str>>(entries: &[(K, CborValue)], order: MapOrder) -> CborValue {
    let mut view: Vec<&(K, CborValue)> = entries.iter().collect();
    if order == MapOrder::Sorted {
        view.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
    }
    let size = entries
        .iter()
        .map(|(k, v)| k.as_ref().len() + v.len() + 1)
        .sum::<usize>();
    let mut out = Vec::with_capacity(9 + size);
    write_header(&mut out, MAJOR_MAP, view.len() as u64);
    for (key, value) in view {
        write_str(&mut out, key.as_ref());
        out.extend_from_slice(value.as_bytes());
    }
    CborValue::from_vec(out)
}

#[cfg(test)]
mod tests {
    use super::super::{string, u8};
    use super::*;

    #[test]
    fn nested_arrays() {
        let inner = array(&[string("A")]);
        assert_eq!(inner.to_string(), "816141");
        assert_eq!(array(&[inner]).to_string(), "81816141");
        assert_eq!(array(&[]).to_string(), "80");
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let entries = vec![("b", u8(1).unwrap()), ("a", u8(2).unwrap())];
        let sorted = map(&entries, MapOrder::Sorted);
        assert_eq!(entries[0].0, "b");
        assert_eq!(sorted.to_string(), "a26161180261621801");
    }

    #[test]
    fn large_maps_use_extended_header() {
        let entries: Vec<(String, CborValue)> = (0..24)
            .map(|i| (format!("k{i:02}"), u8(i).unwrap()))
            .collect();
        let encoded = map(&entries, MapOrder::Insertion);
        assert_eq!(&encoded.as_bytes()[..2], &[0xb8, 24]);
    }
}
