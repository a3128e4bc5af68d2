//! Fixed single-byte decoding of response bodies.

/// Decode `bytes` as ISO-8859-1.
///
/// Every byte maps to the Unicode scalar of the same value, so decoding never
/// fails. This is deliberately not windows-1252: bytes `0x80..=0x9F` become
/// C1 control characters, not typographic punctuation.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_latin1(b"[{\"name\":\"Acre\"}]"), "[{\"name\":\"Acre\"}]");
    }

    #[test]
    fn high_bytes_map_to_same_code_point() {
        assert_eq!(decode_latin1(b"S\xe3o Paulo"), "São Paulo");
        assert_eq!(decode_latin1(b"Amap\xe1"), "Amapá");
    }

    #[test]
    fn utf8_input_is_not_reinterpreted() {
        // "ã" in UTF-8 is two bytes; read as Latin-1 they become two chars.
        assert_eq!(decode_latin1("São".as_bytes()), "SÃ£o");
    }

    #[test]
    fn c1_range_is_not_windows_1252() {
        assert_eq!(decode_latin1(&[0x80]), "\u{80}");
    }

    #[test]
    fn empty_body_decodes_to_empty_string() {
        assert_eq!(decode_latin1(&[]), "");
    }
}
