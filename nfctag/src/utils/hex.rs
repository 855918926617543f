//! Hexadecimal helpers used for rendering tag bytes.
//!
//! TLV record values are surfaced to callers as lowercase hex strings, so
//! these helpers sit on the hot path of the decoder as well as in debug
//! output. They avoid external dependencies on purpose.

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut s, b| {
            // write! never fails writing to a String
            let _ = write!(&mut s, "{:02x}", b);
            s
        },
    )
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte, for block dumps in logs and examples.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes, ignoring ASCII whitespace.
///
/// Returns an error message string on odd length or a non-hex digit.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0]
                .to_digit(16)
                .ok_or_else(|| format!("invalid hex digit '{}'", pair[0]))?;
            let lo = pair[1]
                .to_digit(16)
                .ok_or_else(|| format!("invalid hex digit '{}'", pair[1]))?;
            Ok((hi * 16 + lo) as u8)
        })
        .collect()
}
