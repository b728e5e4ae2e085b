//! Plain-text decoding

/// Decode bytes as UTF-8, falling back to ISO-8859-1
///
/// ISO-8859-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail.
pub fn decode_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::debug!("UTF-8 decode failed at byte {}, using latin-1", e.valid_up_to());
            decode_latin1(data)
        }
    }
}

fn decode_latin1(data: &[u8]) -> String {
    data.iter().map(|&b| char::from(b)).collect()
}
