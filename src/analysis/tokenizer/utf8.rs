//! Incremental UTF-8 decoding for chunked reads.
//!
//! A multi-byte character can be split across two reads. The decoder leaves
//! the incomplete tail undecoded and reports its length so the caller can
//! carry it over to the front of the next read.

/// Longest incomplete sequence that can be left over (a 4-byte character
/// missing its last byte).
pub(crate) const MAX_CARRY: usize = 3;

/// Decode `bytes` into `out`, replacing invalid sequences with U+FFFD.
///
/// Returns the number of trailing bytes that form an incomplete (but so far
/// valid) sequence and were not decoded.
pub(crate) fn decode_lossy(mut bytes: &[u8], out: &mut String) -> usize {
    loop {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                out.push_str(text);
                return 0;
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                out.push_str(&String::from_utf8_lossy(&bytes[..valid_up_to]));
                match e.error_len() {
                    Some(len) => {
                        out.push(char::REPLACEMENT_CHARACTER);
                        bytes = &bytes[valid_up_to + len..];
                    }
                    None => return bytes.len() - valid_up_to,
                }
            }
        }
    }
}
