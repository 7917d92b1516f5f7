//! Shared truncation policy for compact UI labels.

use core::str;

pub const LABEL_MAX_CHARS: usize = 12;
pub const CAPTION_MAX_CHARS: usize = 48;

/// Copy `source` into `out`, keeping at most `max_chars` characters and
/// never splitting a UTF-8 sequence. Returns the borrowed result.
pub fn label_limited<'a>(source: &str, out: &'a mut [u8], max_chars: usize) -> &'a str {
    if out.is_empty() {
        return "";
    }

    let mut len = 0usize;
    let mut char_count = 0usize;

    for ch in source.chars() {
        if char_count >= max_chars {
            break;
        }

        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if len + encoded.len() > out.len() {
            break;
        }

        out[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
        char_count += 1;
    }

    str::from_utf8(&out[..len]).unwrap_or("")
}

/// Strip-label truncation used under each avatar.
pub fn label_compact<'a>(source: &str, out: &'a mut [u8]) -> &'a str {
    label_limited(source, out, LABEL_MAX_CHARS)
}

/// Caption truncation used by the viewer overlay.
pub fn caption_compact<'a>(source: &str, out: &'a mut [u8]) -> &'a str {
    label_limited(source, out, CAPTION_MAX_CHARS)
}
