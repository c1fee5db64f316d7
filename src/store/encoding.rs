//! Text encodings the contacts file may be written in.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1251, WINDOWS_1252};
use std::borrow::Cow;
use std::fmt;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// An encoding the loader knows how to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Byte order taken from the BOM, little-endian without one.
    Utf16,
    Windows1251,
    /// ISO-8859-1, decoded as its windows-1252 superset.
    Latin1,
}

/// Tried in order when the file is not valid UTF-8.
pub const FALLBACK_ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf16,
    TextEncoding::Windows1251,
    TextEncoding::Latin1,
];

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Windows1251 => "cp1251",
            Self::Latin1 => "latin-1",
        }
    }

    /// Decode `bytes` strictly. `None` if the bytes are malformed for this
    /// encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        let (encoding, body): (&'static Encoding, &[u8]) = match self {
            Self::Utf8 => (UTF_8, bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
            Self::Utf16 => match Encoding::for_bom(bytes) {
                Some((enc, bom_len)) if enc == UTF_16LE || enc == UTF_16BE => {
                    (enc, &bytes[bom_len..])
                }
                _ => (UTF_16LE, bytes),
            },
            Self::Windows1251 => (WINDOWS_1251, bytes),
            Self::Latin1 => (WINDOWS_1252, bytes),
        };

        encoding.decode_without_bom_handling_and_without_replacement(body)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
