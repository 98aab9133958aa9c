//! Decoding of hex default literals (`X'..'`, `0x..`) according to the
//! connection charset reported alongside the DDL.

use model::core::utils::quote_string_literal;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Utf8mb4,
    Latin1,
    Ascii,
    Binary,
    Other(String),
}

impl Charset {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "utf8" | "utf8mb3" => Charset::Utf8,
            "utf8mb4" => Charset::Utf8mb4,
            "latin1" | "iso88591" => Charset::Latin1,
            "ascii" | "usascii" => Charset::Ascii,
            "binary" => Charset::Binary,
            _ => Charset::Other(label.to_string()),
        }
    }

    /// Decodes raw bytes into text, or `None` when the charset cannot
    /// represent them.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Charset::Utf8 | Charset::Utf8mb4 => String::from_utf8(bytes.to_vec()).ok(),
            Charset::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Ascii => bytes
                .is_ascii()
                .then(|| bytes.iter().map(|&b| char::from(b)).collect()),
            Charset::Binary | Charset::Other(_) => None,
        }
    }

    /// Turns the hex digits of a default literal into a quoted string
    /// literal. Literals that cannot be decoded are kept as `X'..'`.
    pub fn decode_hex_literal(&self, digits: &str) -> String {
        let verbatim = || format!("X'{digits}'");

        if let Charset::Other(label) = self {
            warn!(charset = %label, "Unknown charset, keeping hex default verbatim");
            return verbatim();
        }

        match hex::decode(digits).ok().and_then(|bytes| self.decode(&bytes)) {
            Some(text) => quote_string_literal(&text),
            None => verbatim(),
        }
    }
}
