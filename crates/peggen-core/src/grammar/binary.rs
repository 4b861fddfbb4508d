//! Postcard encoding for caching analyzed grammars.
//!
//! The payload follows a four-byte magic and a format version byte, so a
//! cache written by an incompatible model is rejected before decoding.

use super::json::GrammarError;
use super::types::Grammar;

const MAGIC: &[u8; 4] = b"PEGG";
const FORMAT_VERSION: u8 = 1;

impl Grammar {
    /// Decode a grammar written by [`Grammar::to_binary`].
    pub fn from_binary(bytes: &[u8]) -> Result<Self, GrammarError> {
        let Some(rest) = bytes.strip_prefix(MAGIC.as_slice()) else {
            return Err(GrammarError::NotBinaryGrammar);
        };
        let Some((&version, payload)) = rest.split_first() else {
            return Err(GrammarError::NotBinaryGrammar);
        };
        if version != FORMAT_VERSION {
            return Err(GrammarError::BinaryVersion {
                found: version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(postcard::from_bytes(payload)?)
    }

    /// Encode the grammar with its cache header.
    pub fn to_binary(&self) -> Vec<u8> {
        let payload = postcard::to_allocvec(self).expect("grammar serialization is infallible");
        let mut out = Vec::with_capacity(MAGIC.len() + 1 + payload.len());
        out.extend_from_slice(MAGIC);
        out.push(FORMAT_VERSION);
        out.extend(payload);
        out
    }
}
