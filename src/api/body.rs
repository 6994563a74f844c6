use serde::de::DeserializeOwned;

use crate::error::LedgerError;

/// True for a missing or whitespace-only request body.
pub(crate) fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Decodes an optional JSON body. A blank body yields the defaults, anything
/// else must parse in full.
pub(crate) fn json_or_default<T>(body: &[u8]) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
{
    if is_blank(body) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| LedgerError::InvalidInput(format!("malformed JSON body: {e}")))
}
