mod error;
mod key;
mod table;

pub use error::*;
pub use key::*;
pub use table::*;

use crate::values::Value;

/// Dispatches on a value's variant tag, or on the value itself for scalars,
/// and forwards the instance payload to the selected handler. The wildcard
/// handler, when present, catches unmatched keys and always receives zero
/// arguments.
pub fn match_value<R>(value: impl Into<Value>, table: &Table<R>) -> Result<R, MatchError> {
    let value = value.into();
    let key = Key::of(&value);

    if let Some(handler) = table.handler(&key) {
        Ok(handler(
            value
                .to_instance()
                .map(|instance| instance.payload())
                .unwrap_or_default(),
        ))
    } else if let Some(wildcard) = table.wildcard_handler() {
        Ok(wildcard())
    } else {
        Err(MatchError::NonExhaustiveMatch(key))
    }
}
