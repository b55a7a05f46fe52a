pub mod charts;
pub mod countdown;
pub mod driver;
pub mod driver_season;
pub mod numeric;
pub mod race;
pub mod season;
pub mod standings;
pub mod team;

pub use charts::*;
pub use countdown::*;
pub use driver::*;
pub use driver_season::*;
pub use numeric::*;
pub use race::*;
pub use season::*;
pub use standings::*;
pub use team::*;

use serde::Serialize;

/// Compact JSON text of any entity, ready to interpolate into a prompt or
/// return from a `json=1` route.
#[must_use]
pub fn prompt_json<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize entity");
            None
        }
    }
}
