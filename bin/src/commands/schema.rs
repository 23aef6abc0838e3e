//! Schema command implementation.

use anyhow::Result;
use reelquote_lib::prelude::*;

/// Print the response schema as it is sent on the wire.
pub(crate) fn show_schema(compact: bool) -> Result<()> {
    let schema = Quote::response_schema();
    let json = if compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{json}");
    Ok(())
}
