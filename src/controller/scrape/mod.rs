pub mod client;
pub mod parse;

pub use client::*;
pub use parse::*;

use crate::model::{DebugTrace, ParTable};

/// Fetches the course page and searches its tables for a per-hole par row.
///
/// Every failure mode (transport error, non-200 status, no usable row)
/// collapses to `None`; the trace records the cause for diagnostics.
pub async fn extract_pars(url: &str) -> (Option<ParTable>, DebugTrace) {
    let mut trace = DebugTrace::default();

    let (status, body) = match client::fetch_page(url).await {
        Ok(page) => page,
        Err(e) => {
            trace.push(format!("Fout: {e}"));
            return (None, trace);
        }
    };

    trace.push(format!("Status code: {status}"));
    if status != 200 {
        trace.push("Kon de pagina niet ophalen.");
        return (None, trace);
    }

    let pars = parse::find_par_table(&body, &mut trace);
    (pars, trace)
}
