use crate::controller::scrape::extract_pars;
use crate::model::{ScorePage, ScoreQuery, interpret};

/// Shown whenever no par can be produced for the requested hole, whatever
/// the underlying cause; the trace carries the distinction.
pub const PAR_LOOKUP_ERROR: &str = "Fout bij het ophalen van de par voor deze hole.";

/// Scrapes the submitted course URL once and interprets the stroke count
/// against the par for the requested hole.
pub async fn score_submission(query: &ScoreQuery) -> ScorePage {
    let (pars, trace) = extract_pars(&query.url).await;

    let result = match pars.as_ref().and_then(|table| table.get(query.hole)) {
        Some(par) => interpret(par, query.strokes),
        None => PAR_LOOKUP_ERROR.to_string(),
    };

    ScorePage {
        result: Some(result),
        hole: Some(query.hole),
        trace: Some(trace),
    }
}
