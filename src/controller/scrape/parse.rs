use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

use crate::model::{DebugTrace, ParTable};

fn total_par_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^par [0-9]+$").unwrap())
}

fn selector(css: &str) -> Selector {
    // Selectors are compile-time literals; parse cannot fail on them.
    Selector::parse(css).unwrap()
}

/// Walks every table row in the document looking for a per-hole par row:
/// first cell contains "par", remaining all-digit cells are the par values.
/// The first qualifying row wins and scanning stops. A cell like "Par 72"
/// is an aggregate total, not per-hole data; hitting one aborts the search.
///
/// `Html::parse_document` recovers from malformed markup, so arbitrary
/// third-party pages never fail the parse outright.
pub fn find_par_table(body: &str, trace: &mut DebugTrace) -> Option<ParTable> {
    let document = Html::parse_document(body);
    let table_sel = selector("table");
    let row_sel = selector("tr");
    let cell_sel = selector("td, th");

    let tables: Vec<_> = document.select(&table_sel).collect();
    trace.push(format!("Aantal tabellen gevonden: {}", tables.len()));

    for table in tables {
        for row in table.select(&row_sel) {
            let texts: Vec<String> = row
                .select(&cell_sel)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();
            let Some(first) = texts.first() else {
                continue;
            };

            if first.to_lowercase().contains("par") {
                let par_values: Vec<i32> = texts[1..]
                    .iter()
                    .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
                    .filter_map(|t| t.parse().ok())
                    .collect();
                trace.push(format!("Par-rij per hole gevonden: {texts:?}"));
                if !par_values.is_empty() {
                    trace.push(format!("par_values: {par_values:?}"));
                    return Some(ParTable::from_par_values(&par_values));
                }
            } else if texts.iter().any(|t| total_par_regex().is_match(t)) {
                trace.push(format!("Alleen totaalscore gevonden: {texts:?}"));
                return None;
            }
        }
    }

    trace.push("Geen par-rij per hole gevonden in tabellen.");
    None
}
