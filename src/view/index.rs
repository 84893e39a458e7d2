use maud::{Markup, html};

use crate::model::ScorePage;
use crate::view::score::{render_debug_trace, render_result_line, render_score_form};

#[must_use]
pub fn render_index_template(page: &ScorePage) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="nl" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href="static/styles.css";
                title { "Golfscore Invoeren" }
            }
            body {
                h2 { "Voer je golfscore in" }
                (render_score_form())
                @if let (Some(result), Some(hole)) = (&page.result, page.hole) {
                    (render_result_line(hole, result))
                }
                @if let Some(trace) = &page.trace {
                    @if !trace.is_empty() {
                        (render_debug_trace(trace))
                    }
                }
            }
        }
    }
}
