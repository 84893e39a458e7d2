use maud::{Markup, html};

use crate::model::DebugTrace;

#[must_use]
pub fn render_score_form() -> Markup {
    html! {
        form method="post" {
            label for="url" { "Golfbaan-URL:" }
            input type="url" id="url" name="url" required placeholder="https://...";
            label for="hole" { "Hole (1-18):" }
            select id="hole" name="hole" {
                @for i in 1..=18 {
                    option value=(i) { (i) }
                }
            }
            label for="score" { "Aantal slagen:" }
            input type="number" id="score" name="score" min="1" required;
            button type="submit" { "Verstuur" }
        }
    }
}

#[must_use]
pub fn render_result_line(hole: i32, result: &str) -> Markup {
    html! {
        p class="result" {
            "Je score op hole " (hole) " is: " strong { (result) }
        }
    }
}

#[must_use]
pub fn render_debug_trace(trace: &DebugTrace) -> Markup {
    html! {
        pre class="debug" { (trace.lines().join("\n")) }
    }
}
