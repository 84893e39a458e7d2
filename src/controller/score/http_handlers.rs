use actix_web::web;
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::data_service::score_submission;
use crate::model::ScoreQuery;
use crate::view::index::render_index_template;

pub async fn submit_score(form: web::Form<HashMap<String, String>>) -> impl Responder {
    let url = form
        .get("url")
        .unwrap_or(&String::new())
        .trim()
        .to_string();
    if url.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "url parameter is required"}));
    }

    let hole_str = form.get("hole").map(|s| s.trim()).unwrap_or("");
    let hole: i32 = match hole_str.parse() {
        Ok(h) if (1..=18).contains(&h) => h,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "hole must be an integer between 1 and 18"}));
        }
    };

    let strokes_str = form.get("score").map(|s| s.trim()).unwrap_or("");
    let strokes: i32 = match strokes_str.parse() {
        Ok(s) if s >= 1 => s,
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "score must be a positive integer"}));
        }
    };

    let query = ScoreQuery { url, hole, strokes };
    let page = score_submission(&query).await;

    let markup = render_index_template(&page);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
