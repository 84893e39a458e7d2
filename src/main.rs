use golfscore::args;
use golfscore::controller::score::submit_score;
use golfscore::model::ScorePage;

use actix_files::Files;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    HttpServer::new(|| {
        App::new()
            .route("/", web::get().to(index))
            .route("/", web::post().to(submit_score))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind((args.bind_host.as_str(), args.bind_port))?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = golfscore::view::index::render_index_template(&ScorePage::default());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
