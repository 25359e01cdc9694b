use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use tera::{Context, Tera};

use crate::dto::search::SearchParams;
use crate::repository::http::HttpMovieRepository;
use crate::routes::render_template;
use crate::services::search as search_service;

#[get("/")]
pub async fn show_index(
    params: web::Query<SearchParams>,
    repo: web::Data<HttpMovieRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match search_service::load_search_page(repo.get_ref(), &params).await {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to load search page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("movies", &data.movies);
    context.insert("headers", &data.headers);
    context.insert("request", &data.request);

    render_template(&tera, "main/index.html", &context)
}
