use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod search;

/// Renders a Tera template into an HTML response.
///
/// Render failures are logged and answered with the default 500 response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
