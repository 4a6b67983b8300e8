use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

use crate::{error::AppError, i18n::Translator, layouts::Layout};

#[derive(Template)]
#[template(path = "pages/not_found.html")]
struct NotFoundTemplate<'a> {
    t: Translator,
    message_key: &'a str,
}

/// Renders `page` inside the layout's chrome.
pub fn render_page<T: Template>(
    layout: &Layout,
    title: &str,
    page: T,
) -> Result<HttpResponse, AppError> {
    render_page_with_status(StatusCode::OK, layout, title, page)
}

pub fn render_page_with_status<T: Template>(
    status: StatusCode,
    layout: &Layout,
    title: &str,
    page: T,
) -> Result<HttpResponse, AppError> {
    let content = page.render()?;
    let body = layout.wrap(title, content)?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// The absent-record page: a message and a link home, served as 404.
pub fn not_found(
    layout: &Layout,
    t: Translator,
    message_key: &str,
) -> Result<HttpResponse, AppError> {
    render_page_with_status(
        StatusCode::NOT_FOUND,
        layout,
        t.get(message_key),
        NotFoundTemplate { t, message_key },
    )
}
