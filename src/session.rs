use actix_web::{
    body::MessageBody,
    cookie::{time::Duration, Cookie, SameSite},
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error, HttpMessage,
};

use crate::{auth::new_id, i18n::Language};

const VISITOR_COOKIE: &str = "hm_visitor";

/// Anonymous browser identity. Chat rooms are keyed by it.
#[derive(Clone, Debug)]
pub struct Visitor {
    pub id: String,
}

fn build(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    let mut builder = Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365));
    if secure {
        builder = builder.secure(true);
    }
    builder.finish()
}

pub fn language_cookie(language: Language, secure: bool) -> Cookie<'static> {
    build(crate::i18n::LANGUAGE_COOKIE, language.code().to_string(), secure)
}

pub async fn visitor_session<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    let existing = req
        .cookie(VISITOR_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.trim().is_empty());
    let secure = req.connection_info().scheme() == "https";

    let (id, fresh) = match existing {
        Some(id) => (id, false),
        None => (new_id(), true),
    };
    req.extensions_mut().insert(Visitor { id: id.clone() });

    let mut res = next.call(req).await?;
    if fresh {
        if let Err(err) = res.response_mut().add_cookie(&build(VISITOR_COOKIE, id, secure)) {
            log::warn!("Could not set visitor cookie: {err}");
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use actix_web::{
        middleware::from_fn,
        test::{self, TestRequest},
        web, App, HttpResponse,
    };

    use super::*;

    async fn whoami(visitor: web::ReqData<Visitor>) -> HttpResponse {
        HttpResponse::Ok().body(visitor.id.clone())
    }

    #[actix_web::test]
    async fn new_visitor_gets_a_cookie() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(visitor_session))
                .route("/", web::get().to(whoami)),
        )
        .await;

        let res = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == VISITOR_COOKIE)
            .expect("visitor cookie");
        let issued = cookie.value().to_string();
        let body = test::read_body(res).await;
        assert_eq!(body, issued.as_bytes());
    }

    #[actix_web::test]
    async fn returning_visitor_keeps_id() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(visitor_session))
                .route("/", web::get().to(whoami)),
        )
        .await;

        let req = TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(VISITOR_COOKIE, "known-visitor"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.response().cookies().next().is_none());
        assert_eq!(test::read_body(res).await, "known-visitor".as_bytes());
    }
}
