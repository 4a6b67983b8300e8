use actix_web::{http::header, web, HttpRequest, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    auth::{landing_for, Credentials},
    components::ui::{Button, ButtonVariant},
    error::AppError,
    i18n::Translator,
    layouts::{Layout, LayoutKind},
    state::AppState,
    templates::render_page,
};

#[derive(Template)]
#[template(path = "pages/login.html")]
struct LoginTemplate {
    t: Translator,
    email: String,
    message: Option<String>,
    show_password: bool,
    toggle_href: &'static str,
    submit: Button,
}

impl LoginTemplate {
    fn new(t: Translator, email: String, message: Option<String>, show_password: bool) -> Self {
        Self {
            t,
            email,
            message,
            show_password,
            toggle_href: if show_password { "/login" } else { "/login?show=1" },
            submit: Button::submit(t.get("login.submit"), ButtonVariant::Primary),
        }
    }
}

#[derive(Deserialize)]
struct LoginQuery {
    show: Option<String>,
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    password: String,
    show: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::get().to(login_page))
            .route(web::post().to(login)),
    )
    .service(web::resource("/logout").route(web::get().to(logout)));
}

fn is_shown(flag: Option<&str>) -> bool {
    matches!(flag, Some("1"))
}

async fn login_page(
    t: Translator,
    req: HttpRequest,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Auth, t, &req);
    let page = LoginTemplate::new(t, String::new(), None, is_shown(query.show.as_deref()));
    render_page(&layout, t.get("login.title"), page)
}

async fn login(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Auth, t, &req);
    let form = form.into_inner();
    let show_password = is_shown(form.show.as_deref());
    let credentials = Credentials {
        email: form.email.trim().to_string(),
        password: form.password,
    };

    let message = match state.auth.login(&credentials) {
        Ok(response) if response.success => {
            if let Some(data) = response.data {
                log::info!("User {} signed in as {:?}", data.user.id, data.user.role);
                return Ok(HttpResponse::SeeOther()
                    .append_header((header::LOCATION, landing_for(data.user.role)))
                    .insert_header((header::CACHE_CONTROL, "no-store"))
                    .finish());
            }
            log::error!("Sign-in for {} succeeded without user data", credentials.email);
            t.get("login.error").to_string()
        }
        Ok(response) => response
            .message
            .unwrap_or_else(|| t.get("login.error").to_string()),
        Err(err) => {
            log::error!("Sign-in failed for {}: {err}", credentials.email);
            t.get("login.error").to_string()
        }
    };

    let page = LoginTemplate::new(t, credentials.email, Some(message), show_password);
    render_page(&layout, t.get("login.title"), page)
}

async fn logout() -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/login"))
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{
        http::{header, StatusCode},
        test::{self, TestRequest},
    };
    use argon2::password_hash;

    use crate::{
        auth::{AuthService, Credentials, LoginResponse, INVALID_CREDENTIALS},
        error::AuthError,
        routes::testing::{self, app, body_text, PASSWORD},
    };

    struct FailingAuth;

    impl AuthService for FailingAuth {
        fn login(&self, _: &Credentials) -> Result<LoginResponse, AuthError> {
            Err(AuthError::Hash(password_hash::Error::Crypto))
        }
    }

    struct LockedAuth;

    impl AuthService for LockedAuth {
        fn login(&self, _: &Credentials) -> Result<LoginResponse, AuthError> {
            Ok(LoginResponse {
                success: false,
                data: None,
                message: Some("Account locked. Call support.".to_string()),
            })
        }
    }

    fn submit(email: &str, password: &str) -> TestRequest {
        TestRequest::post()
            .uri("/login")
            .set_form([("email", email), ("password", password)])
    }

    #[actix_web::test]
    async fn roles_land_on_their_home() {
        let app = app!(testing::state()).await;
        for (email, landing) in [
            ("worker@hunarmand.pk", "/worker/dashboard"),
            ("customer@hunarmand.pk", "/"),
            ("admin@hunarmand.pk", "/"),
        ] {
            let res = test::call_service(&app, submit(email, PASSWORD).to_request()).await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER, "{email}");
            assert_eq!(res.headers().get(header::LOCATION).unwrap(), landing);
        }
    }

    #[actix_web::test]
    async fn rejection_message_is_shown_and_email_kept() {
        let app = app!(testing::state()).await;
        let req = submit("worker@hunarmand.pk", "wrong").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(INVALID_CREDENTIALS));
        assert!(body.contains(r#"value="worker@hunarmand.pk""#));
        assert!(body.contains("layout-auth"));
    }

    #[actix_web::test]
    async fn service_message_is_shown_verbatim() {
        let mut state = testing::state();
        state.auth = Arc::new(LockedAuth);
        let app = app!(state).await;
        let req = submit("a@b.pk", "x").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("Account locked. Call support."));
    }

    #[actix_web::test]
    async fn unexpected_failure_shows_generic_message() {
        let mut state = testing::state();
        state.auth = Arc::new(FailingAuth);
        let app = app!(state).await;
        let req = submit("worker@hunarmand.pk", PASSWORD).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("Something went wrong. Please try again."));
    }

    #[actix_web::test]
    async fn password_toggle_switches_input_type() {
        let app = app!(testing::state()).await;
        let hidden = body_text(
            test::call_service(&app, TestRequest::get().uri("/login").to_request()).await,
        )
        .await;
        assert!(hidden.contains(r#"type="password""#));

        let shown = body_text(
            test::call_service(&app, TestRequest::get().uri("/login?show=1").to_request()).await,
        )
        .await;
        assert!(shown.contains(r#"name="password" type="text""#));
        assert!(!shown.contains(r#"type="password""#));
    }

    #[actix_web::test]
    async fn logout_returns_to_login() {
        let app = app!(testing::state()).await;
        let res = test::call_service(&app, TestRequest::get().uri("/logout").to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
    }
}
