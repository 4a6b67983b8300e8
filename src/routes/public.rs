use actix_web::{http::header, web, HttpRequest, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    chat::ChatKey,
    components::{
        chat::ChatModal,
        service::{price_label, CategoryCard, ServiceCard},
        ui::{Button, ButtonVariant, Card},
        worker::{
            BookingPanel, WorkerAbout, WorkerCard, WorkerHeader, WorkerReviews, WorkerServices,
        },
    },
    error::AppError,
    i18n::{Language, Translator},
    icons::Icon,
    layouts::{Layout, LayoutKind},
    models::{format_price, ServiceItem},
    session::{language_cookie, Visitor},
    state::AppState,
    templates::{not_found, render_page},
};

const FEATURED_WORKERS: usize = 4;

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    t: Translator,
    categories: Vec<CategoryCard>,
    featured: Vec<WorkerCard>,
}

#[derive(Template)]
#[template(path = "pages/category.html")]
struct CategoryTemplate {
    t: Translator,
    name: String,
    description: String,
    sub_categories: Vec<CategoryCard>,
}

#[derive(Template)]
#[template(path = "pages/service_list.html")]
struct ServiceListTemplate {
    t: Translator,
    title: String,
    category_name: String,
    category_href: String,
    search_action: String,
    search_icon: String,
    query: String,
    cards: Vec<ServiceCard>,
}

#[derive(Template)]
#[template(path = "pages/service_detail.html")]
struct ServiceDetailTemplate {
    t: Translator,
    name: String,
    description: String,
    price: String,
    price_label: String,
    category_name: String,
    book_button: Button,
    workers: Vec<WorkerCard>,
}

#[derive(Template)]
#[template(path = "pages/worker_detail.html")]
struct WorkerDetailTemplate {
    header: WorkerHeader,
    about: Card,
    services: Card,
    reviews: Card,
    panel: BookingPanel,
    chat: Option<ChatModal>,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

#[derive(Deserialize)]
struct WorkerQuery {
    chat: Option<String>,
}

#[derive(Deserialize)]
struct LanguageForm {
    lang: String,
    next: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/categories/{category_id}").route(web::get().to(category_page)))
        .service(
            web::resource("/categories/{category_id}/{sub_category_id}")
                .route(web::get().to(service_list)),
        )
        .service(web::resource("/services/{service_id}").route(web::get().to(service_detail)))
        .service(web::resource("/workers/{worker_id}").route(web::get().to(worker_detail)))
        .service(web::resource("/language").route(web::post().to(set_language)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn home(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let categories = state
        .catalog
        .categories
        .list_all()
        .into_iter()
        .map(|category| CategoryCard::new(t, category))
        .collect();
    let featured = state
        .catalog
        .featured_workers(FEATURED_WORKERS)
        .into_iter()
        .map(|worker| WorkerCard::new(t, worker))
        .collect();

    render_page(
        &layout,
        t.get("nav.home"),
        HomeTemplate {
            t,
            categories,
            featured,
        },
    )
}

async fn category_page(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let category_id = path.into_inner();
    let Some(category) = state.catalog.categories.find_by_id(&category_id) else {
        return not_found(&layout, t, "not_found.category");
    };

    let sub_categories = state
        .catalog
        .sub_categories
        .list_by_parent(&category.id)
        .into_iter()
        .map(|sub| CategoryCard::sub_category(t, category, sub))
        .collect();
    let name = t.pick(&category.name, &category.name_ur).to_string();

    render_page(
        &layout,
        &name,
        CategoryTemplate {
            t,
            name: name.clone(),
            description: category.description.clone(),
            sub_categories,
        },
    )
}

async fn service_list(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let (category_id, sub_category_id) = path.into_inner();
    let Some(category) = state.catalog.categories.find_by_id(&category_id) else {
        return not_found(&layout, t, "not_found.category");
    };
    let Some(sub) = state
        .catalog
        .sub_categories
        .find_by_id(&sub_category_id)
        .filter(|sub| sub.category_id == category.id)
    else {
        return not_found(&layout, t, "not_found.category");
    };

    let query = query.into_inner().q.unwrap_or_default();
    let services = state.catalog.services.list_by_parent(&sub.id);
    let cards = filter_services(&services, &query)
        .into_iter()
        .map(|service| ServiceCard::new(t, service))
        .collect();
    let title = t.pick(&sub.name, &sub.name_ur).to_string();

    render_page(
        &layout,
        &title,
        ServiceListTemplate {
            t,
            title: title.clone(),
            category_name: t.pick(&category.name, &category.name_ur).to_string(),
            category_href: format!("/categories/{}", category.id),
            search_action: req.path().to_string(),
            search_icon: Icon::Search.svg(),
            query,
            cards,
        },
    )
}

/// Services whose primary or Urdu name contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_services<'a>(services: &[&'a ServiceItem], query: &str) -> Vec<&'a ServiceItem> {
    if query.trim().is_empty() {
        return services.to_vec();
    }
    let needle = query.to_lowercase();
    services
        .iter()
        .copied()
        .filter(|service| {
            service.name.to_lowercase().contains(&needle)
                || service.name_ur.to_lowercase().contains(&needle)
        })
        .collect()
}

async fn service_detail(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let service_id = path.into_inner();
    let Some(service) = state.catalog.services.find_by_id(&service_id) else {
        return not_found(&layout, t, "not_found.service");
    };

    let category_name = state
        .catalog
        .category_of_service(service)
        .map(|category| t.pick(&category.name, &category.name_ur).to_string())
        .unwrap_or_default();
    let workers = state
        .catalog
        .workers_for_service(&service.id)
        .into_iter()
        .map(|worker| WorkerCard::new(t, worker))
        .collect();
    let name = t.pick(&service.name, &service.name_ur).to_string();

    render_page(
        &layout,
        &name,
        ServiceDetailTemplate {
            t,
            name: name.clone(),
            description: service.description.clone(),
            price: format_price(service.price),
            price_label: price_label(t, service.price_type),
            category_name,
            book_button: Button::link(
                t.get("services.book"),
                format!("/book/{}", service.id),
                ButtonVariant::Primary,
            ),
            workers,
        },
    )
}

async fn worker_detail(
    state: web::Data<AppState>,
    t: Translator,
    req: HttpRequest,
    visitor: web::ReqData<Visitor>,
    path: web::Path<String>,
    query: web::Query<WorkerQuery>,
) -> Result<HttpResponse, AppError> {
    let layout = Layout::from_request(LayoutKind::Customer, t, &req);
    let worker_id = path.into_inner();
    let Some(worker) = state.catalog.workers.find_by_id(&worker_id) else {
        return not_found(&layout, t, "not_found.worker");
    };

    let chat = if query.chat.as_deref() == Some("open") {
        let key = ChatKey::new(&visitor.id, &worker.id);
        let conversation = state.chats.open(&key, t.get("chat.greeting")).await;
        let phase = state.chats.phase(&key).await;
        Some(ChatModal::new(t, worker, &conversation, phase))
    } else {
        None
    };

    let page = WorkerDetailTemplate {
        header: WorkerHeader::new(t, worker),
        about: section(t, "worker.about", WorkerAbout::new(t, worker))?,
        services: section(t, "worker.services", WorkerServices::new(t, worker))?,
        reviews: section(t, "worker.reviews", WorkerReviews::new(t, worker))?,
        panel: BookingPanel::new(t, worker),
        chat,
    };
    render_page(&layout, &worker.name, page)
}

fn section<T: Template>(t: Translator, title_key: &str, body: T) -> Result<Card, AppError> {
    Ok(Card::new(Some(t.get(title_key).to_string()), body.render()?))
}

async fn set_language(req: HttpRequest, form: web::Form<LanguageForm>) -> HttpResponse {
    let form = form.into_inner();
    let next = form
        .next
        .as_deref()
        .filter(|next| is_local_path(next))
        .unwrap_or("/");

    let mut response = HttpResponse::SeeOther();
    response.append_header((header::LOCATION, next));
    if let Some(language) = Language::from_code(&form.lang) {
        let secure = req.connection_info().scheme() == "https";
        response.cookie(language_cookie(language, secure));
    }
    response.finish()
}

// Browsers read `\` as `/`, so `/\host` is as external as `//host`.
fn is_local_path(next: &str) -> bool {
    next.starts_with('/')
        && !next.starts_with("//")
        && !next.contains('\\')
        && !next.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use actix_web::{
        cookie::Cookie,
        http::StatusCode,
        test::{self, TestRequest},
    };

    use super::*;
    use crate::{
        routes::testing::{self, app, body_text},
        seed,
    };

    #[test]
    fn blank_query_keeps_every_service() {
        let all = seed::services();
        let refs: Vec<&ServiceItem> = all.iter().collect();
        for query in ["", "   ", "\t"] {
            assert_eq!(filter_services(&refs, query).len(), refs.len());
        }
    }

    #[test]
    fn query_matches_either_name_case_insensitively() {
        let all = seed::services();
        let refs: Vec<&ServiceItem> = all.iter().collect();
        for query in ["tap", "TAP", "ac ", "مرمت", "Installation", "zzz"] {
            let needle = query.to_lowercase();
            let expected: Vec<&str> = refs
                .iter()
                .filter(|s| {
                    s.name.to_lowercase().contains(&needle)
                        || s.name_ur.to_lowercase().contains(&needle)
                })
                .map(|s| s.id.as_str())
                .collect();
            let actual: Vec<&str> = filter_services(&refs, query)
                .iter()
                .map(|s| s.id.as_str())
                .collect();
            assert_eq!(actual, expected, "query {query:?}");
        }

        let tap: Vec<&str> = filter_services(&refs, "tAp")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(tap, vec!["s-tap-repair"]);
        let urdu: Vec<&str> = filter_services(&refs, "گیزر")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(urdu, vec!["s-geyser-install"]);
    }

    #[actix_web::test]
    async fn unknown_ids_render_not_found() {
        let app = app!(testing::state()).await;
        for (uri, message) in [
            ("/workers/w-404", "Worker not found"),
            ("/services/s-404", "Service not found"),
            ("/categories/gardening", "Category not found"),
            ("/categories/gardening/lawns", "Category not found"),
            ("/categories/plumbing/ac-service", "Category not found"),
        ] {
            let res = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
            let body = body_text(res).await;
            assert!(body.contains(message), "{uri}");
            assert!(body.contains(r#"<a class="btn btn-primary" href="/">"#), "{uri}");
            assert!(!body.contains("worker-header"), "{uri}");
            assert!(!body.contains("service-card"), "{uri}");
        }
    }

    #[actix_web::test]
    async fn worker_detail_shows_name_and_rating() {
        let app = app!(testing::state()).await;
        let req = TestRequest::get().uri("/workers/w-1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(r#"<h1 class="worker-name">Ahmed Raza</h1>"#));
        assert!(body.contains(
            r#"<span class="star" aria-hidden="true">★</span><span class="rating-value">4.8</span>"#
        ));
        assert!(body.contains("Leak detection"));
        assert!(!body.contains("chat-modal"));
    }

    #[actix_web::test]
    async fn chat_modal_mounts_only_when_open() {
        let app = app!(testing::state()).await;
        let req = TestRequest::get().uri("/workers/w-3?chat=open").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("chat-modal"));
        assert!(body.contains("Hello! How can I help you today?"));
    }

    #[actix_web::test]
    async fn service_list_filters_by_query() {
        let app = app!(testing::state()).await;
        let all = body_text(
            test::call_service(
                &app,
                TestRequest::get().uri("/categories/plumbing/plumbing-repairs").to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(all.matches(r#"class="service-card""#).count(), 3);

        let filtered = body_text(
            test::call_service(
                &app,
                TestRequest::get()
                    .uri("/categories/plumbing/plumbing-repairs?q=LEAK")
                    .to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(filtered.matches(r#"class="service-card""#).count(), 1);
        assert!(filtered.contains("Pipe Leak Fix"));

        let none = body_text(
            test::call_service(
                &app,
                TestRequest::get()
                    .uri("/categories/plumbing/plumbing-repairs?q=paint")
                    .to_request(),
            )
            .await,
        )
        .await;
        assert!(none.contains("No services match your search."));
    }

    #[actix_web::test]
    async fn home_lists_categories_and_featured_workers() {
        let app = app!(testing::state()).await;
        let req = TestRequest::get().uri("/").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert_eq!(body.matches(r#"class="category-card""#).count(), 6);
        assert_eq!(body.matches(r#"class="worker-card""#).count(), FEATURED_WORKERS);
        assert!(body.contains("Kamran Ali"));
    }

    #[actix_web::test]
    async fn service_detail_lists_offering_workers() {
        let app = app!(testing::state()).await;
        let req = TestRequest::get().uri("/services/s-tap-repair").to_request();
        let body = body_text(test::call_service(&app, req).await).await;
        assert!(body.contains("Ahmed Raza"));
        assert!(body.contains("Usman Tariq"));
        assert!(!body.contains("Kamran Ali"));
    }

    #[actix_web::test]
    async fn drawer_round_trip_restores_initial_page() {
        let app = app!(testing::state()).await;
        let cookie = Cookie::new("hm_visitor", "v-drawer");
        let fetch = |uri: &'static str| {
            TestRequest::get()
                .uri(uri)
                .cookie(cookie.clone())
                .to_request()
        };

        let initial = body_text(test::call_service(&app, fetch("/customer/bookings")).await).await;
        let opened = test::call_service(&app, fetch("/customer/bookings?drawer=open")).await;
        let opened = body_text(opened).await;
        let closed = body_text(test::call_service(&app, fetch("/customer/bookings")).await).await;

        assert!(!initial.contains("drawer-overlay"));
        assert!(opened.contains("drawer-overlay"));
        assert_eq!(initial, closed);
    }

    #[actix_web::test]
    async fn language_round_trip() {
        let app = app!(testing::state()).await;
        let req = TestRequest::get().uri("/workers/w-1").to_request();
        let english = body_text(test::call_service(&app, req).await).await;

        let req = TestRequest::post()
            .uri("/language")
            .set_form([("lang", "ur"), ("next", "/workers/w-1")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/workers/w-1");
        let lang = res
            .response()
            .cookies()
            .find(|c| c.name() == crate::i18n::LANGUAGE_COOKIE)
            .unwrap();
        assert_eq!(lang.value(), "ur");
        let lang = Cookie::new(crate::i18n::LANGUAGE_COOKIE, lang.value().to_string());

        let urdu = body_text(
            test::call_service(
                &app,
                TestRequest::get().uri("/workers/w-1").cookie(lang).to_request(),
            )
            .await,
        )
        .await;
        assert!(urdu.contains(r#"dir="rtl""#));
        assert!(urdu.contains("تعارف"));

        let back = Cookie::new(crate::i18n::LANGUAGE_COOKIE, "en");
        let restored = body_text(
            test::call_service(
                &app,
                TestRequest::get().uri("/workers/w-1").cookie(back).to_request(),
            )
            .await,
        )
        .await;
        assert_eq!(restored, english);
    }

    #[actix_web::test]
    async fn language_redirect_stays_on_site() {
        let app = app!(testing::state()).await;
        for next in [
            "https://evil.example",
            "//evil.example",
            "/\\evil.example",
            "/\t/evil.example",
            "evil.example",
        ] {
            let req = TestRequest::post()
                .uri("/language")
                .set_form([("lang", "en"), ("next", next)])
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/", "{next:?}");
        }
    }

    #[test]
    fn local_paths_are_kept() {
        assert!(is_local_path("/workers/w-1?chat=open"));
        assert!(is_local_path("/"));
        assert!(!is_local_path("/\\evil.example"));
        assert!(!is_local_path("/a\r\nSet-Cookie: x=1"));
    }
}
