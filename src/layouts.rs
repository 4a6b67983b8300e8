use actix_web::HttpRequest;
use askama::Template;

use crate::{components::ui::Container, i18n::Translator, icons::Icon};

const DRAWER_PARAM: &str = "drawer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Auth,
    Customer,
    Worker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }
}

#[derive(Clone, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct Chrome {
    pub t: Translator,
    pub title: String,
    pub nav: Vec<NavLink>,
    pub drawer_open: bool,
    pub toggle_href: String,
    pub close_href: String,
    pub menu_icon: String,
    pub close_icon: String,
}

#[derive(Template)]
#[template(path = "layouts/auth.html")]
struct AuthLayoutTemplate<'a> {
    chrome: &'a Chrome,
    content: &'a str,
}

#[derive(Template)]
#[template(path = "layouts/customer.html")]
struct CustomerLayoutTemplate<'a> {
    chrome: &'a Chrome,
    content: &'a str,
}

#[derive(Template)]
#[template(path = "layouts/worker.html")]
struct WorkerLayoutTemplate<'a> {
    chrome: &'a Chrome,
    content: &'a str,
}

#[derive(Clone, Debug)]
pub struct Layout {
    kind: LayoutKind,
    t: Translator,
    path: String,
    /// Query string minus the drawer parameter.
    query: String,
    drawer: DrawerState,
}

impl Layout {
    pub fn from_request(kind: LayoutKind, t: Translator, req: &HttpRequest) -> Self {
        Self::new(kind, t, req.path(), req.query_string())
    }

    pub fn new(kind: LayoutKind, t: Translator, path: &str, query: &str) -> Self {
        let mut open = false;
        let kept: Vec<&str> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let key = pair.split('=').next().unwrap_or_default();
                if key == DRAWER_PARAM {
                    open = pair.split('=').nth(1) == Some("open");
                    false
                } else {
                    true
                }
            })
            .collect();

        Self {
            kind,
            t,
            path: path.to_string(),
            query: kept.join("&"),
            drawer: DrawerState { open },
        }
    }

    /// Current location without the drawer parameter.
    pub fn base_href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    fn href_with(&self, drawer: DrawerState) -> String {
        if !drawer.is_open() {
            return self.base_href();
        }
        let separator = if self.query.is_empty() { '?' } else { '&' };
        format!("{}{separator}{DRAWER_PARAM}=open", self.base_href())
    }

    /// Same location with the drawer flipped.
    pub fn toggle_href(&self) -> String {
        self.href_with(self.drawer.toggle())
    }

    fn nav(&self) -> Vec<NavLink> {
        let items: &[(&'static str, &str, Icon)] = match self.kind {
            LayoutKind::Auth => &[("/", "nav.home", Icon::Home)],
            LayoutKind::Customer => &[
                ("/", "nav.home", Icon::Home),
                ("/customer/bookings", "nav.bookings", Icon::Calendar),
                ("/customer/profile", "nav.profile", Icon::User),
                ("/login", "nav.login", Icon::Logout),
            ],
            LayoutKind::Worker => &[
                ("/worker/dashboard", "nav.dashboard", Icon::Dashboard),
                ("/worker/bookings", "nav.jobs", Icon::Calendar),
                ("/logout", "nav.logout", Icon::Logout),
            ],
        };

        items
            .iter()
            .map(|(href, key, icon)| NavLink {
                href: *href,
                label: self.t.get(key).to_string(),
                icon: icon.svg(),
                active: is_active(&self.path, href),
            })
            .collect()
    }

    fn chrome(&self, title: &str) -> Chrome {
        Chrome {
            t: self.t,
            title: title.to_string(),
            nav: self.nav(),
            drawer_open: self.drawer.is_open(),
            toggle_href: self.toggle_href(),
            close_href: self.base_href(),
            menu_icon: Icon::Menu.svg(),
            close_icon: Icon::Close.svg(),
        }
    }

    pub fn wrap(&self, title: &str, content: String) -> askama::Result<String> {
        let chrome = self.chrome(title);
        let content = Container::new(content).render()?;
        match self.kind {
            LayoutKind::Auth => AuthLayoutTemplate {
                chrome: &chrome,
                content: &content,
            }
            .render(),
            LayoutKind::Customer => CustomerLayoutTemplate {
                chrome: &chrome,
                content: &content,
            }
            .render(),
            LayoutKind::Worker => WorkerLayoutTemplate {
                chrome: &chrome,
                content: &content,
            }
            .render(),
        }
    }
}

fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.starts_with(&format!("{href}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translator, Language};

    fn customer(path: &str, query: &str) -> Layout {
        Layout::new(LayoutKind::Customer, translator(Language::En), path, query)
    }

    #[test]
    fn drawer_param_is_read_and_stripped() {
        let layout = customer("/categories/plumbing/plumbing-repairs", "q=tap&drawer=open");
        assert!(layout.drawer.is_open());
        assert_eq!(layout.base_href(), "/categories/plumbing/plumbing-repairs?q=tap");
        assert_eq!(layout.toggle_href(), "/categories/plumbing/plumbing-repairs?q=tap");

        let closed = customer("/categories/plumbing/plumbing-repairs", "q=tap");
        assert!(!closed.drawer.is_open());
        assert_eq!(
            closed.toggle_href(),
            "/categories/plumbing/plumbing-repairs?q=tap&drawer=open"
        );
        assert_eq!(customer("/", "").toggle_href(), "/?drawer=open");
    }

    #[test]
    fn overlay_only_rendered_while_open() {
        let closed = customer("/", "").wrap("Home", "<p>body</p>".to_string()).unwrap();
        let open = customer("/", "drawer=open")
            .wrap("Home", "<p>body</p>".to_string())
            .unwrap();
        assert!(!closed.contains("drawer-overlay"));
        assert!(open.contains("drawer-overlay"));
        assert!(open.contains("drawer-backdrop"));
    }

    #[test]
    fn toggling_twice_restores_initial_markup() {
        for kind in [LayoutKind::Customer, LayoutKind::Worker, LayoutKind::Auth] {
            let initial = Layout::new(kind, translator(Language::En), "/worker/dashboard", "");
            let mut round_trip = initial.clone();
            round_trip.drawer = initial.drawer.toggle().toggle();
            assert_eq!(
                initial.wrap("Page", "<p>x</p>".to_string()).unwrap(),
                round_trip.wrap("Page", "<p>x</p>".to_string()).unwrap()
            );
        }
    }

    #[test]
    fn active_link_matches_prefix() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/customer/bookings", "/"));
        assert!(is_active("/customer/bookings", "/customer/bookings"));
        assert!(is_active("/worker/bookings/b-1", "/worker/bookings"));
        assert!(!is_active("/worker/bookingsx", "/worker/bookings"));
    }

    #[test]
    fn urdu_chrome_is_right_to_left() {
        let layout = Layout::new(LayoutKind::Worker, translator(Language::Ur), "/worker/dashboard", "");
        let html = layout.wrap("ڈیش بورڈ", String::new()).unwrap();
        assert!(html.contains(r#"dir="rtl""#));
        assert!(html.contains("ڈیش بورڈ"));
    }
}
