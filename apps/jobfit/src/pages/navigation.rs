//! Page navigation: four pages, no terminal state.
//!
//! The selected page is resolved per request from the `page` query parameter,
//! then the `current_page` cookie, then Home, and handed to the renderer
//! explicitly. Nothing is kept server-side.

pub const PAGE_QUERY_PARAM: &str = "page";
pub const PAGE_COOKIE: &str = "current_page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Demo,
    Info,
    Contact,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Demo, Page::Info, Page::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Demo => "Demo",
            Page::Info => "Info",
            Page::Contact => "Contact",
        }
    }

    /// Exact, case-sensitive match on the page name.
    pub fn from_name(name: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|p| p.as_str() == name)
    }

    pub fn href(self) -> String {
        format!("/?{PAGE_QUERY_PARAM}={}", self.as_str())
    }
}

/// Query beats cookie beats Home. Unknown names are ignored rather than rejected.
pub fn resolve_initial_page(query: Option<&str>, cookie_header: Option<&str>) -> Page {
    query
        .and_then(Page::from_name)
        .or_else(|| {
            cookie_header
                .and_then(|h| cookie_value(h, PAGE_COOKIE))
                .and_then(Page::from_name)
        })
        .unwrap_or_default()
}

/// Looks up one cookie in a `Cookie` request header (`a=1; b=2`).
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// `Set-Cookie` value remembering the page for the rest of the session.
pub fn page_cookie(page: Page) -> String {
    format!(
        "{PAGE_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        page.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_query_selects_demo() {
        assert_eq!(resolve_initial_page(Some("Demo"), None), Page::Demo);
    }

    #[test]
    fn test_defaults_to_home() {
        assert_eq!(resolve_initial_page(None, None), Page::Home);
        assert_eq!(resolve_initial_page(Some("Nowhere"), None), Page::Home);
        assert_eq!(resolve_initial_page(Some("demo"), None), Page::Home);
    }

    #[test]
    fn test_cookie_is_used_without_query() {
        let cookie = "theme=dark; current_page=Info";
        assert_eq!(resolve_initial_page(None, Some(cookie)), Page::Info);
    }

    #[test]
    fn test_query_overrides_cookie() {
        let cookie = "current_page=Contact";
        assert_eq!(resolve_initial_page(Some("Demo"), Some(cookie)), Page::Demo);
        // An unknown query value falls through to the cookie.
        assert_eq!(resolve_initial_page(Some("???"), Some(cookie)), Page::Contact);
    }

    #[test]
    fn test_cookie_value_parsing() {
        let header = "a=1; current_page=\"Demo\";b=2";
        assert_eq!(cookie_value(header, "current_page"), Some("Demo"));
        assert_eq!(cookie_value(header, "b"), Some("2"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("", "a"), None);
    }

    #[test]
    fn test_page_round_trips_through_name_and_cookie() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.as_str()), Some(page));
            let set_cookie = page_cookie(page);
            let value = set_cookie.split(';').next().unwrap();
            assert_eq!(resolve_initial_page(None, Some(value)), page);
        }
    }

    #[test]
    fn test_href_uses_query_parameter() {
        assert_eq!(Page::Demo.href(), "/?page=Demo");
    }
}
