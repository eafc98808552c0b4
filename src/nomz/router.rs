//! # Fragment Routing
//!
//! The router is a small state machine over a closed set of view kinds.
//! [`parse_fragment`] resolves a URL fragment against an ordered list of
//! typed matchers; [`Router::navigate`] renders the resolved route exactly
//! once and replaces the single "current resolved view" cell.
//!
//! Unmatched or malformed fragments resolve to [`Route::NotFound`]. That is
//! a per-event outcome, never a failure: the next navigation event leaves
//! it again. Repeating the same fragment re-dispatches and must produce a
//! byte-identical view, which the renderer's determinism guarantees.

use crate::render::Renderer;
use crate::store::RecordStore;

/// The closed set of view kinds a fragment can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Area(String),
    RestaurantDetail(u32),
    Search(String),
    NotFound,
}

/// One route pattern: a literal path prefix plus a typed parser for the
/// remainder. Listing them in a fixed order makes priority explicit.
struct Pattern {
    prefix: &'static str,
    parse: fn(&str) -> Route,
}

const PATTERNS: &[Pattern] = &[
    Pattern {
        prefix: "/area/",
        parse: parse_area,
    },
    Pattern {
        prefix: "/restaurant/",
        parse: parse_restaurant,
    },
    Pattern {
        prefix: "/search/",
        parse: parse_search,
    },
];

fn parse_area(rest: &str) -> Route {
    if rest.is_empty() || rest.contains('/') {
        Route::NotFound
    } else {
        Route::Area(rest.to_string())
    }
}

fn parse_restaurant(rest: &str) -> Route {
    // The id segment must be a positive integer; anything else is NotFound,
    // not an error
    match rest.parse::<u32>() {
        Ok(id) if id > 0 => Route::RestaurantDetail(id),
        _ => Route::NotFound,
    }
}

fn parse_search(rest: &str) -> Route {
    Route::Search(rest.to_string())
}

/// Resolves a fragment to a route. Pure; first structural match wins.
///
/// Accepted shapes: `""`/`"#"`/`"#/"` → Home, `#/area/<slug>`,
/// `#/restaurant/<id>`, `#/search/<query>`. Everything else is NotFound.
pub fn parse_fragment(fragment: &str) -> Route {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);

    if path.is_empty() || path == "/" {
        return Route::Home;
    }

    for pattern in PATTERNS {
        if let Some(rest) = path.strip_prefix(pattern.prefix) {
            return (pattern.parse)(rest);
        }
    }

    Route::NotFound
}

/// The view a navigation event resolved to, with its rendered markup.
#[derive(Debug, Clone)]
pub struct ResolvedView {
    pub route: Route,
    pub fragment: String,
    pub html: String,
}

/// Navigation controller. Holds the one piece of mutable state in the
/// engine: the current resolved view, replaced wholesale per event.
#[derive(Debug, Default)]
pub struct Router {
    current: Option<ResolvedView>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the startup fragment. An absent fragment is the empty
    /// string, which resolves to Home.
    pub fn start(
        &mut self,
        initial_fragment: &str,
        store: &RecordStore,
        renderer: &Renderer,
    ) -> &ResolvedView {
        self.navigate(initial_fragment, store, renderer)
    }

    /// Processes one navigation event: parse, render exactly once, replace
    /// the current view. Events are handled one at a time to completion;
    /// there is no in-flight work to cancel or debounce.
    pub fn navigate(
        &mut self,
        fragment: &str,
        store: &RecordStore,
        renderer: &Renderer,
    ) -> &ResolvedView {
        let route = parse_fragment(fragment);
        let html = renderer.render(&route, store);
        self.current.insert(ResolvedView {
            route,
            fragment: fragment.to_string(),
            html,
        })
    }

    pub fn current(&self) -> Option<&ResolvedView> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn home_shapes() {
        assert_eq!(parse_fragment(""), Route::Home);
        assert_eq!(parse_fragment("#"), Route::Home);
        assert_eq!(parse_fragment("#/"), Route::Home);
        assert_eq!(parse_fragment("/"), Route::Home);
    }

    #[test]
    fn area_route() {
        assert_eq!(
            parse_fragment("#/area/north-london"),
            Route::Area("north-london".to_string())
        );
        assert_eq!(parse_fragment("#/area/"), Route::NotFound);
        assert_eq!(parse_fragment("#/area/a/b"), Route::NotFound);
    }

    #[test]
    fn restaurant_route_requires_positive_integer_id() {
        assert_eq!(parse_fragment("#/restaurant/42"), Route::RestaurantDetail(42));
        assert_eq!(parse_fragment("#/restaurant/abc"), Route::NotFound);
        assert_eq!(parse_fragment("#/restaurant/"), Route::NotFound);
        assert_eq!(parse_fragment("#/restaurant/0"), Route::NotFound);
        assert_eq!(parse_fragment("#/restaurant/-3"), Route::NotFound);
    }

    #[test]
    fn search_route_keeps_query_text() {
        assert_eq!(
            parse_fragment("#/search/noodle soup"),
            Route::Search("noodle soup".to_string())
        );
        assert_eq!(parse_fragment("#/search/"), Route::Search(String::new()));
    }

    #[test]
    fn unmatched_shapes_are_not_found() {
        assert_eq!(parse_fragment("#/nope"), Route::NotFound);
        assert_eq!(parse_fragment("#/restaurants/1"), Route::NotFound);
        assert_eq!(parse_fragment("#//"), Route::NotFound);
    }

    fn fixture() -> (RecordStore, Renderer) {
        let (store, _) = RecordStore::load(json!([
            {"id": 42, "name": "Moro", "cuisine": "Spanish",
             "address": "34 Exmouth Market", "postal_code": "EC1R 4QE", "rating": 4.5}
        ]))
        .unwrap();
        (store, Renderer::new().unwrap())
    }

    #[test]
    fn navigate_dispatches_and_replaces_current() {
        let (store, renderer) = fixture();
        let mut router = Router::new();

        let view = router.navigate("#/restaurant/42", &store, &renderer);
        assert_eq!(view.route, Route::RestaurantDetail(42));
        assert!(view.html.contains("Moro"));

        router.navigate("#/", &store, &renderer);
        assert_eq!(router.current().unwrap().route, Route::Home);
    }

    #[test]
    fn repeated_fragment_is_byte_identical() {
        let (store, renderer) = fixture();
        let mut router = Router::new();

        let first = router.navigate("#/search/moro", &store, &renderer).html.clone();
        let second = router.navigate("#/search/moro", &store, &renderer).html.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn bad_fragment_is_recoverable() {
        let (store, renderer) = fixture();
        let mut router = Router::new();

        router.navigate("#/restaurant/abc", &store, &renderer);
        assert_eq!(router.current().unwrap().route, Route::NotFound);

        // The next event leaves the NotFound state
        router.navigate("#/", &store, &renderer);
        assert_eq!(router.current().unwrap().route, Route::Home);
    }

    #[test]
    fn start_defaults_to_home() {
        let (store, renderer) = fixture();
        let mut router = Router::new();
        let view = router.start("", &store, &renderer);
        assert_eq!(view.route, Route::Home);
    }
}
