//! # Fragment Rendering
//!
//! The renderer is a pure mapping `(route, store) -> HTML fragment string`.
//! It never mutates the store, performs no I/O, and never fails on absent
//! data: a detail request for an unknown id renders the not-found fragment,
//! not an error. Same inputs, same output string—this is what makes
//! re-dispatch idempotent and static pre-rendering possible.
//!
//! Layout decisions (pluralization, placeholder text, weekday ordering,
//! the per-card visual theme) are computed in Rust and handed to the
//! templates as plain serializable structs; templates only branch on what
//! gets output.

use crate::error::{NomzError, Result};
use crate::model::Restaurant;
use crate::router::Route;
use crate::store::RecordStore;
use minijinja::Environment;
use serde::Serialize;

pub mod templates;

use templates::{
    AREA_TEMPLATE, CARD_TEMPLATE, HOME_TEMPLATE, LOAD_ERROR_TEMPLATE, NOT_FOUND_TEMPLATE,
    RESTAURANT_TEMPLATE, SEARCH_TEMPLATE,
};

/// Fixed rotation of card themes. A card's theme is a pure function of its
/// position in the rendered list, never stored state.
pub const CARD_THEMES: &[&str] = &["sage", "terracotta", "ocean", "mustard"];

/// Shown when a record carries no photo URL.
const PLACEHOLDER_PHOTO: &str = "img/placeholder.svg";

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Serialize)]
struct Card {
    id: u32,
    name: String,
    cuisine: String,
    address: String,
    rating: String,
    review_count: u32,
    photo_url: String,
    theme: &'static str,
}

#[derive(Serialize)]
struct HomeData {
    cards: Vec<Card>,
}

#[derive(Serialize)]
struct AreaData {
    area_name: String,
    count_label: String,
    cards: Vec<Card>,
}

#[derive(Serialize)]
struct SearchData {
    query: String,
    count_label: String,
    cards: Vec<Card>,
}

#[derive(Serialize)]
struct HourRow {
    day: &'static str,
    span: String,
}

#[derive(Serialize)]
struct AmenityFlag {
    name: String,
    enabled: bool,
}

#[derive(Serialize)]
struct AmenityGroup {
    name: String,
    flags: Vec<AmenityFlag>,
}

#[derive(Serialize)]
struct DetailData {
    name: String,
    cuisine: String,
    address: String,
    photo_url: String,
    rating: String,
    review_label: String,
    hours: Vec<HourRow>,
    amenity_groups: Vec<AmenityGroup>,
    website: Option<String>,
    external_url: Option<String>,
}

#[derive(Serialize)]
struct NotFoundData {
    message: &'static str,
}

#[derive(Serialize)]
struct LoadErrorData {
    detail: String,
}

/// Template-based fragment renderer. Templates are registered once at
/// construction; rendering is infallible from the caller's point of view.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("card.html", CARD_TEMPLATE)?;
        env.add_template("home.html", HOME_TEMPLATE)?;
        env.add_template("area.html", AREA_TEMPLATE)?;
        env.add_template("restaurant.html", RESTAURANT_TEMPLATE)?;
        env.add_template("search.html", SEARCH_TEMPLATE)?;
        env.add_template("not_found.html", NOT_FOUND_TEMPLATE)?;
        env.add_template("load_error.html", LOAD_ERROR_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the fragment for a resolved route.
    pub fn render(&self, route: &Route, store: &RecordStore) -> String {
        match route {
            Route::Home => self.render_home(store),
            Route::Area(area_id) => self.render_area(area_id, store),
            Route::RestaurantDetail(id) => self.render_detail(*id, store),
            Route::Search(query) => self.render_search(query, store),
            Route::NotFound => self.render_not_found("That page doesn't exist."),
        }
    }

    /// The single static page the host shows when the initial load fails.
    pub fn render_load_failure(&self, err: &NomzError) -> String {
        self.template(
            "load_error.html",
            &LoadErrorData {
                detail: err.to_string(),
            },
        )
    }

    fn render_home(&self, store: &RecordStore) -> String {
        let cards = cards_for(store.all().iter());
        self.template("home.html", &HomeData { cards })
    }

    fn render_area(&self, area_id: &str, store: &RecordStore) -> String {
        let summary = match store.area(area_id) {
            Ok(summary) => summary,
            Err(_) => return self.render_not_found("We couldn't find that area."),
        };
        // area() succeeded, so the listing cannot fail
        let members = store.list_by_area(area_id).into_iter().flatten();
        let cards = cards_for(members);
        self.template(
            "area.html",
            &AreaData {
                area_name: summary.name,
                count_label: count_label(summary.member_count),
                cards,
            },
        )
    }

    fn render_detail(&self, id: u32, store: &RecordStore) -> String {
        let record = match store.get_by_id(id) {
            Ok(record) => record,
            Err(_) => return self.render_not_found("We couldn't find that restaurant."),
        };
        self.template("restaurant.html", &detail_data(record))
    }

    fn render_search(&self, query: &str, store: &RecordStore) -> String {
        let results = store.search(query);
        let cards = cards_for(results.into_iter());
        self.template(
            "search.html",
            &SearchData {
                query: query.to_string(),
                count_label: count_label(cards.len()),
                cards,
            },
        )
    }

    fn render_not_found(&self, message: &'static str) -> String {
        self.template("not_found.html", &NotFoundData { message })
    }

    fn template<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|t| t.render(data))
            .unwrap_or_else(|e| format!("<!-- render error: {} -->", e))
    }
}

fn cards_for<'a, I: Iterator<Item = &'a Restaurant>>(records: I) -> Vec<Card> {
    records
        .enumerate()
        .map(|(position, r)| Card {
            id: r.id,
            name: r.name.clone(),
            cuisine: r.cuisine.clone(),
            address: r.address.clone(),
            rating: format!("{:.1}", r.rating),
            review_count: r.review_count,
            photo_url: photo_or_placeholder(&r.photo_url),
            theme: CARD_THEMES[position % CARD_THEMES.len()],
        })
        .collect()
}

fn detail_data(record: &Restaurant) -> DetailData {
    let hours = record
        .working_hours
        .as_ref()
        .map(|map| {
            WEEKDAYS
                .iter()
                .map(|&day| HourRow {
                    day,
                    span: map.get(day).cloned().unwrap_or_else(|| "—".to_string()),
                })
                .collect()
        })
        .unwrap_or_default();

    let amenity_groups = record
        .amenities
        .as_ref()
        .map(|groups| {
            groups
                .iter()
                .map(|(name, flags)| AmenityGroup {
                    name: name.clone(),
                    flags: flags
                        .iter()
                        .map(|(flag, &enabled)| AmenityFlag {
                            name: flag.clone(),
                            enabled,
                        })
                        .collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    DetailData {
        name: record.name.clone(),
        cuisine: record.cuisine.clone(),
        address: record.address.clone(),
        photo_url: photo_or_placeholder(&record.photo_url),
        rating: format!("{:.1}", record.rating),
        review_label: review_label(record.review_count),
        hours,
        amenity_groups,
        website: record.website.clone(),
        external_url: record.external_url.clone(),
    }
}

fn photo_or_placeholder(url: &str) -> String {
    if url.is_empty() {
        PLACEHOLDER_PHOTO.to_string()
    } else {
        url.to_string()
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 restaurant".to_string()
    } else {
        format!("{} restaurants", count)
    }
}

fn review_label(count: u32) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", count)
    }
}
