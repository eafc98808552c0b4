use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekday → opening span map (e.g. "Monday" → "11:00 am - 10:30 pm").
pub type WorkingHours = BTreeMap<String, String>;

/// Amenity flags grouped by category (e.g. "Payments" → "Accepts Credit Cards" → true).
pub type Amenities = BTreeMap<String, BTreeMap<String, bool>>;

/// A restaurant as it appears in the source dataset: loosely validated,
/// every field optional. [`crate::store::RecordStore::load`] decides which
/// of these become canonical [`Restaurant`] records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRestaurant {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub photo_url: Option<String>,
    pub working_hours: Option<WorkingHours>,
    pub amenities: Option<Amenities>,
    pub external_url: Option<String>,
    pub website: Option<String>,
}

/// A canonical directory record. Immutable once the store is loaded.
///
/// `rating` and `review_count` are always present (0 when the source omits
/// them); the trailing `Option` fields stay optional all the way to the
/// renderer, which substitutes placeholders.
#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub postal_code: String,
    pub rating: f64,
    pub review_count: u32,
    pub photo_url: String,
    pub working_hours: Option<WorkingHours>,
    pub amenities: Option<Amenities>,
    pub external_url: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_restaurant_tolerates_sparse_input() {
        let raw: RawRestaurant = serde_json::from_str(r#"{"name": "Dishoom"}"#).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Dishoom"));
        assert!(raw.id.is_none());
        assert!(raw.rating.is_none());
        assert!(raw.working_hours.is_none());
    }

    #[test]
    fn raw_restaurant_parses_nested_maps() {
        let raw: RawRestaurant = serde_json::from_str(
            r#"{
                "name": "Padella",
                "working_hours": {"Monday": "12:00 - 22:00"},
                "amenities": {"Payments": {"Accepts Credit Cards": true}}
            }"#,
        )
        .unwrap();
        let hours = raw.working_hours.unwrap();
        assert_eq!(hours.get("Monday").unwrap(), "12:00 - 22:00");
        let amenities = raw.amenities.unwrap();
        assert!(amenities["Payments"]["Accepts Credit Cards"]);
    }
}
