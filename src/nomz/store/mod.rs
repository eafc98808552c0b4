//! # The Record Store
//!
//! [`RecordStore`] owns the canonical restaurant list plus every index
//! derived from it. It is built exactly once, from a raw JSON array, and
//! is read-only for the rest of the session.
//!
//! ## Load Semantics
//!
//! `load` is tolerant of bad records but strict about the container:
//! - A non-array input is a [`NomzError::DataLoad`]—there is no partial app.
//! - A record missing a required field (name, address, postal code) is
//!   dropped and a warning recorded in the [`LoadReport`]. The rest of the
//!   collection still loads.
//! - Records without an id get one assigned sequentially, starting after
//!   the highest explicit id in the input (from 1 when there is none).
//!   A duplicate explicit id drops the later record; id uniqueness is an
//!   invariant every other index relies on.
//! - Missing rating/review count default to 0; rating is clamped to [0, 5].
//!
//! Collection order is input order and is preserved by every listing
//! operation, which keeps rendering deterministic.

use crate::area::{area_defs, classify, AreaDef};
use crate::error::{NomzError, Result};
use crate::model::{RawRestaurant, Restaurant};
use serde_json::Value;
use std::collections::HashMap;

pub mod search;

use search::SearchIndex;

/// Outcome of a load: how many records made it in, how many were dropped,
/// and a human-readable warning per dropped record.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub dropped: usize,
    pub warnings: Vec<String>,
}

/// Area metadata plus the derived member count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSummary {
    pub id: String,
    pub name: String,
    pub member_count: usize,
}

/// Collection-wide statistics.
#[derive(Debug, Clone)]
pub struct Stats {
    pub total: usize,
    /// (area id, member count) for every area group, in priority order.
    pub per_area: Vec<(String, usize)>,
    /// Arithmetic mean of ratings; 0.0 for an empty collection.
    pub average_rating: f64,
}

/// One area group with its member ids, kept in collection order.
#[derive(Debug)]
struct Area {
    def: AreaDef,
    members: Vec<u32>,
}

/// The canonical record collection and its derived indexes.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Restaurant>,
    by_id: HashMap<u32, usize>,
    areas: Vec<Area>,
    index: SearchIndex,
}

impl RecordStore {
    /// Builds a store from a raw JSON value that must be an array of
    /// loosely-shaped restaurant objects.
    pub fn load(raw: Value) -> Result<(Self, LoadReport)> {
        let items = match raw {
            Value::Array(items) => items,
            other => {
                return Err(NomzError::DataLoad(format!(
                    "expected a JSON array of restaurants, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut report = LoadReport::default();
        let mut raws: Vec<RawRestaurant> = Vec::with_capacity(items.len());

        for (position, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<RawRestaurant>(item) {
                Ok(raw) => match validate_required(&raw) {
                    Ok(()) => raws.push(raw),
                    Err(field) => {
                        report.dropped += 1;
                        report.warnings.push(format!(
                            "Skipped record {}: missing required field '{}'",
                            position + 1,
                            field
                        ));
                    }
                },
                Err(e) => {
                    report.dropped += 1;
                    report
                        .warnings
                        .push(format!("Skipped record {}: {}", position + 1, e));
                }
            }
        }

        // Ids for id-less records start after the highest explicit id
        let mut next_id = raws
            .iter()
            .filter_map(|r| r.id)
            .max()
            .map_or(1, |max| max + 1);

        let mut records = Vec::with_capacity(raws.len());
        let mut by_id = HashMap::with_capacity(raws.len());

        for raw in raws {
            let id = match raw.id {
                Some(id) => id,
                None => {
                    let id = next_id;
                    next_id += 1;
                    id
                }
            };

            if by_id.contains_key(&id) {
                report.dropped += 1;
                report.warnings.push(format!(
                    "Skipped record '{}': duplicate id {}",
                    raw.name.as_deref().unwrap_or("?"),
                    id
                ));
                continue;
            }

            let record = Restaurant {
                id,
                name: raw.name.unwrap_or_default(),
                cuisine: raw.cuisine.unwrap_or_default(),
                address: raw.address.unwrap_or_default(),
                postal_code: raw.postal_code.unwrap_or_default(),
                rating: raw.rating.unwrap_or(0.0).clamp(0.0, 5.0),
                review_count: raw.review_count.unwrap_or(0),
                photo_url: raw.photo_url.unwrap_or_default(),
                working_hours: raw.working_hours,
                amenities: raw.amenities,
                external_url: raw.external_url,
                website: raw.website,
            };

            by_id.insert(id, records.len());
            records.push(record);
        }

        report.loaded = records.len();

        let mut areas: Vec<Area> = area_defs()
            .iter()
            .map(|def| Area {
                def: *def,
                members: Vec::new(),
            })
            .collect();

        for record in &records {
            let area_id = classify(&record.postal_code, area_defs());
            if let Some(area) = areas.iter_mut().find(|a| a.def.id == area_id) {
                area.members.push(record.id);
            }
        }

        let index = SearchIndex::build(&records);

        Ok((
            Self {
                records,
                by_id,
                areas,
                index,
            },
            report,
        ))
    }

    /// All records in collection order.
    pub fn all(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn get_by_id(&self, id: u32) -> Result<&Restaurant> {
        self.by_id
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or(NomzError::RestaurantNotFound(id))
    }

    pub fn area(&self, area_id: &str) -> Result<AreaSummary> {
        self.areas
            .iter()
            .find(|a| a.def.id == area_id)
            .map(|a| AreaSummary {
                id: a.def.id.to_string(),
                name: a.def.name.to_string(),
                member_count: a.members.len(),
            })
            .ok_or_else(|| NomzError::AreaNotFound(area_id.to_string()))
    }

    /// Lazy, restartable iteration over an area's members, in collection
    /// order. Call again to restart.
    pub fn list_by_area(&self, area_id: &str) -> Result<impl Iterator<Item = &Restaurant>> {
        let area = self
            .areas
            .iter()
            .find(|a| a.def.id == area_id)
            .ok_or_else(|| NomzError::AreaNotFound(area_id.to_string()))?;
        Ok(area
            .members
            .iter()
            .filter_map(move |id| self.by_id.get(id).map(|&pos| &self.records[pos])))
    }

    /// All area summaries in priority order, fallback last.
    pub fn areas(&self) -> impl Iterator<Item = AreaSummary> + '_ {
        self.areas.iter().map(|a| AreaSummary {
            id: a.def.id.to_string(),
            name: a.def.name.to_string(),
            member_count: a.members.len(),
        })
    }

    /// Case-insensitive substring search over name, cuisine, and address.
    /// Blank queries return an empty result by contract.
    pub fn search(&self, query: &str) -> Vec<&Restaurant> {
        self.index
            .query(query)
            .into_iter()
            .filter_map(|id| self.by_id.get(&id).map(|&pos| &self.records[pos]))
            .collect()
    }

    pub fn stats(&self) -> Stats {
        let total = self.records.len();
        let per_area = self
            .areas
            .iter()
            .map(|a| (a.def.id.to_string(), a.members.len()))
            .collect();
        let average_rating = if total == 0 {
            0.0
        } else {
            self.records.iter().map(|r| r.rating).sum::<f64>() / total as f64
        };
        Stats {
            total,
            per_area,
            average_rating,
        }
    }
}

fn validate_required(raw: &RawRestaurant) -> std::result::Result<(), &'static str> {
    if raw.name.as_deref().map_or(true, str::is_empty) {
        return Err("name");
    }
    if raw.address.as_deref().map_or(true, str::is_empty) {
        return Err("address");
    }
    if raw.postal_code.as_deref().map_or(true, str::is_empty) {
        return Err("postal_code");
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
