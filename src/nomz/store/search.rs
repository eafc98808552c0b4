use crate::model::Restaurant;

/// Substring search index over name, cuisine, and address.
///
/// Built once from the canonical record list and never maintained
/// incrementally—the store is immutable after load, so neither is this.
/// Entries keep collection order, which makes query results come back in
/// collection order for free.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<(u32, String)>,
}

impl SearchIndex {
    pub fn build(records: &[Restaurant]) -> Self {
        let entries = records
            .iter()
            .map(|r| {
                let haystack =
                    format!("{} {} {}", r.name, r.cuisine, r.address).to_lowercase();
                (r.id, haystack)
            })
            .collect();
        Self { entries }
    }

    /// Returns ids of matching records, in collection order.
    ///
    /// An empty or whitespace-only term matches nothing. That is the
    /// documented contract of the search surface, not an oversight: a
    /// blank query box shows an empty result list, not the full directory.
    pub fn query(&self, term: &str) -> Vec<u32> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|(_, haystack)| haystack.contains(&needle))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
