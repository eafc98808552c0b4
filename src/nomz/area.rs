//! Postal-code → area-group classification.
//!
//! Classification is a pure function over a fixed, ordered list of group
//! definitions so it can be unit-tested without a store. Order matters:
//! `central-london` (EC, WC) must be checked before `east-london` (E),
//! otherwise every EC code would be swallowed by the E prefix. The
//! fallback group carries no prefixes and always sits last.

/// One named area group: a slug id, a display name, and the postal-code
/// prefixes that select it.
#[derive(Debug, Clone, Copy)]
pub struct AreaDef {
    pub id: &'static str,
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
}

/// The group that captures every postal code no explicit group matches.
pub const FALLBACK_AREA_ID: &str = "greater-london";

const AREA_DEFS: &[AreaDef] = &[
    AreaDef {
        id: "central-london",
        name: "Central London",
        prefixes: &["EC", "WC"],
    },
    AreaDef {
        id: "north-london",
        name: "North London",
        prefixes: &["N", "NW"],
    },
    AreaDef {
        id: "east-london",
        name: "East London",
        prefixes: &["E"],
    },
    AreaDef {
        id: "south-london",
        name: "South London",
        prefixes: &["SE", "SW"],
    },
    AreaDef {
        id: "west-london",
        name: "West London",
        prefixes: &["W"],
    },
    AreaDef {
        id: FALLBACK_AREA_ID,
        name: "Greater London",
        prefixes: &[],
    },
];

/// The fixed group definitions in priority order, fallback last.
pub fn area_defs() -> &'static [AreaDef] {
    AREA_DEFS
}

/// Maps a postal code to the id of the first matching group.
///
/// Total: unmatched codes map to the fallback group id, never an error.
/// Matching is case-insensitive and ignores internal spacing, so
/// `" n4 1aa "` classifies the same as `"N41AA"`.
pub fn classify(postal_code: &str, defs: &[AreaDef]) -> &'static str {
    let normalized: String = postal_code
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    for def in defs {
        if def
            .prefixes
            .iter()
            .any(|prefix| normalized.starts_with(prefix))
        {
            return def.id;
        }
    }
    FALLBACK_AREA_ID
}
