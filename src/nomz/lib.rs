//! # Nomz Architecture
//!
//! Nomz is a **UI-agnostic restaurant directory engine**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! The engine loads a flat JSON collection of restaurants once, derives
//! read-only indexes from it (area grouping by postal-code prefix, an
//! id lookup table, a substring search index), and serves navigable views:
//! URL fragments are resolved by a router into typed routes, and each route
//! is rendered into a deterministic HTML fragment string by a template
//! engine. The host (a CLI here, a web shell elsewhere) only mounts the
//! returned strings.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App Layer (app.rs)                                         │
//! │  - Boots the store once, owns router + renderer             │
//! │  - Single navigation entry point for all callers            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (store/, area.rs, router.rs, render/)         │
//! │  - Pure logic over immutable data                           │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Immutable After Load
//!
//! [`store::RecordStore`] is built exactly once per session, immediately
//! after the raw collection is parsed, and is never mutated afterwards.
//! Records that fail validation are dropped with a recorded warning rather
//! than aborting the load. The only mutable state in the engine is the
//! router's "current resolved view" cell, which is replaced wholesale on
//! each navigation event.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `app.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`, `String` fragments)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! This means the same core can back a CLI, a static pre-renderer, or a
//! wasm front-end shell.
//!
//! ## Module Overview
//!
//! - [`app`]: The app controller—boot, navigate, current view
//! - [`area`]: Pure postal-code → area-group classification
//! - [`store`]: The record store and its derived indexes
//! - [`router`]: Fragment parsing and the navigation state machine
//! - [`render`]: Template-based HTML fragment rendering
//! - [`model`]: Core data types (`Restaurant`, `RawRestaurant`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod app;
pub mod area;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod router;
pub mod store;
