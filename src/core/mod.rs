// ClientSearch - core/mod.rs
//
// Core business logic layer: record model, store, queries, export.
// Must NOT depend on: app or platform.

pub mod export;
pub mod model;
pub mod search;
pub mod store;
