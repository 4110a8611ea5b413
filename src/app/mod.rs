// ClientSearch - app/mod.rs
//
// Application layer: runs user queries and renders their results.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod query;
pub mod report;
