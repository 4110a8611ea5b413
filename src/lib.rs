// ClientSearch - lib.rs
//
// Library entry point. The `clientsearch` binary is a thin front end over
// these modules; everything it does is reachable from here for testing
// and programmatic use.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
