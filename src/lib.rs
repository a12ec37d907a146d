// Library exports for skiclub-mock
// The simulator is usable in-process; the binary serves it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod routes;
pub mod state;
pub mod store;
