// Composition root for the revenue tracker.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory event store and wire it into the use case handlers.
// - Expose the HTTP router.
//
// The binary entry point lives next to this module in main.rs.

pub mod config;
pub mod http;
pub mod state;
