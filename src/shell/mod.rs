// Composition root for the loyalty history service.
//
// Responsibilities
// - Read configuration from defaults, `config.toml` and the environment.
// - Build the record store once and hand it to every inbound adapter.
// - Compose the HTTP router and the GraphQL schema.

pub mod config;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
