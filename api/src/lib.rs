// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: Postgres pool, schema and store adapters
// - presentation: HTTP handlers, error envelope and routing
// - application: store port, use cases and error taxonomy
// - domain: the Account entity and its JSON codec

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
