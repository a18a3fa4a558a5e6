//! Data shapes shared between the dashboard and the external data provider.
//!
//! Field names are camelCase on the wire, enumerations are SCREAMING_SNAKE_CASE.

pub mod dashboards;
pub mod domain;
pub mod enums;
