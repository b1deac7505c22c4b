//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. The `number`
//! query parameter is carried as a raw string so the handler controls parsing
//! (and can echo invalid input back verbatim).

pub mod classify;
