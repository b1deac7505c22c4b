//! Domain layer containing the numeric classification logic.
//!
//! Everything in this module is a pure function of its integer input: no I/O,
//! no shared state, no clocks. The HTTP layer composes these functions into a
//! response object; nothing here knows about HTTP.
//!
//! # Modules
//!
//! - [`classification`] - Primality, perfection, Armstrong status, digit sum, parity

pub mod classification;

pub use classification::{Parity, digit_sum, is_armstrong, is_perfect, is_prime};
