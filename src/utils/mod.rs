//! Utility functions for input handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`number_parser`] - Lenient integer parsing for the query parameter

pub mod number_parser;
