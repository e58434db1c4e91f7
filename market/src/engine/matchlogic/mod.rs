//! Match Logic Module
//!
//! Price-time priority matching for a single equity's book.

pub mod matcher;

pub use matcher::Matcher;
