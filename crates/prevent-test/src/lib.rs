//! Shared test fixtures for PREVENT crates.
//!
//! This crate provides patient records and coefficient tables for testing.
//! It depends only on `prevent-core` so every other crate can use it.
//!
//! - [`reference`] - Patients with published reference results
//! - [`synthetic`] - Hand-built coefficient tables with predictable output
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! prevent-test = { workspace = true }
//! ```

pub mod reference;
pub mod synthetic;

pub use reference::{female_reference, male_reference, rows, with_field, RISK_TOLERANCE};
pub use synthetic::{constant_table, intercept_only, survival_table};
