//! # putusan
//!
//! Pulls the case number, court, evidence list and operative verdict out of
//! plain-text Indonesian criminal judgments and writes one summary row per
//! judgment.
//!
//! The interesting part lives in [`extraction`] (ordered candidate rules per
//! field) and [`cleaning`] (page-marker and boilerplate removal). The rest is
//! plumbing: [`document`] loads files, [`batch`] drives a directory, and
//! [`output`] writes xlsx, csv or json.

pub mod batch;
pub mod cleaning;
pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod output;

pub use error::{PutusanError, Result};
