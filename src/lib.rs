//! Core library for the catalog-tools command line application.
//!
//! The library exposes the deduplication pipeline that powers the
//! command-line interface as well as the integration tests. Responsibilities
//! are kept narrow: workbook adapters live under [`catalog::tools::io`], the
//! row representation inside [`catalog::tools::model`], identifier cleanup in
//! [`catalog::tools::normalize`], row selection and ordering in
//! [`catalog::tools::select`], and the end-to-end run under
//! [`catalog::tools::dedupe`].

pub mod catalog;

pub use catalog::tools::{Result, ToolError, config, dedupe, error, io, model, normalize, select};
