//! Output generation for crawled articles.
//!
//! # Submodules
//!
//! - [`json`]: Writes the article list to `articles.json` under the results directory

pub mod json;
