//! Wire style slug grammars and slug records.
//!
//! This crate validates the identifiers used to tag wire content:
//!
//! - [`validate_slug`] / [`check_slug`] - general lowercase slugs
//! - [`validate_packaging_slug`] / [`check_packaging_slug`] - `FERRARI-IPO/`
//! - [`validate_wild_slug`] / [`check_wild_slug`] - `PROSPECTUS`
//! - [`Slug`] - A general or packaged slug record
//!
//! The `validate_*` functions never fail; the `check_*` functions report
//! which rule was broken and where.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/wirestyle/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod grammar;
mod record;

pub use grammar::{
    SlugGrammar, SlugLimits, SlugValidator, check_packaging_slug, check_slug, check_wild_slug,
    validate_packaging_slug, validate_slug, validate_wild_slug,
};
pub use record::Slug;
pub use wirestyle_types::{SlugError, SlugRule};
