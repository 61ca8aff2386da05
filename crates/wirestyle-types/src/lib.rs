//! Core types for the wirestyle newsroom style helpers.
//!
//! This crate provides the value types shared by the formatters:
//!
//! - [`CalendarDate`] - A caller-supplied calendar date
//! - [`ClockTime`] - A wall-clock time with minute precision
//! - [`Weekday`] - ISO day of the week with copy and table labels
//! - [`Ric`] - Instrument code with exchange suffix
//! - [`StyleError`] / [`SlugError`] - Error types

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/wirestyle/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calendar;
mod error;
mod ric;
mod weekday;

pub use calendar::{CalendarDate, ClockTime};
pub use error::{Component, Result, SlugError, SlugRule, StyleError};
pub use ric::Ric;
pub use weekday::{Weekday, WeekdayParseError};
