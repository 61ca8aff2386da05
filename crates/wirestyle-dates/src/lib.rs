//! Wire style date, time and weekday formatting.
//!
//! This crate renders calendar values the way wire copy writes them:
//!
//! - [`date`] / [`date_relative_to`] - `Sept. 1` or `Sept. 1, 2021`
//! - [`time`] - `4:05 p.m.`, `noon`, `midnight`
//! - [`time_in_zone`] - `12:30 p.m. SAST` or `12:30 p.m. (1030 GMT)`
//! - [`dayofweek`] / [`dayofweek_relative_to`] - `Tuesday`, omitted for today
//!
//! Every function is pure apart from the variants that default "today"
//! to the current UTC date.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/wirestyle/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod time;
mod weekday;

pub use date::{date, date_relative_to, date_with_year, month_abbreviation};
pub use time::{TimeZoneDisplay, time, time_gmt, time_in_zone};
pub use weekday::{dayofweek, dayofweek_relative_to, dayofweek_tabular, weekday};
