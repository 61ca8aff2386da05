//! Dates, times and slugs in news wire style.
//!
//! This is a facade crate that re-exports functionality from the
//! wirestyle workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use wirestyle_lib::prelude::*;
//!
//! let today = CalendarDate::new(2023, 10, 25);
//! let story = CalendarDate::new(2023, 10, 24);
//!
//! let dateline = format!(
//!     "{} ({})",
//!     dayofweek_relative_to(story, today)?.unwrap_or_default(),
//!     date_relative_to(story, today)?,
//! );
//! assert_eq!(dateline, "Tuesday (Oct. 24)");
//!
//! let slug = Slug::parse_packaged("FERRARI-RESULTS/", "PROSPECTUS")?;
//! assert_eq!(slug.to_string(), "FERRARI-RESULTS/PROSPECTUS");
//! # Ok::<(), StyleError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/wirestyle/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use wirestyle_types::*;

// Re-export date and time formatting
#[cfg(feature = "dates")]
pub use wirestyle_dates::{
    TimeZoneDisplay, date, date_relative_to, date_with_year, dayofweek, dayofweek_relative_to,
    dayofweek_tabular, month_abbreviation, time, time_gmt, time_in_zone, weekday,
};

// Re-export slug validation
#[cfg(feature = "slugs")]
pub use wirestyle_slugs::{
    Slug, SlugGrammar, SlugLimits, SlugValidator, check_packaging_slug, check_slug,
    check_wild_slug, validate_packaging_slug, validate_slug, validate_wild_slug,
};

/// Prelude module for convenient imports.
///
/// ```
/// use wirestyle_lib::prelude::*;
/// ```
pub mod prelude {
    pub use wirestyle_types::{
        CalendarDate, ClockTime, Result, Ric, SlugError, SlugRule, StyleError, Weekday,
    };

    #[cfg(feature = "dates")]
    pub use wirestyle_dates::{
        TimeZoneDisplay, date, date_relative_to, date_with_year, dayofweek,
        dayofweek_relative_to, dayofweek_tabular, time, time_gmt, time_in_zone,
    };

    #[cfg(feature = "slugs")]
    pub use wirestyle_slugs::{
        Slug, check_packaging_slug, check_slug, check_wild_slug, validate_packaging_slug,
        validate_slug, validate_wild_slug,
    };
}
