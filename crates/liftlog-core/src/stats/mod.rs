//! Derived progress statistics.
//!
//! Both computations are pure: they read the canonical collections and
//! return fresh values, so callers may recompute them on every change.

mod category_progress;
mod weight_trend;

pub use category_progress::{
    aggregate, round_to_tenth, CategoryScore, ProgressVector, CATEGORY_INCREMENT, FULL_MARK,
    MAX_CATEGORY_SCORE,
};

pub use weight_trend::{segment, weight_changes, Trend, TrendPoint};
