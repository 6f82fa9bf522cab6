//! Risk grading for occupational health exams.
//!
//! [`classify`] turns a [`MeasurementRecord`](ohc_types::MeasurementRecord)
//! into per-metric grades and [`aggregate`] reduces them to the overall
//! grade. [`assess`] does both.

pub mod aggregate;
pub mod classifier;
pub mod rules;
pub mod table;

pub use aggregate::{aggregate, assess, overall_level, OverallAssessment};
pub use classifier::{classify, Classification};
