//! Completeness check of an exam report against the mandatory item catalog.

pub mod catalog;
pub mod checklist;
pub mod validate;

pub use catalog::{catalog, CatalogItem, Category, CATALOG};
pub use checklist::ChecklistRecord;
pub use validate::{validate, ComplianceResult, ComplianceSummary, MissingItem};
