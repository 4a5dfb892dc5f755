//! # civica-core
//!
//! Domain layer for civic-issue reporting.
//!
//! This crate provides:
//! - `Issue` and the closed vocabularies around it (`IssueType`, `Status`,
//!   `Priority`) plus `NewIssueInput` validation
//! - the lifecycle policy: which status transitions are legal and how
//!   `resolved_at` is derived
//! - pure filter/search/order semantics applied on top of any store
//! - collaborator seams (image analysis, geolocation, image upload)
//!
//! It intentionally owns no collection. Storage and persistence live in
//! `civica-store`; presentation lives with the surrounding product.

pub mod filter;
pub mod issue;
pub mod lifecycle;
pub mod provider;

pub use filter::{IssueFilter, filter_issues, newest_first};
pub use issue::{
    DESCRIPTION_MAX_CHARS, Issue, IssueType, Location, NewIssueInput, Priority, Status,
    TITLE_MAX_CHARS, ValidationError,
};
pub use lifecycle::{InvalidTransition, TransitionPolicy, apply_status};
pub use provider::{
    AnalysisError, Coordinate, ImageAnalyzer, ImageUploader, LocationError, LocationProvider,
    Suggestion, UploadError,
};
