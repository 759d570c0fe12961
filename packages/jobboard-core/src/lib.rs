//! Headless domain logic for the job board.
//!
//! Everything in this crate is synchronous and UI-free: the listing data
//! model, the client-side listing filter, the single-slot draft store, and
//! the form validation/normalization step. The web frontend composes these
//! behind Dioxus components.

pub mod draft;
pub mod filter;
pub mod form;
pub mod types;

pub use draft::{DraftStore, MemoryStore, StringStore, DRAFT_KEY};
pub use filter::{filter_jobs, FilterSpec, SALARY_CEILING, SALARY_FLOOR, SALARY_STEP};
pub use form::{normalize, FormField, ValidationError};
pub use types::{Job, JobDraft, JobPosting, JobType, WorkMode};
