//! Application pages

mod jobs;

pub use jobs::*;
