//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::JobList;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    JobList {},
}
