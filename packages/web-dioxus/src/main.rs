//! Job Board - Dioxus Fullstack Web Application
//!
//! A fullstack SSR frontend over the remote job API: browse and filter
//! listings, post new openings, keep an unsubmitted draft locally.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! API_URL=http://localhost:8080 dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod config;
mod pages;
mod routes;
mod storage;

use dioxus::prelude::*;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Validate configuration before serving anything. A missing API base
    // URL is a startup failure, not a submit-time surprise.
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        if let Err(err) = config::init_from_env() {
            tracing::error!("configuration error: {err}");
            std::process::exit(1);
        }
    }

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
