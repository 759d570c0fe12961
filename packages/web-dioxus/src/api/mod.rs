//! REST client for the remote job API

mod client;

pub use client::*;
