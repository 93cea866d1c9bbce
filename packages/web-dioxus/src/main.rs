//! HealthBooker - Dioxus Fullstack Web Application
//!
//! This is a fullstack SSR web application built with Dioxus.
//! It connects to the HealthBooker REST API for data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod routes;

use dioxus::prelude::*;

fn main() {
    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
