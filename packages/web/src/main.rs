//! GiyaPay - Dioxus Fullstack Marketing Site
//!
//! Server-rendered landing page and Contentful-backed blog, localized
//! under `/:locale`, with scroll reveal animations driven by the
//! `reveal` crate.
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
//!
//! The blog reads `CONTENTFUL_SPACE_ID` and `CONTENTFUL_ACCESS_TOKEN`
//! from the environment or a `.env` file.

#![allow(non_snake_case)]

mod app;
#[cfg(feature = "web")]
mod browser;
mod components;
#[cfg(any(feature = "server", test))]
mod config;
#[cfg(any(feature = "server", test))]
mod contentful;
mod locale;
mod nav;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    #[cfg(feature = "server")]
    init_tracing();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,giyapay_web=debug,reveal=debug"));

    // Dioxus may already have installed a subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
