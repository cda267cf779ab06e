//! Marquee: browse The Movie Database's popular movies from a terminal.
//!
//! ```text
//! ui (presenter, screens) ──mount──→ fetch (coordinator) ──→ tmdb (client)
//! ```

pub mod config;
pub mod fetch;
pub mod headless;
pub mod logging;
pub mod tmdb;
pub mod ui;
