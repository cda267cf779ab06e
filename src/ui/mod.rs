//! Terminal user interface.
//!
//! Screens: `menu` → `movies` → `details/{id}`, plus a static `about`.

pub mod app;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod menu;
pub mod mvi;
pub mod nav;
pub mod presenter;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
