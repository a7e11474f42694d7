//! Interactive list view
//!
//! # Architecture
//!
//! - `app` - terminal setup and the event loop around a core `Session`
//! - `screen` - composes the components into one frame
//! - `components/` - header, tabs, table, panels and bars

mod app;
mod components;
mod formatting;
mod icons;
mod input;
mod screen;
mod theme;

pub use app::run;
