// NOTE: Layer boundaries
//
// The engine never prints and the views never filter: handlers pull display
// models out of the view model and hand them to a view (console) or the TUI.
// `browse` is the command a bare `bookdeck` falls through to.

mod args;
pub mod catalog;
mod commands;
pub mod config;
mod display_model;
mod handlers;
mod ui;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
