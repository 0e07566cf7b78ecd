// a2ui CLI
//
// Two jobs, both thin wrappers over a2ui-engine:
// - lint: replay a JSONL message stream the way a renderer would and run the
//   structural validator over every component snapshot in it
// - demo: print sample surfaces as message streams, for wiring up renderers
//
// stdout carries only protocol output or the lint report; logs go to stderr.

mod args;
mod commands;
pub mod config;
pub mod demos;
mod handlers;
mod logging;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
