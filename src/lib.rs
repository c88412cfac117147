// craps-icons - lib.rs
//
// Library entry point, exposing the renderer, icon table, manifest model, and
// generation driver for integration testing and programmatic use.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
