// craps-icons - platform/mod.rs
//
// Platform abstraction layer: config directories and filesystem output.
// Dependencies: core (manifest model), directories, image, toml.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
