// craps-icons - app/mod.rs
//
// Application layer: orchestration of a generation run.
// Dependencies: core, platform.

pub mod generate;
