// craps-icons - core/mod.rs
//
// Core rendering logic: geometry, rasterisation, icon table, manifest model.
// Dependencies: image (canvas only), serde.
// Must NOT depend on: platform, app, or touch the filesystem directly.

pub mod die;
pub mod icon;
pub mod iconset;
pub mod manifest;
pub mod raster;
