// craps-icons - util/constants.rs
//
// Single source of truth for all named constants, geometry ratios, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Display name of the application whose icons are generated.
pub const APP_NAME: &str = "Casey Craps";

/// Application identifier used for config directories.
pub const APP_ID: &str = "craps-icons";

/// Current tool version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Palette (RGB)
// =============================================================================

/// Felt-table green used for the background and border fill (#0d5c0d).
pub const FELT_GREEN: [u8; 3] = [13, 92, 13];

/// Die body colour.
pub const DIE_WHITE: [u8; 3] = [255, 255, 255];

/// Pip colour. Not pure black, matching the in-game dice.
pub const PIP_BLACK: [u8; 3] = [20, 20, 20];

/// Icon border outline colour (#c9a227).
pub const BORDER_GOLD: [u8; 3] = [201, 162, 39];

/// Thin outline around each die body.
pub const DIE_OUTLINE_GREY: [u8; 3] = [200, 200, 200];

// =============================================================================
// Die geometry (ratios)
// =============================================================================

/// Die edge length as a fraction of the whole icon's edge.
pub const DIE_SIZE_RATIO: f32 = 0.35;

/// Die corner radius as a fraction of the die edge.
pub const DIE_CORNER_RATIO: f32 = 0.15;

/// Pip radius as a fraction of the die edge.
pub const PIP_RADIUS_RATIO: f32 = 0.08;

/// Distance from die centre to an off-centre pip, as a fraction of the die edge.
pub const PIP_OFFSET_RATIO: f32 = 0.25;

/// Die outline stroke width in pixels. Deliberately not scaled with the icon.
pub const DIE_OUTLINE_WIDTH: u32 = 2;

// =============================================================================
// Icon geometry (ratios)
// =============================================================================

/// Border inset on every side, as a fraction of the icon edge.
pub const BORDER_MARGIN_RATIO: f32 = 0.05;

/// Border corner radius, as a fraction of the icon edge.
pub const BORDER_CORNER_RATIO: f32 = 0.18;

/// Border stroke width, as a fraction of the icon edge (floored).
pub const BORDER_WIDTH_RATIO: f32 = 0.02;

/// Minimum border stroke width in pixels.
pub const MIN_BORDER_WIDTH: u32 = 2;

/// Horizontal distance of each die from the icon centre, as a fraction of the icon edge.
pub const DIE_OFFSET_RATIO: f32 = 0.18;

/// Vertical stagger of the dice relative to their horizontal offset.
pub const DIE_STAGGER_RATIO: f32 = 0.3;

/// Face shown by the upper-left die.
pub const LEFT_DIE_FACE: u8 = 4;

/// Face shown by the lower-right die.
pub const RIGHT_DIE_FACE: u8 = 3;

// =============================================================================
// Output
// =============================================================================

/// Default icon set directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Casey Craps/Casey Craps/Assets.xcassets/AppIcon.appiconset";

/// Asset catalog manifest file name.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

/// Platform idiom written for every manifest entry.
pub const MANIFEST_IDIOM: &str = "mac";

/// Default manifest author.
pub const DEFAULT_MANIFEST_AUTHOR: &str = "xcode";

/// Manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// Upper bound on a configured manifest author string.
pub const MAX_AUTHOR_LEN: usize = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
