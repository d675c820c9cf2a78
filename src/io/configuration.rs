//! Pipeline constants and runtime configuration defaults

// Default values for configurable parameters
/// Largest part edge as a percentage of the world's smaller side
pub const DEFAULT_PART_SIZE_PERCENT: u32 = 20;

/// Default weight of the bounding-box grading criterion
pub const DEFAULT_BOUNDING_BOX_WEIGHT: f64 = 0.6;

/// Default weight of the part-count grading criterion
pub const DEFAULT_NUM_OF_PARTS_WEIGHT: f64 = 0.4;

// Packer probing
/// Growth factor applied to the candidate box sides between attempts
pub const BOX_GROWTH_FACTOR: f64 = 1.1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to the decomposition rendering filename
pub const DECOMPOSE_OUTPUT_SUFFIX: &str = "_decompose";
/// Suffix added to the packing rendering filename
pub const PACK_OUTPUT_SUFFIX: &str = "_pack";

// Part rendering palette: hues step by the golden angle so neighboring
// part ids get clearly distinct colors.
/// Hue increment between consecutive palette entries, in degrees
pub const PALETTE_HUE_STEP_DEGREES: f64 = 137.508;
/// Palette saturation
pub const PALETTE_SATURATION: f64 = 0.65;
/// Palette brightness
pub const PALETTE_VALUE: f64 = 0.95;
