//! Configuration constants for Miranda Sans patch runs.

/// Base family name shared by every style.
pub const FAMILY_BASE: &str = "Miranda Sans";

/// Directory holding the static TTF builds.
pub const STATIC_DIR: &str = "fonts/ttf";

/// The italic variable font.
pub const VF_ITALIC_PATH: &str = "fonts/variable/MirandaSans-Italic[wght].ttf";

/// Extension of the font files a pass picks up.
pub const FONT_EXTENSION: &str = "ttf";

/// `post.italicAngle` written to italic fonts, in degrees.
pub const ITALIC_ANGLE: f64 = -10.0;

/// Name ID holding the neutral weight label referenced from STAT.
pub const WEIGHT_LABEL_NAME_ID: u16 = 259;

/// Neutral weight label text.
pub const WEIGHT_LABEL: &str = "Regular";
