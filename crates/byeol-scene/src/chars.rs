//! Character constants for the starfield scene.

/// Characters used for static field stars.
pub const STAR_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Head character of a shooting star.
pub const SHOOTING_HEAD: char = '✦';

/// Trail character drawn one cell behind a shooting star.
pub const SHOOTING_TRAIL: char = '·';
