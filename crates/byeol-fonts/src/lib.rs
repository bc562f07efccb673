//! ASCII art glyphs for the byeol title banner.
//!
//! Each glyph is 7 rows tall in the same block style, so rows can be
//! concatenated directly into banner lines.

/// Letter B (7 lines tall, 6 chars wide)
const LETTER_B: [&str; 7] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
];

/// Letter Y
const LETTER_Y: [&str; 7] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter E
const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter O
const LETTER_O: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Letter L
const LETTER_L: [&str; 7] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

/// Build the large "BYEOL" banner as 7 lines of block art.
pub fn build_title_art() -> Vec<String> {
    let letters = [LETTER_B, LETTER_Y, LETTER_E, LETTER_O, LETTER_L];

    let mut lines = Vec::with_capacity(7);
    for row in 0..7 {
        let mut line = String::new();
        for (i, letter) in letters.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(letter[row]);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_shape() {
        let lines = build_title_art();
        assert_eq!(lines.len(), 7);

        // Every row must be equally wide for centered rendering.
        let width = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), width);
        }
    }
}
