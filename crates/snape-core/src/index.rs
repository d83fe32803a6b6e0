//! Quick-select characters for positions in the flat view.
//!
//! Positions 0-25 map to `a`-`z` and 26-51 to `A`-`Z`. Positions from 52 on
//! wrap around into the lowercase range and therefore share a character with
//! an earlier row; only the earlier row is reachable by quick-select.

const LETTERS: u8 = 26;

/// Number of positions with a distinct quick-select character.
pub const DISTINCT_POSITIONS: usize = 2 * LETTERS as usize;

pub fn char_for(position: usize) -> char {
    let offset = (position % LETTERS as usize) as u8;
    if (LETTERS as usize..DISTINCT_POSITIONS).contains(&position) {
        (b'A' + offset) as char
    } else {
        (b'a' + offset) as char
    }
}

/// Inverse of [`char_for`] on the distinct range. Returns `None` for any
/// character that is not an ASCII letter.
pub fn position_for(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some((c as u8 - b'a') as usize),
        'A'..='Z' => Some((c as u8 - b'A') as usize + LETTERS as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rows_use_lowercase_then_uppercase() {
        assert_eq!(char_for(0), 'a');
        assert_eq!(char_for(2), 'c');
        assert_eq!(char_for(25), 'z');
        assert_eq!(char_for(26), 'A');
        assert_eq!(char_for(51), 'Z');
    }

    #[test]
    fn positions_past_the_alphabet_wrap_to_lowercase() {
        assert_eq!(char_for(52), 'a');
        assert_eq!(char_for(53), 'b');
        assert_eq!(char_for(78), 'a');
        assert_eq!(char_for(79), 'b');
    }

    #[test]
    fn mapping_is_invertible_on_distinct_range() {
        for position in 0..DISTINCT_POSITIONS {
            assert_eq!(position_for(char_for(position)), Some(position));
        }
        for position in DISTINCT_POSITIONS..DISTINCT_POSITIONS + 60 {
            assert_eq!(position_for(char_for(position)), Some(position % 26));
        }
    }

    #[test]
    fn non_letters_have_no_position() {
        for c in ['0', '9', '/', '?', ' ', '-', 'é', 'ß'] {
            assert_eq!(position_for(c), None, "{c:?}");
        }
    }
}
