/// Gap between consecutive letters of the hero subtitle.
pub const LETTER_STEP_MS: u32 = 50;

/// How long a single letter's fade-and-rise runs.
pub const LETTER_DURATION_MS: u32 = 300;

/// Delay before the letter at `index` starts animating. Index 0 starts
/// immediately, so the line always reads left to right.
pub fn letter_delay_ms(index: usize) -> u32 {
    index as u32 * LETTER_STEP_MS
}

/// Characters of a subtitle in render order. Spaces become no-break
/// spaces so the per-letter inline blocks keep their width.
pub fn letters(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_by_one_step_per_letter() {
        assert_eq!(letter_delay_ms(0), 0);
        assert_eq!(letter_delay_ms(1), LETTER_STEP_MS);
        assert_eq!(letter_delay_ms(7), 7 * LETTER_STEP_MS);
    }

    #[test]
    fn delays_are_strictly_increasing() {
        let delays: Vec<u32> = (0..12).map(letter_delay_ms).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn letters_keep_their_order_and_count() {
        let out = letters("shine");
        assert_eq!(out, vec!['s', 'h', 'i', 'n', 'e']);
    }

    #[test]
    fn spaces_are_widened_to_no_break_spaces() {
        let out = letters("a b");
        assert_eq!(out, vec!['a', '\u{00A0}', 'b']);
    }

    #[test]
    fn empty_text_yields_no_letters() {
        assert!(letters("").is_empty());
    }
}
