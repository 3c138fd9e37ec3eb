/// Character budget per line for diamond titles.
pub const DIAMOND_WRAP_CHARS: usize = 12;
/// Diamonds never hold more than this many wrapped lines.
pub const DIAMOND_MAX_LINES: usize = 2;

/// Greedy word wrap. Words are packed into lines of at most `max_chars`
/// characters (a single longer word gets a line to itself); when that yields
/// more than `max_lines` lines the overflow is folded into the first line.
///
/// The wrap is lossless: joining the output on whitespace gives back the
/// input's words in order.
pub fn wrap_words(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let max_lines = max_lines.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    while lines.len() > max_lines {
        let second = lines.remove(1);
        lines[0] = format!("{} {}", lines[0], second);
    }
    lines
}

pub fn wrap_diamond(text: &str) -> Vec<String> {
    wrap_words(text, DIAMOND_WRAP_CHARS, DIAMOND_MAX_LINES)
}

/// Font size and line height for a diamond title, stepping down as the line
/// count grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleMetrics {
    pub font_size: f64,
    pub line_height: f64,
}

impl TitleMetrics {
    pub fn for_lines(count: usize) -> Self {
        match count {
            0 | 1 => TitleMetrics { font_size: 12.0, line_height: 12.0 },
            2 => TitleMetrics { font_size: 11.5, line_height: 12.0 },
            _ => TitleMetrics { font_size: 10.0, line_height: 11.0 },
        }
    }

    /// Vertical gap from the diamond center to its subtitle baseline.
    pub fn subtitle_drop(count: usize) -> f64 {
        match count {
            0 | 1 => 14.0,
            2 => 16.0,
            _ => 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_title_stays_on_one_line() {
        assert_eq!(wrap_diamond("Known?"), vec!["Known?"]);
    }

    #[test]
    fn packs_words_up_to_budget() {
        assert_eq!(wrap_diamond("Intent check?"), vec!["Intent", "check?"]);
        assert_eq!(wrap_diamond("High intent?"), vec!["High intent?"]);
    }

    #[test]
    fn overflow_folds_into_first_line() {
        let lines = wrap_words("one two three four", 5, 2);
        assert_eq!(lines, vec!["one two three", "four"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        assert_eq!(
            wrap_words("a supercalifragilistic b", 6, 3),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_diamond("   ").is_empty());
    }

    #[test]
    fn metrics_step_down() {
        assert_eq!(TitleMetrics::for_lines(1).font_size, 12.0);
        assert_eq!(TitleMetrics::for_lines(2).font_size, 11.5);
        assert_eq!(TitleMetrics::for_lines(3), TitleMetrics { font_size: 10.0, line_height: 11.0 });
    }

    proptest! {
        #[test]
        fn wrap_is_lossless_and_bounded(text in "[a-zA-Z?/ ]{0,80}", budget in 1usize..20) {
            let lines = wrap_words(&text, budget, DIAMOND_MAX_LINES);
            prop_assert!(lines.len() <= DIAMOND_MAX_LINES);

            let original: Vec<&str> = text.split_whitespace().collect();
            let rewrapped: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            prop_assert_eq!(original, rewrapped);
        }
    }
}
