//! Three-line body layout.

/// Lines in every formatted body.
pub const BODY_LINES: usize = 3;

const TERMINATORS: [char; 4] = ['.', ';', '!', '?'];

/// Splits text into sentence or clause units.
///
/// A unit ends at a line break, or at `.`, `;`, `!` or `?` followed by
/// whitespace or the end of the text. A terminator that closes a dotted
/// abbreviation (`S.C.O.P.E.`, `e.g.`) does not end the unit. Units are
/// trimmed and empty units are dropped.
pub fn split_units(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' || c == '\r' {
            flush(&mut units, &mut current);
            continue;
        }
        current.push(c);
        if TERMINATORS.contains(&c) {
            let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
            if at_boundary && !closes_abbreviation(&current) {
                flush(&mut units, &mut current);
            }
        }
    }
    flush(&mut units, &mut current);

    units
}

/// Lays text out as exactly three lines: the first three units, padded with
/// empty lines when the text has fewer.
pub fn three_line_body(text: &str) -> String {
    let mut lines: Vec<String> = split_units(text).into_iter().take(BODY_LINES).collect();
    lines.resize(BODY_LINES, String::new());
    lines.join("\n")
}

/// First unit of a text, or the empty string.
pub fn first_unit(text: &str) -> String {
    split_units(text).into_iter().next().unwrap_or_default()
}

fn flush(units: &mut Vec<String>, current: &mut String) {
    let unit = current.trim();
    if !unit.is_empty() {
        units.push(unit.to_string());
    }
    current.clear();
}

// `current` ends with an ASCII terminator. A token ending in a digit is a
// number such as `3.5`, not an abbreviation.
fn closes_abbreviation(current: &str) -> bool {
    let token = current.rsplit(char::is_whitespace).next().unwrap_or("");
    token
        .get(..token.len().saturating_sub(1))
        .map_or(false, |head| {
            head.contains('.') && !head.ends_with(|c: char| c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_sentence_terminators_and_semicolons() {
        let units = split_units("One thing. Another; a third! Is it? Done");
        assert_eq!(units, vec!["One thing.", "Another;", "a third!", "Is it?", "Done"]);
    }

    #[test]
    fn splits_on_line_breaks() {
        let units = split_units("first line\nsecond line\r\n\nthird");
        assert_eq!(units, vec!["first line", "second line", "third"]);
    }

    #[test]
    fn decimal_points_and_inner_dots_do_not_split() {
        let units = split_units("Score of 3.5 is fine. Next.");
        assert_eq!(units, vec!["Score of 3.5 is fine.", "Next."]);
    }

    #[test]
    fn sentence_ending_in_decimal_splits() {
        let units = split_units("Your score was 3.5. Keep going.");
        assert_eq!(units, vec!["Your score was 3.5.", "Keep going."]);
        assert_eq!(
            three_line_body("Your score was 3.5. Keep going. Good."),
            "Your score was 3.5.\nKeep going.\nGood."
        );
    }

    #[test]
    fn dotted_abbreviations_do_not_split() {
        let units = split_units(
            "Use the S.C.O.P.E. Feedforward Model. Seek mentorship (e.g. international projects) often.",
        );
        assert_eq!(
            units,
            vec![
                "Use the S.C.O.P.E. Feedforward Model.",
                "Seek mentorship (e.g. international projects) often.",
            ]
        );
    }

    #[test]
    fn body_takes_first_three_units() {
        let body = three_line_body("A. B. C. D.");
        assert_eq!(body, "A.\nB.\nC.");
    }

    #[test]
    fn two_units_pad_with_one_empty_line() {
        let body = three_line_body("First sentence. Second sentence.");
        assert_eq!(body, "First sentence.\nSecond sentence.\n");
        assert_eq!(body.matches('\n').count(), 2);
    }

    #[test]
    fn empty_text_is_three_empty_lines() {
        assert_eq!(three_line_body(""), "\n\n");
        assert_eq!(three_line_body("   "), "\n\n");
    }

    #[test]
    fn first_unit_of_interpretation() {
        assert_eq!(
            first_unit("Handles tasks well. May default under stress."),
            "Handles tasks well."
        );
        assert_eq!(first_unit(""), "");
    }
}
