//! Per-letter guess feedback.

use serde::{Deserialize, Serialize};

/// Verdict for a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum LetterMark {
    /// Right letter in the right place.
    Exact,
    /// The letter occurs in the answer, but elsewhere.
    Present,
    /// The letter does not occur in the answer.
    Absent,
    /// The answer has a space here; the position is not guessable.
    Gap,
}

/// Scores `guess` against `answer`, letter by letter.
///
/// Comparison is case-insensitive. Positions where the answer carries a
/// space are marked [`LetterMark::Gap`] regardless of the guess, the way
/// phrase levels lock their space boxes. Presence is plain containment;
/// a letter the answer holds anywhere marks [`LetterMark::Present`] even
/// when every copy is already matched elsewhere.
///
/// Both strings must be the same length; the session validates that
/// before calling in.
pub(crate) fn score_guess(answer: &str, guess: &str) -> Vec<LetterMark> {
    debug_assert_eq!(answer.chars().count(), guess.chars().count());
    let answer_upper = answer.to_ascii_uppercase();
    answer_upper
        .chars()
        .zip(guess.to_ascii_uppercase().chars())
        .map(|(wanted, guessed)| {
            if wanted == ' ' {
                LetterMark::Gap
            } else if guessed == wanted {
                LetterMark::Exact
            } else if answer_upper.contains(guessed) {
                LetterMark::Present
            } else {
                LetterMark::Absent
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterMark::{Absent, Exact, Gap, Present};

    #[test]
    fn test_exact_match_is_all_exact() {
        assert_eq!(score_guess("cat", "CAT"), vec![Exact, Exact, Exact]);
    }

    #[test]
    fn test_misplaced_letter_is_present() {
        // T occurs in CAT, just not at the front.
        assert_eq!(score_guess("cat", "tac"), vec![Present, Exact, Present]);
    }

    #[test]
    fn test_missing_letter_is_absent() {
        assert_eq!(score_guess("cat", "cow"), vec![Exact, Absent, Absent]);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(score_guess("Cat", "cAt"), vec![Exact, Exact, Exact]);
    }

    #[test]
    fn test_spaces_mark_gaps() {
        let marks = score_guess("quantum leap", "quantum leap");
        assert_eq!(marks[7], Gap);
        assert!(
            marks
                .iter()
                .enumerate()
                .all(|(idx, mark)| (idx == 7) == (*mark == Gap))
        );
    }

    #[test]
    fn test_presence_is_plain_containment() {
        // Both As report Present even though the answer has only one A.
        assert_eq!(
            score_guess("cat", "aab"),
            vec![Present, Exact, Absent]
        );
    }
}
