//! Tests for progress percentages across the whole catalog.

use parlor_wordgame::{GuessOutcome, LEVELS, LevelPhase, WordSession, percent_for, resume_level};

#[test]
fn test_full_run_reports_the_documented_percentages() {
    let mut session = WordSession::seeded(8);
    let mut percents = Vec::new();
    for level in LEVELS {
        let feedback = session.guess(level.word()).unwrap();
        match feedback.outcome {
            GuessOutcome::Cleared { progress } => percents.push(progress),
            other => panic!("expected a clear, got {other:?}"),
        }
    }
    assert_eq!(
        percents,
        [7, 13, 20, 27, 33, 40, 47, 53, 60, 67, 73, 80, 87, 93, 100]
    );
    assert_eq!(session.phase(), LevelPhase::Finished);
}

#[test]
fn test_saved_percent_resumes_at_or_just_before_its_level() {
    for cleared in 1..LEVELS.len() {
        let percent = percent_for(cleared, LEVELS.len());
        let resumed = resume_level(percent).unwrap();
        assert!(resumed <= cleared, "resume jumped ahead of the save");
        assert!(resumed + 1 >= cleared, "resume lost more than one level");
    }
}

#[test]
fn test_resume_matches_session_state() {
    let session = WordSession::resume(47);
    assert_eq!(session.level_index(), 7);
    assert_eq!(session.progress(), 47);
    assert_eq!(session.hints_left(), LEVELS[7].hints());
}

#[test]
fn test_failed_level_blocks_hints_too() {
    let mut session = WordSession::resume(40);
    for _ in 0..LEVELS[6].tries() {
        session.guess("journal").unwrap();
    }
    assert_eq!(session.phase(), LevelPhase::Failed);
    assert!(session.reveal_hint().is_err());
    session.try_again().unwrap();
    assert!(session.reveal_hint().is_ok());
}
