use crate::domain::model::{
    FrameResult, FrameViolation, ValidationOutcome, MAX_FRAME_SCORE, MIN_FRAME_SCORE, STRIKE_SCORE,
};

/// Checks a frame's score against its strike/spare flags.
///
/// Rules are tried in order and the first failure is reported:
/// strike score, then spare score, then the absolute `[0, 30]` bounds.
/// A frame flagged as both strike and spare is judged by the strike rule
/// alone.
pub fn validate(frame: &FrameResult) -> ValidationOutcome {
    if frame.is_strike && frame.score != STRIKE_SCORE {
        return ValidationOutcome::Invalid(FrameViolation::StrikeScore);
    }

    if frame.is_spare && frame.score < STRIKE_SCORE {
        return ValidationOutcome::Invalid(FrameViolation::SpareScore);
    }

    if frame.score < MIN_FRAME_SCORE || frame.score > MAX_FRAME_SCORE {
        return ValidationOutcome::Invalid(FrameViolation::OutOfBounds);
    }

    ValidationOutcome::Valid
}

/// `None` when the frame is valid, otherwise the reason to show the user.
pub fn validate_frame_score(score: i64, is_strike: bool, is_spare: bool) -> Option<String> {
    let outcome = validate(&FrameResult::new(score, is_strike, is_spare));
    if let ValidationOutcome::Invalid(violation) = outcome {
        tracing::debug!(score, is_strike, is_spare, %violation, "frame score rejected");
    }
    outcome.reason().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strike_must_be_ten() {
        assert_eq!(validate_frame_score(10, true, false), None);
        assert_eq!(
            validate_frame_score(9, true, false).as_deref(),
            Some("Strike frames must have a score of 10")
        );
        assert_eq!(
            validate(&FrameResult::new(30, true, false)),
            ValidationOutcome::Invalid(FrameViolation::StrikeScore)
        );
    }

    #[test]
    fn test_spare_must_reach_ten() {
        assert_eq!(validate_frame_score(15, false, true), None);
        assert_eq!(
            validate_frame_score(9, false, true).as_deref(),
            Some("Spare frames must have a score of at least 10")
        );
        assert_eq!(
            validate_frame_score(31, false, true).as_deref(),
            Some("Score must be between 0 and 30")
        );
    }

    #[test]
    fn test_open_frame_bounds() {
        assert_eq!(validate_frame_score(0, false, false), None);
        assert_eq!(validate_frame_score(30, false, false), None);
        assert_eq!(
            validate_frame_score(35, false, false).as_deref(),
            Some("Score must be between 0 and 30")
        );
        assert_eq!(
            validate_frame_score(-1, false, false).as_deref(),
            Some("Score must be between 0 and 30")
        );
    }

    #[test]
    fn test_strike_rule_reported_first() {
        assert_eq!(
            validate_frame_score(5, true, true).as_deref(),
            Some("Strike frames must have a score of 10")
        );
        assert_eq!(
            validate(&FrameResult::new(-4, true, false)),
            ValidationOutcome::Invalid(FrameViolation::StrikeScore)
        );
    }

    #[test]
    fn test_strike_and_spare_together_is_not_flagged() {
        assert!(validate(&FrameResult::new(10, true, true)).is_valid());
    }

    #[test]
    fn test_extreme_scores_do_not_panic() {
        for score in [i64::MIN, i64::MAX] {
            for (strike, spare) in [(false, false), (true, false), (false, true), (true, true)] {
                assert!(!validate(&FrameResult::new(score, strike, spare)).is_valid());
            }
        }
    }

    proptest! {
        #[test]
        fn strike_valid_iff_ten(score in any::<i64>(), spare in any::<bool>()) {
            prop_assert_eq!(validate(&FrameResult::new(score, true, spare)).is_valid(), score == 10);
        }

        #[test]
        fn spare_valid_iff_between_ten_and_thirty(score in -100i64..100) {
            prop_assert_eq!(
                validate(&FrameResult::new(score, false, true)).is_valid(),
                (10..=30).contains(&score)
            );
        }

        #[test]
        fn open_frame_valid_iff_in_bounds(score in any::<i64>()) {
            prop_assert_eq!(
                validate(&FrameResult::new(score, false, false)).is_valid(),
                (0..=30).contains(&score)
            );
        }
    }
}
