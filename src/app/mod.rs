//! The helper set page scripts call: formatting, percentages, frame
//! validation and validation-message effects.

pub use crate::core::validator::validate_frame_score;
pub use crate::ui::effects::{clear_validation_error, show_validation_error};
pub use crate::utils::format::{calculate_percentage, format_number};

use crate::domain::ports::{ElementId, PresentationSurface};

/// Validates a frame entered in `field` and shows or clears its message.
///
/// Returns `true` when the frame is valid.
pub fn check_frame_field<S: PresentationSurface + ?Sized>(
    surface: &mut S,
    field: ElementId,
    score: i64,
    is_strike: bool,
    is_spare: bool,
) -> bool {
    match validate_frame_score(score, is_strike, is_spare) {
        Some(message) => {
            show_validation_error(surface, field, &message);
            false
        }
        None => {
            clear_validation_error(surface, field);
            true
        }
    }
}
