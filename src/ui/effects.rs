use crate::domain::ports::{ElementId, PresentationSurface};

pub const ERROR_CLASS: &str = "validation-error";
pub const ERROR_CLASSES: [&str; 3] = [ERROR_CLASS, "text-danger", "mt-1"];
pub const INVALID_CLASS: &str = "is-invalid";

fn remove_messages<S: PresentationSurface + ?Sized>(surface: &mut S, container: ElementId) {
    for existing in surface.find_by_class(container, ERROR_CLASS) {
        surface.remove(existing);
    }
}

/// Shows `message` next to `field` and marks the field invalid.
///
/// The message node is appended to the field's parent. A message already
/// shown there is rewritten in place, so repeated calls do not allocate new
/// nodes. The text is stored verbatim, never parsed as markup.
pub fn show_validation_error<S: PresentationSurface + ?Sized>(
    surface: &mut S,
    field: ElementId,
    message: &str,
) {
    let Some(container) = surface.parent(field) else {
        tracing::debug!(?field, "field is detached; validation message not shown");
        return;
    };

    let mut shown = surface.find_by_class(container, ERROR_CLASS).into_iter();
    let error = match shown.next() {
        Some(error) => {
            for stale in shown {
                surface.remove(stale);
            }
            error
        }
        None => {
            let error = surface.create_element("div");
            for class in ERROR_CLASSES {
                surface.add_class(error, class);
            }
            surface.append_child(container, error);
            error
        }
    };

    let small = match surface.first_child(error) {
        Some(small) => small,
        None => {
            let small = surface.create_element("small");
            surface.append_child(error, small);
            small
        }
    };
    surface.set_text(small, message);

    surface.add_class(field, INVALID_CLASS);
}

/// Removes the message shown next to `field`, if any, and the invalid marker.
pub fn clear_validation_error<S: PresentationSurface + ?Sized>(surface: &mut S, field: ElementId) {
    if let Some(container) = surface.parent(field) {
        remove_messages(surface, container);
    }
    surface.remove_class(field, INVALID_CLASS);
}
