use crate::domain::ports::{ElementId, PresentationSurface, UiFramework};

pub const TOOLTIP_READY_ATTRIBUTE: &str = "data-tooltip-ready";
pub const SHOW_CLASS: &str = "show";

/// Component behaviour of a Bootstrap-style library on a [`PresentationSurface`].
///
/// Tooltips are marked as ready on their trigger element; closing an alert
/// drops its `show` class and removes it from the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentLibrary;

impl UiFramework for ComponentLibrary {
    fn create_tooltip(&self, surface: &mut dyn PresentationSurface, element: ElementId) {
        surface.set_attribute(element, TOOLTIP_READY_ATTRIBUTE, "true");
    }

    fn close_alert(&self, surface: &mut dyn PresentationSurface, alert: ElementId) {
        surface.remove_class(alert, SHOW_CLASS);
        surface.remove(alert);
    }
}
