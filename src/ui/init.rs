use crate::config::toml_config::AppConfig;
use crate::domain::ports::{ElementId, PresentationSurface, Scheduler, UiFramework};
use crate::ui::framework::SHOW_CLASS;
use std::rc::Rc;
use std::time::Duration;

pub const CARD_CLASS: &str = "card";
pub const ALERT_CLASS: &str = "alert";
pub const TOOLTIP_TRIGGER: &str = "tooltip";

/// What [`PageInitializer::initialize`] touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub tooltips: usize,
    pub cards: usize,
    pub alerts: usize,
}

/// One-shot page setup run by the host once the page tree is built.
#[derive(Debug, Clone)]
pub struct PageInitializer {
    pub card_stagger: Duration,
    pub card_fade: Duration,
    pub card_offset_px: u32,
    pub alert_dismiss: Duration,
    pub tooltip_attribute: String,
}

impl Default for PageInitializer {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl PageInitializer {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            card_stagger: config.card_stagger(),
            card_fade: config.card_fade(),
            card_offset_px: config.card_offset_px(),
            alert_dismiss: config.alert_dismiss(),
            tooltip_attribute: config.tooltip_attribute().to_string(),
        }
    }

    /// Wires tooltips, starts the card fade-in and schedules alert dismissal.
    ///
    /// Without a `framework`, tooltips are skipped and alerts stay open; the
    /// card animation only needs the surface.
    pub fn initialize(
        &self,
        surface: &mut dyn PresentationSurface,
        root: ElementId,
        scheduler: &mut dyn Scheduler,
        framework: Option<Rc<dyn UiFramework>>,
    ) -> InitSummary {
        let mut summary = InitSummary::default();

        if let Some(framework) = &framework {
            for trigger in surface.find_by_attribute(root, &self.tooltip_attribute, TOOLTIP_TRIGGER) {
                framework.create_tooltip(surface, trigger);
                summary.tooltips += 1;
            }
        }

        let hidden_offset = format!("translateY({}px)", self.card_offset_px);
        let transition = format!(
            "opacity {fade}s ease, transform {fade}s ease",
            fade = self.card_fade.as_secs_f64()
        );
        for (index, card) in surface.find_by_class(root, CARD_CLASS).into_iter().enumerate() {
            surface.set_style(card, "opacity", "0");
            surface.set_style(card, "transform", &hidden_offset);

            let transition = transition.clone();
            scheduler.schedule(
                self.card_stagger * index as u32,
                Box::new(move |s: &mut dyn PresentationSurface| {
                    s.set_style(card, "transition", &transition);
                    s.set_style(card, "opacity", "1");
                    s.set_style(card, "transform", "translateY(0)");
                }),
            );
            summary.cards += 1;
        }

        match framework {
            Some(framework) => {
                for alert in surface.find_by_class(root, ALERT_CLASS) {
                    let framework = Rc::clone(&framework);
                    scheduler.schedule(
                        self.alert_dismiss,
                        Box::new(move |s: &mut dyn PresentationSurface| {
                            if s.has_class(alert, SHOW_CLASS) {
                                framework.close_alert(s, alert);
                            }
                        }),
                    );
                    summary.alerts += 1;
                }
            }
            None => tracing::debug!("no UI framework available; tooltips and alert dismissal skipped"),
        }

        tracing::debug!(
            tooltips = summary.tooltips,
            cards = summary.cards,
            alerts = summary.alerts,
            "page initialized"
        );
        summary
    }
}
