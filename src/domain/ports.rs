use crate::domain::model::Game;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait SettingsProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn recent_games(&self) -> usize;
    fn pretty_report(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Report: Send + 'static;

    async fn extract(&self) -> Result<Vec<Game>>;
    async fn transform(&self, games: Vec<Game>) -> Result<Self::Report>;
    async fn load(&self, report: Self::Report) -> Result<String>;
}

/// Handle to a node of a presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// The mutable UI tree the page helpers operate on.
pub trait PresentationSurface {
    fn parent(&self, element: ElementId) -> Option<ElementId>;
    fn first_child(&self, element: ElementId) -> Option<ElementId>;
    fn create_element(&mut self, tag: &str) -> ElementId;
    fn append_child(&mut self, parent: ElementId, child: ElementId);
    fn remove(&mut self, element: ElementId);

    fn has_class(&self, element: ElementId, class: &str) -> bool;
    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);

    fn set_text(&mut self, element: ElementId, text: &str);
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Attached descendants of `root` carrying `class`, in document order.
    fn find_by_class(&self, root: ElementId, class: &str) -> Vec<ElementId>;
    /// Attached descendants of `root` whose attribute `name` equals `value`.
    fn find_by_attribute(&self, root: ElementId, name: &str, value: &str) -> Vec<ElementId>;
}

/// Optional UI component library (tooltips, dismissible alerts).
pub trait UiFramework {
    fn create_tooltip(&self, surface: &mut dyn PresentationSurface, element: ElementId);
    fn close_alert(&self, surface: &mut dyn PresentationSurface, alert: ElementId);
}

pub type Task = Box<dyn FnOnce(&mut dyn PresentationSurface)>;

/// Fire-and-forget timer service.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: Task);
}
