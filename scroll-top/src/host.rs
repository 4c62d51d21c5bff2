use alloc::boxed::Box;

use crate::{PageEvent, ScrollToOptions};

/// Handler registered for a [`PageEvent`].
pub type PageEventHandler = Box<dyn FnMut()>;

/// Handler registered for an activation (click) on the control.
pub type ActivationHandler = Box<dyn FnMut(&dyn ActivationEvent)>;

/// Element lookup and page-level event registration.
///
/// All methods take `&self`: host handles (DOM nodes, simulated pages) are shared, so
/// implementations are expected to use interior mutability.
pub trait Document {
    type Element: ControlElement;

    /// Looks up an element by identifier. `None` when no such element exists.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Registers `handler` for `event` for the rest of the session.
    fn on_event(&self, event: PageEvent, handler: PageEventHandler);
}

/// The clickable element that triggers scroll-to-top.
pub trait ControlElement {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Registers `handler` for activation (click) events on this element.
    fn on_activate(&self, handler: ActivationHandler);
}

/// An activation event whose default (navigation) behaviour can be suppressed.
pub trait ActivationEvent {
    fn prevent_default(&self);
}

/// The scrollable visible area of the page.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Starts scrolling to `options.top`.
    ///
    /// With [`crate::ScrollBehavior::Smooth`] this is fire-and-forget: the offset changes over
    /// time. Hosts that cannot animate may jump immediately.
    fn scroll_to(&self, options: ScrollToOptions);
}
