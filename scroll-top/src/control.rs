use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::{
    ActivationEvent, ControlElement, Document, PageEvent, ScrollTopOptions, Viewport, Visibility,
};

/// A "scroll to top" control bound to a host document and viewport.
///
/// The control element is resolved once, in [`ScrollTopControl::new`], and never reassigned.
/// When it is missing the control degrades to a no-op: visibility evaluation does nothing and
/// [`install`] skips the click binding.
///
/// No visibility state is kept here. The element's class list is the only record of whether the
/// control is active; [`ScrollTopControl::visibility`] reads it back.
#[derive(Debug)]
pub struct ScrollTopControl<E, V> {
    control: Option<E>,
    viewport: V,
    options: ScrollTopOptions,
}

impl<E: ControlElement, V: Viewport> ScrollTopControl<E, V> {
    pub fn new<D>(document: &D, viewport: V, options: ScrollTopOptions) -> Self
    where
        D: Document<Element = E> + ?Sized,
    {
        let control = document.element_by_id(&options.control_id);
        if control.is_some() {
            sdebug!(id = %options.control_id, "ScrollTopControl: control resolved");
        } else {
            sdebug!(
                id = %options.control_id,
                "ScrollTopControl: control not found, visibility toggling disabled"
            );
        }
        Self {
            control,
            viewport,
            options,
        }
    }

    pub fn options(&self) -> &ScrollTopOptions {
        &self.options
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn control(&self) -> Option<&E> {
        self.control.as_ref()
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    /// Re-derives the control's visual state from the current scroll offset.
    ///
    /// Returns the state that was asserted, or `None` when there is no control. Repeated calls
    /// at the same offset re-assert the same state.
    pub fn evaluate_visibility(&self) -> Option<Visibility> {
        let control = self.control.as_ref()?;
        let offset = self.viewport.scroll_y();
        let next = Visibility::for_offset(offset, self.options.threshold);
        let class = self.options.active_class.as_str();

        match next {
            Visibility::Active => control.add_class(class),
            Visibility::Inactive => control.remove_class(class),
        }
        strace!(offset, ?next, "ScrollTopControl::evaluate_visibility");
        Some(next)
    }

    /// Reads the visual state back from the control element.
    pub fn visibility(&self) -> Option<Visibility> {
        let control = self.control.as_ref()?;
        Some(if control.has_class(&self.options.active_class) {
            Visibility::Active
        } else {
            Visibility::Inactive
        })
    }

    /// Handles an activation of the control: suppresses the event's default navigation, then
    /// asks the viewport to scroll to the configured target.
    ///
    /// The scroll is not awaited; with smooth behaviour the offset settles over later frames.
    pub fn on_activate(&self, event: &dyn ActivationEvent) {
        event.prevent_default();
        let command = self.options.scroll_command();
        sdebug!(
            top = command.top,
            behavior = command.behavior.as_str(),
            "ScrollTopControl::on_activate"
        );
        self.viewport.scroll_to(command);
    }
}

/// Creates a [`ScrollTopControl`] and wires it into the host.
///
/// - `evaluate_visibility` runs on [`PageEvent::Load`] and on every [`PageEvent::Scroll`].
/// - `on_activate` is bound to the control's click only when the control exists.
///
/// The registered listeners keep the control alive for the rest of the session.
pub fn install<D, V>(
    document: &D,
    viewport: V,
    options: ScrollTopOptions,
) -> Rc<ScrollTopControl<D::Element, V>>
where
    D: Document + ?Sized,
    D::Element: 'static,
    V: Viewport + 'static,
{
    let control = Rc::new(ScrollTopControl::new(document, viewport, options));

    for event in [PageEvent::Load, PageEvent::Scroll] {
        let c = Rc::clone(&control);
        document.on_event(
            event,
            Box::new(move || {
                c.evaluate_visibility();
            }),
        );
        sdebug!(event = event.name(), "install: page listener registered");
    }

    match control.control() {
        Some(element) => {
            let c = Rc::clone(&control);
            element.on_activate(Box::new(move |event: &dyn ActivationEvent| {
                c.on_activate(event)
            }));
            sdebug!("install: activation listener registered");
        }
        None => {
            swarn!(
                id = %control.options().control_id,
                "install: control not found, activation listener skipped"
            );
        }
    }

    control
}
