//! DOM backend over `web-sys`.
//!
//! `load` is observed on the window and `scroll` on the document. Listeners are leaked with
//! [`Closure::forget`]: they live for the rest of the page session.

use std::rc::Rc;

use scroll_top::{
    ActivationEvent, ActivationHandler, ControlElement, Document, PageEvent, PageEventHandler,
    ScrollBehavior, ScrollTopControl, ScrollTopOptions, ScrollToOptions, Viewport,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, Window};

use crate::WebError;

/// The installed control, bound to the live DOM.
pub type WebScrollTop = Rc<ScrollTopControl<WebElement, WebViewport>>;

/// Installs the control on the global `window`/`document`.
///
/// If the page has already finished loading, visibility is evaluated immediately since `load`
/// will not fire again.
pub fn install_on_window(options: ScrollTopOptions) -> Result<WebScrollTop, WebError> {
    let document = WebDocument::from_global()?;
    let viewport = WebViewport::new(document.window.clone());
    let control = scroll_top::install(&document, viewport, options);

    if document.document.ready_state() == "complete" {
        control.evaluate_visibility();
    }
    Ok(control)
}

#[derive(Clone, Debug)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(window: Window) -> Result<Self, WebError> {
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn from_global() -> Result<Self, WebError> {
        Self::new(web_sys::window().ok_or(WebError::NoWindow)?)
    }

    fn target_for(&self, event: PageEvent) -> &EventTarget {
        match event {
            PageEvent::Load => self.window.as_ref(),
            PageEvent::Scroll => self.document.as_ref(),
        }
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn on_event(&self, event: PageEvent, mut handler: PageEventHandler) {
        let closure =
            Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        if let Err(err) = self
            .target_for(event)
            .add_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())
        {
            awarn!(event = event.name(), ?err, "WebDocument: addEventListener failed");
            return;
        }
        closure.forget();
    }
}

#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl ControlElement for WebElement {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            awarn!(class, ?err, "WebElement: classList.add failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            awarn!(class, ?err, "WebElement: classList.remove failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn on_activate(&self, mut handler: ActivationHandler) {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let click: &dyn ActivationEvent = &WebClick(event);
            handler(click);
        }) as Box<dyn FnMut(Event)>);
        if let Err(err) = self
            .0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            awarn!(?err, "WebElement: addEventListener(click) failed");
            return;
        }
        closure.forget();
    }
}

struct WebClick(Event);

impl ActivationEvent for WebClick {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

#[derive(Clone, Debug)]
pub struct WebViewport {
    window: Window,
}

impl WebViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WebViewport {
    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                awarn!(?err, "WebViewport: scrollY unavailable");
                0.0
            }
        }
    }

    fn scroll_to(&self, options: ScrollToOptions) {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(options.top);
        opts.set_behavior(match options.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        });
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
