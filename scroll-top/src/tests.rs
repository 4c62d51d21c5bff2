use crate::*;

use alloc::collections::BTreeSet;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Clone, Default)]
struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
    class_writes: Rc<Cell<usize>>,
    handlers: Rc<RefCell<Vec<ActivationHandler>>>,
}

impl FakeElement {
    fn click(&self) -> FakeClick {
        let event = FakeClick::default();
        let dyn_event: &dyn ActivationEvent = &event;
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler(dyn_event);
        }
        event
    }
}

impl ControlElement for FakeElement {
    fn add_class(&self, class: &str) {
        self.class_writes.set(self.class_writes.get() + 1);
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.class_writes.set(self.class_writes.get() + 1);
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn on_activate(&self, handler: ActivationHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}

#[derive(Default)]
struct FakeClick {
    prevented: Cell<usize>,
}

impl ActivationEvent for FakeClick {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}

#[derive(Default)]
struct FakeDocument {
    element: Option<(String, FakeElement)>,
    listeners: RefCell<Vec<(PageEvent, PageEventHandler)>>,
}

impl FakeDocument {
    fn with_control(id: &str) -> (Self, FakeElement) {
        let element = FakeElement::default();
        let doc = Self {
            element: Some((id.to_string(), element.clone())),
            ..Self::default()
        };
        (doc, element)
    }

    fn fire(&self, event: PageEvent) {
        for (e, handler) in self.listeners.borrow_mut().iter_mut() {
            if *e == event {
                handler();
            }
        }
    }

    fn listener_count(&self, event: PageEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.element
            .as_ref()
            .filter(|(eid, _)| eid == id)
            .map(|(_, el)| el.clone())
    }

    fn on_event(&self, event: PageEvent, handler: PageEventHandler) {
        self.listeners.borrow_mut().push((event, handler));
    }
}

#[derive(Clone, Default)]
struct FakeViewport {
    offset: Rc<Cell<f64>>,
    commands: Rc<RefCell<Vec<ScrollToOptions>>>,
}

impl FakeViewport {
    fn at(offset: f64) -> Self {
        let v = Self::default();
        v.offset.set(offset);
        v
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.offset.get()
    }

    fn scroll_to(&self, options: ScrollToOptions) {
        self.commands.borrow_mut().push(options);
    }
}

type FakeControl = ScrollTopControl<FakeElement, FakeViewport>;

fn control_at(offset: f64) -> (FakeControl, FakeElement, FakeViewport) {
    let (doc, el) = FakeDocument::with_control(DEFAULT_CONTROL_ID);
    let vp = FakeViewport::at(offset);
    let c = ScrollTopControl::new(&doc, vp.clone(), ScrollTopOptions::default());
    (c, el, vp)
}

#[test]
fn threshold_is_strict() {
    for (offset, expected) in [
        (0.0, false),
        (50.0, false),
        (99.9, false),
        (100.0, false),
        (100.5, true),
        (101.0, true),
        (5000.0, true),
    ] {
        let (c, el, _) = control_at(offset);
        let state = c.evaluate_visibility().unwrap();
        assert_eq!(state.is_active(), expected, "offset={offset}");
        assert_eq!(el.has_class("active"), expected, "offset={offset}");
        assert_eq!(c.visibility(), Some(state));
    }
}

#[test]
fn visibility_follows_offset_changes() {
    let (c, el, vp) = control_at(150.0);
    assert_eq!(c.evaluate_visibility(), Some(Visibility::Active));
    assert!(el.has_class("active"));

    vp.offset.set(50.0);
    assert_eq!(c.evaluate_visibility(), Some(Visibility::Inactive));
    assert!(!el.has_class("active"));
}

#[test]
fn evaluate_is_idempotent() {
    let (c, el, _) = control_at(250.0);
    c.evaluate_visibility();
    let once: Vec<String> = el.classes.borrow().iter().cloned().collect();
    c.evaluate_visibility();
    let twice: Vec<String> = el.classes.borrow().iter().cloned().collect();
    assert_eq!(once, twice);
    assert_eq!(once, ["active"]);
}

#[test]
fn evaluate_leaves_unrelated_classes_alone() {
    let (c, el, vp) = control_at(500.0);
    el.classes.borrow_mut().insert("scroll-top".to_string());
    c.evaluate_visibility();
    vp.offset.set(0.0);
    c.evaluate_visibility();
    assert!(el.has_class("scroll-top"));
    assert!(!el.has_class("active"));
}

#[test]
fn missing_control_is_a_noop() {
    let doc = FakeDocument::default();
    let vp = FakeViewport::at(1000.0);
    let c = ScrollTopControl::new(&doc, vp, ScrollTopOptions::default());
    assert!(!c.has_control());
    assert_eq!(c.evaluate_visibility(), None);
    assert_eq!(c.visibility(), None);
}

#[test]
fn control_with_other_id_is_not_resolved() {
    let (doc, el) = FakeDocument::with_control("back-to-top");
    let c = ScrollTopControl::new(&doc, FakeViewport::at(300.0), ScrollTopOptions::default());
    assert!(!c.has_control());
    c.evaluate_visibility();
    assert_eq!(el.class_writes.get(), 0);

    let c = ScrollTopControl::new(
        &doc,
        FakeViewport::at(300.0),
        ScrollTopOptions::default().with_control_id("back-to-top"),
    );
    assert_eq!(c.evaluate_visibility(), Some(Visibility::Active));
}

#[test]
fn activation_prevents_default_and_scrolls_once() {
    let (c, _, vp) = control_at(800.0);
    let click = FakeClick::default();
    c.on_activate(&click);

    assert_eq!(click.prevented.get(), 1);
    let commands = vp.commands.borrow();
    assert_eq!(
        commands.as_slice(),
        [ScrollToOptions {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        }]
    );
}

#[test]
fn activation_uses_configured_command() {
    let (doc, _) = FakeDocument::with_control(DEFAULT_CONTROL_ID);
    let vp = FakeViewport::at(800.0);
    let opts = ScrollTopOptions::new()
        .with_target_top(40.0)
        .with_behavior(ScrollBehavior::Instant);
    let c = ScrollTopControl::new(&doc, vp.clone(), opts);
    c.on_activate(&FakeClick::default());
    assert_eq!(
        vp.commands.borrow()[0],
        ScrollToOptions {
            top: 40.0,
            behavior: ScrollBehavior::Instant,
        }
    );
}

#[test]
fn install_wires_load_and_scroll() {
    let (doc, el) = FakeDocument::with_control(DEFAULT_CONTROL_ID);
    let vp = FakeViewport::at(0.0);
    let c = install(&doc, vp.clone(), ScrollTopOptions::default());

    assert_eq!(doc.listener_count(PageEvent::Load), 1);
    assert_eq!(doc.listener_count(PageEvent::Scroll), 1);

    vp.offset.set(400.0);
    doc.fire(PageEvent::Load);
    assert_eq!(c.visibility(), Some(Visibility::Active));

    vp.offset.set(20.0);
    doc.fire(PageEvent::Scroll);
    assert!(!el.has_class("active"));

    vp.offset.set(101.0);
    doc.fire(PageEvent::Scroll);
    assert!(el.has_class("active"));
}

#[test]
fn install_binds_click_to_activation() {
    let (doc, el) = FakeDocument::with_control(DEFAULT_CONTROL_ID);
    let vp = FakeViewport::at(900.0);
    let _c = install(&doc, vp.clone(), ScrollTopOptions::default());

    let click = el.click();
    assert_eq!(click.prevented.get(), 1);
    assert_eq!(vp.commands.borrow().len(), 1);
    assert!(vp.commands.borrow()[0].behavior.is_animated());
}

#[test]
fn install_without_control_skips_click_binding() {
    let (doc, stray) = FakeDocument::with_control("elsewhere");
    let vp = FakeViewport::at(900.0);
    let c = install(&doc, vp.clone(), ScrollTopOptions::default());

    assert!(!c.has_control());
    doc.fire(PageEvent::Load);
    doc.fire(PageEvent::Scroll);
    assert!(stray.handlers.borrow().is_empty());
    assert!(vp.commands.borrow().is_empty());
}

#[test]
fn options_normalize_offsets() {
    let opts = ScrollTopOptions::new()
        .with_threshold(-5.0)
        .with_target_top(f64::NAN);
    assert_eq!(opts.threshold, 0.0);
    assert_eq!(opts.target_top, 0.0);

    let opts = ScrollTopOptions::new().with_threshold(320.0);
    assert_eq!(opts.threshold, 320.0);
}

#[test]
fn custom_threshold_and_class() {
    let (doc, el) = FakeDocument::with_control(DEFAULT_CONTROL_ID);
    let vp = FakeViewport::at(300.0);
    let opts = ScrollTopOptions::new()
        .with_threshold(300.0)
        .with_active_class("is-visible");
    let c = ScrollTopControl::new(&doc, vp.clone(), opts);

    assert_eq!(c.evaluate_visibility(), Some(Visibility::Inactive));
    vp.offset.set(301.0);
    assert_eq!(c.evaluate_visibility(), Some(Visibility::Active));
    assert!(el.has_class("is-visible"));
    assert!(!el.has_class("active"));
}

#[test]
fn page_event_names() {
    assert_eq!(PageEvent::Load.name(), "load");
    assert_eq!(PageEvent::Scroll.name(), "scroll");
    assert_eq!(ScrollBehavior::Smooth.as_str(), "smooth");
    assert_eq!(ScrollBehavior::default(), ScrollBehavior::Smooth);
}

#[cfg(feature = "serde")]
#[test]
fn partial_config_keeps_defaults() {
    let opts: ScrollTopOptions = serde_json::from_str(r#"{ "threshold": 300 }"#).unwrap();
    assert_eq!(opts.threshold, 300.0);
    assert_eq!(opts.control_id, DEFAULT_CONTROL_ID);
    assert_eq!(opts.active_class, DEFAULT_ACTIVE_CLASS);
    assert_eq!(opts.target_top, 0.0);
    assert_eq!(opts.behavior, ScrollBehavior::Smooth);
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_offsets_are_normalized() {
    let opts: ScrollTopOptions =
        serde_json::from_str(r#"{ "threshold": -5, "target_top": -40 }"#).unwrap();
    assert_eq!(opts.threshold, 0.0);
    assert_eq!(opts.target_top, 0.0);

    let opts: ScrollTopOptions =
        serde_json::from_str(r#"{ "behavior": "Instant", "target_top": 64.5 }"#).unwrap();
    assert_eq!(opts.target_top, 64.5);
    assert_eq!(opts.behavior, ScrollBehavior::Instant);
}
