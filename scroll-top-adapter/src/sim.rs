//! An in-memory page: a document with control elements, a viewport, and an event loop the
//! caller drives explicitly.
//!
//! Events are delivered synchronously, in the order they are raised. An event raised from inside
//! a listener is queued and delivered once the current dispatch returns; listeners registered
//! during a dispatch only see later events. Smooth scrolls advance only when [`SimPage::tick`] is
//! called, and every frame that moves the viewport dispatches [`PageEvent::Scroll`], as a browser
//! would.

use alloc::collections::BTreeMap;
use alloc::collections::BTreeSet;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use scroll_top::{
    ActivationEvent, ActivationHandler, ControlElement, Document, PageEvent, PageEventHandler,
    ScrollToOptions, Viewport,
};

use crate::{Easing, Tween};

pub const DEFAULT_MAX_OFFSET: f64 = 10_000.0;
pub const DEFAULT_SMOOTH_DURATION_MS: u64 = 300;

/// A simulated page. Cheap to clone; clones share the same page.
#[derive(Clone)]
pub struct SimPage {
    inner: Rc<PageInner>,
}

struct PageInner {
    elements: RefCell<BTreeMap<String, SimElement>>,
    listeners: RefCell<Vec<(PageEvent, PageEventHandler)>>,
    pending: RefCell<VecDeque<PageEvent>>,
    dispatching: Cell<bool>,
    navigations: Cell<usize>,
    viewport: SimViewport,
}

impl Default for SimPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPage {
    pub fn new() -> Self {
        Self::with_viewport(SimViewport::new())
    }

    pub fn with_viewport(viewport: SimViewport) -> Self {
        Self {
            inner: Rc::new(PageInner {
                elements: RefCell::new(BTreeMap::new()),
                listeners: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                navigations: Cell::new(0),
                viewport,
            }),
        }
    }

    /// Adds (or replaces) an element with the given identifier.
    pub fn add_control(&self, id: &str) -> SimElement {
        let el = SimElement::default();
        self.inner
            .elements
            .borrow_mut()
            .insert(id.to_string(), el.clone());
        el
    }

    pub fn viewport(&self) -> SimViewport {
        self.inner.viewport.clone()
    }

    /// Dispatches `event` to every listener registered for it, in registration order.
    ///
    /// Called from inside a listener, the event is queued behind the current dispatch.
    pub fn fire(&self, event: PageEvent) {
        self.inner.pending.borrow_mut().push_back(event);
        if self.inner.dispatching.replace(true) {
            return;
        }
        loop {
            let Some(next) = self.inner.pending.borrow_mut().pop_front() else {
                break;
            };
            self.dispatch(next);
        }
        self.inner.dispatching.set(false);
    }

    fn dispatch(&self, event: PageEvent) {
        // Listeners run with the list detached so they may register more.
        let mut listeners = core::mem::take(&mut *self.inner.listeners.borrow_mut());
        for (e, handler) in listeners.iter_mut() {
            if *e == event {
                handler();
            }
        }
        let mut current = self.inner.listeners.borrow_mut();
        let added = core::mem::replace(&mut *current, listeners);
        current.extend(added);
    }

    /// Listeners registered for `event`. Listeners detached for an in-flight dispatch are not
    /// counted.
    pub fn listener_count(&self, event: PageEvent) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }

    /// Clicks the element with identifier `id`.
    ///
    /// If no handler suppresses the default behaviour, the click counts as a navigation.
    /// Returns `None` when no such element exists.
    pub fn click(&self, id: &str) -> Option<SimClick> {
        let el = self.inner.elements.borrow().get(id).cloned()?;
        let click = el.click();
        if !click.default_prevented() {
            self.inner.navigations.set(self.inner.navigations.get() + 1);
        }
        Some(click)
    }

    /// Clicks whose default behaviour was not suppressed.
    pub fn navigations(&self) -> usize {
        self.inner.navigations.get()
    }

    /// Simulates a user scroll: cancels any animation, jumps, and dispatches `scroll`.
    ///
    /// Returns the applied (clamped) offset.
    pub fn user_scroll_to(&self, offset: f64) -> f64 {
        let applied = self.inner.viewport.jump(offset);
        self.fire(PageEvent::Scroll);
        applied
    }

    /// Advances the page clock.
    ///
    /// If the viewport moved since the last tick (animation frame or pending jump), dispatches
    /// `scroll` and returns the new offset.
    pub fn tick(&self, now_ms: u64) -> Option<f64> {
        if !self.inner.viewport.advance(now_ms) {
            return None;
        }
        self.fire(PageEvent::Scroll);
        Some(self.inner.viewport.scroll_y())
    }

    /// Ticks at `frame_ms` intervals until the viewport settles, starting after `now_ms`.
    ///
    /// Returns the clock value at which the viewport settled, or `u64::MAX` if the clock ran out
    /// first.
    pub fn run_until_settled(&self, mut now_ms: u64, frame_ms: u64) -> u64 {
        let frame_ms = frame_ms.max(1);
        loop {
            now_ms = now_ms.saturating_add(frame_ms);
            self.tick(now_ms);
            let settled =
                !self.inner.viewport.is_animating() && !self.inner.viewport.has_pending_jump();
            if settled || now_ms == u64::MAX {
                return now_ms;
            }
        }
    }

    /// Every command the viewport has received, oldest first.
    pub fn scroll_commands(&self) -> Vec<ScrollToOptions> {
        self.inner.viewport.commands()
    }
}

impl Document for SimPage {
    type Element = SimElement;

    fn element_by_id(&self, id: &str) -> Option<SimElement> {
        self.inner.elements.borrow().get(id).cloned()
    }

    fn on_event(&self, event: PageEvent, handler: PageEventHandler) {
        self.inner.listeners.borrow_mut().push((event, handler));
    }
}

/// A simulated element. Cheap to clone; clones share the same class list and handlers.
#[derive(Clone, Default)]
pub struct SimElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
    handlers: Rc<RefCell<Vec<ActivationHandler>>>,
}

impl SimElement {
    /// Current class list, sorted.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn activation_handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Dispatches an activation to every handler on this element.
    ///
    /// Handlers registered while the click is being handled only see later clicks.
    pub fn click(&self) -> SimClick {
        let click = SimClick::default();
        let event: &dyn ActivationEvent = &click;
        let mut handlers = core::mem::take(&mut *self.handlers.borrow_mut());
        for handler in handlers.iter_mut() {
            handler(event);
        }
        let mut current = self.handlers.borrow_mut();
        let added = core::mem::replace(&mut *current, handlers);
        current.extend(added);
        click
    }
}

impl ControlElement for SimElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn on_activate(&self, handler: ActivationHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}

/// A simulated click.
#[derive(Debug, Default)]
pub struct SimClick {
    prevent_calls: Cell<usize>,
}

impl SimClick {
    pub fn default_prevented(&self) -> bool {
        self.prevent_calls.get() > 0
    }

    /// How many times `prevent_default` was called.
    pub fn prevent_calls(&self) -> usize {
        self.prevent_calls.get()
    }
}

impl ActivationEvent for SimClick {
    fn prevent_default(&self) {
        self.prevent_calls.set(self.prevent_calls.get() + 1);
    }
}

/// A simulated viewport. Cheap to clone; clones share the same state.
#[derive(Clone, Debug)]
pub struct SimViewport {
    state: Rc<RefCell<ViewportState>>,
}

#[derive(Debug)]
struct ViewportState {
    offset: f64,
    max_offset: f64,
    smooth_scroll: bool,
    duration_ms: u64,
    easing: Easing,
    now_ms: u64,
    tween: Option<Tween>,
    pending_jump: bool,
    commands: Vec<ScrollToOptions>,
}

impl Default for SimViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl SimViewport {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                offset: 0.0,
                max_offset: DEFAULT_MAX_OFFSET,
                smooth_scroll: true,
                duration_ms: DEFAULT_SMOOTH_DURATION_MS,
                easing: Easing::default(),
                now_ms: 0,
                tween: None,
                pending_jump: false,
                commands: Vec::new(),
            })),
        }
    }

    /// Largest reachable offset (document height minus viewport height).
    pub fn with_max_offset(self, max_offset: f64) -> Self {
        {
            let mut s = self.state.borrow_mut();
            s.max_offset = if max_offset > 0.0 { max_offset } else { 0.0 };
            s.offset = s.offset.min(s.max_offset);
        }
        self
    }

    /// When disabled, smooth scroll commands degrade to an immediate jump.
    pub fn with_smooth_scroll(self, supported: bool) -> Self {
        self.state.borrow_mut().smooth_scroll = supported;
        self
    }

    pub fn with_duration_ms(self, duration_ms: u64) -> Self {
        self.state.borrow_mut().duration_ms = duration_ms;
        self
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        self.state.borrow_mut().easing = easing;
        self
    }

    pub fn is_animating(&self) -> bool {
        self.state.borrow().tween.is_some()
    }

    pub fn max_offset(&self) -> f64 {
        self.state.borrow().max_offset
    }

    pub fn commands(&self) -> Vec<ScrollToOptions> {
        self.state.borrow().commands.clone()
    }

    fn has_pending_jump(&self) -> bool {
        self.state.borrow().pending_jump
    }

    fn jump(&self, offset: f64) -> f64 {
        let mut s = self.state.borrow_mut();
        s.tween = None;
        s.pending_jump = false;
        s.offset = clamp_offset(offset, s.max_offset);
        s.offset
    }

    /// Returns `true` when the offset moved (or a jump is pending delivery).
    fn advance(&self, now_ms: u64) -> bool {
        let mut guard = self.state.borrow_mut();
        let s = &mut *guard;
        s.now_ms = s.now_ms.max(now_ms);
        let mut moved = core::mem::take(&mut s.pending_jump);

        if let Some(tween) = s.tween {
            let next = tween.sample(s.now_ms);
            moved |= next != s.offset;
            s.offset = next;
            if tween.is_done(s.now_ms) {
                s.tween = None;
            }
            atrace!(offset = next, now_ms = s.now_ms, "SimViewport::advance");
        }
        moved
    }
}

impl Viewport for SimViewport {
    fn scroll_y(&self) -> f64 {
        self.state.borrow().offset
    }

    fn scroll_to(&self, options: ScrollToOptions) {
        let mut guard = self.state.borrow_mut();
        let s = &mut *guard;
        s.commands.push(options);
        let to = clamp_offset(options.top, s.max_offset);

        if !(options.behavior.is_animated() && s.smooth_scroll) {
            s.tween = None;
            if s.offset != to {
                s.offset = to;
                s.pending_jump = true;
            }
            return;
        }

        if let Some(tween) = s.tween.as_mut() {
            tween.retarget(s.now_ms, to, s.duration_ms);
        } else if s.offset != to {
            s.tween = Some(Tween::new(s.offset, to, s.now_ms, s.duration_ms, s.easing));
        }
    }
}

fn clamp_offset(offset: f64, max_offset: f64) -> f64 {
    if offset > 0.0 {
        offset.min(max_offset)
    } else {
        0.0
    }
}
