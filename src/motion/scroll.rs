//! Window scroll driver.
//!
//! Owns the `scroll`/`resize` listeners and one animation-frame loop, and
//! publishes raw y, normalized progress, scroll direction and the
//! spring-smoothed progress as `MotionValue`s. The handle is cheap to
//! clone; when the last clone is dropped the listeners are removed and any
//! pending frame is cancelled, so nothing fires against a torn-down view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::gates::{DirectionTracker, ScrollDirection};
use super::spring::{Spring, SpringConfig};
use super::value::MotionValue;

pub struct ScrollMotion {
    shared: Rc<Shared>,
}

impl Clone for ScrollMotion {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl PartialEq for ScrollMotion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

struct Shared {
    y: MotionValue<f64>,
    progress: MotionValue<f64>,
    smoothed: MotionValue<f64>,
    direction: MotionValue<ScrollDirection>,
    tracker: RefCell<DirectionTracker>,
    spring: RefCell<Spring>,
    raf_id: Cell<Option<i32>>,
    last_frame_ms: Cell<Option<f64>>,
    scroll_cb: RefCell<Option<Closure<dyn FnMut()>>>,
    resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
    raf_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl ScrollMotion {
    /// Attach to the window and start publishing. The smoothed value
    /// starts at the current progress, so a page that loads mid-scroll
    /// does not animate from the top.
    pub fn mount() -> Self {
        let (y0, p0) = current_sample();
        let shared = Rc::new(Shared {
            y: MotionValue::new(y0),
            progress: MotionValue::new(p0),
            smoothed: MotionValue::new(p0),
            direction: MotionValue::new(ScrollDirection::Down),
            tracker: RefCell::new(DirectionTracker::with_origin(y0)),
            spring: RefCell::new(Spring::new(p0, SpringConfig::default())),
            raf_id: Cell::new(None),
            last_frame_ms: Cell::new(None),
            scroll_cb: RefCell::new(None),
            resize_cb: RefCell::new(None),
            raf_cb: RefCell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        let scroll_cb = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.on_scroll();
            }
        }) as Box<dyn FnMut()>);

        let weak = Rc::downgrade(&shared);
        let resize_cb = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.on_resize();
            }
        }) as Box<dyn FnMut()>);

        let weak = Rc::downgrade(&shared);
        let raf_cb = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.on_frame(timestamp_ms);
            }
        }) as Box<dyn FnMut(f64)>);

        if let Some(window) = window() {
            let _ = window
                .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        }
        *shared.scroll_cb.borrow_mut() = Some(scroll_cb);
        *shared.resize_cb.borrow_mut() = Some(resize_cb);
        *shared.raf_cb.borrow_mut() = Some(raf_cb);

        debug!("scroll pipeline mounted at progress {p0:.3}");
        Self { shared }
    }

    /// Raw vertical scroll offset in px.
    pub fn y(&self) -> MotionValue<f64> {
        self.shared.y.clone()
    }

    /// Scroll offset normalized to [0, 1]; 0 on a degenerate scroll range.
    pub fn progress(&self) -> MotionValue<f64> {
        self.shared.progress.clone()
    }

    /// Spring-smoothed follower of `progress`.
    pub fn smoothed(&self) -> MotionValue<f64> {
        self.shared.smoothed.clone()
    }

    /// Direction of the last raw sample.
    pub fn direction(&self) -> MotionValue<ScrollDirection> {
        self.shared.direction.clone()
    }
}

impl Shared {
    fn on_scroll(&self) {
        let (y, progress) = current_sample();
        let direction = self.tracker.borrow_mut().sample(y);
        self.y.set(y);
        self.direction.set_if_neq(direction);
        self.progress.set(progress);
        self.schedule_frame();
    }

    fn on_resize(&self) {
        // The scrollable range changed; renormalize against the same y.
        let (_, progress) = current_sample();
        self.progress.set(progress);
        self.schedule_frame();
    }

    fn on_frame(&self, timestamp_ms: f64) {
        self.raf_id.set(None);
        let dt = match self.last_frame_ms.replace(Some(timestamp_ms)) {
            Some(prev) => (timestamp_ms - prev) / 1000.0,
            None => 1.0 / 60.0,
        };
        let target = self.progress.get();
        let position = self.spring.borrow_mut().step(target, dt);
        self.smoothed.set(position);
        if self.spring.borrow().is_settled_at(target) {
            self.last_frame_ms.set(None);
        } else {
            self.schedule_frame();
        }
    }

    fn schedule_frame(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        let Some(window) = window() else { return };
        if let Some(cb) = self.raf_cb.borrow().as_ref() {
            self.raf_id
                .set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Some(window) = window() {
            if let Some(cb) = self.scroll_cb.borrow().as_ref() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            }
            if let Some(cb) = self.resize_cb.borrow().as_ref() {
                let _ = window
                    .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
            if let Some(id) = self.raf_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        debug!("scroll pipeline unmounted");
    }
}

/// Read the current scroll offset and its normalized progress. A zero or
/// negative scrollable range pins progress to 0 rather than dividing by it.
fn current_sample() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let track = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64 - viewport)
        .unwrap_or(0.0);
    let progress = if track > 0.0 {
        (y / track).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (y, progress)
}
