//! `setTimeout`-backed debounce

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::debounce::Debounce;

struct Inner<T> {
    window: Window,
    state: RefCell<Debounce<T>>,
    timer: Cell<Option<i32>>,
    action: RefCell<Box<dyn FnMut(T)>>,
    callback: Closure<dyn FnMut()>,
}

impl<T: 'static> Inner<T> {
    /// Monotonic milliseconds; wall-clock jumps must not stretch a deadline
    fn now_ms(&self) -> u64 {
        match self.window.performance() {
            Some(performance) => performance.now() as u64,
            None => js_sys::Date::now() as u64,
        }
    }

    fn schedule(&self, delay_ms: u64) {
        self.clear();
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                delay,
            ) {
            Ok(handle) => self.timer.set(Some(handle)),
            Err(err) => log::warn!("setTimeout failed: {:?}", err),
        }
    }

    fn clear(&self) {
        if let Some(handle) = self.timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    fn fire(&self) {
        self.timer.set(None);
        let now = self.now_ms();
        let payload = self.state.borrow_mut().poll(now);
        match payload {
            Some(payload) => match self.action.try_borrow_mut() {
                Ok(mut action) => (*action)(payload),
                Err(_) => log::debug!("debounced action is already running, dropping call"),
            },
            None => {
                // Timer fired before the deadline by clock granularity
                let remaining = self.state.borrow().remaining_ms(now);
                if let Some(remaining) = remaining {
                    self.schedule(remaining.max(1));
                }
            }
        }
    }
}

/// Runs an action once a burst of triggers has been quiet for the window.
///
/// The action receives the payload from the most recent trigger. Dropping
/// the debounce cancels any pending call.
pub struct TimerDebounce<T: 'static> {
    inner: Rc<Inner<T>>,
}

impl<T: 'static> TimerDebounce<T> {
    pub fn new(window: Window, window_ms: u64, action: impl FnMut(T) + 'static) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<Inner<T>>| {
            let weak = weak.clone();
            Inner {
                window,
                state: RefCell::new(Debounce::new(window_ms)),
                timer: Cell::new(None),
                action: RefCell::new(Box::new(action)),
                callback: Closure::<dyn FnMut()>::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.fire();
                    }
                }),
            }
        });
        Self { inner }
    }

    /// Restart the quiet window with a new payload
    pub fn trigger(&self, payload: T) {
        let window_ms = {
            let mut state = self.inner.state.borrow_mut();
            state.trigger(payload, self.inner.now_ms());
            state.window_ms()
        };
        self.inner.schedule(window_ms);
    }

    /// Forget the pending payload and stop the timer
    pub fn cancel(&self) {
        self.inner.state.borrow_mut().cancel();
        self.inner.clear();
    }
}

impl<T: 'static> Drop for TimerDebounce<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
