//! Window scroll listener

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A `scroll` listener on the window, removed on drop
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Call `on_scroll` with the vertical scroll offset on every scroll event.
    ///
    /// Returns `None` outside a browser window.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;

        let source = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(scroll_y) = source.scroll_y() {
                on_scroll(scroll_y);
            }
        });

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %super::describe(&err), "failed to attach scroll listener");
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %super::describe(&err), "failed to detach scroll listener");
        }
    }
}
