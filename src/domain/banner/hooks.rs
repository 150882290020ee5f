// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied callbacks attached to a banner.
//!
//! Each callback lives in a named optional slot so the descriptor stays a
//! plain value: it can be cloned, compared by presence and sent to another
//! thread through the pending slot.

use super::slot::ImageSource;
use std::fmt;
use std::sync::Arc;

/// Side-effecting notification callback.
pub type Callback = dyn Fn() + Send + Sync;

/// Reply submission callback, receives the submitted text.
pub type SubmitFn = dyn Fn(&str) + Send + Sync;

/// Remote image loader, receives the URL and returns a loaded image if any.
pub type ImageLoaderFn = dyn Fn(&str) -> Option<ImageSource> + Send + Sync;

/// Shared reference to a caller-supplied function.
pub struct Hook<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Clone for Hook<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for Hook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

impl Hook<Callback> {
    /// Wraps a notification callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl Hook<SubmitFn> {
    /// Wraps a reply submission callback.
    pub fn submit<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callback with the submitted text.
    pub fn call(&self, text: &str) {
        (self.0)(text);
    }
}

impl Hook<ImageLoaderFn> {
    /// Wraps a remote image loader.
    pub fn loader<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<ImageSource> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the loader for `url`.
    #[must_use]
    pub fn load(&self, url: &str) -> Option<ImageSource> {
        (self.0)(url)
    }
}

/// Lifecycle callbacks of a banner.
#[derive(Debug, Clone, Default)]
pub struct Hooks {
    /// Tap on the banner body.
    pub on_click: Option<Hook<Callback>>,
    /// Banner left the screen, whatever the reason.
    pub on_dismiss: Option<Hook<Callback>>,
    /// Entrance transition finished.
    pub on_show_complete: Option<Hook<Callback>>,
    /// Exit transition finished and the surface is gone.
    pub on_dismiss_complete: Option<Hook<Callback>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn cloned_hooks_share_the_same_function() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let hook = Hook::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let copy = hook.clone();
        hook.call();
        copy.call();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn submit_hook_receives_text() {
        let seen = Arc::new(std::sync::Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        let hook = Hook::submit(move |text| sink.lock().unwrap().push_str(text));

        hook.call("hello");
        assert_eq!(*seen.lock().unwrap(), "hello");
    }

    #[test]
    fn debug_output_hides_closure() {
        let hook = Hook::new(|| {});
        assert_eq!(format!("{hook:?}"), "Hook(..)");
    }
}
