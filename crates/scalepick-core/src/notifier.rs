//! Single-slot value change listener.

use std::fmt;

/// Callback invoked with the new value.
pub type ValueListener = Box<dyn FnMut(i32)>;

/// Holds at most one listener. Setting a new one replaces the old one.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Option<ValueListener>,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(i32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener. Returns whether one was registered.
    pub fn clear_listener(&mut self) -> bool {
        self.listener.take().is_some()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Invoke the listener, if any, synchronously.
    pub fn notify(&mut self, value: i32) {
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
    }
}
