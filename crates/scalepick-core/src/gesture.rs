//! Gesture events for drag handling.
//!
//! Pickers consume [`GestureEvent`]s. Hosts that only report raw pointer
//! positions can feed them through a [`GestureTracker`], which produces the
//! scroll distances pickers expect.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A single step of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// Initial contact.
    Down { position: Point },
    /// Pointer moved. `distance` is the distance already moved since the
    /// previous event, i.e. `previous - current`.
    Scroll { distance: Vec2 },
    /// Contact released.
    Up,
    /// Gesture aborted by the host.
    Cancel,
}

impl GestureEvent {
    /// Build a scroll event from a translation delta (`current - previous`),
    /// the convention most immediate-mode toolkits report.
    pub fn from_translation(delta: Vec2) -> Self {
        GestureEvent::Scroll { distance: -delta }
    }

    /// Horizontal scroll distance, if this is a scroll event.
    pub fn distance_x(&self) -> Option<f64> {
        match self {
            GestureEvent::Scroll { distance } => Some(distance.x),
            _ => None,
        }
    }
}

/// Turns pointer positions into gesture events.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    /// Last pointer position while a gesture is active.
    last_position: Option<Point>,
    /// Position where the current gesture started.
    drag_start: Option<Point>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    /// Start position of the current gesture.
    pub fn drag_start(&self) -> Option<Point> {
        self.drag_start
    }

    /// Total translation from the gesture start to the last position.
    pub fn drag_delta(&self) -> Option<Vec2> {
        match (self.drag_start, self.last_position) {
            (Some(start), Some(last)) => Some(last - start),
            _ => None,
        }
    }

    /// Pointer pressed.
    pub fn pointer_down(&mut self, position: Point) -> GestureEvent {
        self.last_position = Some(position);
        self.drag_start = Some(position);
        GestureEvent::Down { position }
    }

    /// Pointer moved. Returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, position: Point) -> Option<GestureEvent> {
        let last = self.last_position?;
        self.last_position = Some(position);
        Some(GestureEvent::Scroll {
            distance: last - position,
        })
    }

    /// Pointer released. Returns `None` when no gesture is active.
    pub fn pointer_up(&mut self) -> Option<GestureEvent> {
        self.drag_start = None;
        self.last_position.take().map(|_| GestureEvent::Up)
    }

    /// Gesture aborted. Returns `None` when no gesture is active.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        self.drag_start = None;
        self.last_position.take().map(|_| GestureEvent::Cancel)
    }
}
