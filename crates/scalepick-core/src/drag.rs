//! Drag interpretation: horizontal scroll distance to value steps.

use crate::gesture::GestureEvent;
use crate::value::{Commit, ValueChanged, ValueModel};

/// Phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// What a gesture event did to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragOutcome {
    /// Set when the value was committed.
    pub changed: Option<ValueChanged>,
    /// Whether the host should schedule a redraw.
    pub redraw: bool,
}

impl DragOutcome {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        changed: None,
        redraw: false,
    };

    /// The host should redraw, but the value did not change.
    pub const REDRAW: Self = Self {
        changed: None,
        redraw: true,
    };
}

/// Number of unit steps covered by `distance_x` pixels.
///
/// `ceil(|distance_x| / px_per_unit)`, signed like `distance_x`. Positive
/// distance (already moved, opposite of translation) increases the value.
/// Infinite results saturate at `i32::MAX`, NaN maps to zero.
pub fn step_count(distance_x: f64, px_per_unit: f64) -> i32 {
    let steps = (distance_x.abs() / px_per_unit).ceil() as i32;
    if distance_x > 0.0 { steps } else { -steps }
}

/// `Idle -> Dragging -> Idle` state machine that applies scroll distances to
/// a [`ValueModel`].
#[derive(Debug, Clone, Default)]
pub struct DragInterpreter {
    phase: DragPhase,
}

impl DragInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Process one gesture event.
    pub fn handle(
        &mut self,
        event: GestureEvent,
        model: &mut ValueModel,
        px_per_unit: f64,
    ) -> DragOutcome {
        match event {
            GestureEvent::Down { .. } => {
                self.phase = DragPhase::Dragging;
                DragOutcome::IGNORED
            }
            GestureEvent::Scroll { distance } => self.drag_by(model, distance.x, px_per_unit),
            GestureEvent::Up | GestureEvent::Cancel => {
                self.phase = DragPhase::Idle;
                DragOutcome::IGNORED
            }
        }
    }

    /// Apply a horizontal scroll distance.
    ///
    /// A redraw is requested for every move during a drag, including moves
    /// whose target is out of range and therefore rejected.
    pub fn drag_by(
        &mut self,
        model: &mut ValueModel,
        distance_x: f64,
        px_per_unit: f64,
    ) -> DragOutcome {
        if self.phase == DragPhase::Idle {
            log::trace!("Ignoring scroll of {distance_x} outside a drag");
            return DragOutcome::IGNORED;
        }

        let steps = step_count(distance_x, px_per_unit);
        let target = model.value().saturating_add(steps);
        match model.try_set(target) {
            Commit::Changed(change) => {
                log::debug!("Value {} -> {}", change.previous, change.value);
                DragOutcome {
                    changed: Some(change),
                    redraw: true,
                }
            }
            Commit::Unchanged => DragOutcome::REDRAW,
            Commit::Rejected { attempted } => {
                let range = model.range();
                log::trace!(
                    "Rejected {attempted}, outside [{}, {}]",
                    range.min(),
                    range.max()
                );
                DragOutcome::REDRAW
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueRange;
    use kurbo::{Point, Vec2};

    fn ruler_model() -> ValueModel {
        ValueModel::new(ValueRange::new(100, 190).unwrap(), 160).unwrap()
    }

    fn dragging() -> DragInterpreter {
        let mut drag = DragInterpreter::new();
        let mut model = ruler_model();
        drag.handle(GestureEvent::Down { position: Point::ZERO }, &mut model, 10.0);
        drag
    }

    #[test]
    fn test_step_count() {
        assert_eq!(step_count(-50.0, 10.0), -5);
        assert_eq!(step_count(500.0, 10.0), 50);
        assert_eq!(step_count(1.0, 10.0), 1);
        assert_eq!(step_count(-0.5, 10.0), -1);
        assert_eq!(step_count(0.0, 10.0), 0);
        assert_eq!(step_count(f64::NAN, 10.0), 0);
        assert_eq!(step_count(3.0, 0.0), i32::MAX);
    }

    #[test]
    fn test_commit_within_range() {
        let mut drag = dragging();
        let mut model = ruler_model();

        let outcome = drag.drag_by(&mut model, -50.0, 10.0);
        assert_eq!(
            outcome.changed,
            Some(ValueChanged {
                value: 155,
                previous: 160
            })
        );
        assert!(outcome.redraw);
        assert_eq!(model.value(), 155);
    }

    #[test]
    fn test_reject_still_redraws() {
        let mut drag = dragging();
        let mut model = ruler_model();

        let outcome = drag.drag_by(&mut model, 500.0, 10.0);
        assert_eq!(outcome, DragOutcome::REDRAW);
        assert_eq!(model.value(), 160);
    }

    #[test]
    fn test_zero_distance_is_idempotent() {
        let mut drag = dragging();
        let mut model = ruler_model();

        for _ in 0..5 {
            let outcome = drag.drag_by(&mut model, 0.0, 10.0);
            assert!(outcome.changed.is_none());
        }
        assert_eq!(model.value(), 160);
    }

    #[test]
    fn test_huge_distance_saturates_and_rejects() {
        let mut drag = dragging();
        let mut model = ruler_model();

        let outcome = drag.drag_by(&mut model, f64::MAX, 0.001);
        assert!(outcome.changed.is_none());
        let outcome = drag.drag_by(&mut model, -f64::MAX, 0.001);
        assert!(outcome.changed.is_none());
        assert_eq!(model.value(), 160);
    }

    #[test]
    fn test_idle_moves_are_ignored() {
        let mut drag = DragInterpreter::new();
        let mut model = ruler_model();

        let outcome = drag.handle(
            GestureEvent::Scroll {
                distance: Vec2::new(-50.0, 0.0),
            },
            &mut model,
            10.0,
        );
        assert_eq!(outcome, DragOutcome::IGNORED);
        assert_eq!(model.value(), 160);
    }

    #[test]
    fn test_phase_transitions() {
        let mut drag = DragInterpreter::new();
        let mut model = ruler_model();
        assert_eq!(drag.phase(), DragPhase::Idle);

        drag.handle(GestureEvent::Down { position: Point::ZERO }, &mut model, 10.0);
        assert_eq!(drag.phase(), DragPhase::Dragging);

        drag.handle(GestureEvent::Cancel, &mut model, 10.0);
        assert_eq!(drag.phase(), DragPhase::Idle);

        drag.handle(GestureEvent::Down { position: Point::ZERO }, &mut model, 10.0);
        drag.handle(GestureEvent::Up, &mut model, 10.0);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_value_stays_in_range_over_many_moves() {
        let mut drag = dragging();
        let mut model = ruler_model();
        let distances = [-37.0, 120.0, 3.5, -400.0, 900.0, -12.0, 55.0, -1.0];

        for distance in distances.iter().cycle().take(64) {
            drag.drag_by(&mut model, *distance, 10.0);
            assert!(model.range().contains(model.value()));
        }
    }
}
