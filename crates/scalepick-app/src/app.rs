//! Headless application: owns both pickers and replays scripts against them.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use kurbo::Size;
use scalepick_core::{
    DialPicker, GestureTracker, MeasureSpec, MonospaceMeasure, Picker, PickerConfig, RulerPicker,
};
use scalepick_render::{CommandRecorder, RenderContext, Renderer};
use serde::Serialize;

use crate::error::AppResult;
use crate::script::{PointerAction, ReplayScript, Target};

/// A value delivered to one of the listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueChange {
    pub target: Target,
    pub value: i32,
}

/// Summary of a finished replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub ruler_value: i32,
    pub dial_value: i32,
    /// Listener callbacks, in order.
    pub changes: Vec<ValueChange>,
    /// Frames built, including the final frame of each picker.
    pub frames: usize,
}

/// Load a picker configuration file.
pub fn load_config(path: impl AsRef<Path>) -> AppResult<PickerConfig> {
    let json = std::fs::read_to_string(path)?;
    Ok(PickerConfig::from_json(&json)?)
}

/// Main application state.
pub struct App {
    ruler: RulerPicker,
    dial: DialPicker,
    changes: Rc<RefCell<Vec<ValueChange>>>,
    recorder: CommandRecorder,
}

impl App {
    /// Build both pickers from the config and attach logging listeners.
    pub fn new(config: &PickerConfig) -> AppResult<Self> {
        let mut ruler = RulerPicker::from_config(&config.ruler, config.density)?;
        let mut dial = DialPicker::from_config(&config.dial, config.density)?;
        let changes = Rc::new(RefCell::new(Vec::new()));

        ruler.set_on_value_changed(listener(Target::Ruler, Rc::clone(&changes)));
        dial.set_on_value_changed(listener(Target::Dial, Rc::clone(&changes)));

        Ok(Self {
            ruler,
            dial,
            changes,
            recorder: CommandRecorder::new(),
        })
    }

    pub fn ruler(&self) -> &RulerPicker {
        &self.ruler
    }

    pub fn dial(&self) -> &DialPicker {
        &self.dial
    }

    /// The recorder holding the most recent frame.
    pub fn recorder(&self) -> &CommandRecorder {
        &self.recorder
    }

    /// Replay a script and report the resulting values.
    ///
    /// A frame is recorded for every redraw request, then once more per
    /// picker at the end.
    pub fn replay(&mut self, script: &ReplayScript) -> AppResult<ReplayReport> {
        let frames_before = self.recorder.frames();
        let mut ruler_tracker = GestureTracker::new();
        let mut dial_tracker = GestureTracker::new();

        for step in &script.steps {
            let (picker, tracker): (&mut dyn Picker, _) = match step.target {
                Target::Ruler => (&mut self.ruler, &mut ruler_tracker),
                Target::Dial => (&mut self.dial, &mut dial_tracker),
            };

            let event = match step.action {
                PointerAction::Down { .. } => step.action.position().map(|p| tracker.pointer_down(p)),
                PointerAction::Move { .. } => {
                    step.action.position().and_then(|p| tracker.pointer_move(p))
                }
                PointerAction::Up => tracker.pointer_up(),
                PointerAction::Cancel => tracker.cancel(),
            };
            let Some(event) = event else {
                log::trace!("Step {:?} on {} produced no gesture", step.action, step.target);
                continue;
            };

            let size = widget_size(&*picker, script.width);
            let outcome = picker.handle_gesture(event, size);
            if outcome.redraw {
                render_frame(&mut self.recorder, &*picker, size)?;
            }
        }

        render_frame(&mut self.recorder, &self.ruler, widget_size(&self.ruler, script.width))?;
        render_frame(&mut self.recorder, &self.dial, widget_size(&self.dial, script.width))?;

        Ok(ReplayReport {
            ruler_value: self.ruler.value(),
            dial_value: self.dial.value(),
            changes: std::mem::take(&mut *self.changes.borrow_mut()),
            frames: self.recorder.frames() - frames_before,
        })
    }
}

fn listener(target: Target, changes: Rc<RefCell<Vec<ValueChange>>>) -> Box<dyn FnMut(i32)> {
    Box::new(move |value| {
        log::info!("{} value changed: {}", target, value);
        changes.borrow_mut().push(ValueChange { target, value });
    })
}

fn widget_size(picker: &dyn Picker, width: f64) -> Size {
    Size::new(width, picker.measure_height(width, MeasureSpec::Unspecified))
}

fn render_frame(recorder: &mut CommandRecorder, picker: &dyn Picker, size: Size) -> AppResult<()> {
    let commands = picker.draw(size, &mut MonospaceMeasure::default());
    let ctx = RenderContext::new(&commands, size)?;
    recorder.build_scene(&ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::script::Step;
    use scalepick_core::PickerError;
    use tempfile::tempdir;

    #[test]
    fn test_demo_replay() {
        let mut app = App::new(&PickerConfig::default()).unwrap();
        let report = app.replay(&ReplayScript::demo()).unwrap();

        assert_eq!(report.ruler_value, 155);
        assert_eq!(report.dial_value, 48);
        assert_eq!(
            report.changes,
            vec![
                ValueChange { target: Target::Ruler, value: 158 },
                ValueChange { target: Target::Ruler, value: 155 },
                ValueChange { target: Target::Dial, value: 48 },
            ]
        );
        // Three moves plus one final frame per picker.
        assert_eq!(report.frames, 5);
    }

    #[test]
    fn test_rejected_drag_redraws_without_change() {
        let mut app = App::new(&PickerConfig::default()).unwrap();
        let script = ReplayScript {
            steps: vec![
                Step::new(Target::Ruler, PointerAction::Down { x: 600.0, y: 50.0 }),
                Step::new(Target::Ruler, PointerAction::Move { x: 100.0, y: 50.0 }),
                Step::new(Target::Ruler, PointerAction::Up),
            ],
            ..ReplayScript::default()
        };
        let report = app.replay(&script).unwrap();

        assert_eq!(report.ruler_value, 160);
        assert!(report.changes.is_empty());
        assert_eq!(report.frames, 3);
    }

    #[test]
    fn test_move_without_down_is_skipped() {
        let mut app = App::new(&PickerConfig::default()).unwrap();
        let script = ReplayScript {
            steps: vec![Step::new(Target::Dial, PointerAction::Move { x: 10.0, y: 0.0 })],
            ..ReplayScript::default()
        };
        let report = app.replay(&script).unwrap();
        assert_eq!(report.dial_value, 50);
        assert_eq!(report.frames, 2);
    }

    #[test]
    fn test_final_frame_is_dial() {
        let mut app = App::new(&PickerConfig::default()).unwrap();
        app.replay(&ReplayScript::default()).unwrap();
        assert_eq!(app.recorder().viewport_size(), Size::new(360.0, 130.0));
        assert!(app.recorder().labels().contains(&"50"));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pickers.json");
        std::fs::write(&path, r#"{"ruler": {"min": 0, "max": 50, "value": 25}}"#).unwrap();

        let config = load_config(&path).unwrap();
        let app = App::new(&config).unwrap();
        assert_eq!(app.ruler().value(), 25);
        assert_eq!(app.dial().value(), 50);
    }

    #[test]
    fn test_invalid_range_in_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pickers.json");
        std::fs::write(&path, r#"{"dial": {"min": 90, "max": 10}}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert!(matches!(
            App::new(&config),
            Err(AppError::Picker(PickerError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let result = load_config(dir.path().join("missing.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
