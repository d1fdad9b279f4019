//! ScalePick Core Library
//!
//! Platform-agnostic value model, gesture interpretation and scale geometry
//! for the ruler and dial pickers. Nothing in here talks to a rendering
//! backend: pickers emit [`DrawCommand`]s and consume [`GestureEvent`]s, and
//! host adapters do the rest.

pub mod config;
pub mod dial;
pub mod drag;
pub mod error;
pub mod gesture;
pub mod measure;
pub mod notifier;
pub mod picker;
pub mod primitives;
pub mod ruler;
pub mod style;
pub mod units;
pub mod value;

pub use config::{DialConfig, PickerConfig, RulerConfig};
pub use dial::{DialMetrics, DialPicker, DialTick, VisibleWindow};
pub use drag::{DragInterpreter, DragOutcome, DragPhase};
pub use error::{PickerError, PickerResult};
pub use gesture::{GestureEvent, GestureTracker};
pub use measure::MeasureSpec;
pub use notifier::ChangeNotifier;
pub use picker::Picker;
pub use primitives::{DrawCommand, LineStyle, MonospaceMeasure, Primitive, TextMeasure, TextStyle};
pub use ruler::{RulerMetrics, RulerPicker, Tick, TickKind};
pub use style::{DEFAULT_COLOR, PickerStyle, parse_hex_color};
pub use units::Density;
pub use value::{Commit, ValueChanged, ValueModel, ValueRange};
