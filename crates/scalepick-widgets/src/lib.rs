//! egui hosts for the ScalePick pickers.
//!
//! - **Painter**: draws picker [`DrawCommand`](scalepick_core::DrawCommand)s
//!   with an egui [`Painter`](egui::Painter)
//! - **Widget**: [`PickerWidget`] allocates space, turns egui drags into
//!   gesture events and paints the picker

pub mod painter;
pub mod widget;

pub use painter::{EguiMeasure, paint_commands, to_color32};
pub use widget::PickerWidget;
