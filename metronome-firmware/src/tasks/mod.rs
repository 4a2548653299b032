//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod alarm;
pub mod buttons;
pub mod controller;
pub mod display;
pub mod haptic;

pub use alarm::alarm_task;
pub use buttons::button_task;
pub use controller::controller_task;
pub use display::display_task;
pub use haptic::haptic_task;
