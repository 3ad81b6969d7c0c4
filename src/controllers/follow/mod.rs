//! Follow controller: the circle walking around the track rectangle.
//!
//! The controller is driven entirely through its callbacks. A window adapter
//! forwards frames and input events, and the switch subscriber writes into
//! the shared [`SwitchMailbox`].

mod controller;
pub mod data;
mod mailbox;
pub mod ports;

pub use controller::{FollowController, HELP_LINES};
pub use data::{FollowConfig, Modifiers, PointerButton};
pub use mailbox::SwitchMailbox;
pub use ports::{Canvas, Colour, Stroke, SwitchSink};
