//! External `/switch` subscription over UDP.
//!
//! Each datagram is a JSON object `{"topic": "/switch", "data": true}`.

mod error;
mod message;
mod subscriber;

pub use error::SwitchError;
pub use message::SwitchMessage;
pub use subscriber::{DatagramOutcome, UdpSwitchSubscriber, handle_datagram};
