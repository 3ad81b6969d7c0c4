use std::sync::atomic::{AtomicBool, Ordering};

use crate::controllers::follow::ports::switch_sink::SwitchSink;

/// Single-slot, last-value-wins cell for the external switch.
#[derive(Debug, Default)]
pub struct SwitchMailbox {
    value: AtomicBool,
}

impl SwitchMailbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }
}

impl SwitchSink for SwitchMailbox {
    fn receive(&self, value: bool) {
        self.value.store(value, Ordering::Release);
    }
}
