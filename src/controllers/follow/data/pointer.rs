#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Other,
}

/// Keyboard modifiers held while a pointer or scroll event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
    };

    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
    };
}
