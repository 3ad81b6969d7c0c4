/// Which edge of the rectangle the circle is currently travelling along.
///
/// The walk runs anticlockwise on screen: up the right edge (`Top` is the
/// phase that ends at the top), across the top, down the left side, and back
/// along the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerimeterEdge {
    #[default]
    Top,
    Left,
    Bottom,
    Right,
}

impl PerimeterEdge {
    pub const ALL: &'static [Self] = &[Self::Top, Self::Left, Self::Bottom, Self::Right];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Top => Self::Left,
            Self::Left => Self::Bottom,
            Self::Bottom => Self::Right,
            Self::Right => Self::Top,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for PerimeterEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
