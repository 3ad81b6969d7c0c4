use std::path::Path;

use crate::core::data::RgbaFrame;

pub trait FilePresenterPort {
    fn present(&self, frame: &RgbaFrame, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
