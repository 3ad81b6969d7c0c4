//! Pixel format conversion helpers for output adapters.

/// Drops the alpha channel of RGBA pixel data.
///
/// # Panics
/// Panics if `src` is not a multiple of 4 bytes.
#[must_use]
pub fn rgba_to_rgb(src: &[u8]) -> Vec<u8> {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );

    let mut dst = Vec::with_capacity(src.len() / 4 * 3);
    for pixel in src.chunks_exact(4) {
        dst.extend_from_slice(&pixel[..3]);
    }

    dst
}
