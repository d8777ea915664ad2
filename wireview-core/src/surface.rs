/// Display surface seam: where a finished frame is handed off
use crate::buffer::PixelBuffer;

/// Something that can show a completed pixel buffer
///
/// Callers must finish rendering before presenting; nothing here
/// synchronizes the two.
pub trait DisplaySurface {
    type Error;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Error>;
}
