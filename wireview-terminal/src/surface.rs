/// Terminal display surface: shows the RGB float buffer with half-block cells
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Stdout, Write};
use wireview_core::{DisplaySurface, PixelBuffer};

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '\u{2580}';

/// Presents frames on a grid of terminal cells, two pixel rows per cell
pub struct TerminalSurface<W: Write> {
    out: W,
    columns: u16,
    rows: u16,
}

impl TerminalSurface<Stdout> {
    /// Surface covering the whole terminal except the bottom status line
    pub fn stdout() -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        Ok(Self::new(stdout(), columns, rows.saturating_sub(1)))
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, columns: u16, rows: u16) -> Self {
        Self { out, columns, rows }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Pixel resolution that maps one-to-one onto the cell grid
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.columns as usize, self.rows as usize * 2)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Nearest buffer pixel for a cell column and a half-row counted from the
/// top of the terminal; buffer row 0 is the bottom of the image
fn sample(frame: &PixelBuffer, column: usize, half_row: usize, columns: usize, half_rows: usize) -> Color {
    if frame.width() == 0 || frame.height() == 0 {
        return Color::Black;
    }
    let x = column * frame.width() / columns.max(1);
    let y = frame.height() - 1 - (half_row * frame.height() / half_rows.max(1)).min(frame.height() - 1);
    match frame.pixel(x.min(frame.width() - 1), y) {
        Some(color) => {
            let [r, g, b] = color.to_rgb8();
            Color::Rgb { r, g, b }
        }
        None => Color::Black,
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    type Error = io::Error;

    fn present(&mut self, frame: &PixelBuffer) -> io::Result<()> {
        let columns = self.columns as usize;
        let half_rows = self.rows as usize * 2;

        for row in 0..self.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            for column in 0..columns {
                let top = sample(frame, column, row as usize * 2, columns, half_rows);
                let bottom = sample(frame, column, row as usize * 2 + 1, columns, half_rows);
                queue!(
                    self.out,
                    SetForegroundColor(top),
                    SetBackgroundColor(bottom),
                    Print(HALF_BLOCK)
                )?;
            }
            queue!(self.out, ResetColor)?;
        }

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireview_core::Color as Rgb;

    #[test]
    fn test_one_cell_per_column_and_row() {
        let frame = PixelBuffer::new(8, 6);
        let mut surface = TerminalSurface::new(Vec::new(), 8, 3);
        surface.present(&frame).unwrap();
        let output = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(output.matches(HALF_BLOCK).count(), 24);
    }

    #[test]
    fn test_top_of_terminal_is_top_of_image() {
        let mut frame = PixelBuffer::new(2, 4);
        frame.put_pixel(0, 3, Rgb::RED);
        frame.put_pixel(1, 0, Rgb::BLUE);

        assert_eq!(sample(&frame, 0, 0, 2, 4), Color::Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(sample(&frame, 1, 3, 2, 4), Color::Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(sample(&frame, 1, 0, 2, 4), Color::Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_downsampling_stays_in_bounds() {
        let frame = PixelBuffer::new(100, 50);
        for column in 0..7 {
            for half_row in 0..9 {
                assert_eq!(sample(&frame, column, half_row, 7, 9), Color::Rgb { r: 0, g: 0, b: 0 });
            }
        }
    }

    #[test]
    fn test_pixel_size() {
        let surface = TerminalSurface::new(Vec::new(), 80, 23);
        assert_eq!(surface.pixel_size(), (80, 46));
    }
}
