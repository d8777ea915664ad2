/// Integer line rasterization into the pixel buffer
use nalgebra::Point2;

use crate::buffer::{Color, PixelBuffer};

/// Integer screen coordinate
pub type ScreenPoint = Point2<i32>;

/// Slope class of a line after its endpoints are ordered
///
/// Steep lines are driven along y, shallow lines along x. The sign tells
/// which way the other axis moves when the error term crosses zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeRegime {
    SteepPositive,
    SteepNegative,
    ShallowPositive,
    ShallowNegative,
}

impl SlopeRegime {
    /// Classify from the endpoint deltas; |dy| > |dx| is steep, a zero
    /// minor delta counts as negative
    pub fn classify(dx: i64, dy: i64) -> Self {
        let positive = dx != 0 && dy != 0 && (dx > 0) == (dy > 0);
        match (dy.abs() > dx.abs(), positive) {
            (true, true) => SlopeRegime::SteepPositive,
            (true, false) => SlopeRegime::SteepNegative,
            (false, true) => SlopeRegime::ShallowPositive,
            (false, false) => SlopeRegime::ShallowNegative,
        }
    }

    pub fn is_steep(self) -> bool {
        matches!(self, SlopeRegime::SteepPositive | SlopeRegime::SteepNegative)
    }

    /// Step applied to the error-corrected axis
    pub fn minor_step(self) -> i64 {
        match self {
            SlopeRegime::SteepPositive | SlopeRegime::ShallowPositive => 1,
            SlopeRegime::SteepNegative | SlopeRegime::ShallowNegative => -1,
        }
    }
}

/// Pixels of the segment between two screen points, both endpoints included
///
/// The endpoints are ordered so the driving coordinate increases, which makes
/// the pixel set independent of argument order.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i64,
    y: i64,
    regime: SlopeRegime,
    major: i64,
    minor: i64,
    error: i64,
    target: i64,
    done: bool,
}

impl LinePixels {
    pub fn new(p1: ScreenPoint, p2: ScreenPoint) -> Self {
        let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
        let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));
        let steep = (y2 - y1).abs() > (x2 - x1).abs();

        let swap = if steep { y1 > y2 } else { x1 > x2 };
        let ((sx, sy), (ex, ey)) = if swap {
            ((x2, y2), (x1, y1))
        } else {
            ((x1, y1), (x2, y2))
        };

        let (dx, dy) = (ex - sx, ey - sy);
        let regime = SlopeRegime::classify(dx, dy);
        let (major, minor, target) = if steep {
            (dy, dx.abs(), ey)
        } else {
            (dx, dy.abs(), ex)
        };

        Self {
            x: sx,
            y: sy,
            regime,
            major,
            minor,
            error: 0,
            target,
            done: false,
        }
    }

    fn driving(&self) -> i64 {
        if self.regime.is_steep() {
            self.y
        } else {
            self.x
        }
    }
}

impl Iterator for LinePixels {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let steep = self.regime.is_steep();
        if self.error > 0 {
            if steep {
                self.x += self.regime.minor_step();
            } else {
                self.y += self.regime.minor_step();
            }
            self.error -= 2 * self.major;
        }

        let point = ScreenPoint::new(self.x as i32, self.y as i32);

        if self.driving() == self.target {
            self.done = true;
        } else {
            if steep {
                self.y += 1;
            } else {
                self.x += 1;
            }
            self.error += 2 * self.minor;
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.target - self.driving() + 1) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

/// Region code of a point relative to the buffer rectangle
fn outcode(p: ScreenPoint, width: usize, height: usize) -> u8 {
    let (x, y) = (i64::from(p.x), i64::from(p.y));
    let mut code = 0;
    if x < 0 {
        code |= 1;
    } else if x >= width as i64 {
        code |= 2;
    }
    if y < 0 {
        code |= 4;
    } else if y >= height as i64 {
        code |= 8;
    }
    code
}

/// Draw a line from `p1` to `p2`. Pixels outside the buffer are dropped.
pub fn draw_line(buffer: &mut PixelBuffer, p1: ScreenPoint, p2: ScreenPoint, color: Color) {
    // Both endpoints beyond the same edge: every pixel would be dropped.
    if outcode(p1, buffer.width(), buffer.height()) & outcode(p2, buffer.width(), buffer.height()) != 0 {
        return;
    }

    for p in LinePixels::new(p1, p2) {
        buffer.put_pixel(p.x, p.y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn pts(p1: (i32, i32), p2: (i32, i32)) -> Vec<(i32, i32)> {
        LinePixels::new(ScreenPoint::new(p1.0, p1.1), ScreenPoint::new(p2.0, p2.1))
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_horizontal_and_vertical_runs() {
        let horizontal = pts((2, 3), (7, 3));
        assert_eq!(horizontal.len(), 6);
        assert!(horizontal.iter().all(|&(_, y)| y == 3));

        let vertical = pts((4, 9), (4, 1));
        assert_eq!(vertical.len(), 9);
        assert!(vertical.iter().all(|&(x, _)| x == 4));
        assert_eq!(vertical.first(), Some(&(4, 1)));
        assert_eq!(vertical.last(), Some(&(4, 9)));
    }

    #[test]
    fn test_shallow_positive_sequence() {
        assert_eq!(pts((0, 0), (4, 2)), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_steep_negative_sequence() {
        assert_eq!(pts((0, 4), (2, 0)), vec![(2, 0), (1, 1), (1, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(pts((5, 5), (5, 5)), vec![(5, 5)]);
    }

    #[test]
    fn test_regime_classification() {
        assert_eq!(SlopeRegime::classify(1, 3), SlopeRegime::SteepPositive);
        assert_eq!(SlopeRegime::classify(-1, 3), SlopeRegime::SteepNegative);
        assert_eq!(SlopeRegime::classify(3, 1), SlopeRegime::ShallowPositive);
        assert_eq!(SlopeRegime::classify(3, -1), SlopeRegime::ShallowNegative);
        assert_eq!(SlopeRegime::classify(3, 3), SlopeRegime::ShallowPositive);
        assert_eq!(SlopeRegime::classify(5, 0), SlopeRegime::ShallowNegative);
        assert_eq!(SlopeRegime::classify(0, 5), SlopeRegime::SteepNegative);
    }

    #[test]
    fn test_lines_are_continuous_and_inclusive() {
        let center = (20, 20);
        for dx in -9..=9 {
            for dy in -9..=9 {
                let end = (center.0 + dx, center.1 + dy);
                let line = pts(center, end);
                assert_eq!(line.len() as i32, dx.abs().max(dy.abs()) + 1);
                assert!(line.contains(&center));
                assert!(line.contains(&end));
                for pair in line.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_reversed_endpoints_give_same_pixels() {
        let center = (20, 20);
        for dx in -11..=11 {
            for dy in -11..=11 {
                let end = (center.0 + dx, center.1 + dy);
                let forward: BTreeSet<_> = pts(center, end).into_iter().collect();
                let backward: BTreeSet<_> = pts(end, center).into_iter().collect();
                assert_eq!(forward, backward, "line to {:?}", end);
            }
        }
    }

    #[test]
    fn test_size_hint_matches_length() {
        let line = LinePixels::new(ScreenPoint::new(0, 0), ScreenPoint::new(10, -3));
        assert_eq!(line.len(), 11);
    }

    #[test]
    fn test_line_fully_outside_writes_nothing() {
        let mut buffer = PixelBuffer::new(16, 16);
        draw_line(&mut buffer, ScreenPoint::new(-10, -5), ScreenPoint::new(-2, -30), Color::WHITE);
        draw_line(&mut buffer, ScreenPoint::new(20, 3), ScreenPoint::new(40, 12), Color::WHITE);
        // Crosses the corner region without touching the buffer.
        draw_line(&mut buffer, ScreenPoint::new(-20, 8), ScreenPoint::new(8, -20), Color::WHITE);
        assert_eq!(buffer.write_count(), 0);
    }

    #[test]
    fn test_partially_visible_line_is_clipped() {
        let mut buffer = PixelBuffer::new(8, 8);
        draw_line(&mut buffer, ScreenPoint::new(-4, 2), ScreenPoint::new(11, 2), Color::WHITE);
        assert_eq!(buffer.write_count(), 8);
        assert_eq!(buffer.pixels_not(Color::BLACK).len(), 8);
    }

    #[test]
    fn test_draws_color() {
        let mut buffer = PixelBuffer::new(8, 8);
        draw_line(&mut buffer, ScreenPoint::new(1, 1), ScreenPoint::new(6, 4), Color::RED);
        assert_eq!(buffer.pixel(1, 1), Some(Color::RED));
        assert_eq!(buffer.pixel(6, 4), Some(Color::RED));
        assert_eq!(buffer.write_count(), 6);
    }
}
