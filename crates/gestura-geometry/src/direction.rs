use crate::point::Point;

/// How much one axis must dominate the other before a motion counts as
/// purely horizontal or vertical.
pub const DIRECTION_DOMINANCE_THRESHOLD: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
        };
        f.write_str(name)
    }
}

/// Classifies the dominant axis of the motion `start -> end`.
///
/// Equal (or nearly equal) axis travel resolves to [`Direction::Diagonal`].
pub fn direction(start: Point, end: Point) -> Direction {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let factor = 1.0 + DIRECTION_DOMINANCE_THRESHOLD;

    if dx > dy * factor {
        Direction::Horizontal
    } else if dy > dx * factor {
        Direction::Vertical
    } else {
        Direction::Diagonal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            direction(Point::ZERO, Point::new(100.0, 10.0)),
            Direction::Horizontal
        );
        assert_eq!(
            direction(Point::ZERO, Point::new(10.0, 100.0)),
            Direction::Vertical
        );
        assert_eq!(
            direction(Point::ZERO, Point::new(50.0, 50.0)),
            Direction::Diagonal
        );
    }

    #[test]
    fn sign_does_not_matter() {
        assert_eq!(
            direction(Point::new(100.0, 0.0), Point::new(0.0, 5.0)),
            Direction::Horizontal
        );
        assert_eq!(
            direction(Point::ZERO, Point::new(-3.0, -90.0)),
            Direction::Vertical
        );
    }

    #[test]
    fn near_equal_axes_are_diagonal() {
        assert_eq!(
            direction(Point::ZERO, Point::new(12.0, 10.0)),
            Direction::Diagonal
        );
        assert_eq!(
            direction(Point::ZERO, Point::new(14.0, 10.0)),
            Direction::Horizontal
        );
        assert_eq!(direction(Point::ZERO, Point::ZERO), Direction::Diagonal);
    }
}
