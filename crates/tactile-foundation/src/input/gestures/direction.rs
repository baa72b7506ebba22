//! Dominant-axis direction of a movement.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Both components are equal, including no movement at all.
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Classifies a movement of `(distance_x, distance_y)` from the gesture origin.
///
/// X wins ties in magnitude. Note that equal components (e.g. a perfect
/// diagonal of `(5, 5)`) yield [`Direction::None`], while `(5, -5)` is
/// `Right`. A negative Y is `Down`, a positive Y is `Up`.
pub fn direction(distance_x: f64, distance_y: f64) -> Direction {
    if distance_x == distance_y {
        Direction::None
    } else if distance_x.abs() >= distance_y.abs() {
        if distance_x < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if distance_y < 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_components_have_no_direction() {
        assert_eq!(direction(0.0, 0.0), Direction::None);
        assert_eq!(direction(7.0, 7.0), Direction::None);
        assert_eq!(direction(-3.0, -3.0), Direction::None);
    }

    #[test]
    fn x_wins_magnitude_ties() {
        assert_eq!(direction(5.0, -5.0), Direction::Right);
        assert_eq!(direction(-5.0, 5.0), Direction::Left);
    }

    #[test]
    fn dominant_axis_decides() {
        assert_eq!(direction(42.0, 33.0), Direction::Right);
        assert_eq!(direction(-42.0, -33.0), Direction::Left);
        assert_eq!(direction(-33.0, -42.0), Direction::Down);
        assert_eq!(direction(10.0, 20.0), Direction::Up);
    }

    #[test]
    fn axis_predicates() {
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Left.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::None.is_horizontal());
        assert!(!Direction::None.is_vertical());
    }
}
