#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn spans_y(&self, y: f64) -> bool {
        self.top <= y && self.bottom() >= y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_midpoint_of_box() {
        let bounds = Bounds {
            left: 40.0,
            top: 10.0,
            width: 200.0,
            height: 100.0,
        };

        assert_eq!(bounds.center(), Point::new(140.0, 60.0));
        assert_eq!(bounds.bottom(), 110.0);
    }

    #[test]
    fn spans_y_includes_both_edges() {
        let bounds = Bounds {
            left: 0.0,
            top: 100.0,
            width: 10.0,
            height: 50.0,
        };

        assert!(bounds.spans_y(100.0));
        assert!(bounds.spans_y(150.0));
        assert!(!bounds.spans_y(99.9));
        assert!(!bounds.spans_y(150.1));
    }

    #[test]
    fn delta_and_length() {
        let delta = Point::new(103.0, 104.0).delta_from(Point::new(100.0, 100.0));

        assert_eq!(delta, Point::new(3.0, 4.0));
        assert_eq!(delta.length(), 5.0);
    }
}
