use glam::DVec2;

// An axis-aligned rectangle on the ground plane. Points on the min edges are
// inside, points on the max edges are not.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn from_corner_and_size(corner: DVec2, size: DVec2) -> BoundingBox {
        BoundingBox::new(corner.x, corner.x + size.x, corner.y, corner.y + size.y)
    }

    pub fn pos(&self) -> DVec2 {
        DVec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min_x && point.x < self.max_x && point.y >= self.min_y && point.y < self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_edges_are_inside_max_edges_are_not() {
        let bounds = BoundingBox::from_corner_and_size(DVec2::new(65.0, 5.0), DVec2::new(1.0, 10.0));
        assert!(bounds.contains(DVec2::new(65.0, 5.0)));
        assert!(bounds.contains(DVec2::new(65.99, 14.99)));
        assert!(!bounds.contains(DVec2::new(66.0, 10.0)));
        assert!(!bounds.contains(DVec2::new(65.5, 15.0)));
        assert!(!bounds.contains(DVec2::new(64.99, 10.0)));
    }

    #[test]
    fn centre_of_box() {
        let bounds = BoundingBox::new(-5.0, 5.0, 0.0, 10.0);
        assert!(bounds.pos().abs_diff_eq(DVec2::new(0.0, 5.0), 1e-12));
    }
}
