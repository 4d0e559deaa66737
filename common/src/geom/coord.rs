#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl GridCoord {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn manhattan_distance(&self, other: &GridCoord) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_sums_all_axes() {
        let a = GridCoord::new(0, 0, 0);
        let b = GridCoord::new(2, 3, 1);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
    }

    #[test]
    fn manhattan_distance_zero_for_same_coord() {
        let a = GridCoord::new(4, 1, 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }
}
