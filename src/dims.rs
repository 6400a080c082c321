use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Cell coordinates (x, y). Signed, so the solvers can use `(-1, -1)` as the
/// "no predecessor" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Offsets of the four cardinal neighbors.
    pub const CARDINALS: [Dims; 4] = [Dims(-1, 0), Dims(1, 0), Dims(0, -1), Dims(0, 1)];

    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.0..to.0).flat_map(move |x| (from.1..to.1).map(move |y| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn iter_fill_covers_the_rectangle() {
        let all: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(3, 2)).collect();
        assert_eq!(all.len(), 6);
        assert!(all.contains(&Dims(0, 0)));
        assert!(all.contains(&Dims(2, 1)));
        assert!(!all.contains(&Dims(3, 0)));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Dims(1, 2) + Dims(3, 4), Dims(4, 6));
        assert_eq!(Dims(3, 4) - Dims(1, 2), Dims(2, 2));
        assert!(Dims(1, 1).all_positive());
        assert!(!Dims(0, 1).all_positive());
        assert_eq!(Dims(4, 3).product(), 12);
    }
}
