use super::table::StepTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    AntiClockwise,
}

impl RotationDirection {
    /// Direction of a signed step count, `None` for zero.
    pub const fn of(count: i16) -> Option<Self> {
        if count > 0 {
            Some(RotationDirection::Clockwise)
        } else if count < 0 {
            Some(RotationDirection::AntiClockwise)
        } else {
            None
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::AntiClockwise,
            RotationDirection::AntiClockwise => RotationDirection::Clockwise,
        }
    }

    /// Moves `count` one step toward zero in this direction.
    pub(crate) const fn consume(self, count: i16) -> i16 {
        match self {
            RotationDirection::Clockwise => count - 1,
            RotationDirection::AntiClockwise => count + 1,
        }
    }
}

/// Electrical position inside the step table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor(u8);

impl Cursor {
    const MASK: u8 = (StepTable::LEN - 1) as u8;

    pub const fn new(index: u8) -> Self {
        Self(index & Self::MASK)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1) & Self::MASK)
    }

    pub const fn prev(self) -> Self {
        Self(self.0.wrapping_sub(1) & Self::MASK)
    }

    pub const fn stepped(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => self.next(),
            RotationDirection::AntiClockwise => self.prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(Cursor::new(7).next(), Cursor::new(0));
        assert_eq!(Cursor::new(0).prev(), Cursor::new(7));
        assert_eq!(Cursor::new(9).index(), 1);
    }

    #[test]
    fn direction_follows_sign() {
        assert_eq!(RotationDirection::of(1019), Some(RotationDirection::Clockwise));
        assert_eq!(RotationDirection::of(-4076), Some(RotationDirection::AntiClockwise));
        assert_eq!(RotationDirection::of(0), None);
        assert_eq!(RotationDirection::of(i16::MIN), Some(RotationDirection::AntiClockwise));
    }

    #[test]
    fn consume_moves_toward_zero() {
        assert_eq!(RotationDirection::Clockwise.consume(3), 2);
        assert_eq!(RotationDirection::AntiClockwise.consume(-3), -2);
        assert_eq!(RotationDirection::AntiClockwise.consume(i16::MIN), i16::MIN + 1);
    }
}
