//! Half-step commutation table for a 4-wire unipolar motor (28BYJ-48 + ULN2003).
//!
//! ╔════════════╦═════╦═════╦═════╦═════╦═════╦═════╦═════╦═════╗
//! ║ Wire (bit) ║  1  ║  2  ║  3  ║  4  ║  5  ║  6  ║  7  ║  8  ║
//! ╠════════════╬═════╬═════╬═════╬═════╬═════╬═════╬═════╬═════╣
//! ║ A (0)      ║  X  ║  X  ║     ║     ║     ║     ║     ║  X  ║
//! ║ B (1)      ║     ║  X  ║  X  ║  X  ║     ║     ║     ║     ║
//! ║ C (2)      ║     ║     ║     ║  X  ║  X  ║  X  ║     ║     ║
//! ║ D (3)      ║     ║     ║     ║     ║     ║  X  ║  X  ║  X  ║
//! ╚════════════╩═════╩═════╩═════╩═════╩═════╩═════╩═════╩═════╝

use super::cursor::Cursor;

/// One motor wire, i.e. one driver line of the output port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    A,
    B,
    C,
    D,
}

impl Wire {
    pub const ALL: [Wire; 4] = [Wire::A, Wire::B, Wire::C, Wire::D];

    pub const fn bit(self) -> u8 {
        match self {
            Wire::A => 0x01,
            Wire::B => 0x02,
            Wire::C => 0x04,
            Wire::D => 0x08,
        }
    }
}

/// Set of energised wires, bit `n` drives wire `n` (A = bit 0 .. D = bit 3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhasePattern(u8);

impl PhasePattern {
    /// All four lines de-energised.
    pub const OFF: PhasePattern = PhasePattern(0);

    const MASK: u8 = 0x0F;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_energised(self, wire: Wire) -> bool {
        self.0 & wire.bit() != 0
    }

    /// Number of wires whose state differs between `self` and `other`.
    pub const fn transitions_to(self, other: PhasePattern) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfStep {
    A,
    AB,
    B,
    BC,
    C,
    CD,
    D,
    DA,
}

impl HalfStep {
    pub const fn pattern(self) -> PhasePattern {
        let bits = match self {
            HalfStep::A => Wire::A.bit(),
            HalfStep::AB => Wire::A.bit() | Wire::B.bit(),
            HalfStep::B => Wire::B.bit(),
            HalfStep::BC => Wire::B.bit() | Wire::C.bit(),
            HalfStep::C => Wire::C.bit(),
            HalfStep::CD => Wire::C.bit() | Wire::D.bit(),
            HalfStep::D => Wire::D.bit(),
            HalfStep::DA => Wire::D.bit() | Wire::A.bit(),
        };
        PhasePattern(bits)
    }
}

pub struct StepTable;

impl StepTable {
    pub const LEN: usize = 8;

    /// Clockwise order.
    const HALF_STEPS: [HalfStep; StepTable::LEN] = [
        HalfStep::A,
        HalfStep::AB,
        HalfStep::B,
        HalfStep::BC,
        HalfStep::C,
        HalfStep::CD,
        HalfStep::D,
        HalfStep::DA,
    ];

    const fn half_step(cursor: Cursor) -> HalfStep {
        Self::HALF_STEPS[cursor.index()]
    }

    pub const fn pattern(cursor: Cursor) -> PhasePattern {
        Self::half_step(cursor).pattern()
    }
}
