//! Turtle state and operations for grid interpretation.

use crate::error::MazeError;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Unit steps in rotation order: east, south, west, north.
const HEADINGS: [IVec2; 4] = [IVec2::X, IVec2::NEG_Y, IVec2::NEG_X, IVec2::Y];

/// One of the four cardinal directions, stored as an index into [`HEADINGS`].
///
/// Serialized as its index; deserializing anything outside `0..4` fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Heading(u8);

impl TryFrom<u8> for Heading {
    type Error = MazeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < HEADINGS.len() {
            Ok(Self(index))
        } else {
            Err(MazeError::InvalidHeading { index })
        }
    }
}

impl From<Heading> for u8 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

impl Heading {
    pub const EAST: Self = Self(0);
    pub const SOUTH: Self = Self(1);
    pub const WEST: Self = Self(2);
    pub const NORTH: Self = Self(3);

    /// The unit vector for this heading.
    pub fn unit(self) -> IVec2 {
        HEADINGS[self.0 as usize]
    }

    /// One step forward in the cycle (east -> south -> west -> north -> east).
    pub fn turned_forward(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    /// One step backward in the cycle.
    pub fn turned_backward(self) -> Self {
        Self((self.0 + 3) % 4)
    }
}

/// The state of the grid turtle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current lattice position. Starts at the origin.
    pub position: IVec2,

    /// Current heading. Starts east.
    pub heading: Heading,
}

impl TurtleState {
    /// Moves one unit along the current heading and returns the new position.
    pub fn step(&mut self) -> IVec2 {
        self.position += self.heading.unit();
        self.position
    }
}

/// Operations the grid turtle can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move two unit steps forward, recording both positions (`F`).
    Advance,
    /// Rotate forward in the heading cycle (`-`).
    TurnForward,
    /// Rotate backward in the heading cycle (`+`).
    TurnBackward,
    /// No-op. Used for non-terminals that survive rewriting.
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_in_both_directions() {
        assert_eq!(Heading::NORTH.turned_forward(), Heading::EAST);
        assert_eq!(Heading::EAST.turned_backward(), Heading::NORTH);
        assert_eq!(Heading::EAST.turned_forward(), Heading::SOUTH);
        assert_eq!(Heading::WEST.turned_backward(), Heading::SOUTH);
    }

    #[test]
    fn four_turns_are_identity() {
        let mut heading = Heading::WEST;
        for _ in 0..4 {
            heading = heading.turned_forward();
        }
        assert_eq!(heading, Heading::WEST);
        assert_eq!(heading.turned_forward().turned_backward(), heading);
    }

    #[test]
    fn out_of_range_heading_is_rejected() {
        assert_eq!(
            Heading::try_from(4),
            Err(MazeError::InvalidHeading { index: 4 })
        );
        assert!(serde_json::from_str::<Heading>("7").is_err());
        assert!(
            serde_json::from_str::<TurtleState>(r#"{"position":[0,0],"heading":9}"#).is_err()
        );

        let heading: Heading = serde_json::from_str("3").unwrap();
        assert_eq!(heading, Heading::NORTH);
        assert_eq!(serde_json::to_string(&Heading::SOUTH).unwrap(), "1");
    }

    #[test]
    fn step_follows_heading() {
        let mut turtle = TurtleState::default();
        assert_eq!(turtle.step(), IVec2::new(1, 0));
        turtle.heading = Heading::SOUTH;
        assert_eq!(turtle.step(), IVec2::new(1, -1));
    }
}
