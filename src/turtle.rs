//! Turtle state and operations for block-grid interpretation.

use crate::block::BlockKind;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// The position state of the block-grid turtle.
///
/// Coordinates are independent integers mutated one axis at a time, matching
/// the per-axis positioning primitives of the environment interface. The
/// probing core never reads or writes this directly; it is owned by whichever
/// environment hosts the turtle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current grid-space position of the turtle.
    pub position: IVec3,
}

impl TurtleState {
    /// Creates a turtle at the given position.
    pub fn new(position: IVec3) -> Self {
        Self { position }
    }

    /// Sets the X coordinate, leaving the other axes untouched.
    pub fn set_x(&mut self, value: i32) {
        self.position.x = value;
    }

    /// Sets the Y coordinate, leaving the other axes untouched.
    pub fn set_y(&mut self, value: i32) {
        self.position.y = value;
    }

    /// Sets the Z coordinate, leaving the other axes untouched.
    pub fn set_z(&mut self, value: i32) {
        self.position.z = value;
    }
}

/// Operations that can be performed against a turtle environment.
///
/// A compiled program is, from the environment's point of view, nothing more
/// than an ordered sequence of these calls; see
/// [`TurtleInterpreter`](crate::interpreter::TurtleInterpreter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    // --- Spatial Navigation ---
    /// Set the turtle's X coordinate.
    MoveX(i32),
    /// Set the turtle's Y coordinate.
    MoveY(i32),
    /// Set the turtle's Z coordinate.
    MoveZ(i32),

    // --- World Access ---
    /// Write a block at the turtle's position.
    SetBlock(BlockKind),
    /// Classify the block at the turtle's position and emit its id.
    EmitBlock,

    // --- Output ---
    /// Emit a literal integer.
    Emit(i32),
}
