//! The environment contract the turtle core runs against, plus an in-memory
//! reference implementation.
//!
//! The core itself only ever *calls* these operations; it never implements
//! them. Hosts (a game engine, a datapack runtime, a test harness) implement
//! [`TurtleEnv`] and own the turtle's position. Every operation is synchronous
//! and infallible by contract: it completes before the next statement of the
//! caller executes, and there is no error channel.

use crate::block::BlockKind;
use crate::turtle::TurtleState;
use glam::IVec3;
use std::collections::HashMap;

/// The primitive operations an environment exposes to the turtle core.
///
/// `matches` is the only world *query* the protocol offers: there is no direct
/// "read the block kind" primitive, which is why classification has to be
/// synthesized client-side by [`classify`](crate::probe::classify). Repeated
/// `matches` calls with the turtle at a fixed position must return the same
/// answer; the call itself must not disturb the world.
pub trait TurtleEnv {
    /// Sets the turtle's X coordinate.
    fn move_x(&mut self, value: i32);

    /// Sets the turtle's Y coordinate.
    fn move_y(&mut self, value: i32);

    /// Sets the turtle's Z coordinate.
    fn move_z(&mut self, value: i32);

    /// Writes `block` at the turtle's position.
    fn set_block(&mut self, block: BlockKind);

    /// Returns true iff the block at the turtle's position equals `block`.
    fn matches(&mut self, block: BlockKind) -> bool;

    /// Emits one integer of observable output. Output order is call order.
    fn emit(&mut self, value: i32);
}

/// A sparse in-memory block grid hosting a single turtle.
///
/// Cells that were never written hold the fill block (air by default). The
/// emitted output stream is retained in call order so callers can assert on
/// what a program printed.
#[derive(Clone, Debug, Default)]
pub struct GridWorld {
    turtle: TurtleState,
    blocks: HashMap<IVec3, BlockKind>,
    fill: BlockKind,
    output: Vec<i32>,
}

impl GridWorld {
    /// Creates an empty world filled with air, turtle at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fill block for never-written cells (builder pattern).
    pub fn with_fill(mut self, fill: BlockKind) -> Self {
        self.fill = fill;
        self
    }

    /// Writes `block` at `pos` without moving the turtle (builder pattern).
    pub fn with_block(mut self, pos: IVec3, block: BlockKind) -> Self {
        self.blocks.insert(pos, block);
        self
    }

    /// The turtle's current position state.
    pub fn turtle(&self) -> TurtleState {
        self.turtle
    }

    /// The block at `pos`, falling back to the fill block.
    pub fn block_at(&self, pos: IVec3) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or(self.fill)
    }

    /// Everything emitted so far, in call order.
    pub fn output(&self) -> &[i32] {
        &self.output
    }
}

impl TurtleEnv for GridWorld {
    fn move_x(&mut self, value: i32) {
        self.turtle.set_x(value);
    }

    fn move_y(&mut self, value: i32) {
        self.turtle.set_y(value);
    }

    fn move_z(&mut self, value: i32) {
        self.turtle.set_z(value);
    }

    fn set_block(&mut self, block: BlockKind) {
        self.blocks.insert(self.turtle.position, block);
    }

    fn matches(&mut self, block: BlockKind) -> bool {
        self.block_at(self.turtle.position) == block
    }

    fn emit(&mut self, value: i32) {
        self.output.push(value);
    }
}
