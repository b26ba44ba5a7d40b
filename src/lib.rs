//! # blockgrid-turtle
//!
//! An engine-agnostic control interface for a turtle agent in a block-grid
//! world.
//!
//! It decouples lowered turtle programs from the world that hosts them: hosts
//! implement the [`TurtleEnv`] primitives (per-axis positioning, block write,
//! block membership test, integer output), and the crate supplies what the
//! primitives alone cannot express — most notably [`classify`], which derives
//! the concrete [`BlockKind`] at the turtle's position from the membership
//! test, the only world query the protocol offers.

pub mod block;
pub mod env;
pub mod interpreter;
pub mod layout;
pub mod probe;
pub mod turtle;

pub use block::*;
pub use env::*;
pub use interpreter::*;
pub use layout::*;
pub use probe::*;
pub use turtle::*;
