//! Interpreter that replays a sequence of [`TurtleOp`]s against a [`TurtleEnv`].
//!
//! A lowered turtle program is an ordered list of calls against the
//! environment interface. [`TurtleInterpreter::run`] walks that list in order,
//! dispatching each operation to the corresponding environment primitive.
//! Execution is entirely synchronous: each call completes before the next
//! operation is dispatched, and emitted output order is operation order.

use crate::env::TurtleEnv;
use crate::probe::classify;
use crate::turtle::TurtleOp;

/// Replays turtle programs against an environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurtleInterpreter;

impl TurtleInterpreter {
    /// Creates a new interpreter.
    pub fn new() -> Self {
        Self
    }

    /// Executes `ops` in order against `env`.
    ///
    /// [`TurtleOp::EmitBlock`] classifies the block at the turtle's current
    /// position via [`classify`] and emits its protocol id. All other
    /// operations map one-to-one onto environment primitives.
    pub fn run<E: TurtleEnv + ?Sized>(&self, env: &mut E, ops: &[TurtleOp]) {
        for op in ops {
            match *op {
                TurtleOp::MoveX(value) => env.move_x(value),
                TurtleOp::MoveY(value) => env.move_y(value),
                TurtleOp::MoveZ(value) => env.move_z(value),
                TurtleOp::SetBlock(block) => env.set_block(block),
                TurtleOp::EmitBlock => {
                    let kind = classify(env);
                    env.emit(kind.id());
                }
                TurtleOp::Emit(value) => env.emit(value),
            }
        }
    }
}
