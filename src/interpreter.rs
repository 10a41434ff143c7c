//! Interpreter that walks an L-System production and records the turtle's trace.
//!
//! The entry point is [`TurtleInterpreter`]. Register symbol-to-operation
//! mappings via [`TurtleInterpreter::set_op`],
//! [`TurtleInterpreter::populate_standard_symbols`] and
//! [`TurtleInterpreter::ignore_non_terminals`], then call
//! [`TurtleInterpreter::traverse`] with a production.
//!
//! Unlike rewriting, lookup here is strict: a symbol with no registered
//! operation is an error.

use crate::error::{MazeError, MazeResult};
use crate::grammar::Grammar;
use crate::turtle::{TurtleOp, TurtleState};
use glam::IVec2;
use std::collections::HashMap;

/// Ordered turtle positions, duplicates included. Always starts at the origin.
pub type Trace = Vec<IVec2>;

/// Interprets a production as 4-direction turtle movement.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
}

impl TurtleInterpreter {
    /// Creates an interpreter with an empty symbol map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter for `grammar`: the standard movement symbols plus
    /// every non-terminal of the grammar as a no-op.
    pub fn for_grammar(grammar: &Grammar) -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_symbols();
        interpreter.ignore_non_terminals(grammar);
        interpreter
    }

    /// Assigns a single [`TurtleOp`] to a symbol.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Returns the operation registered for `symbol`.
    pub fn op(&self, symbol: char) -> Option<TurtleOp> {
        self.op_map.get(&symbol).copied()
    }

    /// Registers `F`, `-` and `+`.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Advance),
            ('-', TurtleOp::TurnForward),
            ('+', TurtleOp::TurnBackward),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Maps every non-terminal of `grammar` to [`TurtleOp::Ignore`].
    ///
    /// Symbols that already carry an operation keep it.
    pub fn ignore_non_terminals(&mut self, grammar: &Grammar) {
        for symbol in grammar.non_terminals() {
            self.op_map.entry(symbol).or_insert(TurtleOp::Ignore);
        }
    }

    /// Walks `production` in order and returns every position the turtle visits.
    ///
    /// The turtle starts at the origin facing east. `Advance` takes two unit
    /// steps and records both, so corridors end up one cell wide once the trace
    /// is inverted into walls.
    ///
    /// # Errors
    ///
    /// [`MazeError::UnknownSymbol`] for the first symbol with no registered operation.
    pub fn traverse(&self, production: &[char]) -> MazeResult<Trace> {
        let mut turtle = TurtleState::default();
        let mut trace = vec![turtle.position];

        for (index, &symbol) in production.iter().enumerate() {
            let op = self
                .op(symbol)
                .ok_or(MazeError::UnknownSymbol { symbol, index })?;

            match op {
                TurtleOp::Advance => {
                    trace.push(turtle.step());
                    trace.push(turtle.step());
                }
                TurtleOp::TurnForward => turtle.heading = turtle.heading.turned_forward(),
                TurtleOp::TurnBackward => turtle.heading = turtle.heading.turned_backward(),
                TurtleOp::Ignore => {}
            }
        }

        Ok(trace)
    }
}

/// Translates `trace` so its minimum x and minimum y are both zero.
///
/// Order and duplicates are preserved. An empty trace stays empty.
pub fn normalize(trace: &[IVec2]) -> Trace {
    let Some(min) = trace.iter().copied().reduce(IVec2::min) else {
        return Vec::new();
    };
    trace.iter().map(|&point| point - min).collect()
}
