pub mod context;
pub mod operators;
pub mod solution;
pub mod sources;

pub use context::Context;
pub use operators::{BinaryOp, Operator};
pub use solution::Solution;
pub use sources::UnresolvedSource;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, trace};

use crate::equations::{EquationStore, Operand};

pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Which re-entries count as a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleGuard {
    /// Any variable already on the current evaluation path.
    #[default]
    Path,
    /// Only the requested variable. Other cycles run into the depth limit.
    Root,
}

impl CycleGuard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Root => "root",
        }
    }
}

impl fmt::Display for CycleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CycleGuard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(Self::Path),
            "root" => Ok(Self::Root),
            _ => Err(format!("unknown cycle guard '{s}' (expected path or root)")),
        }
    }
}

/// Computes variable values from an [`EquationStore`].
///
/// The resolver holds only configuration; each [`Resolver::resolve`] call
/// builds its own [`Context`], so one resolver can serve any number of
/// stores and threads.
pub struct Resolver {
    operator: Box<dyn Operator>,
    cycle_guard: CycleGuard,
    max_depth: usize,
}

impl Resolver {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn with_operator<O: Operator + 'static>(operator: O) -> Self {
        Self::builder().with_operator(operator).build()
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn cycle_guard(&self) -> CycleGuard {
        self.cycle_guard
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Solves `target`. Unknown variables, cycles and over-deep chains give
    /// a [`Solution`] without a value rather than an error.
    pub fn resolve(&self, store: &EquationStore, target: &str) -> Solution {
        debug!("solve {target}");
        let mut ctx = Context::new(store, target);
        let result = self.evaluate(target, &mut ctx);

        match &result {
            Ok(value) => debug!("{target} = {value} after {} evaluations", ctx.phase()),
            Err(reason) => info!("{target} has no solution: {reason}"),
        }

        Solution::from_result(target, result)
    }

    pub fn resolve_all(&self, store: &EquationStore) -> Vec<Solution> {
        store
            .variables()
            .into_iter()
            .map(|name| self.resolve(store, name))
            .collect()
    }

    // Iterative so that `max_depth`, not the thread's stack size, bounds how
    // deep a chain can go. Stops at the first operand without a value.
    fn evaluate<'a>(
        &self,
        root: &'a str,
        ctx: &mut Context<'a>,
    ) -> Result<i64, UnresolvedSource> {
        let mut stack = vec![self.enter(root, ctx)?];
        let mut returned = None;

        while let Some(frame) = stack.last_mut() {
            if let Some(value) = returned.take() {
                frame.acc = self.operator.apply(frame.acc, value);
            }
            let operands: &'a [Operand] = frame.operands;
            let operand = operands.get(frame.next);
            frame.next += 1;

            match operand {
                Some(Operand::Literal(value)) => {
                    frame.acc = self.operator.apply(frame.acc, *value);
                }
                Some(Operand::Variable(name)) => match self.enter(name, ctx) {
                    Ok(child) => stack.push(child),
                    Err(reason) => {
                        for frame in stack.drain(..).rev() {
                            ctx.leave(frame.variable, frame.first_entry);
                        }
                        return Err(reason);
                    }
                },
                None => {
                    let acc = frame.acc;
                    if let Some(done) = stack.pop() {
                        ctx.leave(done.variable, done.first_entry);
                    }
                    returned = Some(acc);
                }
            }
        }

        returned.ok_or_else(|| UnresolvedSource::DetachedEntry {
            variable: ctx.root().to_string(),
        })
    }

    /// Checks whether `variable` may be evaluated here and, if so, pushes it
    /// onto the context path and returns the frame that folds its operands.
    fn enter<'a>(
        &self,
        variable: &'a str,
        ctx: &mut Context<'a>,
    ) -> Result<Frame<'a>, UnresolvedSource> {
        if ctx.phase() == 0 && variable != ctx.root() {
            return Err(UnresolvedSource::DetachedEntry {
                variable: ctx.root().to_string(),
            });
        }
        if ctx.phase() > 0 && variable == ctx.root() {
            return Err(UnresolvedSource::cycle(variable));
        }
        if self.cycle_guard == CycleGuard::Path && ctx.is_on_path(variable) {
            return Err(UnresolvedSource::cycle(variable));
        }
        if ctx.depth() >= self.max_depth {
            return Err(UnresolvedSource::DepthExceeded {
                limit: self.max_depth,
            });
        }
        ctx.advance_phase();

        let operands = ctx
            .store()
            .lookup(variable)
            .ok_or_else(|| UnresolvedSource::undefined(variable))?;
        trace!("evaluating {variable} under {:?}", ctx.path());

        Ok(Frame {
            variable,
            operands,
            next: 0,
            acc: 0,
            first_entry: ctx.enter(variable),
        })
    }
}

/// One variable whose operands are being folded.
struct Frame<'a> {
    variable: &'a str,
    operands: &'a [Operand],
    next: usize,
    acc: i64,
    first_entry: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ResolverBuilder {
    operator: Option<Box<dyn Operator>>,
    cycle_guard: CycleGuard,
    max_depth: usize,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            operator: None,
            cycle_guard: CycleGuard::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_operator<O: Operator + 'static>(mut self, operator: O) -> Self {
        self.operator = Some(Box::new(operator));
        self
    }

    pub fn with_cycle_guard(mut self, cycle_guard: CycleGuard) -> Self {
        self.cycle_guard = cycle_guard;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            operator: self
                .operator
                .unwrap_or_else(|| Box::new(BinaryOp::default())),
            cycle_guard: self.cycle_guard,
            max_depth: self.max_depth,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
