//! Composite nodes: two child signals joined by an elementwise operator.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::series::Series;

use super::{GenerateContext, Generator, Signal};

/// Binary elementwise operator applied by a [`Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Mul,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }

    /// Combine `left` and `right` position by position.
    pub fn apply(self, left: Series, right: &Series) -> Result<Series> {
        match self {
            Self::Add => left.add(right),
            Self::Mul => left.mul(right),
        }
    }
}

/// A node whose values are `left <op> right` at every tick.
///
/// Both children are generated with the identical context, seed included.
/// Two noise leaves under one composite therefore draw the same stream
/// unless they are sampled through distinct seeds.
#[derive(Debug, Clone)]
pub struct Composite {
    left: Signal,
    right: Signal,
    op: Operator,
}

impl Composite {
    pub fn new(left: Signal, right: Signal, op: Operator) -> Self {
        Self { left, right, op }
    }

    pub fn left(&self) -> &Signal {
        &self.left
    }

    pub fn right(&self) -> &Signal {
        &self.right
    }

    pub fn operator(&self) -> Operator {
        self.op
    }
}

impl Generator for Composite {
    fn describe(&self) -> String {
        format!(
            "({} {} {})",
            self.left.describe(),
            self.op.symbol(),
            self.right.describe()
        )
    }

    fn generate(&self, ctx: &GenerateContext) -> Result<Series> {
        trace!(op = self.op.symbol(), ticks = ctx.tick_count, "evaluating composite");
        let left = self.left.generate(ctx)?;
        let right = self.right.generate(ctx)?;
        self.op.apply(left, &right)
    }
}
