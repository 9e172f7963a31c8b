use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary function folded over an equation's operands, left to right,
/// starting from zero.
pub trait Operator: Send + Sync {
    fn apply(&self, acc: i64, operand: i64) -> i64;
}

impl<F> Operator for F
where
    F: Fn(i64, i64) -> i64 + Send + Sync,
{
    fn apply(&self, acc: i64, operand: i64) -> i64 {
        self(acc, operand)
    }
}

/// Named operators selectable from the command line or a config file.
/// Arithmetic wraps on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    #[default]
    Add,
    Sub,
    Mul,
    Min,
    Max,
    Xor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Min,
        Self::Max,
        Self::Xor,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" | "+" => Some(Self::Add),
            "sub" | "-" => Some(Self::Sub),
            "mul" | "*" => Some(Self::Mul),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "xor" | "^" => Some(Self::Xor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Min => "min",
            Self::Max => "max",
            Self::Xor => "xor",
        }
    }

    pub fn evaluate(&self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left.wrapping_add(right),
            Self::Sub => left.wrapping_sub(right),
            Self::Mul => left.wrapping_mul(right),
            Self::Min => left.min(right),
            Self::Max => left.max(right),
            Self::Xor => left ^ right,
        }
    }
}

impl Operator for BinaryOp {
    fn apply(&self, acc: i64, operand: i64) -> i64 {
        self.evaluate(acc, operand)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|op| op.as_str()).collect();
            format!("unknown operator '{s}' (expected one of: {})", names.join(", "))
        })
    }
}
