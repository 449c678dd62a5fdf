use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings shared by every conversion a `Converter` performs.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyConfig {
    #[serde(default)]
    pub traversal: Traversal,
}

/// Order in which 2D copies visit cells.
///
/// Every cell is visited exactly once either way, so the choice never changes
/// the output. `ColumnMajor` walks columns in the outer loop, which matches
/// nalgebra's storage order.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    #[default]
    ColumnMajor,
    RowMajor,
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "column_major" | "column" | "col" => Ok(Traversal::ColumnMajor),
            "row_major" | "row" => Ok(Traversal::RowMajor),
            _ => Err(format!(
                "Unknown traversal order: {}. Expected one of `column_major`, `column`, `col`, `row_major` or `row`",
                s
            )),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::ColumnMajor => write!(f, "column_major"),
            Traversal::RowMajor => write!(f, "row_major"),
        }
    }
}

impl CopyConfig {
    pub fn new(traversal: Traversal) -> Self {
        Self { traversal }
    }
}
