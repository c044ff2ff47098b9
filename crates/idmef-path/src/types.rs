//! Parsed path representation.

use std::fmt;

/// Index attached to one path step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpec {
    /// A concrete list position: `source(1)`.
    Exact(usize),
    /// Every present element: `source(*)`. Read-only.
    Wildcard,
    /// Append a fresh element: `source(>>)`. Write-only.
    Append,
}

/// One step of a path: a field or child name plus an optional index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub name: String,
    pub index: Option<IndexSpec>,
}

/// A full parsed path, an ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub steps: Vec<PathStep>,
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match self.index {
            Some(IndexSpec::Exact(n)) => write!(f, "({n})"),
            Some(IndexSpec::Wildcard) => f.write_str("(*)"),
            Some(IndexSpec::Append) => f.write_str("(>>)"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
