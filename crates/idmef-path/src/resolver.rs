//! Path resolution over a message tree.
//!
//! Writes auto-create the objects a path names: a concrete index past the
//! current end of a list extends the list with empty placeholder elements so
//! indices stay dense. Reads never create anything; anything absent resolves
//! to "no value" rather than an error. Wildcards fan out over every present
//! list element and are valid only in reads.

use std::fmt;

use thiserror::Error;

use idmef_core::{ObjectNode, Value};

use crate::types::{IndexSpec, Path, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("class '{class}' has no field '{name}'")]
    UnknownName { class: &'static str, name: String },
    #[error("value for '{field}' is not a valid {expected}")]
    TypeMismatch { field: String, expected: &'static str },
    #[error("wildcard indices are read-only")]
    WildcardInWrite,
    #[error("path element '{0}' does not support indexing")]
    IndexForbidden(String),
    #[error("listed path element '{0}' needs indexing")]
    IndexRequired(String),
    #[error("path element '{0}' is a leaf and has no children")]
    NotAContainer(String),
    #[error("path element '{0}' is class-valued and cannot hold a value")]
    NotAScalar(String),
}

/// Result of a successful `get`.
///
/// Each wildcard crossed during resolution contributes one [`GetResult::List`]
/// nesting level; branches that resolved to nothing are omitted from their
/// enclosing list.
#[derive(Debug, Clone, PartialEq)]
pub enum GetResult {
    Value(Value),
    Node(ObjectNode),
    List(Vec<GetResult>),
}

impl fmt::Display for GetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetResult::Value(v) => write!(f, "{v}"),
            GetResult::Node(n) => f.write_str(&n.dump()),
            GetResult::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Store `value` at `path`, creating intermediate objects as needed.
///
/// `None` is the unset sentinel: it clears the addressed scalar or removes
/// the addressed sub-object. Unsetting never creates intermediates; a missing
/// intermediate makes the whole call a no-op.
pub fn set(root: &mut ObjectNode, path: &Path, value: Option<&str>) -> Result<(), ResolveError> {
    if path.steps.is_empty() {
        return Ok(());
    }
    set_steps(root, &path.steps, value)
}

/// Remove whatever `path` addresses. Idempotent.
pub fn unset(root: &mut ObjectNode, path: &Path) -> Result<(), ResolveError> {
    set(root, path, None)
}

/// Resolve `path` for reading. `Ok(None)` means the path is well-formed and
/// valid for the schema but nothing is stored there.
pub fn get(root: &ObjectNode, path: &Path) -> Result<Option<GetResult>, ResolveError> {
    if path.steps.is_empty() {
        return Ok(None);
    }
    get_steps(root, &path.steps)
}

/// Validate the un-walked remainder of a path against the schema alone.
///
/// Resolution stops early when a branch is absent; the remaining steps are
/// still checked so a typo deep in a path is reported rather than silently
/// resolving to "no value".
fn validate_tail(
    start: &'static idmef_core::registry::ClassDesc,
    steps: &[PathStep],
    write: bool,
) -> Result<(), ResolveError> {
    let mut class = start;
    for (i, step) in steps.iter().enumerate() {
        let last = i + 1 == steps.len();
        if class.scalar(&step.name).is_some() {
            if !last {
                return Err(ResolveError::NotAContainer(step.name.clone()));
            }
            if step.index.is_some() {
                return Err(ResolveError::IndexForbidden(step.name.clone()));
            }
            return Ok(());
        }
        let Some((_, child)) = class.child(&step.name) else {
            return Err(ResolveError::UnknownName { class: class.name, name: step.name.clone() });
        };
        if !child.listed && step.index.is_some() {
            return Err(ResolveError::IndexForbidden(step.name.clone()));
        }
        match step.index {
            Some(IndexSpec::Wildcard) if write => return Err(ResolveError::WildcardInWrite),
            Some(IndexSpec::Append) if !write => {
                return Err(ResolveError::IndexForbidden(step.name.clone()))
            }
            _ => {}
        }
        if write && child.listed && step.index.is_none() && !last {
            return Err(ResolveError::IndexRequired(step.name.clone()));
        }
        class = child.class;
    }
    Ok(())
}

fn set_steps(node: &mut ObjectNode, steps: &[PathStep], value: Option<&str>) -> Result<(), ResolveError> {
    let step = &steps[0];
    let rest = &steps[1..];
    let class = node.class();

    if let Some((pos, desc)) = class.scalar(&step.name) {
        if !rest.is_empty() {
            return Err(ResolveError::NotAContainer(step.name.clone()));
        }
        if step.index.is_some() {
            return Err(ResolveError::IndexForbidden(step.name.clone()));
        }
        return match value {
            Some(text) => {
                let value = Value::coerce(text, desc.ty).map_err(|_| ResolveError::TypeMismatch {
                    field: step.name.clone(),
                    expected: desc.ty.describe(),
                })?;
                node.set_scalar(pos, value);
                Ok(())
            }
            None => {
                node.clear_scalar(pos);
                Ok(())
            }
        };
    }

    let Some((pos, child)) = class.child(&step.name) else {
        return Err(ResolveError::UnknownName { class: class.name, name: step.name.clone() });
    };

    if !child.listed {
        if step.index.is_some() {
            return Err(ResolveError::IndexForbidden(step.name.clone()));
        }
        if rest.is_empty() {
            return match value {
                None => {
                    node.remove_single(pos);
                    Ok(())
                }
                Some(_) => Err(ResolveError::NotAScalar(step.name.clone())),
            };
        }
        if value.is_none() {
            return match node.single_mut(pos) {
                Some(next) => set_steps(next, rest, None),
                None => validate_tail(child.class, rest, true),
            };
        }
        return set_steps(node.single_mut_or_create(pos), rest, value);
    }

    match step.index {
        Some(IndexSpec::Wildcard) => Err(ResolveError::WildcardInWrite),
        Some(IndexSpec::Exact(n)) => {
            if rest.is_empty() {
                return match value {
                    None => {
                        node.remove_list_item(pos, n);
                        Ok(())
                    }
                    Some(_) => Err(ResolveError::NotAScalar(step.name.clone())),
                };
            }
            if value.is_none() {
                return match node.list_item_mut(pos, n) {
                    Some(next) => set_steps(next, rest, None),
                    None => validate_tail(child.class, rest, true),
                };
            }
            set_steps(node.list_grow_to(pos, n), rest, value)
        }
        Some(IndexSpec::Append) => {
            if value.is_none() {
                return validate_tail(child.class, rest, true);
            }
            if rest.is_empty() {
                return Err(ResolveError::NotAScalar(step.name.clone()));
            }
            set_steps(node.list_push(pos), rest, value)
        }
        None => {
            if !rest.is_empty() {
                return Err(ResolveError::IndexRequired(step.name.clone()));
            }
            match value {
                None => {
                    node.clear_list(pos);
                    Ok(())
                }
                Some(_) => Err(ResolveError::NotAScalar(step.name.clone())),
            }
        }
    }
}

fn get_steps(node: &ObjectNode, steps: &[PathStep]) -> Result<Option<GetResult>, ResolveError> {
    let step = &steps[0];
    let rest = &steps[1..];
    let class = node.class();

    if let Some((pos, _)) = class.scalar(&step.name) {
        if !rest.is_empty() {
            return Err(ResolveError::NotAContainer(step.name.clone()));
        }
        if step.index.is_some() {
            return Err(ResolveError::IndexForbidden(step.name.clone()));
        }
        return Ok(node.scalar(pos).cloned().map(GetResult::Value));
    }

    let Some((pos, child)) = class.child(&step.name) else {
        return Err(ResolveError::UnknownName { class: class.name, name: step.name.clone() });
    };

    if !child.listed {
        if step.index.is_some() {
            return Err(ResolveError::IndexForbidden(step.name.clone()));
        }
        return match node.single(pos) {
            Some(next) => finish_get(next, rest),
            None => {
                validate_tail(child.class, rest, false)?;
                Ok(None)
            }
        };
    }

    match step.index {
        Some(IndexSpec::Exact(n)) => match node.list(pos).get(n) {
            Some(next) => finish_get(next, rest),
            None => {
                validate_tail(child.class, rest, false)?;
                Ok(None)
            }
        },
        Some(IndexSpec::Append) => Err(ResolveError::IndexForbidden(step.name.clone())),
        // An index-less listed step reads like a wildcard: iterate the list.
        Some(IndexSpec::Wildcard) | None => {
            validate_tail(child.class, rest, false)?;
            let mut out = Vec::new();
            for item in node.list(pos) {
                if let Some(result) = finish_get(item, rest)? {
                    out.push(result);
                }
            }
            Ok(Some(GetResult::List(out)))
        }
    }
}

fn finish_get(node: &ObjectNode, rest: &[PathStep]) -> Result<Option<GetResult>, ResolveError> {
    if rest.is_empty() {
        Ok(Some(GetResult::Node(node.clone())))
    } else {
        get_steps(node, rest)
    }
}
