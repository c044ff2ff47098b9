//! In-memory object tree for one IDMEF message.
//!
//! An [`ObjectNode`] owns the scalar fields and sub-objects of one class
//! instance, indexed positionally by registry declaration order. The tree
//! exposes structural accessors only; path parsing and navigation live in the
//! path crate.

use std::fmt;

use crate::registry::{self, ClassDesc};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
enum ChildSlot {
    Single(Option<Box<ObjectNode>>),
    List(Vec<ObjectNode>),
}

/// One object of the message tree.
///
/// Slot positions passed to the accessors are registry declaration positions
/// of the node's class; calling a list accessor on a single-valued slot (or
/// vice versa) is a caller bug and panics.
#[derive(Debug, Clone)]
pub struct ObjectNode {
    class: &'static ClassDesc,
    scalars: Vec<Option<Value>>,
    children: Vec<ChildSlot>,
}

impl ObjectNode {
    /// Creates an empty node of the given class. All fields start absent.
    pub fn new(class: &'static ClassDesc) -> Self {
        let children = class
            .children
            .iter()
            .map(|c| if c.listed { ChildSlot::List(Vec::new()) } else { ChildSlot::Single(None) })
            .collect();
        Self {
            class,
            scalars: vec![None; class.scalars.len()],
            children,
        }
    }

    pub fn class(&self) -> &'static ClassDesc {
        self.class
    }

    /// True when no scalar is set and no child object is present.
    pub fn is_empty(&self) -> bool {
        self.scalars.iter().all(Option::is_none)
            && self.children.iter().all(|slot| match slot {
                ChildSlot::Single(child) => child.is_none(),
                ChildSlot::List(items) => items.is_empty(),
            })
    }

    pub fn scalar(&self, pos: usize) -> Option<&Value> {
        self.scalars[pos].as_ref()
    }

    pub fn set_scalar(&mut self, pos: usize, value: Value) {
        self.scalars[pos] = Some(value);
    }

    /// Clears a scalar back to absent. Absent is distinct from empty text.
    pub fn clear_scalar(&mut self, pos: usize) {
        self.scalars[pos] = None;
    }

    pub fn single(&self, pos: usize) -> Option<&ObjectNode> {
        match &self.children[pos] {
            ChildSlot::Single(child) => child.as_deref(),
            ChildSlot::List(_) => panic!("child '{}' is listed", self.class.children[pos].name),
        }
    }

    pub fn single_mut(&mut self, pos: usize) -> Option<&mut ObjectNode> {
        match &mut self.children[pos] {
            ChildSlot::Single(child) => child.as_deref_mut(),
            ChildSlot::List(_) => panic!("child '{}' is listed", self.class.children[pos].name),
        }
    }

    /// Returns the single-valued child, creating it empty if absent.
    pub fn single_mut_or_create(&mut self, pos: usize) -> &mut ObjectNode {
        let class = self.class.children[pos].class;
        match &mut self.children[pos] {
            ChildSlot::Single(child) => child.get_or_insert_with(|| Box::new(ObjectNode::new(class))),
            ChildSlot::List(_) => panic!("child '{}' is listed", self.class.children[pos].name),
        }
    }

    pub fn remove_single(&mut self, pos: usize) {
        match &mut self.children[pos] {
            ChildSlot::Single(child) => *child = None,
            ChildSlot::List(_) => panic!("child '{}' is listed", self.class.children[pos].name),
        }
    }

    pub fn list(&self, pos: usize) -> &[ObjectNode] {
        match &self.children[pos] {
            ChildSlot::List(items) => items,
            ChildSlot::Single(_) => {
                panic!("child '{}' is not listed", self.class.children[pos].name)
            }
        }
    }

    fn list_mut(&mut self, pos: usize) -> &mut Vec<ObjectNode> {
        match &mut self.children[pos] {
            ChildSlot::List(items) => items,
            ChildSlot::Single(_) => {
                panic!("child '{}' is not listed", self.class.children[pos].name)
            }
        }
    }

    pub fn list_item_mut(&mut self, pos: usize, index: usize) -> Option<&mut ObjectNode> {
        self.list_mut(pos).get_mut(index)
    }

    /// Returns element `index`, extending the list with empty placeholder
    /// nodes first when it is shorter. Indices stay dense.
    pub fn list_grow_to(&mut self, pos: usize, index: usize) -> &mut ObjectNode {
        let class = self.class.children[pos].class;
        let items = self.list_mut(pos);
        while items.len() <= index {
            items.push(ObjectNode::new(class));
        }
        &mut items[index]
    }

    /// Appends a fresh empty element and returns it.
    pub fn list_push(&mut self, pos: usize) -> &mut ObjectNode {
        let class = self.class.children[pos].class;
        let items = self.list_mut(pos);
        items.push(ObjectNode::new(class));
        let last = items.len() - 1;
        &mut items[last]
    }

    /// Removes element `index`; later elements shift down. Out-of-range
    /// indices are a no-op.
    pub fn remove_list_item(&mut self, pos: usize, index: usize) {
        let items = self.list_mut(pos);
        if index < items.len() {
            items.remove(index);
        }
    }

    pub fn clear_list(&mut self, pos: usize) {
        self.list_mut(pos).clear();
    }

    /// Canonical textual dump: one `path=value` line per present scalar.
    ///
    /// Traversal order is deterministic: scalars in declaration order, then
    /// children in declaration order, list elements in index order. Dumps of
    /// the root message start at its children (`alert.…`); dumps of any other
    /// node are prefixed with that node's class name.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if std::ptr::eq(self.class, registry::root()) {
            self.dump_fields(&mut out, "");
        } else {
            self.dump_fields(&mut out, &format!("{}.", self.class.name));
        }
        out
    }

    fn dump_fields(&self, out: &mut String, prefix: &str) {
        for (i, desc) in self.class.scalars.iter().enumerate() {
            if let Some(value) = &self.scalars[i] {
                out.push_str(prefix);
                out.push_str(desc.name);
                out.push('=');
                out.push_str(&value.as_text());
                out.push('\n');
            }
        }
        for (i, desc) in self.class.children.iter().enumerate() {
            match &self.children[i] {
                ChildSlot::Single(Some(child)) => {
                    child.dump_fields(out, &format!("{prefix}{}.", desc.name));
                }
                ChildSlot::Single(None) => {}
                ChildSlot::List(items) => {
                    for (k, child) in items.iter().enumerate() {
                        child.dump_fields(out, &format!("{prefix}{}({k}).", desc.name));
                    }
                }
            }
        }
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.class, other.class)
            && self.scalars == other.scalars
            && self.children == other.children
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
