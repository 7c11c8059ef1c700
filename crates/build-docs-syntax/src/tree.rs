//! Nested parameter tree builder.
//!
//! `@param` lines arrive flat and in source order; dotted paths
//! (`address.street`) and array markers (`favouriteFoods[].cuisine`) encode
//! the hierarchy. Nodes live in an arena and stay mutable until [`finish`],
//! because a container's own line may come before or after its children.
//!
//! [`finish`]: ParamTreeBuilder::finish

use crate::annotation::{ParamLine, TypeExpr};
use crate::model::{ParamNode, ParamType};
use std::collections::HashMap;

#[derive(Debug)]
struct Slot {
    title: String,
    ty: ParamType,
    description: String,
    items: Option<usize>,
    properties: Vec<(String, usize)>,
}

impl Slot {
    fn container(title: &str) -> Self {
        Slot {
            title: title.to_string(),
            ty: ParamType::Object,
            description: String::new(),
            items: None,
            properties: Vec::new(),
        }
    }
}

/// Incremental builder for one comment block's parameter tree.
#[derive(Debug, Default)]
pub struct ParamTreeBuilder {
    slots: Vec<Slot>,
    roots: Vec<usize>,
    /// Full path (with `[]` markers) → slot index
    by_path: HashMap<String, usize>,
}

impl ParamTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `@param` line.
    ///
    /// Repeating a path overwrites `type` and `description` but keeps the
    /// children already attached to it.
    pub fn push(&mut self, line: &ParamLine) {
        let segments = line.path.segments();
        let Some(last) = segments.len().checked_sub(1) else {
            return;
        };

        let mut parent: Option<usize> = None;
        let mut key = String::new();

        for (i, seg) in segments.iter().enumerate() {
            if !key.is_empty() {
                key.push('.');
            }
            key.push_str(&seg.name);
            let idx = self.child(parent, &key, &seg.name);

            if i == last {
                self.define(idx, &key, seg.is_array, line);
                break;
            }

            parent = Some(if seg.is_array {
                self.slots[idx].ty = ParamType::Array;
                let items = self.ensure_items(idx, &key);
                self.slots[items].ty = ParamType::Object;
                key.push_str("[]");
                items
            } else {
                self.slots[idx].ty = ParamType::Object;
                idx
            });
        }
    }

    /// Freeze the arena into owned top-level nodes, in first-seen order.
    pub fn finish(self) -> Vec<ParamNode> {
        self.roots.iter().map(|&idx| self.assemble(idx)).collect()
    }

    /// Look up the slot for `key`, creating it under `parent` if missing.
    fn child(&mut self, parent: Option<usize>, key: &str, name: &str) -> usize {
        if let Some(&idx) = self.by_path.get(key) {
            return idx;
        }
        let idx = self.slots.len();
        self.slots.push(Slot::container(name));
        match parent {
            Some(p) => self.slots[p].properties.push((name.to_string(), idx)),
            None => self.roots.push(idx),
        }
        self.by_path.insert(key.to_string(), idx);
        idx
    }

    /// Items slot of an array node, created on first use.
    fn ensure_items(&mut self, idx: usize, key: &str) -> usize {
        if let Some(items) = self.slots[idx].items {
            return items;
        }
        let items = self.slots.len();
        self.slots.push(Slot::container(""));
        self.slots[idx].items = Some(items);
        self.by_path.insert(format!("{key}[]"), items);
        items
    }

    /// Apply a leaf line's own type and description.
    ///
    /// A container whose children were seen first stays an `object` unless
    /// its own line makes it an array; only the description is merged.
    fn define(&mut self, idx: usize, key: &str, leaf_is_array: bool, line: &ParamLine) {
        let ty = line.ty.clone().unwrap_or_default();
        self.slots[idx].description = line.description.clone();

        if leaf_is_array {
            self.slots[idx].ty = ParamType::Array;
            let items = self.ensure_items(idx, key);
            self.apply_type(items, &format!("{key}[]"), &ty);
        } else if !self.slots[idx].properties.is_empty() && !matches!(ty, TypeExpr::Array(_)) {
            self.slots[idx].ty = ParamType::Object;
        } else {
            self.apply_type(idx, key, &ty);
        }
    }

    fn apply_type(&mut self, idx: usize, key: &str, ty: &TypeExpr) {
        match ty {
            TypeExpr::Named(named) => self.slots[idx].ty = named.clone(),
            TypeExpr::Array(element) => {
                self.slots[idx].ty = ParamType::Array;
                if let Some(element) = element {
                    let items = self.ensure_items(idx, key);
                    self.apply_type(items, &format!("{key}[]"), element);
                }
            }
        }
    }

    fn assemble(&self, idx: usize) -> ParamNode {
        let slot = &self.slots[idx];

        let items = match slot.items {
            Some(items) if slot.ty == ParamType::Array => Some(Box::new(self.assemble(items))),
            _ => None,
        };
        let properties = if slot.ty == ParamType::Object {
            slot.properties
                .iter()
                .map(|(key, child)| (key.clone(), self.assemble(*child)))
                .collect()
        } else {
            Vec::new()
        };

        ParamNode {
            title: slot.title.clone(),
            ty: slot.ty.clone(),
            description: slot.description.clone(),
            items,
            properties,
        }
    }
}
