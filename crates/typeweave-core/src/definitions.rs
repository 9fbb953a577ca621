//! Named and recursive type definitions.
//!
//! # Overview
//!
//! A [`DefinitionMap`] holds type bodies outside the inline tree, keyed by
//! identifier, in first-registered order. Nodes point into it with
//! [`Node::DefinitionReference`].
//!
//! A [`Registry`] builds a `DefinitionMap` while walking an external type graph.
//! It maps each external identity to exactly one identifier and breaks cycles:
//! the identifier (with a placeholder body) is registered *before* the body is
//! resolved, so a recursive visit of the same identity returns a reference
//! instead of descending again.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::node::Node;
use crate::utils::to_identifier;
use crate::{Error, Result};

/// Fallback identifier base for definitions without a usable label.
const FALLBACK_NAME: &str = "Definition";

/// Names emitted code already binds: the TypeBox namespace, JavaScript globals,
/// and the TypeScript utility types the declaration emitter references.
const RESERVED_NAMES: [&str; 20] = [
    "Array", "BigInt", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math", "Number",
    "Object", "Promise", "Record", "RegExp", "Set", "String", "Symbol", "Type", "WeakMap",
    "WeakSet",
];

/// A registered type body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub node: Node,
    /// Human-readable name of the source type (e.g. `Tree<string>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A root node together with the definitions it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub root: Node,
    pub definitions: DefinitionMap,
}

/// Identifier → definition, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionMap {
    entries: IndexMap<String, Definition>,
}

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&Definition> {
        self.entries.get(identifier)
    }

    pub fn get_node(&self, identifier: &str) -> Option<&Node> {
        self.entries.get(identifier).map(|d| &d.node)
    }

    /// Insert or replace a definition. A replaced entry keeps its position.
    pub fn insert(
        &mut self,
        identifier: impl Into<String>,
        node: Node,
        label: Option<String>,
    ) -> Option<Definition> {
        self.entries
            .insert(identifier.into(), Definition { node, label })
    }

    /// Replace the body of an existing definition, keeping its label.
    fn set_node(&mut self, identifier: &str, node: Node) {
        if let Some(def) = self.entries.get_mut(identifier) {
            def.node = node;
        }
    }

    /// Iterate in first-registered order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.entries.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// A reference node to a registered definition, carrying its label.
    pub fn reference(&self, identifier: &str) -> Option<Node> {
        let def = self.entries.get(identifier)?;
        Some(Node::reference(identifier, def.label.clone()))
    }

    /// Follow definition references until a non-reference body is reached.
    ///
    /// Definitions that only alias each other in a loop resolve to an error
    /// rather than spinning.
    pub fn resolve<'a>(&'a self, node: &'a Node) -> Result<&'a Node> {
        let mut current = node;
        for _ in 0..=self.entries.len() {
            let Node::DefinitionReference { identifier, .. } = current else {
                return Ok(current);
            };
            current = self
                .get_node(identifier)
                .ok_or_else(|| Error::UnresolvedReference(identifier.clone()))?;
        }
        match current {
            Node::DefinitionReference { identifier, .. } => {
                Err(Error::UnresolvedReference(identifier.clone()))
            }
            resolved => Ok(resolved),
        }
    }

    /// Identifiers referenced directly by a definition's body, in order, without duplicates.
    pub fn references_of(&self, identifier: &str) -> Vec<&str> {
        let mut out = Vec::new();
        if let Some(node) = self.get_node(identifier) {
            collect_references(node, &mut out);
        }
        out
    }

    /// Identifiers ordered so each definition follows the definitions it references.
    ///
    /// Otherwise registration order is kept. Definitions on a cycle appear in
    /// the order the walk first reaches them.
    pub fn dependency_order(&self) -> Vec<&str> {
        let mut order = Vec::with_capacity(self.len());
        let mut visited = HashSet::new();
        for id in self.identifiers() {
            self.visit_dependencies(id, &mut visited, &mut order);
        }
        order
    }

    fn visit_dependencies<'a>(
        &'a self,
        id: &'a str,
        visited: &mut HashSet<&'a str>,
        order: &mut Vec<&'a str>,
    ) {
        if !visited.insert(id) {
            return;
        }
        for dependency in self.references_of(id) {
            if self.contains(dependency) {
                self.visit_dependencies(dependency, visited, order);
            }
        }
        order.push(id);
    }

    /// Identifiers of definitions that can reach themselves through references.
    pub fn cyclic_identifiers(&self) -> HashSet<String> {
        let mut cyclic = HashSet::new();
        for id in self.identifiers() {
            if self.reaches(id, id) {
                cyclic.insert(id.to_string());
            }
        }
        cyclic
    }

    fn reaches(&self, from: &str, target: &str) -> bool {
        let mut stack: Vec<&str> = self.references_of(from);
        let mut seen: HashSet<&str> = HashSet::new();
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if seen.insert(id) {
                stack.extend(self.references_of(id));
            }
        }
        false
    }

    /// Substitute every non-recursive definition into its use sites and drop it.
    ///
    /// Applies to `root` and to the bodies of the definitions that remain.
    /// Returns the rewritten root.
    pub fn inline_acyclic(&mut self, root: &Node) -> Node {
        let cyclic = self.cyclic_identifiers();
        let inlined: Vec<String> = self
            .identifiers()
            .filter(|id| !cyclic.contains(*id))
            .map(str::to_string)
            .collect();
        if inlined.is_empty() {
            return root.clone();
        }

        let new_root = self.inline_node(root, &cyclic);
        let kept: IndexMap<String, Definition> = self
            .entries
            .iter()
            .filter(|(id, _)| cyclic.contains(id.as_str()))
            .map(|(id, def)| {
                let node = self.inline_node(&def.node, &cyclic);
                (
                    id.clone(),
                    Definition {
                        node,
                        label: def.label.clone(),
                    },
                )
            })
            .collect();

        for id in &inlined {
            debug!(identifier = %id, "inlined non-recursive definition");
        }
        self.entries = kept;
        new_root
    }

    fn inline_node(&self, node: &Node, cyclic: &HashSet<String>) -> Node {
        match node {
            Node::DefinitionReference { identifier, .. } if !cyclic.contains(identifier) => {
                match self.get_node(identifier) {
                    Some(body) => self.inline_node(body, cyclic),
                    None => node.clone(),
                }
            }
            _ => node.map_children(&mut |child| self.inline_node(child, cyclic)),
        }
    }
}

fn collect_references<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    if let Node::DefinitionReference { identifier, .. } = node {
        if !out.contains(&identifier.as_str()) {
            out.push(identifier);
        }
        return;
    }
    for child in node.children() {
        collect_references(child, out);
    }
}

/// Builds a [`DefinitionMap`] keyed by external type identity.
///
/// `K` is whatever uniquely identifies an external type for the lifetime of one
/// extraction call, typically the checker's type handle plus its type arguments.
#[derive(Debug)]
pub struct Registry<K> {
    definitions: DefinitionMap,
    identities: HashMap<K, String>,
    /// Identifiers whose body is still being resolved.
    pending: HashSet<String>,
    /// Number of identities interned so far.
    interned: u32,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            definitions: DefinitionMap::new(),
            identities: HashMap::new(),
            pending: HashSet::new(),
            interned: 0,
        }
    }
}

impl<K: Hash + Eq + Debug> Registry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference to the definition registered for `key`, if any.
    pub fn lookup(&self, key: &K) -> Option<Node> {
        let id = self.identities.get(key)?;
        self.definitions.reference(id)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.identities.contains_key(key)
    }

    /// Identifier assigned to `key`.
    pub fn identifier(&self, key: &K) -> Option<&str> {
        self.identities.get(key).map(String::as_str)
    }

    /// Whether `key` is registered but its body is not resolved yet.
    pub fn is_pending(&self, key: &K) -> bool {
        self.identities
            .get(key)
            .is_some_and(|id| self.pending.contains(id))
    }

    /// Return a reference for `key`, resolving its body on first sight.
    ///
    /// The identifier and an `unknown` placeholder are registered before
    /// `resolve` runs, so re-entering with the same key from inside `resolve`
    /// returns a reference immediately.
    pub fn intern(
        &mut self,
        key: K,
        label: Option<&str>,
        resolve: impl FnOnce(&mut Self) -> Result<Node>,
    ) -> Result<Node> {
        if let Some(reference) = self.lookup(&key) {
            debug!(?key, pending = self.is_pending(&key), "definition already registered");
            return Ok(reference);
        }

        let identifier = self.reserve_identifier(key, label);
        let body = resolve(self)?;
        self.complete(&identifier, body);
        Ok(Node::reference(identifier, label.map(str::to_string)))
    }

    /// Register `key` with a placeholder body and return its reference.
    ///
    /// If `key` is already registered, returns the existing reference.
    pub fn reserve(&mut self, key: K, label: Option<&str>) -> Node {
        if let Some(reference) = self.lookup(&key) {
            return reference;
        }
        let identifier = self.reserve_identifier(key, label);
        Node::reference(identifier, label.map(str::to_string))
    }

    fn reserve_identifier(&mut self, key: K, label: Option<&str>) -> String {
        let identifier = self.unique_identifier(label);
        self.interned += 1;
        debug!(
            ?key,
            identifier = %identifier,
            count = self.interned,
            "registering definition"
        );

        self.definitions
            .insert(identifier.clone(), Node::Unknown, label.map(str::to_string));
        self.pending.insert(identifier.clone());
        self.identities.insert(key, identifier.clone());
        identifier
    }

    /// Store the resolved body of a reserved definition.
    pub fn complete(&mut self, identifier: &str, body: Node) {
        self.definitions.set_node(identifier, body);
        self.pending.remove(identifier);
    }

    /// Number of identities interned so far.
    pub fn interned_count(&self) -> u32 {
        self.interned
    }

    pub fn definitions(&self) -> &DefinitionMap {
        &self.definitions
    }

    pub fn into_definitions(self) -> DefinitionMap {
        self.definitions
    }

    fn unique_identifier(&self, label: Option<&str>) -> String {
        let base = label
            .and_then(to_identifier)
            .unwrap_or_else(|| FALLBACK_NAME.to_string());
        if self.is_available(&base) {
            return base;
        }

        let mut counter = 2;
        loop {
            let name = format!("{base}{counter}");
            if self.is_available(&name) {
                return name;
            }
            counter += 1;
        }
    }

    fn is_available(&self, name: &str) -> bool {
        !RESERVED_NAMES.contains(&name) && !self.definitions.contains(name)
    }
}
