//! The persistent state tree.
//!
//! A [`Tree`] is an immutable map from string keys to [`Value`]s. Writing to a
//! tree never changes it: [`Tree::update`] returns a new tree that shares every
//! subtree off the written path with the original. Keys are kept sorted so that
//! debug output is deterministic.

use std::{
    any::{self, Any},
    collections::BTreeMap,
    fmt,
    sync::Arc,
};

use crate::{
    error::{Error, Result},
    path::StatePath,
};

/// Object-safe view of a leaf value.
pub trait StateAny: Any + fmt::Debug + Send + Sync {
    /// The value as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Name of the concrete type, for error messages.
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug + Send + Sync> StateAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// A single entry in the state tree.
#[derive(Clone)]
pub enum Value {
    /// A nested map.
    Map(Tree),
    /// A leaf holding an arbitrary value.
    Leaf(Arc<dyn StateAny>),
}

impl Value {
    /// Wrap a value. A [`Tree`] is stored as a nested map, anything else as a
    /// leaf.
    pub fn new<T>(v: T) -> Self
    where
        T: Any + Clone + fmt::Debug + Send + Sync,
    {
        if let Some(tree) = (&v as &dyn Any).downcast_ref::<Tree>() {
            return Self::Map(tree.clone());
        }
        Self::Leaf(Arc::new(v))
    }

    /// Downcast to a concrete type, returning a clone of the contents.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        match self {
            Self::Map(tree) => (tree as &dyn Any).downcast_ref::<T>().cloned(),
            Self::Leaf(leaf) => {
                let leaf: &dyn StateAny = &**leaf;
                leaf.as_any().downcast_ref::<T>().cloned()
            }
        }
    }

    /// The nested map, if this is one.
    pub fn as_map(&self) -> Option<&Tree> {
        match self {
            Self::Map(tree) => Some(tree),
            Self::Leaf(_) => None,
        }
    }

    /// Name of the contained type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Map(_) => any::type_name::<Tree>(),
            Self::Leaf(leaf) => {
                let leaf: &dyn StateAny = &**leaf;
                leaf.type_name()
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(tree) => fmt::Debug::fmt(tree, f),
            Self::Leaf(leaf) => {
                let leaf: &dyn StateAny = &**leaf;
                fmt::Debug::fmt(leaf, f)
            }
        }
    }
}

/// A persistent map of state entries.
#[derive(Clone, Default)]
pub struct Tree {
    /// Entries, shared between all trees derived from this one.
    entries: Arc<BTreeMap<String, Value>>,
}

impl Tree {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a direct child.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Does this map have no entries?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over direct children in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Do these two trees share the same storage?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// A new tree with `key` bound to `value`.
    pub fn assoc(&self, key: &str, value: Value) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(key.to_string(), value);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// A new tree without `key`.
    pub fn dissoc(&self, key: &str) -> Self {
        if !self.entries.contains_key(key) {
            return self.clone();
        }
        let mut entries = (*self.entries).clone();
        entries.remove(key);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Resolve a path. The empty path yields the tree itself. Missing keys, or
    /// a path that tries to descend through a leaf, yield `None`.
    pub fn resolve(&self, path: &StatePath) -> Option<Value> {
        let mut current = Value::Map(self.clone());
        for key in path.segments() {
            current = current.as_map()?.get(key)?.clone();
        }
        Some(current)
    }

    /// A new tree with the value at `path` replaced. Missing intermediate maps
    /// are created. Replacing the root requires a map.
    pub fn update(&self, path: &StatePath, value: Value) -> Result<Self> {
        update_in(self, path.segments(), 0, value)
    }

    /// A new tree with the entry at `path` removed. Removing something that is
    /// not there is a no-op.
    pub fn remove(&self, path: &StatePath) -> Result<Self> {
        let segments = path.segments();
        let Some((key, parents)) = segments.split_last() else {
            return Ok(Self::new());
        };
        let parent = StatePath::new(parents);
        match self.resolve(&parent) {
            Some(Value::Map(t)) if t.get(key).is_some() => {
                self.update(&parent, Value::Map(t.dissoc(key)))
            }
            _ => Ok(self.clone()),
        }
    }
}

/// Recursive helper for [`Tree::update`]. `depth` is the number of segments of
/// `full` already descended.
fn update_in(tree: &Tree, full: &[String], depth: usize, value: Value) -> Result<Tree> {
    match &full[depth..] {
        [] => match value {
            Value::Map(t) => Ok(t),
            other => Err(Error::StateType {
                path: StatePath::new(full),
                expected: any::type_name::<Tree>(),
                found: other.type_name().into(),
            }),
        },
        [key] => Ok(tree.assoc(key, value)),
        [key, ..] => {
            let child = match tree.get(key) {
                None => Tree::new(),
                Some(Value::Map(t)) => t.clone(),
                Some(other) => {
                    return Err(Error::StateType {
                        path: StatePath::new(&full[..=depth]),
                        expected: any::type_name::<Tree>(),
                        found: other.type_name().into(),
                    });
                }
            };
            let child = update_in(&child, full, depth + 1, value)?;
            Ok(tree.assoc(key, Value::Map(child)))
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
