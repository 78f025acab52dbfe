use std::{any, cell::RefCell, fmt, marker::PhantomData, rc::Rc};

use crate::{
    error::{Error, Result},
    path::StatePath,
    tree::{Tree, Value},
};

/// Values that can be stored in the state tree.
pub trait StateValue: Clone + fmt::Debug + Send + Sync + 'static {}

impl<T: Clone + fmt::Debug + Send + Sync + 'static> StateValue for T {}

/// The mutable holder of the current state tree.
///
/// A store is owned by a run loop or widget adapter. Contexts and state
/// variables hold clones of the handle, never the tree itself. Every write
/// replaces the held tree wholesale, so snapshots taken earlier stay valid.
#[derive(Clone, Default)]
pub struct Store {
    /// The current tree.
    tree: Rc<RefCell<Tree>>,
}

impl Store {
    /// A store holding an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the given tree.
    pub fn with_tree(tree: Tree) -> Self {
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// The current tree.
    pub fn snapshot(&self) -> Tree {
        self.tree.borrow().clone()
    }

    /// Replace the current tree.
    pub fn replace(&self, tree: Tree) {
        *self.tree.borrow_mut() = tree;
    }

    /// Resolve a path in the current tree.
    pub fn resolve(&self, path: &StatePath) -> Option<Value> {
        self.tree.borrow().resolve(path)
    }

    /// Write a value, replacing the current tree.
    pub fn update(&self, path: &StatePath, value: Value) -> Result<()> {
        let next = self.tree.borrow().update(path, value)?;
        self.replace(next);
        Ok(())
    }

    /// Remove an entry, replacing the current tree.
    pub fn remove(&self, path: &StatePath) -> Result<()> {
        let next = self.tree.borrow().remove(path)?;
        self.replace(next);
        Ok(())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Store").field(&*self.tree.borrow()).finish()
    }
}

/// A typed accessor bound to one absolute path of a store.
pub struct StateVar<T> {
    /// The store this variable reads and writes.
    store: Store,
    /// Absolute path of the entry.
    path: StatePath,
    /// Marker for the value type.
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for StateVar<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            path: self.path.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StateVar<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVar")
            .field("path", &self.path)
            .field("type", &any::type_name::<T>())
            .finish()
    }
}

impl<T: StateValue> StateVar<T> {
    /// Bind a variable to a path. Nothing is written.
    pub fn new(store: Store, path: StatePath) -> Self {
        Self {
            store,
            path,
            _marker: PhantomData,
        }
    }

    /// The absolute path this variable is bound to.
    pub fn path(&self) -> &StatePath {
        &self.path
    }

    /// The untyped value, or `None` when nothing is stored.
    pub fn get_value(&self) -> Option<Value> {
        self.store.resolve(&self.path)
    }

    /// Read and convert the value.
    pub fn try_get(&self) -> Result<T> {
        let value = self.get_value().ok_or_else(|| Error::StateMissing {
            path: self.path.clone(),
        })?;
        value.downcast::<T>().ok_or_else(|| Error::StateType {
            path: self.path.clone(),
            expected: any::type_name::<T>(),
            found: value.type_name().into(),
        })
    }

    /// Read and convert the value.
    ///
    /// # Panics
    ///
    /// Panics when the entry is absent or holds another type. Both are
    /// programming errors in the component that owns the entry.
    pub fn get(&self) -> T {
        match self.try_get() {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "state read failed");
                panic!("{e}");
            }
        }
    }

    /// Replace the value.
    ///
    /// # Panics
    ///
    /// Panics when the path descends through a leaf.
    pub fn set(&self, v: T) {
        if let Err(e) = self.store.update(&self.path, Value::new(v)) {
            tracing::error!(error = %e, "state write failed");
            panic!("{e}");
        }
    }

    /// Replace the value with a function of the current value.
    pub fn swap(&self, f: impl FnOnce(T) -> T) {
        self.set(f(self.get()));
    }

    /// Remove the entry.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.path) {
            tracing::error!(error = %e, "state removal failed");
            panic!("{e}");
        }
    }
}
