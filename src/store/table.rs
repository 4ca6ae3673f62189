//! File-backed product table.
//!
//! The whole table is one JSON snapshot on disk:
//!
//! ```text
//! {
//!   "next_id": 4,
//!   "products": [ { "id": 1, ... }, { "id": 3, ... } ]
//! }
//! ```
//!
//! Every successful mutation rewrites the snapshot via a temp file and
//! rename, so a crash mid-write never leaves a torn file behind. The id
//! counter is monotonic and never reuses a value, including after
//! deletes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::product::{Product, ProductInput};

/// On-disk snapshot format.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    next_id: u64,
    products: Vec<Product>,
}

/// In-memory table state. Keyed by id, so iteration order is id order,
/// which equals insertion order.
#[derive(Debug)]
struct TableState {
    next_id: u64,
    rows: BTreeMap<u64, Product>,
}

impl TableState {
    fn empty() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn from_snapshot(snapshot: Snapshot) -> Self {
        let rows: BTreeMap<u64, Product> = snapshot
            .products
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        // Guard against a stale counter in a hand-edited snapshot.
        let floor = rows.keys().next_back().map(|max| max + 1).unwrap_or(1);
        Self {
            next_id: snapshot.next_id.max(floor),
            rows,
        }
    }
}

/// The single product table.
///
/// Cheap to share as `Arc<ProductTable>`; all methods take `&self` and
/// synchronize on the inner lock. Reads take the read lock, mutations
/// the write lock, which also serializes the uniqueness check against
/// concurrent inserts.
pub struct ProductTable {
    path: PathBuf,
    inner: RwLock<TableState>,
}

impl ProductTable {
    /// Open the table at `path`.
    ///
    /// On first run the snapshot file (and any missing parent
    /// directories) is created with an empty table.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let state = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let snapshot: Snapshot = serde_json::from_str(&contents)?;
            TableState::from_snapshot(snapshot)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let state = TableState::empty();
            Self::persist(&path, &state)?;
            state
        };

        Ok(Self {
            path,
            inner: RwLock::new(state),
        })
    }

    /// Insert a new product, assigning the next id.
    ///
    /// Fails with `DuplicateName` if the name is already taken.
    pub fn insert(&self, input: ProductInput) -> StoreResult<Product> {
        let mut state = self.write_lock()?;

        if state.rows.values().any(|p| p.name == input.name) {
            return Err(StoreError::DuplicateName(input.name));
        }

        let id = state.next_id;
        state.next_id += 1;

        let product = Product::from_input(id, input);
        state.rows.insert(id, product.clone());

        Self::persist(&self.path, &state)?;
        Ok(product)
    }

    /// All rows, in id (insertion) order.
    pub fn list_all(&self) -> StoreResult<Vec<Product>> {
        let state = self.read_lock()?;
        Ok(state.rows.values().cloned().collect())
    }

    /// Look up a single row by id.
    pub fn get(&self, id: u64) -> StoreResult<Product> {
        let state = self.read_lock()?;
        state.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Replace all mutable fields of an existing row.
    ///
    /// Fails with `NotFound` if the id is absent, and with
    /// `DuplicateName` if the new name belongs to a different row.
    pub fn update(&self, id: u64, input: ProductInput) -> StoreResult<Product> {
        let mut state = self.write_lock()?;

        if !state.rows.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        if state.rows.values().any(|p| p.id != id && p.name == input.name) {
            return Err(StoreError::DuplicateName(input.name));
        }

        let product = Product::from_input(id, input);
        state.rows.insert(id, product.clone());

        Self::persist(&self.path, &state)?;
        Ok(product)
    }

    /// Remove a row and return its prior value.
    ///
    /// Existence is checked before anything is removed, so a missing id
    /// reports `NotFound` without touching the snapshot.
    pub fn delete(&self, id: u64) -> StoreResult<Product> {
        let mut state = self.write_lock()?;

        let product = state.rows.remove(&id).ok_or(StoreError::NotFound(id))?;

        Self::persist(&self.path, &state)?;
        Ok(product)
    }

    fn read_lock(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, TableState>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_lock(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, TableState>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Rewrite the whole snapshot atomically: temp file, then rename.
    fn persist(path: &Path, state: &TableState) -> StoreResult<()> {
        let snapshot = Snapshot {
            next_id: state.next_id,
            products: state.rows.values().cloned().collect(),
        };
        let body = serde_json::to_string_pretty(&snapshot)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
