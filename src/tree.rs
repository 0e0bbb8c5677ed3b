//! # Crit-bit tree.

mod check;
mod fmt;

use tracing::{debug, trace};

use crate::{
    arena::Arena,
    config::Config,
    error::Result,
    node::{Branch, BranchId, Child},
    point::Point,
    record::{self, Record},
};

/// A crit-bit tree over borrowed key records.
///
/// The tree links to records owned by the caller and never copies their bytes. It owns only its
/// branch nodes, which it keeps in an arena.
///
/// ```
/// use critbit::{CritBitTree, RecordBuf};
///
/// let cat = RecordBuf::c_str(b"cat")?;
/// let car = RecordBuf::c_str(b"car")?;
///
/// let mut tree = CritBitTree::new();
/// tree.insert(cat.as_record())?;
/// tree.insert(car.as_record())?;
///
/// assert_eq!(tree.search(car.as_record()), Some(car.as_record()));
/// assert_eq!(tree.remove(cat.as_record()), Some(cat.as_record()));
/// assert!(!tree.contains(cat.as_record()));
/// # Ok::<(), critbit::Error>(())
/// ```
pub struct CritBitTree<'a> {
    root: Option<Child<'a>>,
    arena: Arena<'a>,
    len: usize,
    config: Config,
}

/// Outcome of a successful [`CritBitTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inserted<'a> {
    /// The key was linked into the tree.
    New(Record<'a>),
    /// An equal key was already present; the tree is unchanged. Holds the linked record.
    Existing(Record<'a>),
}

impl<'a> Inserted<'a> {
    /// The record now linked under the inserted key.
    #[must_use]
    pub const fn record(self) -> Record<'a> {
        match self {
            Self::New(record) | Self::Existing(record) => record,
        }
    }

    /// Whether the insert linked a new record.
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::New(_))
    }
}

/// A place holding a child: the root slot or one side of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotRef {
    Root,
    Child { parent: BranchId, dir: usize },
}

impl Default for CritBitTree<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CritBitTree<'a> {
    /// Creates an empty tree with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty tree.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { root: None, arena: Arena::new(&config), len: 0, config }
    }

    /// The configuration this tree was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Number of linked records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no record.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of branch nodes. Always `len() - 1` for a non-empty tree.
    #[must_use]
    pub const fn branch_count(&self) -> usize {
        self.arena.len()
    }

    /// Unlinks every record and drops all branch nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.len = 0;
    }

    /// Searches for the record equal to `key`.
    #[must_use]
    pub fn search(&self, key: Record<'_>) -> Option<Record<'a>> {
        let leaf = self.nearest(self.root?, key);
        (record::compare(leaf.as_bytes(), key.as_bytes()) == 0).then_some(leaf)
    }

    /// Whether a record equal to `key` is linked.
    #[must_use]
    pub fn contains(&self, key: Record<'_>) -> bool {
        self.search(key).is_some()
    }

    /// Links `key` into the tree.
    ///
    /// If an equal record is already linked the tree is left alone and that record is returned
    /// as [`Inserted::Existing`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KeyTooLong`](crate::Error::KeyTooLong) when `key` diverges from its
    /// nearest neighbour past [`Point::MAX_OFFSET`], and with
    /// [`Error::CapacityExhausted`](crate::Error::CapacityExhausted) when no branch node can be
    /// allocated. The tree is unchanged in both cases.
    pub fn insert(&mut self, key: Record<'a>) -> Result<Inserted<'a>> {
        let Some(root) = self.root else {
            self.root = Some(Child::Leaf(key));
            self.len = 1;
            debug!(?key, "inserted first key");
            return Ok(Inserted::New(key));
        };

        // First pass: the nearest leaf tells where the new key diverges.
        let nearest = self.nearest(root, key);
        let diff = record::compare(nearest.as_bytes(), key.as_bytes());
        if diff == 0 {
            trace!(?key, "key already present");
            return Ok(Inserted::Existing(nearest));
        }
        let point = Point::critical(nearest, key, diff)?;

        // Second pass: stop above the first branch testing a later bit.
        let mut slot = SlotRef::Root;
        let mut current = root;
        while let Child::Branch(id) = current {
            let branch = self.arena.get(id);
            if branch.point > point {
                break;
            }
            let dir = branch.point.direction(key);
            slot = SlotRef::Child { parent: id, dir };
            current = branch.children[dir];
        }

        let branch = Branch::split(point, point.direction(nearest), current, key);
        let id = self
            .arena
            .alloc(branch)
            .inspect_err(|err| debug!(?key, %err, "insert failed"))?;
        self.write(slot, Child::Branch(id));
        self.len += 1;
        debug!(?key, ?point, "inserted key");
        Ok(Inserted::New(key))
    }

    /// Unlinks the record equal to `key` and returns it.
    pub fn remove(&mut self, key: Record<'_>) -> Option<Record<'a>> {
        let mut current = self.root?;
        let mut slot = SlotRef::Root;
        // The last branch passed, the slot holding it, and the side taken.
        let mut parent = None;
        let leaf = loop {
            match current {
                Child::Leaf(leaf) => break leaf,
                Child::Branch(id) => {
                    let branch = self.arena.get(id);
                    let dir = branch.point.direction(key);
                    parent = Some((slot, id, dir));
                    slot = SlotRef::Child { parent: id, dir };
                    current = branch.children[dir];
                }
            }
        };

        if record::compare(leaf.as_bytes(), key.as_bytes()) != 0 {
            trace!(?key, "key to remove not found");
            return None;
        }

        match parent {
            None => self.root = None,
            Some((parent_slot, id, dir)) => {
                let branch = self.arena.release(id);
                self.write(parent_slot, branch.children[1 - dir]);
            }
        }
        self.len -= 1;
        debug!(?key, "removed key");
        Some(leaf)
    }

    /// Follows the critical bits of `key` down to a leaf.
    fn nearest(&self, root: Child<'a>, key: Record<'_>) -> Record<'a> {
        let mut current = root;
        loop {
            match current {
                Child::Leaf(leaf) => return leaf,
                Child::Branch(id) => {
                    let branch = self.arena.get(id);
                    current = branch.children[branch.point.direction(key)];
                }
            }
        }
    }

    fn write(&mut self, slot: SlotRef, child: Child<'a>) {
        match slot {
            SlotRef::Root => self.root = Some(child),
            SlotRef::Child { parent, dir } => self.arena.get_mut(parent).children[dir] = child,
        }
    }
}
