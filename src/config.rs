/// Tuning knobs for a [`CritBitTree`](crate::CritBitTree).
///
/// ```
/// use critbit::{Config, CritBitTree};
///
/// let config = Config::default().initial_capacity(64).branch_capacity(Some(1024));
/// let tree = CritBitTree::with_config(config);
/// assert!(tree.is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) initial_capacity: usize,
    pub(crate) branch_capacity: Option<usize>,
}

impl Config {
    /// Number of branch nodes to allocate room for up front.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Upper bound on live branch nodes, or `None` for no bound besides the handle width.
    ///
    /// A tree holding `n` keys needs `n - 1` branch nodes. Inserting past the bound fails with
    /// [`Error::CapacityExhausted`](crate::Error::CapacityExhausted).
    #[must_use]
    pub const fn branch_capacity(mut self, capacity: Option<usize>) -> Self {
        self.branch_capacity = capacity;
        self
    }

    /// The effective bound on live branch nodes.
    #[must_use]
    pub fn max_branches(&self) -> usize {
        let addressable = usize::try_from(u32::MAX).unwrap_or(usize::MAX);
        self.branch_capacity.map_or(addressable, |capacity| capacity.min(addressable))
    }
}
