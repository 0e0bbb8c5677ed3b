use crate::{
    error::{Error, Result},
    node::Child,
    point::Point,
};

use super::CritBitTree;

impl CritBitTree<'_> {
    /// Walks the whole tree and verifies its structure.
    ///
    /// Checks that points strictly increase on every downward path, that the record and branch
    /// counts agree with what is reachable, and that every leaf is found by its own key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolated`] describing the first problem found.
    pub fn check_invariants(&self) -> Result<()> {
        let Some(root) = self.root else {
            if self.len != 0 || self.arena.len() != 0 {
                return Err(violation(format!(
                    "empty root with {} records and {} branches",
                    self.len,
                    self.arena.len()
                )));
            }
            return Ok(());
        };

        let mut leaves = Vec::new();
        let mut branches = 0;
        let mut stack: Vec<(Option<Point>, Child<'_>)> = vec![(None, root)];
        while let Some((above, current)) = stack.pop() {
            match current {
                Child::Leaf(leaf) => leaves.push(leaf),
                Child::Branch(id) => {
                    let branch = self.arena.get(id);
                    if above.is_some_and(|above| above >= branch.point) {
                        return Err(violation(format!(
                            "branch {id:?} tests {:?} below {above:?}",
                            branch.point
                        )));
                    }
                    branches += 1;
                    for child in branch.children {
                        stack.push((Some(branch.point), child));
                    }
                }
            }
        }

        if leaves.len() != self.len {
            return Err(violation(format!(
                "{} reachable records, {} recorded",
                leaves.len(),
                self.len
            )));
        }
        if branches != self.arena.len() || branches + 1 != leaves.len() {
            return Err(violation(format!(
                "{branches} reachable branches, {} live, {} records",
                self.arena.len(),
                leaves.len()
            )));
        }
        for leaf in leaves {
            if !self.nearest(root, leaf).ptr_eq(leaf) {
                return Err(violation(format!("{leaf:?} is not reachable by its key")));
            }
        }
        Ok(())
    }
}

fn violation(reason: String) -> Error {
    Error::InvariantViolated(reason)
}
