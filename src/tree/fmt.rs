use std::fmt;

use crate::node::Child;

use super::CritBitTree;

impl fmt::Debug for CritBitTree<'_> {
    /// Prints one line per node, children indented below their branch and labelled with the
    /// side they hang from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return writeln!(f, "empty");
        };

        let mut stack = vec![(0, None, root)];
        while let Some((height, dir, current)) = stack.pop() {
            let indent = "  ".repeat(height);
            let label = dir.map_or_else(|| "-".to_string(), |dir: usize| dir.to_string());
            match current {
                Child::Leaf(leaf) => writeln!(f, "{indent}[{label}] --> {leaf:?}")?,
                Child::Branch(id) => {
                    let branch = self.arena.get(id);
                    writeln!(f, "{indent}[{label}] {id:?} {:?}", branch.point)?;
                    stack.push((height + 1, Some(1), branch.children[1]));
                    stack.push((height + 1, Some(0), branch.children[0]));
                }
            }
        }
        Ok(())
    }
}
