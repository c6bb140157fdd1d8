//! Cycle detection over the server group graph.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use crate::core::domain::GroupEntry;
use crate::core::types::Nickname;

/// Check that following group membership never revisits a group on the
/// current path.
///
/// Iterative depth-first traversal with an explicit stack. Members that are
/// not groups are leaves and ignored here.
///
/// # Returns
///
/// The nickname chain of the first cycle found, starting and ending with the
/// same group (e.g., `g1 -> g2 -> g1`).
pub(crate) fn find_cycle(groups: &IndexMap<Nickname, GroupEntry>) -> Option<Vec<Nickname>> {
    let mut done: HashSet<&str> = HashSet::with_capacity(groups.len());

    for root in groups.values() {
        if done.contains(root.nickname()) {
            continue;
        }

        let mut path: IndexSet<&str> = IndexSet::new();
        path.insert(root.nickname());
        let mut stack: Vec<(&GroupEntry, usize)> = vec![(root, 0)];

        while let Some(top) = stack.last_mut() {
            let (group, idx) = *top;
            top.1 += 1;

            let Some(member) = group.members().get(idx) else {
                done.insert(group.nickname());
                path.pop();
                stack.pop();
                continue;
            };

            let Some(child) = groups.get(member) else {
                continue;
            };
            if done.contains(child.nickname()) {
                continue;
            }

            if let Some(start) = path.get_index_of(child.nickname()) {
                let mut chain: Vec<Nickname> = path
                    .iter()
                    .skip(start)
                    .map(|n| n.to_string())
                    .collect();
                chain.push(child.nickname().to_string());
                return Some(chain);
            }

            path.insert(child.nickname());
            stack.push((child, 0));
        }
    }

    None
}
