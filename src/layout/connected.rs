use crate::flow::StepLookup;
use ahash::AHashSet;

/// Step ids reachable from the walk, in first-seen order and without repeats.
#[derive(Debug, Clone, Default)]
pub struct ConnectedSteps {
    ids: Vec<String>,
    seen: AHashSet<String>,
}

impl ConnectedSteps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id`, returning `false` if it was already present.
    pub fn insert(&mut self, id: &str) -> bool {
        if !self.seen.insert(id.to_string()) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Records `child_ids` and then every descendant reachable through containment.
    ///
    /// A sibling group is recorded as a whole before any of its subtrees, then
    /// each sibling's subtree follows in sibling order. Ids already recorded are
    /// neither repeated nor expanded a second time, so shared or cyclic
    /// containment terminates.
    pub fn fill_descendants(&mut self, child_ids: &[String], lookup: &StepLookup) {
        let mut pending: Vec<Vec<&str>> = vec![child_ids.iter().map(String::as_str).collect()];

        while let Some(group) = pending.pop() {
            let fresh: Vec<&str> = group.into_iter().filter(|id| self.insert(id)).collect();
            // Reverse so the first sibling's subtree is expanded first.
            for id in fresh.into_iter().rev() {
                if let Some(step) = lookup.get(id) {
                    if step.has_children() {
                        pending.push(step.child_ids().iter().map(String::as_str).collect());
                    }
                }
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ids
    }
}
