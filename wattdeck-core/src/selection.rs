//! Ordered selection set backing the comparison view.

use crate::model::Plan;

/// Plan ids selected for comparison, in the order they were toggled on.
///
/// Toggling an id twice restores the set to its original contents and
/// order. Session-only; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<i64>,
}

impl Selection {
    pub fn toggle(&mut self, id: i64) {
        if let Some(pos) = self.ids.iter().position(|&p| p == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// The selected plans, in natural plan-list order. Selection order
    /// is deliberately not honored.
    pub fn project<'a>(&self, plans: &'a [Plan]) -> Vec<&'a Plan> {
        plans.iter().filter(|p| self.contains(p.id)).collect()
    }
}
