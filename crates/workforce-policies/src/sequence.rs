//! Employee identifier allocation.
//!
//! Identifiers come from an explicit sequence owned by the simulation
//! context, never from global state. The sequence only moves forward, so
//! an identifier is never handed out twice within a run.

use workforce_types::EmployeeId;

use crate::error::PolicyError;

/// Monotonic source of [`EmployeeId`]s, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeIdSequence {
    next: u64,
}

impl EmployeeIdSequence {
    /// A fresh sequence whose first id is 1.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next identifier.
    pub fn next_id(&mut self) -> Result<EmployeeId, PolicyError> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(PolicyError::SequenceExhausted)?;
        Ok(EmployeeId::new(id))
    }

    /// Number of identifiers allocated so far.
    pub const fn issued(&self) -> u64 {
        self.next.saturating_sub(1)
    }
}

impl Default for EmployeeIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
