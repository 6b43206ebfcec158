use std::collections::BTreeMap;

use crate::types::VariableSlot;

/// Read access to the host's numbered variables.
pub trait VariableOracle {
    /// Current value of `slot`; slots never written read as `0`.
    fn variable(&self, slot: VariableSlot) -> i32;
}

/// Variable store kept in memory by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableTable {
    values: BTreeMap<VariableSlot, i32>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a value, returning the previous one if the slot was set.
    pub fn set(&mut self, slot: VariableSlot, value: i32) -> Option<i32> {
        self.values.insert(slot, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableSlot, i32)> + '_ {
        self.values.iter().map(|(slot, value)| (*slot, *value))
    }
}

impl FromIterator<(VariableSlot, i32)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (VariableSlot, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl VariableOracle for VariableTable {
    fn variable(&self, slot: VariableSlot) -> i32 {
        self.values.get(&slot).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_slots_read_zero() {
        let mut table = VariableTable::new();
        assert_eq!(table.variable(VariableSlot(15)), 0);
        assert_eq!(table.set(VariableSlot(15), 21), None);
        assert_eq!(table.set(VariableSlot(15), 22), Some(21));
        assert_eq!(table.variable(VariableSlot(15)), 22);
    }
}
