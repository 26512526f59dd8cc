// Variable store: one signed integer per lowercase letter

use crate::interpreter::constants::VARIABLE_COUNT;

/// The program's 26 integer variables, all zero at start
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    slots: [i32; VARIABLE_COUNT],
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(name: char) -> usize {
        debug_assert!(name.is_ascii_lowercase(), "variable name must be a-z");
        (name as u8 - b'a') as usize
    }

    /// Current value of variable `name` (`'a'..='z'`).
    pub fn get(&self, name: char) -> i32 {
        self.slots[Self::slot(name)]
    }

    pub fn set(&mut self, name: char, value: i32) {
        self.slots[Self::slot(name)] = value;
    }

    /// `(letter, value)` pairs for every slot, in letter order
    pub fn iter(&self) -> impl Iterator<Item = (char, i32)> + '_ {
        ('a'..='z').zip(self.slots.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let store = VariableStore::new();
        assert!(store.iter().all(|(_, value)| value == 0));
        assert_eq!(store.iter().count(), VARIABLE_COUNT);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut store = VariableStore::new();
        store.set('a', 3);
        store.set('z', -8);

        assert_eq!(store.get('a'), 3);
        assert_eq!(store.get('z'), -8);
        assert_eq!(store.get('m'), 0);
    }
}
