use crate::domain::model::{SlotMap, SlotSnippet};

/// Per-slot entry lists in ascending slot order, ready for combination.
#[derive(Debug, Clone, Default)]
pub struct BuildMatrix {
    slots: Vec<Vec<SlotSnippet>>,
}

impl BuildMatrix {
    pub fn from_slots(slots: SlotMap) -> Self {
        Self {
            slots: slots.into_values().collect(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of combinations: the product of per-slot counts, 0 when no
    /// slots are present.
    pub fn total(&self) -> usize {
        if self.slots.is_empty() {
            0
        } else {
            self.slots.iter().map(Vec::len).product()
        }
    }

    /// A fresh lazy iterator over every combination, slot-index-major.
    /// Calling this again restarts from the first combination.
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(&self.slots)
    }
}

/// Odometer-style cartesian product: an index per slot, incremented from the
/// rightmost position with carry. Memory stays proportional to the slot
/// count rather than the combination count.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    slots: &'a [Vec<SlotSnippet>],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(slots: &'a [Vec<SlotSnippet>]) -> Self {
        let done = slots.is_empty() || slots.iter().any(Vec::is_empty);
        Self {
            slots,
            indices: vec![0; slots.len()],
            done,
        }
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Vec<&'a SlotSnippet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combo: Vec<&'a SlotSnippet> = self
            .indices
            .iter()
            .zip(self.slots)
            .map(|(&idx, entries)| &entries[idx])
            .collect();

        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.slots[pos].len() {
                return Some(combo);
            }
            self.indices[pos] = 0;
        }

        self.done = true;
        Some(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_slots() -> SlotMap {
        let mut slots = BTreeMap::new();
        slots.insert(
            0,
            vec![SlotSnippet::new(0, "Alpha"), SlotSnippet::new(0, "Beta")],
        );
        slots.insert(1, vec![SlotSnippet::new(1, "X")]);
        slots
    }

    #[test]
    fn test_total_is_product_of_slot_counts() {
        let matrix = BuildMatrix::from_slots(sample_slots());
        assert_eq!(matrix.total(), 2);
        assert_eq!(matrix.combinations().count(), 2);
    }

    #[test]
    fn test_combinations_in_slot_major_order() {
        let matrix = BuildMatrix::from_slots(sample_slots());
        let combos: Vec<Vec<String>> = matrix
            .combinations()
            .map(|combo| combo.iter().map(|s| s.module.clone()).collect())
            .collect();
        assert_eq!(combos, vec![vec!["Alpha", "X"], vec!["Beta", "X"]]);
    }

    #[test]
    fn test_combinations_restart_from_the_beginning() {
        let matrix = BuildMatrix::from_slots(sample_slots());
        let first: Vec<_> = matrix.combinations().collect();
        let second: Vec<_> = matrix.combinations().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_map_yields_no_combinations() {
        let matrix = BuildMatrix::from_slots(BTreeMap::new());
        assert_eq!(matrix.total(), 0);
        assert_eq!(matrix.combinations().count(), 0);
    }

    #[test]
    fn test_three_by_two_product() {
        let mut slots = BTreeMap::new();
        slots.insert(
            0,
            vec![
                SlotSnippet::new(0, "A"),
                SlotSnippet::new(0, "B"),
                SlotSnippet::new(0, "C"),
            ],
        );
        slots.insert(2, vec![SlotSnippet::new(2, "P"), SlotSnippet::new(2, "Q")]);
        let matrix = BuildMatrix::from_slots(slots);

        assert_eq!(matrix.total(), 6);
        let combos: Vec<Vec<&str>> = matrix
            .combinations()
            .map(|combo| combo.iter().map(|s| s.module.as_str()).collect())
            .collect();
        assert_eq!(
            combos,
            vec![
                vec!["A", "P"],
                vec!["A", "Q"],
                vec!["B", "P"],
                vec!["B", "Q"],
                vec!["C", "P"],
                vec!["C", "Q"],
            ]
        );
    }

    #[test]
    fn test_clone_keeps_iteration_position() {
        let matrix = BuildMatrix::from_slots(sample_slots());
        let mut iter = matrix.combinations();
        iter.next();
        let mut cloned = iter.clone();
        assert_eq!(iter.next(), cloned.next());
    }
}
