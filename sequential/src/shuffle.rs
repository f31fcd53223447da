use common::Group;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Randomly reorders the values inside each group, the way a distributed
/// shuffle delivers them in no fixed order. Group order is left alone.
pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    /// A fixed seed gives a repeatable permutation.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn shuffle<V>(&mut self, values: &mut [V]) {
        values.shuffle(&mut self.rng);
    }

    pub fn shuffle_groups<V>(&mut self, groups: &mut [Group<V>]) {
        for group in groups {
            self.shuffle(&mut group.values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<Group<u32>> {
        vec![
            Group {
                key: "a".into(),
                values: (0..50).collect(),
            },
            Group {
                key: "b".into(),
                values: vec![7],
            },
        ]
    }

    #[test]
    fn values_are_permuted_not_lost() {
        let mut shuffled = groups();
        Shuffler::new(None).shuffle_groups(&mut shuffled);

        for (before, after) in groups().into_iter().zip(shuffled) {
            assert_eq!(before.key, after.key);
            let mut values = after.values;
            values.sort();
            assert_eq!(values, before.values);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = groups();
        let mut b = groups();
        Shuffler::new(Some(42)).shuffle_groups(&mut a);
        Shuffler::new(Some(42)).shuffle_groups(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_values_are_fine() {
        let mut values: Vec<u8> = vec![];
        Shuffler::new(Some(1)).shuffle(&mut values);
        assert!(values.is_empty());
    }
}
