use rand::seq::SliceRandom;
use rand::Rng;

/// Сколько рецептов показывает лента на странице каталога
pub const RECIPE_STRIP_LIMIT: usize = 7;

/// Случайная выборка без повторов
///
/// Перемешивает копию входа (Fisher–Yates) и берёт первые `min(limit, len)`.
/// Исходный срез не меняется, результат от вызова к вызову разный.
pub struct RecipeSampler;

impl RecipeSampler {
    pub fn sample<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
        Self::sample_with(&mut rand::thread_rng(), items, limit)
    }

    pub fn sample_with<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], limit: usize) -> Vec<T> {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(limit.min(items.len()));
        shuffled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_limit_larger_than_input_returns_everything() {
        let items = vec![1, 2, 3];
        let mut out = RecipeSampler::sample(&items, RECIPE_STRIP_LIMIT);
        out.sort();
        assert_eq!(out, items);
    }

    #[test]
    fn test_empty_input() {
        let out = RecipeSampler::sample::<i32>(&[], RECIPE_STRIP_LIMIT);
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items: Vec<i32> = (0..20).collect();
        let before = items.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let out = RecipeSampler::sample_with(&mut rng, &items, 7);
        assert_eq!(out.len(), 7);
        assert_eq!(items, before);
    }

    #[test]
    fn test_every_item_can_be_picked() {
        let items: Vec<i32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(RecipeSampler::sample_with(&mut rng, &items, 3));
        }
        assert_eq!(seen.len(), items.len());
    }

    proptest! {
        #[test]
        fn prop_sample_is_bounded_distinct_subset(
            len in 0usize..40,
            limit in 0usize..50,
            seed in any::<u64>(),
        ) {
            let items: Vec<usize> = (0..len).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let out = RecipeSampler::sample_with(&mut rng, &items, limit);

            prop_assert_eq!(out.len(), limit.min(len));
            let distinct: HashSet<_> = out.iter().copied().collect();
            prop_assert_eq!(distinct.len(), out.len());
            prop_assert!(out.iter().all(|x| *x < len));
        }
    }
}
