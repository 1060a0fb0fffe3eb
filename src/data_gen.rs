use crate::Key;
use rand::Rng;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rand_distr::{Distribution, Normal, NormalError, Uniform};

pub fn generate_normal_keys(count: usize, mean: f64, std_dev: f64) -> Result<Vec<Key>, NormalError> {
    let normal = Normal::new(mean, std_dev)?;
    let mut rng = thread_rng();

    Ok((0..count)
        .map(|_| {
            let sample: f64 = normal.sample(&mut rng);
            sample.max(Key::MIN as f64).min(Key::MAX as f64) as Key
        })
        .collect())
}

/// Panics if `min > max`.
pub fn generate_uniform_keys(count: usize, min: Key, max: Key) -> Vec<Key> {
    let uniform = Uniform::new_inclusive(min, max);
    let mut rng = thread_rng();

    (0..count).map(|_| uniform.sample(&mut rng)).collect()
}

/// Strictly ascending run: inserted in order it degenerates into a right
/// chain as tall as `count`.
pub fn generate_ascending_keys(count: usize, start: Key) -> Vec<Key> {
    (0..count)
        .map_while(|i| Key::try_from(i).ok().and_then(|i| start.checked_add(i)))
        .collect()
}

/// Distinct keys `0..count` shuffled, with roughly `dup_ratio` of the stream
/// replaced by repeats of earlier keys.
pub fn generate_keys_with_duplicates(count: usize, dup_ratio: f64) -> Vec<Key> {
    let mut rng = thread_rng();
    let mut keys = generate_ascending_keys(count, 0);
    keys.shuffle(&mut rng);

    for i in 1..keys.len() {
        if rng.gen_bool(dup_ratio.clamp(0.0, 1.0)) {
            keys[i] = keys[rng.gen_range(0..i)];
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_search_tree::BinarySearchTree;

    #[test]
    fn test_normal_bounds() {
        let data = generate_normal_keys(1000, 100.0, 10.0).unwrap();
        assert_eq!(data.len(), 1000);

        // samples beyond the key range saturate
        let high = generate_normal_keys(50, 1e12, 1.0).unwrap();
        assert!(high.iter().all(|&x| x == Key::MAX));
    }

    #[test]
    fn test_normal_rejects_non_finite_std_dev() {
        // a negative std_dev is accepted by rand_distr, only non-finite ones fail
        assert!(generate_normal_keys(10, 0.0, f64::NAN).is_err());
        assert!(generate_normal_keys(10, 0.0, f64::INFINITY).is_err());
        assert_eq!(generate_normal_keys(10, 0.0, -1.0).map(|d| d.len()).ok(), Some(10));
    }

    #[test]
    fn test_uniform() {
        let data = generate_uniform_keys(1000, -50, 50);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| (-50..=50).contains(&x)));
    }

    #[test]
    fn test_ascending_is_a_chain() {
        let data = generate_ascending_keys(100, -10);
        assert_eq!(data.first(), Some(&-10));
        assert_eq!(data.last(), Some(&89));
        let bst = BinarySearchTree::new_with_keys(&data);
        assert_eq!(bst.height(), 100);
    }

    #[test]
    fn test_ascending_stops_at_key_max() {
        let data = generate_ascending_keys(10, Key::MAX - 2);
        assert_eq!(data, vec![Key::MAX - 2, Key::MAX - 1, Key::MAX]);
    }

    #[test]
    fn test_duplicates() {
        let data = generate_keys_with_duplicates(500, 0.5);
        assert_eq!(data.len(), 500);
        let bst = BinarySearchTree::new_with_keys(&data);
        assert!(bst.len() < 500);

        let distinct = generate_keys_with_duplicates(200, 0.0);
        assert_eq!(BinarySearchTree::new_with_keys(&distinct).len(), 200);
    }
}
