use rand::{rngs::SmallRng, SeedableRng};
use slideshow_algorithms::greedy::Pool;

#[test]
fn test_sample_is_bounded_prefix() {
    let pool = Pool::new(vec![5, 6, 7, 8]);
    assert_eq!(pool.sample(2), &[5, 6]);
    assert_eq!(pool.sample(10), &[5, 6, 7, 8]);
    assert!(pool.sample(0).is_empty());
}

#[test]
fn test_pop_and_take() {
    let mut pool = Pool::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(pool.pop(), Some(5));
    assert_eq!(pool.take(1), 2);
    // the tail element moves into the freed slot
    assert_eq!(pool.sample(4), &[1, 4, 3]);
    assert_eq!(pool.len(), 3);
    assert!(!pool.is_empty());
}

#[test]
fn test_best_in_sample_first_wins_ties() {
    let pool = Pool::new(vec![3, 7, 1, 7, 9]);
    assert_eq!(pool.best_in_sample(4, |&x| x), Some((1, 7)));
    assert_eq!(pool.best_in_sample(5, |&x| x), Some((4, 9)));
    assert_eq!(pool.best_in_sample(5, |_| 0), Some((0, 0)));
    assert_eq!(pool.best_in_sample(0, |&x| x), None);
    assert_eq!(Pool::<u32>::new(vec![]).best_in_sample(3, |&x| x), None);
}

#[test]
fn test_shuffled_is_seeded_permutation() {
    let items = (0..100).collect::<Vec<u32>>();
    let a = Pool::shuffled(items.clone(), &mut SmallRng::from_seed([4u8; 32]));
    let b = Pool::shuffled(items.clone(), &mut SmallRng::from_seed([4u8; 32]));
    let c = Pool::shuffled(items.clone(), &mut SmallRng::from_seed([5u8; 32]));
    assert_eq!(a.sample(100), b.sample(100));
    assert_ne!(a.sample(100), c.sample(100));
    let mut sorted = a.sample(100).to_vec();
    sorted.sort();
    assert_eq!(sorted, items);
}
