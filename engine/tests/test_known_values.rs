//! Known-answer tests against the published ISAAC / ISAAC-64 outputs
//!
//! The published generators take a short key and zero-pad it to the full
//! 256-word state. Range seeding copies a full-length key verbatim, so the
//! padded key is passed explicitly here.

use isaac_engine_core_rs::{Isaac32, Isaac64};

fn padded<T: Copy + Default>(key: &[T]) -> Vec<T> {
    let mut words = vec![T::default(); 256];
    words[..key.len()].copy_from_slice(key);
    words
}

#[test]
fn test_isaac32_true_values() {
    let mut rng = Isaac32::<8>::from_words(padded(&[1u32, 23, 456, 7890, 12345])).unwrap();
    let values: Vec<u32> = (0..10).map(|_| rng.next_word()).collect();
    assert_eq!(
        values,
        vec![
            2558573138, 873787463, 263499565, 2103644246, 3595684709, 4203127393, 264982119,
            2765226902, 2737944514, 3900253796,
        ]
    );
}

#[test]
fn test_isaac32_true_values_after_10000() {
    let mut rng = Isaac32::<8>::from_words(padded(&[12345u32, 67890, 54321, 9876])).unwrap();
    rng.discard(10000);

    let values: Vec<u32> = (0..10).map(|_| rng.next_word()).collect();
    assert_eq!(
        values,
        vec![
            3676831399, 3183332890, 2834741178, 3854698763, 2717568474, 1576568959, 3507990155,
            179069555, 141456972, 2478885421,
        ]
    );
}

#[test]
fn test_isaac64_true_values() {
    let mut rng = Isaac64::<8>::from_words(padded(&[1u64, 23, 456, 7890, 12345])).unwrap();
    let values: Vec<u64> = (0..10).map(|_| rng.next_word()).collect();
    assert_eq!(
        values,
        vec![
            547121783600835980,
            14377643087320773276,
            17351601304698403469,
            1238879483818134882,
            11952566807690396487,
            13970131091560099343,
            4469761996653280935,
            15552757044682284409,
            6860251611068737823,
            13722198873481261842,
        ]
    );
}

#[test]
fn test_isaac64_true_values_four_word_key() {
    let mut rng = Isaac64::<8>::from_words(padded(&[1u64, 23, 456, 7890])).unwrap();
    let values: Vec<u64> = (0..10).map(|_| rng.next_word()).collect();
    assert_eq!(
        values,
        vec![
            15071495833797886820,
            7720185633435529318,
            10836773366498097981,
            5414053799617603544,
            12890513357046278984,
            17001051845652595546,
            9240803642279356310,
            12558996012687158051,
            14673053937227185542,
            1677046725350116783,
        ]
    );
}

#[test]
fn test_isaac64_true_values_after_10000() {
    let mut rng = Isaac64::<8>::from_words(padded(&[12345u64, 67890, 54321, 9876])).unwrap();
    rng.discard(10000);

    let values: Vec<u64> = (0..10).map(|_| rng.next_word()).collect();
    assert_eq!(
        values,
        vec![
            18143823860592706164,
            8491801882678285927,
            2699425367717515619,
            17196852593171130876,
            2606123525235546165,
            15790932315217671084,
            596345674630742204,
            9947027391921273664,
            11788097613744130851,
            10391409374914919106,
        ]
    );
}

#[test]
fn test_scalar_zero_equals_zero_key() {
    // Broadcasting 0 is the same key as an all-zero range
    let scalar = Isaac64::<8>::new(0);
    let range = Isaac64::<8>::from_words(vec![0u64; 256]).unwrap();
    assert_eq!(scalar, range);
}
