use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use super::*;

// Exercises the shared `Bitmap` contract against both backends with the
// same seeded workload, the way croaring_test.rs cross-checks a single
// backend against a plain Vec of digests.
fn check_contract<B: Bitmap>() {
    let seed: u128 = random();
    println!("check_contract seed:{}", seed);
    let mut rng = SmallRng::from_seed(seed.to_le_bytes());

    let mut ids: Vec<RecordId> = (0..5_000).map(|_| rng.gen::<u32>() % 50_000).collect();
    ids.sort_unstable();
    ids.dedup();

    let mut bmap = B::create();
    for id in ids.iter() {
        bmap.add(*id);
        bmap.add(*id); // idempotent
    }

    assert_eq!(bmap.cardinality(), ids.len() as u64);
    assert!(!bmap.is_empty());
    for id in ids.iter() {
        assert!(bmap.contains(*id));
    }
    assert!(!bmap.contains(ids.iter().max().unwrap() + 1_000_000));

    let mut array = bmap.to_array();
    array.sort_unstable();
    assert_eq!(array, ids);

    let empty = B::create();
    assert!(empty.is_empty());
    assert_eq!(empty.cardinality(), 0);
    assert!(bmap.and(&empty).is_empty());
    assert_eq!(bmap.or(&empty).cardinality(), bmap.cardinality());

    let half: Vec<RecordId> = ids.iter().step_by(2).copied().collect();
    let mut half_map = B::create();
    for id in half.iter() {
        half_map.add(*id);
    }

    let anded = bmap.and(&half_map);
    assert_eq!(anded.cardinality(), half.len() as u64);

    let ored = half_map.or(&bmap);
    assert_eq!(ored.cardinality(), bmap.cardinality());

    let mut copy = bmap.copy();
    copy.and_into(&half_map);
    assert_eq!(copy.cardinality(), half.len() as u64);

    let mut copy2 = half_map.copy();
    copy2.or_into(&bmap);
    assert_eq!(copy2.cardinality(), bmap.cardinality());
}

#[test]
fn test_roaring_contract() {
    check_contract::<RoaringBitmap>();
}

#[test]
fn test_dense_contract() {
    check_contract::<DenseBitmap>();
}
