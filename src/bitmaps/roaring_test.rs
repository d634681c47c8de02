use super::*;

#[test]
fn test_from_ids() {
    let ids = [1u32, 5, 5, 9, 1_000];
    let bmap = RoaringBitmap::from_ids(&ids);
    assert_eq!(bmap.cardinality(), 4);
    for id in [1u32, 5, 9, 1_000] {
        assert!(bmap.contains(id));
    }
    assert!(!bmap.contains(2));
}

#[test]
fn test_footprint_grows_with_cardinality() {
    let empty = RoaringBitmap::default();
    let small = RoaringBitmap::from_ids(&[1, 2, 3]);
    let large = RoaringBitmap::from_ids(&(0..10_000).collect::<Vec<_>>());
    assert!(empty.footprint() <= small.footprint());
    assert!(small.footprint() < large.footprint());
}
