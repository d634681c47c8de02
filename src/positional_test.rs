use super::*;
use crate::bitmaps::DenseBitmap;

#[test]
fn test_insert_and_get() {
    let mut map: PositionalMap<DenseBitmap> = PositionalMap::new();
    map.insert(b'a', 0, 1);
    map.insert(b'a', 0, 2);
    map.insert(b'a', 2, 2);
    map.insert(b'b', 0, 3);

    let a0 = map.get(b'a', 0).unwrap();
    assert_eq!(a0.cardinality(), 2);
    assert!(a0.contains(1));
    assert!(a0.contains(2));

    let a2 = map.get(b'a', 2).unwrap();
    assert_eq!(a2.cardinality(), 1);
    assert!(a2.contains(2));

    assert!(map.get(b'a', 1).is_none());
    assert!(map.get(b'c', 0).is_none());

    let b0 = map.get(b'b', 0).unwrap();
    assert!(b0.contains(3));
}

#[test]
fn test_iter_bytes_and_footprint() {
    let mut map: PositionalMap<DenseBitmap> = PositionalMap::new();
    map.insert(b'x', 5, 10);
    map.insert(b'y', 0, 11);

    let seen: Vec<u8> = map.iter_bytes().map(|(c, _)| c).collect();
    assert!(seen.contains(&b'x'));
    assert!(seen.contains(&b'y'));
    assert!(map.footprint() > 0);
}
