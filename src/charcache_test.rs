use super::*;
use crate::bitmaps::DenseBitmap;

fn build_forward(rows: &[(u8, usize, RecordId)]) -> PositionalMap<DenseBitmap> {
    let mut map = PositionalMap::new();
    for (c, p, id) in rows {
        map.insert(*c, *p, *id);
    }
    map
}

#[test]
fn test_derive_unions_across_positions() {
    let forward = build_forward(&[(b'a', 0, 1), (b'a', 3, 2), (b'b', 1, 3)]);
    let cache: CharCache<DenseBitmap> = CharCache::derive(&forward);

    let a = cache.get(b'a').unwrap();
    assert_eq!(a.cardinality(), 2);
    assert!(a.contains(1));
    assert!(a.contains(2));

    assert!(cache.get(b'z').is_none());
}

#[test]
fn test_intersect_unique_dedupes_and_short_circuits() {
    let forward = build_forward(&[(b'a', 0, 1), (b'b', 1, 1), (b'b', 2, 2)]);
    let cache: CharCache<DenseBitmap> = CharCache::derive(&forward);

    // 'a' appears only in record 1, 'b' in 1 and 2: intersection is {1}.
    let got = cache
        .intersect_unique(None, [b'a', b'b', b'b'].iter())
        .unwrap();
    assert_eq!(got.cardinality(), 1);
    assert!(got.contains(1));

    // A byte that never appears short-circuits to empty.
    let empty = cache.intersect_unique(None, [b'z'].iter()).unwrap();
    assert!(empty.is_empty());
}
