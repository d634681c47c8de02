use super::*;

#[test]
fn test_value_from_bytes() {
    let v: Value = b"hello".to_vec().into_boxed_slice();
    assert_eq!(&*v, b"hello");
    let empty: Value = Vec::new().into_boxed_slice();
    assert!(empty.is_empty());
}
