use contiguous_view::{Static, View, ViewMut};
use pretty_assertions::assert_eq;

#[test]
pub fn byte_view_size() {
    let numbers = [1u64, 2, 3];
    let view = View::new(&numbers);
    let bytes = view.as_bytes();
    assert_eq!(bytes.len(), view.len_bytes());
    assert_eq!(bytes.len(), 3 * size_of::<u64>());
    assert_eq!(bytes.as_ptr(), numbers.as_ptr().cast::<u8>());

    let fixed: View<'_, u64, Static<3>> = View::from(&numbers);
    let fixed_bytes: View<'_, u8, Static<24>> = fixed.as_byte_array();
    assert_eq!(fixed_bytes, bytes);

    let empty = View::<u32>::default();
    assert!(empty.as_bytes().is_empty());
}

#[test]
pub fn bytes_match_native_encoding() {
    let numbers = [0x1122_3344u32, 0xABAB_CDEF];
    let expected: Vec<u8> = numbers.iter().flat_map(|n| n.to_ne_bytes()).collect();
    assert_eq!(View::new(&numbers).as_bytes(), expected);

    let mut copy = numbers;
    assert_eq!(ViewMut::new(&mut copy).as_bytes(), expected);
}

#[test]
#[cfg(target_endian = "little")]
pub fn writes_through_bytes() {
    let mut numbers = [0x1122_3344u32, 0xABAB_CDEF];
    let mut view = ViewMut::new(&mut numbers);
    let mut bytes = view.as_bytes_mut();
    assert_eq!(bytes.len(), 8);
    bytes[3] = 0x80;
    bytes[4] = 0x42;
    assert_eq!(numbers, [0x8022_3344, 0xABAB_CD42]);
}

#[test]
#[cfg(target_endian = "little")]
pub fn writes_through_byte_array() {
    let mut numbers = [0x1122_3344u32, 0xABAB_CDEF];
    let mut view: ViewMut<'_, u32, Static<2>> = ViewMut::from(&mut numbers);
    let mut bytes: ViewMut<'_, u8, Static<8>> = view.as_byte_array_mut();
    *bytes.back_mut().unwrap() = 0x00;
    assert_eq!(numbers, [0x1122_3344, 0x00AB_CDEF]);
}

#[test]
pub fn zero_sized_elements() {
    let units = [(); 4];
    let view = View::new(&units);
    assert_eq!(view.len(), 4);
    assert_eq!(view.len_bytes(), 0);
    assert!(view.as_bytes().is_empty());
}
