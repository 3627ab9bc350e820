use contiguous_view::{Static, View, ViewMut};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[test]
pub fn serialize_as_sequence() {
    let mut numbers = [1, 2, 3];
    let view = View::new(&numbers);
    assert_eq!(serde_json::to_string(&view).unwrap(), "[1,2,3]");
    assert_eq!(serde_json::to_string(&view.first(0).unwrap()).unwrap(), "[]");

    let fixed: View<'_, i32, Static<3>> = View::from(&numbers);
    assert_eq!(serde_json::to_string(&fixed).unwrap(), "[1,2,3]");

    let view = ViewMut::new(&mut numbers);
    assert_eq!(serde_json::to_value(&view).unwrap(), serde_json::json!([1, 2, 3]));
}

#[test]
pub fn deserialize_borrowed_bytes() {
    let json = r#""hello""#;
    let view: View<'_, u8> = serde_json::from_str(json).unwrap();
    assert_eq!(view.as_str().unwrap(), "hello");
    assert_eq!(view.as_ptr(), json[1..].as_ptr());

    let fixed: View<'_, u8, Static<5>> = serde_json::from_str(json).unwrap();
    assert_eq!(fixed, view);
}

#[test]
pub fn deserialize_rejects_mismatched_extent() {
    let mut deserializer = serde_json::Deserializer::from_str(r#""hello""#);
    let error = View::<u8, Static<3>>::deserialize(&mut deserializer).unwrap_err();
    assert!(
        error
            .to_string()
            .contains("length 5 does not match static extent 3")
    );
}

#[test]
pub fn deserialize_rejects_escapes() {
    // An escaped string cannot be lent out unchanged.
    let error = serde_json::from_str::<View<'_, u8>>(r#""a\nb""#).unwrap_err();
    assert!(error.to_string().contains("borrowed bytes"));
}
