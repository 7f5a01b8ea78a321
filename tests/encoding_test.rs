//! Tests for encoding combinators.

use serde_json::json;
use typebind::{
    basic_to_json, basic_value_to_json, encode_basic, encode_basic_value, encode_list,
    encode_optional, list_to_json, optional_to_json, EncodeError,
};

#[test]
fn test_encode_basic_scalars() {
    assert_eq!(encode_basic("text"), "text");
    assert_eq!(encode_basic(&"owned".to_string()), "owned");
    assert_eq!(encode_basic(&-3i32), "-3");
    assert_eq!(encode_basic(&0.5f64), "0.5");
    assert_eq!(encode_basic(&false), "false");
}

#[test]
fn test_basic_to_json_scalars() {
    assert_eq!(basic_to_json("text"), json!("text"));
    assert_eq!(basic_to_json(&7u8), json!(7));
    assert_eq!(basic_to_json(&2.5f32), json!(2.5));
    assert_eq!(basic_to_json(&true), json!(true));
}

#[test]
fn test_untyped_scalars_are_accepted() {
    assert_eq!(encode_basic_value(&json!("a")), Ok("a".to_string()));
    assert_eq!(encode_basic_value(&json!(1)), Ok("1".to_string()));
    assert_eq!(encode_basic_value(&json!(true)), Ok("true".to_string()));
    assert_eq!(basic_value_to_json(&json!(1.5)), Ok(json!(1.5)));
}

#[test]
fn test_untyped_structures_are_rejected() {
    assert_eq!(
        encode_basic_value(&json!(null)),
        Err(EncodeError::Unsupported { kind: "null" })
    );
    assert_eq!(
        basic_value_to_json(&json!([1, 2])),
        Err(EncodeError::Unsupported { kind: "array" })
    );
    assert_eq!(
        basic_value_to_json(&json!({"a": 1})),
        Err(EncodeError::Unsupported { kind: "object" })
    );
}

#[test]
fn test_encode_optional() {
    let encode = encode_optional(encode_basic::<i64>);
    assert_eq!(encode(&Some(5)), "5");
    assert_eq!(encode(&None), "null");
}

#[test]
fn test_encode_list_is_bracketed_and_ordered() {
    let encode = encode_list(encode_basic::<i64>);
    assert_eq!(encode(&vec![3, 1, 2]), "[3,1,2]");
    assert_eq!(encode(&vec![]), "[]");
}

#[test]
fn test_encode_nested_list() {
    let encode = encode_list(encode_list(encode_optional(encode_basic::<bool>)));
    assert_eq!(encode(&vec![vec![Some(true)], vec![None, Some(false)]]), "[[true],[null,false]]");
}

#[test]
fn test_encode_optional_list() {
    let encode = encode_optional(encode_list(encode_basic::<i64>));
    assert_eq!(encode(&Some(vec![1, 2])), "[1,2]");
    assert_eq!(encode(&None), "null");
}

#[test]
fn test_optional_list_to_json() {
    let to_json = optional_to_json(list_to_json(basic_to_json::<i64>));
    assert_eq!(to_json(&Some(vec![1, 2])), json!([1, 2]));
    assert_eq!(to_json(&None), json!(null));
}

#[test]
fn test_optional_and_list_to_json() {
    let to_json = list_to_json(optional_to_json(basic_to_json::<String>));
    let values = vec![Some("a".to_string()), None];

    assert_eq!(to_json(&values), json!(["a", null]));
    assert_eq!(to_json(&vec![]), json!([]));
}
