#![cfg(feature = "serde")]

//! Serde round-trips for search-space descriptors.

use searchspace::{Categorical, Domain, Float, Integer, qrandint, quniform};

#[test]
fn quantized_float_domain_round_trips() {
    let domain = quniform(0.0, 10.0, 2.5).unwrap();
    let json = serde_json::to_string(&domain).unwrap();
    let back: Float = serde_json::from_str(&json).unwrap();
    assert_eq!(domain, back);
}

#[test]
fn quantized_integer_domain_round_trips() {
    let domain = qrandint(0, 100, 10).unwrap();
    let json = serde_json::to_string(&domain).unwrap();
    let back: Integer = serde_json::from_str(&json).unwrap();
    assert_eq!(domain, back);
}

#[test]
fn categorical_domain_round_trips() {
    let domain = Categorical::new(vec!["sgd".to_string(), "adam".to_string()])
        .unwrap()
        .uniform()
        .unwrap();
    let json = serde_json::to_string(&domain).unwrap();
    let back: Categorical<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(domain, back);
    assert!(back.is_valid(&"adam".to_string()));
}
