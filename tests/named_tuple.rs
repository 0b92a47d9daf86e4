use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ahash::AHashMap;
use tuplekit::{named_tuple, NamedTuple, TypeMismatch, Value, ValueType};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Display Tests
// ============================================================================

macro_rules! display_tests {
    ($($name:ident: $tuple:expr, $expected:literal;)*) => {
        $(
            paste::item! {
                #[test]
                fn [< display_ $name >]() {
                    assert_eq!($tuple.to_string(), $expected);
                }
            }
        )*
    }
}

display_tests! {
    empty: named_tuple! {}, "{}";
    single: named_tuple! { "key" => "value" }, "{key=value}";
    pair: named_tuple! { "name" => "John", "age" => 30 }, "{name=John, age=30}";
    numeric: named_tuple! { "x" => 1, "y" => 2.5 }, "{x=1, y=2.5}";
    none_value: named_tuple! { "missing" => Value::None }, "{missing=none}";
}

#[test]
fn display_follows_insertion_order() {
    let forward = named_tuple! { "a" => 1, "b" => 2 };
    let backward = named_tuple! { "b" => 2, "a" => 1 };
    assert_eq!(forward.to_string(), "{a=1, b=2}");
    assert_eq!(backward.to_string(), "{b=2, a=1}");
    // equal despite rendering differently
    assert_eq!(forward, backward);
}

// ============================================================================
// Size and Access Tests
// ============================================================================

#[test]
fn len_matches_pair_count() {
    assert_eq!(named_tuple! {}.len(), 0);
    assert!(named_tuple! {}.is_empty());
    assert_eq!(named_tuple! { "key1" => "value1" }.len(), 1);
    assert_eq!(named_tuple! { "k1" => 1, "k2" => 2 }.len(), 2);
}

#[test]
fn get_present_and_missing() {
    let t = named_tuple! { "name" => "John", "age" => 30 };
    assert_eq!(t.get("name"), Some(&Value::from("John")));
    assert_eq!(t.get("age"), Some(&Value::from(30)));
    assert_eq!(t.get("nonexistent"), None);
    assert!(t.contains_key("name"));
    assert!(!t.contains_key("nonexistent"));
}

#[test]
fn get_as_typed_retrieval() {
    let t = named_tuple! { "name" => "John", "age" => 30 };
    let name: Option<&str> = t.get_as("name").unwrap();
    let age: Option<i64> = t.get_as("age").unwrap();
    assert_eq!(name, Some("John"));
    assert_eq!(age, Some(30));
}

#[test]
fn get_as_missing_key_is_absent_not_error() {
    let t = named_tuple! { "name" => "John" };
    let missing: Option<i64> = t.get_as("age").unwrap();
    assert_eq!(missing, None);
}

#[test]
fn get_as_type_mismatch_on_present_key() {
    let t = named_tuple! { "name" => "John" };
    let result: Result<Option<i64>, TypeMismatch> = t.get_as("name");
    assert_eq!(result, Err(TypeMismatch::new(ValueType::Int, ValueType::Str)));
}

#[test]
#[allow(clippy::float_cmp)]
fn get_as_int_widens_to_float() {
    let t = named_tuple! { "year" => 2023 };
    let year: Option<f64> = t.get_as("year").unwrap();
    assert_eq!(year, Some(2023.0));
}

// ============================================================================
// Equality and Hashing Tests
// ============================================================================

#[test]
fn equality_by_pair_content() {
    let t1 = named_tuple! { "k1" => "v1" };
    let t2 = named_tuple! { "k1" => "v1" };
    let t3 = named_tuple! { "k1" => "v2" };
    let t4 = named_tuple! { "k2" => "v1" };

    assert_eq!(t1, t2);
    assert_ne!(t1, t3);
    assert_ne!(t1, t4);

    assert_eq!(hash_of(&t1), hash_of(&t2));
    assert_ne!(hash_of(&t1), hash_of(&t3));
}

#[test]
fn insertion_order_is_irrelevant_for_equality_and_hash() {
    let forward = named_tuple! {
        "Region" => "North",
        "Year" => 2023,
        "Product" => "Widget A",
    };
    let backward = named_tuple! {
        "Product" => "Widget A",
        "Year" => 2023,
        "Region" => "North",
    };
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
}

#[test]
fn subset_is_not_equal() {
    let two = named_tuple! { "a" => 1, "b" => 2 };
    let one = named_tuple! { "a" => 1 };
    assert_ne!(two, one);
    assert_ne!(one, two);
}

// ============================================================================
// Map Key Tests
// ============================================================================

#[test]
fn interchangeable_as_map_keys() {
    let mut map: AHashMap<NamedTuple, &str> = AHashMap::new();
    let key1 = named_tuple! { "id" => 1 };
    let key2 = named_tuple! { "id" => 1 };
    let key3 = named_tuple! { "id" => 2 };

    map.insert(key1.clone(), "value1");
    assert!(map.contains_key(&key1));
    assert!(map.contains_key(&key2));
    assert_eq!(map.get(&key2), Some(&"value1"));

    map.insert(key2, "value2");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&key1), Some(&"value2"));

    assert!(!map.contains_key(&key3));
}

#[test]
fn keys_built_in_different_orders_retrieve_the_same_entry() {
    let mut sales: AHashMap<NamedTuple, f64> = AHashMap::new();
    sales.insert(
        named_tuple! { "Region" => "North", "Year" => 2023, "Product" => "Widget A" },
        1500.0,
    );
    let lookup = named_tuple! { "Product" => "Widget A", "Region" => "North", "Year" => 2023 };
    assert_eq!(sales.get(&lookup), Some(&1500.0));
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn from_iterator_collects_pairs() {
    let t: NamedTuple = vec![("a", Value::from(1)), ("b", Value::from(2))]
        .into_iter()
        .collect();
    assert_eq!(t, named_tuple! { "a" => 1, "b" => 2 });
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let t: NamedTuple = vec![("k", Value::from(1)), ("k", Value::from(2))]
        .into_iter()
        .collect();
    assert_eq!(t.len(), 1);
    assert_eq!(t.get("k"), Some(&Value::from(2)));
}

#[test]
fn iteration_accessors() {
    let t = named_tuple! { "a" => 1, "b" => 2 };
    let keys: Vec<&str> = t.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    let values: Vec<&Value> = t.values().collect();
    assert_eq!(values, vec![&Value::from(1), &Value::from(2)]);
    let pairs: Vec<(&str, &Value)> = t.iter().collect();
    assert_eq!(pairs.len(), 2);
}
