//! End-to-end lookups over records, mappings and scalars built from the same
//! six students.

#![cfg(feature = "derive")]

use std::collections::{BTreeMap, HashMap};

use listpick::{select_from_list, select_object_from_list, FieldAccessible, Query};
use serde::Serialize;
use serde_json::{json, Value as Json};

#[derive(Debug, Clone, PartialEq, Serialize, FieldAccessible)]
struct Student {
    name: String,
    age: i32,
    #[serde(rename = "isGraduated")]
    #[pick(rename = "isGraduated")]
    is_graduated: bool,
}

impl Student {
    fn new(name: &str, age: i32, is_graduated: bool) -> Self {
        Student {
            name: name.to_string(),
            age,
            is_graduated,
        }
    }

    fn to_map(&self) -> Json {
        serde_json::to_value(self).unwrap()
    }
}

fn students() -> Vec<Student> {
    vec![
        Student::new("John", 1, false),
        Student::new("Jane", 2, true),
        Student::new("Mike", 3, false),
        Student::new("Alice", 4, true),
        Student::new("Bob", 5, true),
        Student::new("Charlie", 6, false),
    ]
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn records_by_name_age_and_flag() {
    let list = students();
    assert_eq!(select_from_list(&list, "name", "John"), Some(&list[0]));
    assert_eq!(select_from_list(&list, "age", "2"), Some(&list[1]));
    assert_eq!(select_from_list(&list, "isGraduated", "true"), Some(&list[1]));
    assert_eq!(select_from_list(&list, "index", "3"), Some(&list[3]));
}

#[test]
fn records_resolve_attribute_ignoring_case() {
    let list = students();
    assert_eq!(select_from_list(&list, "NAME", "mike"), Some(&list[2]));
    assert_eq!(select_from_list(&list, "isgraduated", "FALSE"), Some(&list[0]));
    assert_eq!(select_from_list(&list, Student::AGE, "6"), Some(&list[5]));
}

#[test]
fn records_miss_without_error() {
    let list = students();
    assert_eq!(select_from_list(&list, "email", "John"), None);
    assert_eq!(select_from_list(&list, "age", "abc"), None);
    assert_eq!(select_from_list(&list, "age", "2.0"), None);
    assert_eq!(select_from_list(&list, "isGraduated", "yes"), None);
    assert_eq!(select_from_list(&list, "name", "Zed"), None);
}

#[test]
fn records_skip_leading_absent_entries() {
    let list: Vec<Option<Student>> = vec![None, None, Some(Student::new("Jane", 2, true))];
    let found = select_from_list(&list, "age", "2").unwrap();
    assert_eq!(found.as_ref().unwrap().name, "Jane");
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn json_mappings_match_records() {
    let records = students();
    let maps: Vec<Json> = records.iter().map(Student::to_map).collect();

    for (field, value) in [
        ("name", "John"),
        ("age", "2"),
        ("isGraduated", "true"),
        ("index", "3"),
    ] {
        let record = select_from_list(&records, field, value).unwrap();
        let map = select_from_list(&maps, field, value).unwrap();
        assert_eq!(map, &record.to_map(), "query {field}={value}");
    }
}

#[test]
fn mapping_keys_are_exact_values_ignore_case() {
    let maps: Vec<Json> = students().iter().map(Student::to_map).collect();
    assert_eq!(select_from_list(&maps, "name", "ALICE"), Some(&maps[3]));
    assert_eq!(select_from_list(&maps, "Name", "Alice"), None);
}

#[test]
fn hash_maps_of_json_values() {
    let maps: Vec<HashMap<String, Json>> = students()
        .iter()
        .map(|s| serde_json::from_value(s.to_map()).unwrap())
        .collect();
    let found = select_from_list(&maps, "age", "5").unwrap();
    assert_eq!(found["name"], json!("Bob"));
}

#[test]
fn btree_maps_with_absent_values() {
    let mut first: BTreeMap<&str, Option<&str>> = BTreeMap::new();
    first.insert("city", None);
    let mut second = BTreeMap::new();
    second.insert("city", Some("Oslo"));
    let maps = vec![first, second];

    assert_eq!(select_from_list(&maps, "city", "oslo"), Some(&maps[1]));
    assert_eq!(select_from_list(&maps, "city", "null"), None);
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn scalar_names() {
    let names: Vec<String> = ["John", "Alice", "Bob", "Charlie", "Mike", "David"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(select_from_list(&names, "", "John"), Some(&names[0]));
    assert_eq!(select_from_list(&names, "whatever", "David"), Some(&names[5]));
    assert_eq!(select_from_list(&names, "index", "3"), Some(&names[3]));
    assert_eq!(select_from_list(&names, "", "john"), None);
}

#[test]
fn scalar_numbers_and_flags() {
    assert_eq!(select_from_list(&[10, 20, 30], "", "20"), Some(&20));
    assert_eq!(select_from_list(&[1.5, 2.5], "", "2.5"), Some(&2.5));
    assert_eq!(select_from_list(&[false, true], "", "true"), Some(&true));
    assert_eq!(select_from_list(&['a', 'b'], "", "b"), Some(&'b'));
}

#[test]
fn scalar_single_precision_floats() {
    let prices = [0.1f32, 0.2, 0.3];
    assert_eq!(select_from_list(&prices, "", "0.2"), Some(&prices[1]));
    assert_eq!(
        select_object_from_list(&prices, ",", "", "0.9,0.3"),
        Some(&prices[2])
    );
    assert_eq!(select_from_list(&prices, "", "0.20000000298023224"), None);
}

// ============================================================================
// Multi-value
// ============================================================================

#[test]
fn multi_value_picks_earliest_element() {
    let list = students();
    assert_eq!(
        select_object_from_list(&list, ",", "name", "Bob,Alice"),
        Some(&list[3])
    );
}

#[test]
fn multi_value_is_case_sensitive() {
    let list = students();
    assert_eq!(select_object_from_list(&list, ",", "name", "bob,alice"), None);

    let maps: Vec<Json> = list.iter().map(Student::to_map).collect();
    assert_eq!(select_object_from_list(&maps, ",", "name", "bob,Bob"), Some(&maps[4]));
}

#[test]
fn multi_value_coerces_each_target() {
    let list = students();
    assert_eq!(
        select_object_from_list(&list, "|", "age", "x|6|5"),
        Some(&list[4])
    );
}

#[test]
fn multi_value_without_delimiter_is_single_target() {
    let list = students();
    assert_eq!(select_object_from_list(&list, ";", "name", "Mike"), Some(&list[2]));
    assert_eq!(select_object_from_list(&list, ";", "name", "Mike,Bob"), None);
}

#[test]
fn multi_value_index_mode() {
    let list = students();
    assert_eq!(select_object_from_list(&list, ",", "I", "5"), Some(&list[5]));
    assert_eq!(select_object_from_list(&list, ",", "i", "1,2"), None);
}

// ============================================================================
// Index and empty input
// ============================================================================

#[test]
fn index_bounds() {
    let list = students();
    assert_eq!(select_from_list(&list, "index", "6"), None);
    assert_eq!(select_from_list(&list, "index", "-1"), None);
    assert_eq!(select_from_list(&list, "index", "abc"), None);
    assert_eq!(select_from_list(&list, "index", ""), None);
}

#[test]
fn empty_collections() {
    let empty: Vec<Student> = Vec::new();
    assert_eq!(select_from_list(&empty, "name", "John"), None);
    assert_eq!(select_from_list(&empty, "index", "0"), None);
    assert_eq!(select_object_from_list(&empty, ",", "name", "a,b"), None);

    let nothing: Vec<Option<String>> = vec![None, None];
    assert_eq!(select_from_list(&nothing, "", "John"), None);
}

#[test]
fn repeated_queries_agree() {
    let list = students();
    let query = Query::new("isGraduated").eq("true");
    assert_eq!(query.select(&list), query.select(&list));
    assert_eq!(query.position(&list), Some(1));
}
