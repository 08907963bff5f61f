// SPDX-FileCopyrightText: 2026 FsdConv Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tree decoder integration tests.
//!
//! Exercises the decoder through the public API: scalar pass-through, the
//! name-identifier heuristic and its exception, container flattening, the
//! bulk-vector placeholder, and failure behavior.

use fsdconv::{FsdValue, MapKey, NameIdPolicy, StringTable, StructValue, TreeDecoder};
use fsdconv::FsdError;
use serde_json::json;

fn table() -> StringTable {
    let mut texts = vec![String::new(); 42];
    texts.push("Ancient Blade".to_string()); // id 42
    StringTable::from_texts(texts)
}

// ============================================================================
// Scalar Pass-Through
// ============================================================================

#[test]
fn test_integers_without_name_context_pass_through() {
    let t = table();
    let d = TreeDecoder::new(&t);
    assert_eq!(d.decode(None, &FsdValue::Int(42)).unwrap(), json!(42));
    assert_eq!(d.decode(Some("typeID"), &FsdValue::Int(42)).unwrap(), json!(42));
    assert_eq!(d.decode(Some("name"), &FsdValue::Int(-3)).unwrap(), json!(-3));
}

#[test]
fn test_floats_and_strings_pass_through() {
    let t = table();
    let d = TreeDecoder::new(&t);
    assert_eq!(
        d.decode(Some("typeNameID"), &FsdValue::Float(42.0)).unwrap(),
        json!(42.0)
    );
    assert_eq!(
        d.decode(Some("typeNameID"), &FsdValue::String("42".to_string()))
            .unwrap(),
        json!("42")
    );
}

// ============================================================================
// Name-Identifier Resolution
// ============================================================================

#[test]
fn test_name_id_field_resolves_through_table() {
    let t = table();
    let d = TreeDecoder::new(&t);
    assert_eq!(
        d.decode(Some("typeNameID"), &FsdValue::Int(42)).unwrap(),
        json!("Ancient Blade")
    );
}

#[test]
fn test_name_id_match_is_case_insensitive() {
    let t = table();
    let d = TreeDecoder::new(&t);
    assert_eq!(
        d.decode(Some("TYPENAMEID"), &FsdValue::Int(42)).unwrap(),
        json!("Ancient Blade")
    );
    assert_eq!(
        d.decode(Some("groupnameid"), &FsdValue::Int(42)).unwrap(),
        json!("Ancient Blade")
    );
}

#[test]
fn test_dungeon_name_id_exception_preserves_value() {
    let t = table();
    let d = TreeDecoder::new(&t);
    assert_eq!(
        d.decode(Some("dungeonNameID"), &FsdValue::Int(42)).unwrap(),
        json!(42)
    );
}

#[test]
fn test_exception_is_exact_case_only() {
    // Known ambiguity in the source heuristic: the suffix match is
    // case-insensitive but the exception is compared with exact case, so
    // other casings of the exception still resolve. Preserved as-is.
    let t = table();
    let d = TreeDecoder::new(&t);
    assert_eq!(
        d.decode(Some("DungeonNameID"), &FsdValue::Int(42)).unwrap(),
        json!("Ancient Blade")
    );
}

#[test]
fn test_configured_exception_list_extends() {
    let t = table();
    let policy = NameIdPolicy::default().with_exception("agentNameID");
    let d = TreeDecoder::with_policy(&t, policy);
    assert_eq!(
        d.decode(Some("agentNameID"), &FsdValue::Int(42)).unwrap(),
        json!(42)
    );
    assert_eq!(
        d.decode(Some("typeNameID"), &FsdValue::Int(42)).unwrap(),
        json!("Ancient Blade")
    );
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn test_no_heuristic_inside_arrays() {
    let t = table();
    let d = TreeDecoder::new(&t);
    // Even under a *NameID field, array elements have no name context.
    let seq = FsdValue::Sequence(vec![FsdValue::Int(42)]);
    assert_eq!(d.decode(Some("typeNameID"), &seq).unwrap(), json!([42]));

    let tup = FsdValue::Tuple(vec![FsdValue::Int(42)]);
    assert_eq!(d.decode(Some("typeNameID"), &tup).unwrap(), json!([42]));
}

#[test]
fn test_struct_flattening_round_trip() {
    let t = table();
    let d = TreeDecoder::new(&t);
    let row = FsdValue::Struct(
        StructValue::new("Row")
            .with_field("id", FsdValue::Int(7))
            .with_field("label", FsdValue::String("x".to_string())),
    );

    let tree = d.decode_root(&row).unwrap();
    assert_eq!(tree, json!({"id": 7, "label": "x"}));
    // All and only the public fields survive.
    assert_eq!(tree.as_object().unwrap().len(), 2);
}

#[test]
fn test_mapping_with_integer_keys() {
    let t = table();
    let d = TreeDecoder::new(&t);
    let rows = FsdValue::Mapping(vec![
        (
            MapKey::from(587),
            FsdValue::Struct(StructValue::new("Row").with_field("typeNameID", FsdValue::Int(42))),
        ),
        (MapKey::from(588), FsdValue::Int(1)),
    ]);
    assert_eq!(
        d.decode_root(&rows).unwrap(),
        json!({
            "587": {"typeNameID": "Ancient Blade"},
            "588": 1
        })
    );
}

#[test]
fn test_deeply_nested_graph() {
    let t = table();
    let d = TreeDecoder::new(&t);
    let graph = FsdValue::Mapping(vec![(
        MapKey::from("rows"),
        FsdValue::Sequence(vec![FsdValue::Struct(
            StructValue::new("Row")
                .with_field(
                    "position",
                    FsdValue::Tuple(vec![FsdValue::Float(1.0), FsdValue::Float(-2.5)]),
                )
                .with_field(
                    "samples",
                    FsdValue::BulkVector {
                        type_tag: "float_vector".to_string(),
                    },
                )
                .with_field("factionNameID", FsdValue::Int(42)),
        )]),
    )]);

    assert_eq!(
        d.decode_root(&graph).unwrap(),
        json!({
            "rows": [{
                "position": [1.0, -2.5],
                "samples": null,
                "factionNameID": "Ancient Blade"
            }]
        })
    );
}

// ============================================================================
// Unsupported and Unknown Shapes
// ============================================================================

#[test]
fn test_bulk_vector_decodes_to_null_never_raises() {
    let t = table();
    let d = TreeDecoder::new(&t);
    let vector = FsdValue::BulkVector {
        type_tag: "double_vector".to_string(),
    };
    assert_eq!(d.decode_root(&vector).unwrap(), json!(null));
}

#[test]
fn test_unknown_shape_fails_with_diagnostic_tag() {
    let t = table();
    let d = TreeDecoder::new(&t);
    let result = d.decode_root(&FsdValue::Unknown {
        type_tag: "cfsd.blob".to_string(),
    });
    match result {
        Err(FsdError::UnsupportedShape { type_tag }) => assert_eq!(type_tag, "cfsd.blob"),
        other => panic!("expected UnsupportedShape, got {other:?}"),
    }
}

#[test]
fn test_no_partial_tree_on_failure() {
    let t = table();
    let d = TreeDecoder::new(&t);
    // The failing leaf sits after several decodable siblings; the whole
    // decode still returns Err, not a partial object.
    let row = FsdValue::Struct(
        StructValue::new("Row")
            .with_field("a", FsdValue::Int(1))
            .with_field("b", FsdValue::Int(2))
            .with_field(
                "c",
                FsdValue::Unknown {
                    type_tag: "cfsd.blob".to_string(),
                },
            ),
    );
    assert!(d.decode_root(&row).is_err());
}

// ============================================================================
// String Table
// ============================================================================

#[test]
fn test_out_of_range_lookup() {
    let t = StringTable::from_texts(vec!["only".to_string()]);
    assert!(matches!(
        t.lookup(-1),
        Err(FsdError::StringIdOutOfRange { id: -1, len: 1 })
    ));
    assert!(matches!(
        t.lookup(1),
        Err(FsdError::StringIdOutOfRange { id: 1, len: 1 })
    ));
    assert_eq!(t.lookup(0).unwrap(), "only");
}

#[test]
fn test_out_of_range_lookup_propagates_from_decode() {
    let t = StringTable::from_texts(vec!["only".to_string()]);
    let d = TreeDecoder::new(&t);
    assert!(matches!(
        d.decode(Some("typeNameID"), &FsdValue::Int(5)),
        Err(FsdError::StringIdOutOfRange { id: 5, len: 1 })
    ));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_graph_same_table_same_tree() {
    let t = table();
    let d = TreeDecoder::new(&t);
    let graph = FsdValue::Mapping(vec![
        (
            MapKey::from("zeta"),
            FsdValue::Sequence(vec![FsdValue::Int(3), FsdValue::Int(1)]),
        ),
        (
            MapKey::from("alpha"),
            FsdValue::Struct(
                StructValue::new("Row")
                    .with_field("y", FsdValue::Float(0.5))
                    .with_field("x", FsdValue::Int(9)),
            ),
        ),
    ]);

    let first = d.decode_root(&graph).unwrap();
    let second = d.decode_root(&graph).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
