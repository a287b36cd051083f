//! Property tests for attribute stores, dynamic values and layout math.

use proptest::prelude::*;

use card_face::cards::{AttributeStore, AttributeValue, DynamicValue, LookupTable};
use card_face::design::StackGeometry;
use card_face::layout::{sequence_bounds, Orientation, Zone, ZoneContent};

fn value_strategy() -> impl Strategy<Value = AttributeValue> {
    prop_oneof![
        any::<i64>().prop_map(AttributeValue::Int),
        "[a-z0-9]{0,6}".prop_map(AttributeValue::Text),
    ]
}

fn zone(width: u32, height: u32) -> Zone<'static> {
    Zone {
        width,
        height,
        color: 1,
        content: ZoneContent::Text(vec![String::new()]),
    }
}

proptest! {
    #[test]
    fn prop_set_then_get(id in -50i32..50, value in value_strategy()) {
        let mut store = AttributeStore::new();
        store.set(id, value.clone());
        prop_assert_eq!(store.get(id), Some(&value));
    }

    #[test]
    fn prop_ids_unique(ops in prop::collection::vec((0i32..8, value_strategy()), 0..40)) {
        let mut store = AttributeStore::new();
        for (id, value) in &ops {
            store.set(*id, value.clone());
        }

        let mut ids: Vec<i32> = store.iter().map(|(id, _)| id.raw()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);

        // Last write wins.
        for (id, _) in &ops {
            let last = ops.iter().rev().find(|(other, _)| other == id).map(|(_, v)| v);
            prop_assert_eq!(store.get(*id), last);
        }
    }

    #[test]
    fn prop_clone_independent(id in 0i32..10, a in value_strategy(), b in value_strategy()) {
        let mut store = AttributeStore::new().with(id, a.clone());
        let copy = store.clone();
        store.set(id, b);
        prop_assert_eq!(copy.get(id), Some(&a));
    }

    #[test]
    fn prop_unset_equals_default(id in any::<i32>()) {
        let store = AttributeStore::new();
        prop_assert!(store.equals(id, ""));
        prop_assert!(store.equals(id, "0"));
    }

    #[test]
    fn prop_static_ignores_store(k in value_strategy(), other in value_strategy()) {
        let value = DynamicValue::constant(k.to_string());
        let store = AttributeStore::new().with(0, other);
        let empty = AttributeStore::new();
        prop_assert_eq!(value.as_text(&store), value.as_text(&empty));
        prop_assert_eq!(value.as_text(&store).into_owned(), k.to_string());
    }

    #[test]
    fn prop_lookup_first_match(keys in prop::collection::vec(0i64..5, 1..8), current in 0i64..6) {
        let mut table = LookupTable::new();
        for (row, key) in keys.iter().enumerate() {
            table.push(*key, row as i64);
        }
        let value = DynamicValue::from_lookup(0, table);

        let expected = keys.iter().position(|k| *k == current).map_or(0, |row| row as i64);
        prop_assert_eq!(value.as_int(&AttributeStore::new().with(0, current)), expected);
        prop_assert_eq!(value.as_int(&AttributeStore::new()), 0);
    }

    #[test]
    fn prop_thickness_monotone(per_unit in 0u32..10, max in 0u32..30, a in 0u32..500, b in 0u32..500) {
        let geometry = StackGeometry::new(per_unit, max);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(geometry.thickness(lo) <= geometry.thickness(hi));
        prop_assert!(geometry.thickness(hi) <= max);
    }

    #[test]
    fn prop_horizontal_bounds(widths in prop::collection::vec(0u32..20, 1..10), spacing in -5i32..5) {
        let zones: Vec<Zone<'static>> = widths.iter().map(|w| zone(*w, 3)).collect();
        let (width, height) = sequence_bounds(&zones, Orientation::Horizontal, spacing);

        let sum: i32 = widths.iter().map(|w| *w as i32).sum();
        prop_assert_eq!(width, sum + spacing * (widths.len() as i32 - 1));
        prop_assert_eq!(height, 3);
    }
}
