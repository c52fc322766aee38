// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Round-trip law: serialize then deserialize must reproduce the store with
//! identical ids, order, raw fields, descriptions, click counts and metrics.

use waymark_tracker::models::{Activity, ActivityStore, Coords};
use waymark_tracker::storage::codec;

fn coords() -> Coords {
    Coords { lat: 40.7, lng: -74.0 }
}

fn populated_store() -> ActivityStore {
    let mut store = ActivityStore::new();

    let mut run = Activity::running(coords(), 5.2, 24.0, 178).unwrap();
    run.mark_selected();
    run.mark_selected();
    store.add(run).unwrap();

    let ride = Activity::cycling(Coords { lat: 37.4, lng: -122.2 }, 27.0, 95.0, 523.0).unwrap();
    store.add(ride).unwrap();

    let downhill = Activity::cycling(coords(), 12.0, 20.0, -85.0).unwrap();
    store.add(downhill).unwrap();

    store
}

#[test]
fn test_round_trip_preserves_ids_in_order() {
    let store = populated_store();
    let restored = codec::deserialize(&codec::serialize(&store).unwrap());

    let original_ids: Vec<&str> = store.all().map(|a| a.id()).collect();
    let restored_ids: Vec<&str> = restored.all().map(|a| a.id()).collect();
    assert_eq!(original_ids, restored_ids);
}

#[test]
fn test_round_trip_preserves_every_field_and_metric() {
    let store = populated_store();
    let restored = codec::deserialize(&codec::serialize(&store).unwrap());

    assert_eq!(restored.len(), store.len());
    for (original, roundtripped) in store.all().zip(restored.all()) {
        assert_eq!(original, roundtripped);
        assert_eq!(
            original.metric().to_bits(),
            roundtripped.metric().to_bits()
        );
    }
}

#[test]
fn test_round_trip_preserves_click_counts() {
    let store = populated_store();
    let restored = codec::deserialize(&codec::serialize(&store).unwrap());

    let clicks: Vec<u32> = restored.all().map(|a| a.click_count()).collect();
    assert_eq!(clicks, vec![2, 0, 0]);
}

#[test]
fn test_restore_keeps_description_verbatim_even_when_date_disagrees() {
    // The record was created long ago; its description must be honored as
    // recorded, not recomputed from today's date.
    let text = r#"[{
        "type": "running",
        "id": "old-one",
        "created_at": "2019-04-14T09:00:00Z",
        "coords": {"lat": 40.7, "lng": -74.0},
        "distance_km": 5.2,
        "duration_min": 24.0,
        "description": "Running on April 14",
        "click_count": 7,
        "cadence_spm": 178
    }]"#;

    let restored = codec::deserialize(text);
    let activity = restored.find_by_id("old-one").unwrap();

    assert_eq!(activity.description(), "Running on April 14");
    assert_eq!(activity.click_count(), 7);
    assert!((activity.metric() - 24.0 / 5.2).abs() < f64::EPSILON);
}

#[test]
fn test_second_round_trip_is_stable() {
    let store = populated_store();
    let once = codec::serialize(&store).unwrap();
    let twice = codec::serialize(&codec::deserialize(&once)).unwrap();

    assert_eq!(once, twice);
}
