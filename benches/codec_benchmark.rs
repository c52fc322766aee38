use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waymark_tracker::models::{Activity, ActivityStore, Coords};
use waymark_tracker::storage::codec;

fn benchmark_codec_round_trip(c: &mut Criterion) {
    // Build a store at the high end of the expected scale
    let mut store = ActivityStore::new();
    for i in 0..200 {
        let coords = Coords {
            lat: 40.0 + (i as f64) * 0.01,
            lng: -74.0 - (i as f64) * 0.01,
        };
        let activity = if i % 2 == 0 {
            Activity::running(coords, 5.0 + i as f64, 24.0, 170 + i as u32)
                .expect("Failed to build running activity")
        } else {
            Activity::cycling(coords, 20.0 + i as f64, 90.0, (i as f64) - 50.0)
                .expect("Failed to build cycling activity")
        };
        store.add(activity).expect("Failed to add activity");
    }

    let text = codec::serialize(&store).expect("Failed to serialize store");

    let mut group = c.benchmark_group("codec_round_trip");

    group.bench_function("serialize_200_activities", |b| {
        b.iter(|| codec::serialize(black_box(&store)))
    });

    group.bench_function("deserialize_200_activities", |b| {
        b.iter(|| codec::deserialize(black_box(&text)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_codec_round_trip);
criterion_main!(benches);
