use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use powerline_editor::shared::cable_geometry;
use powerline_editor::Scene;
use std::hint::black_box;

fn bench_span_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_generation");

    let start = Vec3::new(0.0, 0.0, 9.0);
    let end = Vec3::new(40.0, 15.0, 9.0);

    for &segment_count in &[10u32, 100u32, 1000u32] {
        group.bench_with_input(
            BenchmarkId::new("points_sag_tangents", segment_count),
            &segment_count,
            |b, &n| {
                b.iter(|| {
                    let mut points =
                        cable_geometry::span_points(black_box(start), black_box(end), n);
                    cable_geometry::apply_sag(&mut points, black_box(2.0));
                    let tangents = cable_geometry::span_tangents(&points);
                    black_box(tangents.len())
                })
            },
        );
    }

    group.finish();
}

fn build_synthetic_scene(object_count: usize) -> Scene {
    let mut scene = Scene::new();
    for index in 0..object_count {
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        scene.spawn_object(
            "mast_holz",
            Vec3::new(column * 25.0, row * 25.0, 0.0),
        );
    }
    scene
}

fn bench_spatial_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_queries");

    for &object_count in &[1_000usize, 10_000usize] {
        let scene = build_synthetic_scene(object_count);

        group.bench_with_input(
            BenchmarkId::new("nearest_object", object_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let hit = scene.nearest_object(black_box(Vec2::new(512.3, 487.9)));
                    black_box(hit.is_some())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rect_query", object_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let ids = scene.objects_in_rect(
                        black_box(Vec2::new(100.0, 100.0)),
                        black_box(Vec2::new(900.0, 400.0)),
                    );
                    black_box(ids.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_polyline_distance(c: &mut Criterion) {
    let mut points = cable_geometry::span_points(
        Vec3::new(0.0, 0.0, 9.0),
        Vec3::new(400.0, 120.0, 9.0),
        1000,
    );
    cable_geometry::apply_sag(&mut points, 8.0);

    c.bench_function("distance_to_polyline_1000", |b| {
        b.iter(|| {
            let d = cable_geometry::distance_to_polyline_xy(
                black_box(Vec2::new(200.0, 70.0)),
                black_box(&points),
            );
            black_box(d)
        })
    });
}

criterion_group!(
    geometry_benches,
    bench_span_generation,
    bench_spatial_queries,
    bench_polyline_distance
);
criterion_main!(geometry_benches);
