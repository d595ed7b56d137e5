use asciicube_core::{
    BufferStore, Camera, Cube, CubeRenderer, Point3D, RenderConfig, RotationState, Transform,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_rotate_point(c: &mut Criterion) {
    let point = Point3D::new(3.0, -7.0, 10.0);
    let rotation = RotationState::new(0.7, 1.1, 0.0);

    c.bench_function("rotate_point", |b| {
        b.iter(|| Transform::rotate_point(black_box(&point), black_box(&rotation)))
    });
}

fn bench_clear(c: &mut Criterion) {
    let mut store = BufferStore::with_dimensions(80, 22).unwrap();

    c.bench_function("clear_80x22", |b| {
        b.iter(|| {
            store.clear_frame().unwrap();
            store.clear_depth().unwrap();
        })
    });
}

fn bench_draw_cube(c: &mut Criterion) {
    let mut store = BufferStore::with_dimensions(80, 22).unwrap();
    let cube = Cube::default();
    let camera = Camera::default();
    let rotation = RotationState::new(0.5, 0.5, 0.0);

    c.bench_function("draw_cube_80x22", |b| {
        b.iter(|| {
            store.clear_depth().unwrap();
            cube.draw(black_box(&rotation), &camera, &mut store);
        })
    });
}

fn bench_render_one_frame(c: &mut Criterion) {
    let mut renderer = CubeRenderer::new(&RenderConfig::default()).unwrap();

    c.bench_function("render_one_frame", |b| {
        b.iter(|| renderer.render_one_frame().unwrap())
    });
}

criterion_group!(
    benches,
    bench_rotate_point,
    bench_clear,
    bench_draw_cube,
    bench_render_one_frame
);
criterion_main!(benches);
