use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fleetdiag::canvas::Canvas;
use fleetdiag::color::Color;
use fleetdiag::diagrams;
use fleetdiag::draw::{self, Point, Rect, Shadow, Shape, Style};
use fleetdiag::font::{FontLibrary, Weight};
use fleetdiag::theme::Theme;
use std::hint::black_box;

fn scratch_canvas() -> Canvas {
    Canvas::new(800, 800, Color::WHITE)
}

fn gradient_box(side: f32) -> Shape {
    Shape::RoundedRect {
        rect: Rect::from_xywh(60.0, 60.0, side, side * 0.6),
        style: Style::gradient(Color::rgb(96, 141, 255), Color::rgb(34, 91, 216))
            .outlined(Color::rgb(29, 78, 216), 3.0)
            .rounded(15.0),
    }
}

fn bench_shape_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_fill");
    for side in [120u32, 300, 600] {
        let shape = gradient_box(side as f32);
        group.bench_with_input(BenchmarkId::from_parameter(side), &shape, |b, shape| {
            b.iter(|| {
                let mut canvas = scratch_canvas();
                draw::draw_shape(&mut canvas, black_box(shape));
                black_box(canvas.width());
            });
        });
    }
    group.finish();
}

fn bench_shadow(c: &mut Criterion) {
    let mut group = c.benchmark_group("shadow");
    let shape = gradient_box(400.0);
    for sigma in [2u32, 6, 12] {
        let shadow = Shadow::new(6.0, 8.0, sigma as f32, 70);
        group.bench_with_input(BenchmarkId::from_parameter(sigma), &shadow, |b, shadow| {
            b.iter(|| {
                let mut canvas = scratch_canvas();
                draw::with_shadow(&mut canvas, black_box(&shape), *shadow);
                black_box(canvas.width());
            });
        });
    }
    group.finish();
}

fn bench_wrapped_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapped_text");
    let library = FontLibrary::load();
    let font = library.font(15.0, Weight::Regular);
    let body = "NPD detectors and custom plugins monitor host signals (GPU, IB, \
                filesystem, kubelet, runtime) and produce standardized Node Events, \
                Node Conditions, and taint recommendations. Quarantine via cordon + \
                taint prevents scheduling immediately; repair and recertification \
                return the node to the healthy buffer.";
    for width in [250u32, 475, 950] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let mut canvas = scratch_canvas();
                let bottom = draw::draw_wrapped(
                    &mut canvas,
                    &font,
                    Point::new(20.0, 20.0),
                    black_box(body),
                    width as f32,
                    Color::rgb(30, 41, 59),
                    5.0,
                );
                black_box(bottom);
            });
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let palette = Theme::default_palette().palette().expect("palette parse failed");
    let fonts = FontLibrary::shared();
    for diagram in diagrams::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(diagram.stem),
            diagram,
            |b, diagram| {
                b.iter(|| {
                    let canvas = (diagram.render)(black_box(&palette), fonts)
                        .expect("render failed");
                    black_box(canvas.width());
                });
            },
        );
    }
    group.finish();
}

fn bench_encode_png(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_png");
    let palette = Theme::default_palette().palette().expect("palette parse failed");
    let fonts = FontLibrary::shared();
    let diagram = &diagrams::all()[1];
    let canvas = (diagram.render)(&palette, fonts).expect("render failed");
    group.bench_with_input(
        BenchmarkId::from_parameter(diagram.stem),
        &canvas,
        |b, canvas| {
            b.iter(|| {
                let bytes = black_box(canvas).encode_png().expect("encode failed");
                black_box(bytes.len());
            });
        },
    );
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_shape_fill, bench_shadow, bench_wrapped_text, bench_compose, bench_encode_png
);
criterion_main!(benches);
