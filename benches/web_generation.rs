// benches/web_generation.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use silkweb::connector::ConnectorGeometry;
use silkweb::spokes::{adjacent_pairs, SpokeGenerator};
use silkweb::trans_center::CenterTransform;
use silkweb::web_curve::CurveApproximator;
use silkweb::{render_layers, RandomSource, RasterSurface, RecordingSurface, WebConfig};

fn single_pass_benchmark_fn(c: &mut Criterion) {
    let config = WebConfig::default().with_seed(7);

    let mut group = c.benchmark_group("WebPass");

    group.bench_function("recording_surface_default_web", |b| {
        let mut rec = RecordingSurface::new();
        b.iter(|| {
            rec.clear();
            render_layers(black_box(&config), &mut rec, 1).unwrap()
        })
    });

    group.bench_function("raster_surface_default_web", |b| {
        let mut canvas = RasterSurface::for_config(&config).unwrap();
        b.iter(|| render_layers(black_box(&config), &mut canvas, 1).unwrap())
    });
    group.finish();
}

fn geometry_benchmark_fn(c: &mut Criterion) {
    let config = WebConfig::default();
    let transform = CenterTransform::new(config.width, config.height);
    let geometry = ConnectorGeometry::new(transform);
    let curves = CurveApproximator::from_config(&config);
    let mut rng = RandomSource::from_seed(11);
    let spokes = SpokeGenerator::new(config.num_spokes, config.height, config.angle_jitter)
        .generate(&transform, &mut rng)
        .unwrap();

    let mut group = c.benchmark_group("WebGeometry");
    group.bench_function("connect_and_bow_one_ring", |b| {
        b.iter(|| {
            let mut points = 0;
            for (a, s) in adjacent_pairs(&spokes) {
                let pair = geometry.connect(a, s, black_box(420.0)).unwrap();
                for connector in pair.chosen {
                    let segment = connector.to_segment().unwrap();
                    points += curves.approximate(&segment, &mut rng).points().len();
                }
            }
            points
        })
    });
    group.finish();
}

criterion_group!(benches, single_pass_benchmark_fn, geometry_benchmark_fn);
criterion_main!(benches);
