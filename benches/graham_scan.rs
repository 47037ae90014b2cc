use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::algorithms::GrahamScan;
use hull2d::data::Point;
use hull2d::shapes::Shape;
use num_bigint::BigInt;

pub fn criterion_benchmark(c: &mut Criterion) {
  for shape in Shape::ALL {
    let mut group = c.benchmark_group(format!("graham_scan/{}", shape));
    for &n in &[100, 1_000, 10_000] {
      let pts = shape.generate(n);
      for prefilter in [true, false] {
        let scan = GrahamScan::new().with_prefilter(prefilter);
        let label = if prefilter { "prefilter" } else { "plain" };
        group.bench_with_input(BenchmarkId::new(label, n), &pts, |b, pts| {
          b.iter_batched(|| pts.clone(), |inp| scan.run(inp), BatchSize::LargeInput)
        });
      }
    }
    group.finish();
  }

  let pts: Vec<Point<BigInt>> = Shape::Circles
    .generate(10_000)
    .into_iter()
    .map(|pt| pt.cast(BigInt::from))
    .collect();
  c.bench_function("graham_scan/circles/bigint", |b| {
    b.iter_batched(|| pts.clone(), |inp| GrahamScan::new().run(inp), BatchSize::LargeInput)
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
