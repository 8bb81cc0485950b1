// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use yardstick_scale::{ScaleConfig, ScaleDirection, ScaleEngine, ScalePosition};
use yardstick_units::{DeviceDensity, UnitSystem};

fn bench_tick_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("yardstick_scale");
    group.sample_size(50);

    // A 6.7" phone at roughly 460 ppi.
    let density = DeviceDensity::from_pixels_per_inch(460.0);
    let size = Size::new(1440.0, 3120.0);

    for direction in [
        ScaleDirection::Top,
        ScaleDirection::Bottom,
        ScaleDirection::Center,
    ] {
        for unit_system in UnitSystem::ALL {
            let config = ScaleConfig::default()
                .with_direction(direction)
                .with_position(ScalePosition::Right)
                .with_unit_system(unit_system)
                .with_start_distance(12.5);
            let engine = ScaleEngine::new(&config, density);

            group.bench_function(format!("ticks({direction:?},{unit_system})"), |b| {
                b.iter(|| {
                    let mut sum = 0.0;
                    for tick in engine.ticks(black_box(size)) {
                        sum += tick.end.x + tick.end.y;
                    }
                    black_box(sum)
                });
            });
        }
    }

    let engine = ScaleEngine::new(&ScaleConfig::default(), density);
    group.bench_function("engine_rebuild_and_first_tick", |b| {
        b.iter(|| {
            let engine = ScaleEngine::new(black_box(engine.config()), density);
            black_box(engine.tick(0, size))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick_layout);
criterion_main!(benches);
