// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use yardstick_motion::{MotionDebounce, MotionLog, MotionSample, MotionSettings};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Sensor stream at 200 Hz: bursts of motion separated by still periods.
fn samples(count: u64, seed: u64) -> Vec<MotionSample> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|i| {
            let t = i * 5;
            let moving = (t / 1500) % 2 == 0 && rng.next_f64() < 0.3;
            let scale = if moving { 1.5 } else { 0.2 };
            MotionSample::from_xyz(
                t,
                (rng.next_f64() - 0.5) * scale,
                (rng.next_f64() - 0.5) * scale,
                9.81,
            )
        })
        .collect()
}

fn bench_debounce(c: &mut Criterion) {
    let mut group = c.benchmark_group("yardstick_motion");
    group.sample_size(50);

    for &count in &[1_000_u64, 100_000_u64] {
        let stream = samples(count, 0x5EED_0000_0000_0001);

        group.bench_function(format!("update(n={count})"), |b| {
            b.iter_batched(
                || MotionDebounce::new(MotionSettings::default()),
                |mut debounce| {
                    let mut commits = 0_usize;
                    for sample in &stream {
                        if debounce.update(*sample).is_some() {
                            commits += 1;
                        }
                    }
                    black_box(commits)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("update_traced(n={count})"), |b| {
            b.iter_batched(
                || (MotionDebounce::new(MotionSettings::default()), MotionLog::new()),
                |(mut debounce, mut log)| {
                    for sample in &stream {
                        debounce.update_traced(*sample, &mut log);
                    }
                    black_box(log.commit_count())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_debounce);
criterion_main!(benches);
