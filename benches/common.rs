//! Shared benchmark utilities.

use std::time::Duration;

use criterion::{BenchmarkGroup, Criterion, measurement::WallTime};
use fake::Fake;
use fake::faker::filesystem::en::FilePath;

/// Generate random file paths, a third of them under `~`.
#[must_use]
pub fn sample_paths(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let path: String = FilePath().fake();
            if i % 3 == 0 {
                format!("~{path}")
            } else {
                path
            }
        })
        .collect()
}

/// Standard Criterion configuration.
#[must_use]
pub fn standard_criterion_config() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(50)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
}

/// Create a benchmark group with a consistent name.
pub fn create_bench_group<'a>(c: &'a mut Criterion, name: &str) -> BenchmarkGroup<'a, WallTime> {
    c.benchmark_group(name)
}
