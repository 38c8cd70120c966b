//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a criterion benchmark function with the given name that runs the
/// benchmark function of the same name in the given module.
///
/// An optional element count declares how many operations one invocation of
/// the benchmarked closure performs, so that criterion reports throughput.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name($crate::benchmark::criterion::CriterionBenchmarker::new(
                c,
                stringify!($group),
                stringify!($name),
                None,
            ));
        }
    };
    ($group:ident, $name:ident, elements = $elements:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name($crate::benchmark::criterion::CriterionBenchmarker::new(
                c,
                stringify!($group),
                stringify!($name),
                Some($elements),
            ));
        }
    };
}

/// [`Benchmarker`] running the benchmarked closure under criterion, with one
/// benchmark group per benchmark module.
#[allow(missing_debug_implementations)]
pub struct CriterionBenchmarker<'a> {
    c: &'a mut Criterion,
    group: &'static str,
    name: &'static str,
    elements: Option<u64>,
}

impl<'a> CriterionBenchmarker<'a> {
    pub fn new(
        c: &'a mut Criterion,
        group: &'static str,
        name: &'static str,
        elements: Option<u64>,
    ) -> Self {
        Self {
            c,
            group,
            name,
            elements,
        }
    }
}

impl Benchmarker for CriterionBenchmarker<'_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        let mut benchmark_group = self.c.benchmark_group(self.group);

        if let Some(elements) = self.elements {
            benchmark_group.throughput(Throughput::Elements(elements));
        }

        benchmark_group.bench_function(self.name, |b| b.iter(&mut f));
        benchmark_group.finish();
    }
}

/// The criterion configuration used for all benchmark targets.
pub fn config() -> Criterion {
    Criterion::default().noise_threshold(0.03)
}
