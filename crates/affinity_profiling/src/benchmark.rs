//! Running benchmark targets outside of a benchmarking framework.

#[cfg(feature = "criterion")]
pub mod criterion;

use affinity_log::info;
use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly execute and time a closure.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// [`Benchmarker`] that runs a closure in a loop for a fixed wall-clock
/// duration (at least once) and logs the achieved iteration rate.
#[derive(Clone, Debug)]
pub struct TimedBenchmarker {
    label: &'static str,
    duration: Duration,
    delayer: Delayer,
}

/// Postpones the start of a benchmark until a given time has passed since
/// program start, which leaves time for attaching a profiler.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

/// Summary of a completed [`TimedBenchmarker`] run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkReport {
    pub iterations: u64,
    pub elapsed: Duration,
}

impl TimedBenchmarker {
    pub fn new(label: &'static str, duration: Duration, delayer: Delayer) -> Self {
        Self {
            label,
            duration,
            delayer,
        }
    }

    /// Runs the closure and returns the number of iterations and the time
    /// they took.
    pub fn run<T>(self, f: &mut impl FnMut() -> T) -> BenchmarkReport {
        self.delayer.wait();

        let start = Instant::now();
        let mut iterations = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }

        BenchmarkReport {
            iterations,
            elapsed: start.elapsed(),
        }
    }
}

impl Benchmarker for TimedBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let label = self.label;
        let report = self.run(f);
        info!(
            "Benchmark {label}: {} iterations in {:.2} ms ({:.1} ns/iter)",
            report.iterations,
            report.elapsed.as_secs_f64() * 1e3,
            report.nanoseconds_per_iteration()
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(&self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            std::thread::sleep(remaining);
        }
    }
}

impl BenchmarkReport {
    /// Average wall-clock time per iteration in nanoseconds.
    pub fn nanoseconds_per_iteration(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.iterations.max(1) as f64
    }
}

/// Defines an enum with one variant per benchmark function, grouped by the
/// module (under the given benchmark module path) the function lives in.
/// The enum derives `clap::ValueEnum` when the invoking crate has the `cli`
/// feature enabled.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            /// The name of the benchmark function this target runs.
            pub fn label(&self) -> &'static str {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => concat!(stringify!($module), "::", stringify!($func)), )*
                    )*
                }
            }

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

/// Runs a benchmark target for the given number of seconds after waiting until
/// `delay` seconds have passed since the call.
pub fn benchmark(
    label: &'static str,
    execute: impl Fn(TimedBenchmarker),
    duration: f64,
    delay: f64,
) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    info!("Running benchmark {label} for at least {duration:?}");

    affinity_log::with_timing_info_logging!(
        "Benchmark {} including delay", label;
        execute(TimedBenchmarker::new(label, duration, delayer))
    );
}
