//! Sequential check run.

use crate::error::Result;
use crate::requirements::{Prober, ProbeOutcome, RequirementRegistry};
use crate::ui::Reporter;
use std::io::Write;
use std::time::{Duration, Instant};

/// Tally of one run, for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Dependencies found.
    pub present: usize,
    /// Dependencies whose probe ran and printed nothing.
    pub absent: usize,
    /// Probes that could not be carried out.
    pub probe_errors: usize,
    /// Probes with no command for this host.
    pub unsupported: usize,
    /// Total duration.
    pub duration: Duration,
}

impl RunSummary {
    fn record(&mut self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Present { .. } => self.present += 1,
            ProbeOutcome::Absent => self.absent += 1,
            ProbeOutcome::ProbeError { .. } => self.probe_errors += 1,
            ProbeOutcome::Unsupported { .. } => self.unsupported += 1,
        }
    }

    /// Number of dependencies probed.
    pub fn total(&self) -> usize {
        self.present + self.missing()
    }

    /// Dependencies that got an instruction block.
    pub fn missing(&self) -> usize {
        self.absent + self.probe_errors + self.unsupported
    }
}

/// Probes every registered dependency in order and reports each one.
pub struct CheckRunner<'a> {
    registry: &'a RequirementRegistry,
    prober: Prober<'a>,
}

impl<'a> CheckRunner<'a> {
    /// Create a runner.
    pub fn new(registry: &'a RequirementRegistry, prober: Prober<'a>) -> Self {
        Self { registry, prober }
    }

    /// Probe and report each dependency before moving to the next.
    ///
    /// A missing dependency never stops the run; only a failure to write the
    /// report does.
    pub fn run<O: Write, E: Write>(&self, reporter: &mut Reporter<O, E>) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::default();

        for dependency in self.registry.iter() {
            let result = self.prober.probe(dependency);
            reporter.report(dependency, &result)?;
            summary.record(&result.outcome);
        }

        summary.duration = start.elapsed();
        tracing::debug!(
            "Checked {} dependencies: {} present, {} missing",
            summary.total(),
            summary.present,
            summary.missing()
        );
        Ok(summary)
    }
}
