//! The probe pipeline: configure → warm up → time → classify → report

use std::io::Write;

use crate::adapters::{detect_environment, FenceQuiescence, SystemClock};
use crate::domain::{
    MeasurementResult, PrecisionReport, ProbeConfig, ProbeFloat, ProbeReport, Regime, RegimeSet,
    SweepPlan,
};
use crate::error::ProbeError;
use crate::ports::{AllocatorQuiescence, MonotonicClock};
use crate::report::ReportWriter;

use super::kernel::{warm_up, KernelRunner};

/// Denormal performance probe
pub struct DenormalProbe<C = SystemClock, Q = FenceQuiescence> {
    config: ProbeConfig,
    runner: KernelRunner<C, Q>,
}

impl DenormalProbe {
    /// Create a probe with the system clock. The config is validated here.
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        Self::with_runner(config, KernelRunner::new())
    }
}

impl<C: MonotonicClock, Q: AllocatorQuiescence> DenormalProbe<C, Q> {
    pub fn with_runner(
        config: ProbeConfig,
        runner: KernelRunner<C, Q>,
    ) -> Result<Self, ProbeError> {
        config.validate()?;
        Ok(Self { config, runner })
    }

    /// Run the whole pipeline, writing each line as soon as it is measured.
    pub fn run<W: Write>(&self, out: &mut ReportWriter<W>) -> Result<ProbeReport, ProbeError> {
        tracing::info!(
            warmup_iterations = self.config.warmup_iterations,
            test_iterations = self.config.test_iterations,
            "Starting denormal probe"
        );

        let environment = detect_environment();
        out.write_header(&environment)?;

        warm_up(self.config.warmup_iterations);
        out.write_warmup_done()?;

        let single = self.run_precision(&self.config.single, out)?;
        let double = self.run_precision(&self.config.double, out)?;

        out.write_sweep_header()?;
        let single_sweeps = self.run_sweeps(&self.config.single_sweep, out)?;
        let double_sweeps = self.run_sweeps(&self.config.double_sweep, out)?;

        let report = ProbeReport {
            environment,
            single,
            double,
            single_sweeps,
            double_sweeps,
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            let json = serde_json::to_string(&report)?;
            tracing::debug!(report = %json, "Probe report");
        }

        Ok(report)
    }

    /// Time the normal, quick-underflow and sustained-denormal regimes.
    pub fn run_precision<T: ProbeFloat, W: Write>(
        &self,
        regimes: &RegimeSet<T>,
        out: &mut ReportWriter<W>,
    ) -> Result<PrecisionReport<T>, ProbeError> {
        out.write_precision_header(T::PRECISION)?;

        let normal = self.measure(&regimes.normal, out)?;
        let quick_underflow = self.measure(&regimes.quick_underflow, out)?;
        let sustained_denormal = self.measure(&regimes.sustained_denormal, out)?;

        let report = PrecisionReport {
            precision: T::PRECISION,
            normal,
            quick_underflow,
            sustained_denormal,
        };

        let penalty = report.denormal_penalty();
        tracing::info!(precision = %T::PRECISION, penalty = ?penalty, "Denormal penalty");
        out.write_penalty(penalty)?;

        Ok(report)
    }

    /// Run every decay factor of a persistence sweep.
    pub fn run_sweeps<T: ProbeFloat, W: Write>(
        &self,
        plan: &SweepPlan<T>,
        out: &mut ReportWriter<W>,
    ) -> Result<Vec<MeasurementResult<T>>, ProbeError> {
        plan.decays
            .iter()
            .map(|decay| {
                let result = self.runner.sweep(&decay.to_run(self.config.test_iterations))?;
                out.write_sweep(&result)?;
                Ok(result)
            })
            .collect()
    }

    fn measure<T: ProbeFloat, W: Write>(
        &self,
        regime: &Regime<T>,
        out: &mut ReportWriter<W>,
    ) -> Result<MeasurementResult<T>, ProbeError> {
        let result = self.runner.measure(&regime.to_run(self.config.test_iterations));
        out.write_measurement(&result)?;
        Ok(result)
    }
}
