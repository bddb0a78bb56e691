// SafeCost Bench Report Types
// Structured output for reviewing Monte Carlo convergence across seeds

use serde::Serialize;

// ─── Statistics (per-metric aggregation across seeded runs) ─────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }

    /// Half-width of the 95% confidence interval.
    pub fn ci_half_width(&self) -> f64 {
        (self.ci_upper - self.ci_lower) / 2.0
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub scenario: String,
    pub seed: u64,
    pub duration_months: f64,
    pub workers: f64,
    pub fatality_rate: f64,
    pub expected_fatalities: f64,
    pub mean_safety_cost: f64,
    pub std_safety_cost: f64,
    pub net_benefit: f64,
    pub feasible: bool,
    pub surface_mean_required_efficiency: f64,
    pub elapsed_ms: u128,
}

// ─── Per-Scenario Aggregation ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub label: String,
    pub analysis_mode: u8,
    pub n_runs: usize,
    /// Deterministic quantities, identical across runs by construction.
    pub duration_months: f64,
    pub workers: f64,
    pub fatality_rate: f64,
    /// True when every run reproduced the same deterministic quantities.
    pub deterministic_agreement: bool,
    pub mean_safety_cost: Stats,
    pub net_benefit: Stats,
    pub feasible_rate: f64,
    pub elapsed_ms: Stats,
    pub individual_runs: Vec<RunResult>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub n_runs_per_scenario: usize,
    pub summary: Summary,
    pub scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub converged: usize,
    pub failed: usize,
}
