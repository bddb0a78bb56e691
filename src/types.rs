// Copyright 2026 Hypermesh Foundation. All rights reserved.
// SafeCost Simulation Suite - Type Definitions

use serde::{Serialize, Deserialize};

use crate::constants::{
    DEFAULT_ITERATIONS, EQUIPMENT_DRIVER_DAILY_WAGE_USD, INVESTIGATION_COST_USD,
    LEGAL_COST_USD, WORKER_DAILY_WAGE_USD,
};
use crate::models::ProjectInputs;

// ─── Analysis Mode ──────────────────────────────────────────────────────────

/// The three economic analyses, each carrying its own parameters.
/// Percentages are expressed 0-100 as the frontend collects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum AnalysisMode {
    /// Mode 1: what prevention efficiency must a given investment reach?
    #[serde(rename_all = "camelCase")]
    EfficiencyThreshold { technology_efficiency_pct: f64, investment_ratio_pct: f64 },
    /// Mode 2: equipment that replaces part of the crew for a monthly fee.
    #[serde(rename_all = "camelCase")]
    LaborReduction { reduction_rate_pct: f64, monthly_fee_usd: f64 },
    /// Mode 3: wearable devices priced per worker equipped.
    #[serde(rename_all = "camelCase")]
    WearableDevice { efficiency_pct: f64, unit_price_usd: f64, apply_rate_pct: f64 },
}

impl AnalysisMode {
    /// Mode number as the frontend labels it.
    pub fn index(&self) -> u8 {
        match self {
            Self::EfficiencyThreshold { .. } => 1,
            Self::LaborReduction { .. } => 2,
            Self::WearableDevice { .. } => 3,
        }
    }
}

// ─── SimulationParams ───────────────────────────────────────────────────────

/// One complete simulation request. Built fresh per invocation and dropped
/// once the result exists; the engine retains nothing across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    #[serde(flatten)]
    pub project: ProjectInputs,
    #[serde(flatten)]
    pub mode: AnalysisMode,
    /// Total construction cost, USD. Must be positive.
    pub total_cost_usd: f64,
    /// Heavy equipment on site, units.
    #[serde(default)]
    pub equipment_count: f64,
    #[serde(default = "default_worker_daily_wage")]
    pub worker_daily_wage_usd: f64,
    #[serde(default = "default_equipment_driver_daily_wage")]
    pub equipment_driver_daily_wage_usd: f64,
    #[serde(default = "default_legal_cost")]
    pub legal_cost_usd: f64,
    #[serde(default = "default_investigation_cost")]
    pub investigation_cost_usd: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

fn default_worker_daily_wage() -> f64 {
    WORKER_DAILY_WAGE_USD
}
fn default_equipment_driver_daily_wage() -> f64 {
    EQUIPMENT_DRIVER_DAILY_WAGE_USD
}
fn default_legal_cost() -> f64 {
    LEGAL_COST_USD
}
fn default_investigation_cost() -> f64 {
    INVESTIGATION_COST_USD
}
fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl SimulationParams {
    /// Request with the statutory wage/cost constants and 1000 iterations.
    pub fn new(project: ProjectInputs, mode: AnalysisMode, total_cost_usd: f64) -> Self {
        Self {
            project,
            mode,
            total_cost_usd,
            equipment_count: 0.0,
            worker_daily_wage_usd: WORKER_DAILY_WAGE_USD,
            equipment_driver_daily_wage_usd: EQUIPMENT_DRIVER_DAILY_WAGE_USD,
            legal_cost_usd: LEGAL_COST_USD,
            investigation_cost_usd: INVESTIGATION_COST_USD,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

// ─── Per-Iteration Sample ───────────────────────────────────────────────────

/// One Monte Carlo draw. Only the first three of a run are retained, as the
/// frontend's worked-example panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationSample {
    pub delay_days: f64,
    pub settlement_usd: f64,
    pub penalty_usd: f64,
    pub iteration_cost_usd: f64,
}

// ─── Mode Outcome & Sweep Tables ────────────────────────────────────────────

/// Base-case output of the economic calculator for the requested mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeOutcome {
    /// Accident-cost saving (EMV x efficiency or reduction rate).
    pub cost_reduction_usd: f64,
    /// Mode 2 only: wage bill saved by the removed crew share.
    pub labor_saving_usd: Option<f64>,
    /// Technology investment cost over the project.
    pub tech_cost_usd: f64,
    pub net_benefit_usd: f64,
    /// `net_benefit >= 0`.
    pub feasible: bool,
}

/// Mode 2 sweep row: reduction rate varies, tech cost stays at base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionRow {
    pub reduction_rate_pct: f64,
    pub cost_reduction_usd: f64,
    pub labor_saving_usd: f64,
    pub tech_cost_usd: f64,
    pub net_benefit_usd: f64,
}

/// Mode 3 sweep row: efficiency varies, tech cost stays at base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyRow {
    pub efficiency_pct: f64,
    pub cost_reduction_usd: f64,
    pub tech_cost_usd: f64,
    pub net_benefit_usd: f64,
}

// ─── Break-Even Records ─────────────────────────────────────────────────────

/// Closed-form break-even overlay point (no re-simulation behind it).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenPoint {
    pub investment_ratio_pct: f64,
    pub total_cost_usd: f64,
    pub required_efficiency_pct: f64,
}

/// The simulated required-efficiency surface: three aligned arrays, with
/// `required_efficiencies[i][j]` belonging to `investment_ratios[i]` and
/// `total_costs[j]`. Every cell is clamped to [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenSurface {
    pub investment_ratios_pct: Vec<f64>,
    pub total_costs_usd: Vec<f64>,
    pub required_efficiencies_pct: Vec<Vec<f64>>,
}

// ─── SimulationResult ───────────────────────────────────────────────────────

/// Everything a frontend renders from one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub project_label: String,
    pub analysis_mode: u8,
    pub total_cost_usd: f64,
    pub duration_months: f64,
    pub workers: f64,
    pub fatality_rate: f64,
    pub expected_fatalities: f64,
    pub mean_safety_cost_usd: f64,
    pub std_safety_cost_usd: f64,
    /// First three Monte Carlo draws, for the worked-example panel.
    pub sample_preview: Vec<IterationSample>,
    /// All iteration costs, sorted ascending. Length equals `iterations`.
    pub cost_distribution_usd: Vec<f64>,
    pub outcome: ModeOutcome,
    pub reduction_table: Option<Vec<ReductionRow>>,
    pub efficiency_table: Option<Vec<EfficiencyRow>>,
    pub break_even_points: Vec<BreakEvenPoint>,
    pub break_even_surface: BreakEvenSurface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_serde_applies_wage_defaults() {
        let json = r#"{
            "projectType": "railway",
            "lengthKm": 10.0,
            "mode": "efficiencyThreshold",
            "technologyEfficiencyPct": 40.0,
            "investmentRatioPct": 0.05,
            "totalCostUsd": 7285974.0
        }"#;
        let params: SimulationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.iterations, DEFAULT_ITERATIONS);
        assert!((params.worker_daily_wage_usd - WORKER_DAILY_WAGE_USD).abs() < 1e-9);
        assert!((params.legal_cost_usd - LEGAL_COST_USD).abs() < 1e-9);
        assert_eq!(params.equipment_count, 0.0);
        assert_eq!(params.mode.index(), 1);
    }

    #[test]
    fn params_round_trip() {
        let params = SimulationParams::new(
            ProjectInputs::Sewerage { length_km: 10.0 },
            AnalysisMode::WearableDevice {
                efficiency_pct: 60.0,
                unit_price_usd: 250.0,
                apply_rate_pct: 80.0,
            },
            5_000_000.0,
        );
        let json = serde_json::to_string(&params).unwrap();
        let back: SimulationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn mode_indices() {
        let m1 = AnalysisMode::EfficiencyThreshold {
            technology_efficiency_pct: 40.0,
            investment_ratio_pct: 0.05,
        };
        let m2 =
            AnalysisMode::LaborReduction { reduction_rate_pct: 20.0, monthly_fee_usd: 900.0 };
        let m3 = AnalysisMode::WearableDevice {
            efficiency_pct: 50.0,
            unit_price_usd: 300.0,
            apply_rate_pct: 100.0,
        };
        assert_eq!((m1.index(), m2.index(), m3.index()), (1, 2, 3));
    }
}
