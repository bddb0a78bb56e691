// Copyright 2026 Hypermesh Foundation. All rights reserved.
// SafeCost Simulation Suite - Break-Even Surface Sweep

//! The two-dimensional break-even sweep: investment ratio x total cost.
//!
//! Each of the 21 total-cost levels gets its own full re-simulation
//! (duration and crew recomputed, fatality rate pinned to the base run),
//! and its mean safety cost is shared by all 21 investment ratios in that
//! column. The sweep dominates the whole run's compute, so native targets
//! fan the columns out across cores — every column owns a private
//! generator — and a cooperative cancellation token is checked once per
//! column. The wasm build runs the same columns sequentially.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::constants::{
    EXCHANGE_RATE, SURFACE_COST_SPAN, SURFACE_GRID_POINTS, SURFACE_RATIO_MAX_PCT,
    SURFACE_RATIO_MIN_PCT, WORKER_MONTHLY_WAGE_USD,
};
use crate::models;
use crate::simulation::{
    expected_fatalities, simulate_costs, stream_rng, CostDistributions, SimulationContext,
    SimulationError,
};
use crate::types::{BreakEvenSurface, SimulationParams};

// ─── Cancellation ───────────────────────────────────────────────────────────

/// Shared flag a host can flip to abort a sweep between grid columns.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

// ─── Sweep ──────────────────────────────────────────────────────────────────

/// Build the required-efficiency surface around the base run.
///
/// `fixed_fatality_rate` is the base run's rate, reused for every column
/// even though the recomputed crew size would sometimes land in a different
/// bucket — the reference economics keep the hazard class of the appraised
/// project across the whole sweep.
pub fn generate(
    params: &SimulationParams,
    dists: &CostDistributions,
    fixed_fatality_rate: f64,
    seed: Option<u64>,
    cancel: &CancelToken,
) -> Result<BreakEvenSurface, SimulationError> {
    let ratios = linspace(SURFACE_RATIO_MIN_PCT, SURFACE_RATIO_MAX_PCT, SURFACE_GRID_POINTS);
    let costs = linspace(
        params.total_cost_usd * (1.0 - SURFACE_COST_SPAN),
        params.total_cost_usd * (1.0 + SURFACE_COST_SPAN),
        SURFACE_GRID_POINTS,
    );

    let column_means = sweep_columns(params, dists, fixed_fatality_rate, seed, cancel, &costs)?;

    let required_efficiencies = ratios
        .iter()
        .map(|ratio_pct| {
            costs
                .iter()
                .zip(column_means.iter())
                .map(|(cost, mean)| {
                    let investment = ratio_pct / 100.0 * cost;
                    (investment / mean * 100.0).clamp(0.0, 100.0)
                })
                .collect()
        })
        .collect();

    Ok(BreakEvenSurface {
        investment_ratios_pct: ratios,
        total_costs_usd: costs,
        required_efficiencies_pct: required_efficiencies,
    })
}

/// Mean safety cost for one total-cost column: re-derive duration and crew,
/// keep the pinned fatality rate, run one full simulation.
fn column_mean(
    params: &SimulationParams,
    dists: &CostDistributions,
    fixed_fatality_rate: f64,
    seed: Option<u64>,
    cancel: &CancelToken,
    column: usize,
    cost_usd: f64,
) -> Result<f64, SimulationError> {
    if cancel.is_cancelled() {
        return Err(SimulationError::Cancelled);
    }

    let duration = params.project.duration_months(cost_usd * EXCHANGE_RATE);
    let workers = models::worker_count(cost_usd, duration, WORKER_MONTHLY_WAGE_USD)?;
    let deaths = expected_fatalities(fixed_fatality_rate, duration, workers);

    let ctx = SimulationContext {
        workers,
        equipment_count: params.equipment_count,
        expected_fatalities: deaths,
        worker_daily_wage_usd: params.worker_daily_wage_usd,
        equipment_driver_daily_wage_usd: params.equipment_driver_daily_wage_usd,
        legal_cost_usd: params.legal_cost_usd,
        investigation_cost_usd: params.investigation_cost_usd,
    };

    // Stream 0 is the base run; columns start at 1
    let mut rng = stream_rng(seed, 1 + column as u64);
    Ok(simulate_costs(&ctx, dists, params.iterations, &mut rng).mean)
}

#[cfg(not(target_arch = "wasm32"))]
fn sweep_columns(
    params: &SimulationParams,
    dists: &CostDistributions,
    fixed_fatality_rate: f64,
    seed: Option<u64>,
    cancel: &CancelToken,
    costs: &[f64],
) -> Result<Vec<f64>, SimulationError> {
    use rayon::prelude::*;

    costs
        .par_iter()
        .enumerate()
        .map(|(j, &cost)| column_mean(params, dists, fixed_fatality_rate, seed, cancel, j, cost))
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn sweep_columns(
    params: &SimulationParams,
    dists: &CostDistributions,
    fixed_fatality_rate: f64,
    seed: Option<u64>,
    cancel: &CancelToken,
    costs: &[f64],
) -> Result<Vec<f64>, SimulationError> {
    costs
        .iter()
        .enumerate()
        .map(|(j, &cost)| column_mean(params, dists, fixed_fatality_rate, seed, cancel, j, cost))
        .collect()
}

fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    let last = (points - 1) as f64;
    (0..points)
        .map(|i| start + (i as f64 / last) * (end - start))
        .collect()
}
