// Copyright 2026 Hypermesh Foundation. All rights reserved.
// SafeCost Simulation Suite - Economic Mode Calculators

//! Net-benefit calculators for the three analysis modes, plus the
//! closed-form break-even overlay.
//!
//! All three modes monetize the simulated mean safety cost (the EMV of one
//! project's accident exposure) against a technology investment. Modes 2 and
//! 3 also produce a ten-row sweep table over their rate/efficiency axis; per
//! the reference economics the tech cost in those tables stays at the
//! base-case value rather than being recomputed per row.

use crate::constants::{
    BREAK_EVEN_COST_LEVELS, BREAK_EVEN_EFFICIENCY_CAP_PCT, BREAK_EVEN_RATIOS_PCT,
};
use crate::types::{
    AnalysisMode, BreakEvenPoint, EfficiencyRow, ModeOutcome, ReductionRow,
};

/// Days of site activity per month of schedule.
const WORK_DAYS_PER_MONTH: f64 = 30.0;

/// Base-run quantities the calculators consume.
#[derive(Debug, Clone, Copy)]
pub struct EconomicContext {
    pub total_cost_usd: f64,
    pub duration_months: f64,
    pub workers: f64,
    pub worker_daily_wage_usd: f64,
}

/// Mode outcome plus whichever sweep table the mode defines.
#[derive(Debug, Clone)]
pub struct ModeEvaluation {
    pub outcome: ModeOutcome,
    pub reduction_table: Option<Vec<ReductionRow>>,
    pub efficiency_table: Option<Vec<EfficiencyRow>>,
}

/// Run the calculator for the requested mode.
pub fn evaluate_mode(
    mode: AnalysisMode,
    ctx: EconomicContext,
    mean_safety_cost: f64,
) -> ModeEvaluation {
    match mode {
        AnalysisMode::EfficiencyThreshold { technology_efficiency_pct, investment_ratio_pct } => {
            let investment = ctx.total_cost_usd * investment_ratio_pct / 100.0;
            let expected_savings = mean_safety_cost * technology_efficiency_pct / 100.0;
            let net_benefit = expected_savings - investment;
            ModeEvaluation {
                outcome: ModeOutcome {
                    cost_reduction_usd: expected_savings,
                    labor_saving_usd: None,
                    tech_cost_usd: investment,
                    net_benefit_usd: net_benefit,
                    feasible: net_benefit >= 0.0,
                },
                reduction_table: None,
                efficiency_table: None,
            }
        }

        AnalysisMode::LaborReduction { reduction_rate_pct, monthly_fee_usd } => {
            let rate = reduction_rate_pct / 100.0;
            let work_days = ctx.duration_months * WORK_DAYS_PER_MONTH;
            let tech_cost = monthly_fee_usd * ctx.duration_months;

            let emv_saving = mean_safety_cost * rate;
            let labor_saving =
                ctx.workers * rate * ctx.worker_daily_wage_usd * work_days;
            let net_benefit = emv_saving + labor_saving - tech_cost;

            let table = (1..=10)
                .map(|step| {
                    let pct = step as f64 * 10.0;
                    let r = pct / 100.0;
                    let emv = mean_safety_cost * r;
                    let labor = ctx.workers * r * ctx.worker_daily_wage_usd * work_days;
                    ReductionRow {
                        reduction_rate_pct: pct,
                        cost_reduction_usd: emv,
                        labor_saving_usd: labor,
                        tech_cost_usd: tech_cost,
                        net_benefit_usd: emv + labor - tech_cost,
                    }
                })
                .collect();

            ModeEvaluation {
                outcome: ModeOutcome {
                    cost_reduction_usd: emv_saving,
                    labor_saving_usd: Some(labor_saving),
                    tech_cost_usd: tech_cost,
                    net_benefit_usd: net_benefit,
                    feasible: net_benefit >= 0.0,
                },
                reduction_table: Some(table),
                efficiency_table: None,
            }
        }

        AnalysisMode::WearableDevice { efficiency_pct, unit_price_usd, apply_rate_pct } => {
            let tech_cost = unit_price_usd * ctx.workers * apply_rate_pct / 100.0;
            let cost_reduction = mean_safety_cost * efficiency_pct / 100.0;
            let net_benefit = cost_reduction - tech_cost;

            let table = (1..=10)
                .map(|step| {
                    let pct = step as f64 * 10.0;
                    let reduction = mean_safety_cost * pct / 100.0;
                    EfficiencyRow {
                        efficiency_pct: pct,
                        cost_reduction_usd: reduction,
                        tech_cost_usd: tech_cost,
                        net_benefit_usd: reduction - tech_cost,
                    }
                })
                .collect();

            ModeEvaluation {
                outcome: ModeOutcome {
                    cost_reduction_usd: cost_reduction,
                    labor_saving_usd: None,
                    tech_cost_usd: tech_cost,
                    net_benefit_usd: net_benefit,
                    feasible: net_benefit >= 0.0,
                },
                reduction_table: None,
                efficiency_table: Some(table),
            }
        }
    }
}

/// Closed-form break-even overlay: coarse ratio x cost-level grid evaluated
/// against the base run's mean safety cost. Points above the chart cap are
/// omitted; the efficiency floor is 0.
pub fn break_even_points(total_cost_usd: f64, mean_safety_cost: f64) -> Vec<BreakEvenPoint> {
    let mut points = Vec::new();
    for &ratio_pct in BREAK_EVEN_RATIOS_PCT.iter() {
        for &level in BREAK_EVEN_COST_LEVELS.iter() {
            let cost = total_cost_usd * level;
            let required = (ratio_pct / 100.0 * cost) / mean_safety_cost * 100.0;
            if required <= BREAK_EVEN_EFFICIENCY_CAP_PCT {
                points.push(BreakEvenPoint {
                    investment_ratio_pct: ratio_pct,
                    total_cost_usd: cost,
                    required_efficiency_pct: required.max(0.0),
                });
            }
        }
    }
    points
}
