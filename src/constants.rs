// Copyright 2026 Hypermesh Foundation. All rights reserved.
// SafeCost Simulation Suite - Shared Constants

//! Fixed economic constants shared by the models and the simulator.
//!
//! The duration regressions and the empirical accident data are calibrated
//! in KRW; everything the caller supplies and receives is USD. Conversion
//! happens in exactly two places: dataset loading and the duration-formula
//! call, both through [`EXCHANGE_RATE`].

/// KRW per USD.
pub const EXCHANGE_RATE: f64 = 1372.5;

// Statutory wage survey values, KRW.
pub const WORKER_DAILY_WAGE_KRW: f64 = 154_905.0;
pub const WORKER_MONTHLY_WAGE_KRW: f64 = 4_647_165.0;
pub const EQUIPMENT_DRIVER_DAILY_WAGE_KRW: f64 = 249_549.0;

/// Daily worker wage for the delay-cost term (~$112.86).
pub const WORKER_DAILY_WAGE_USD: f64 = WORKER_DAILY_WAGE_KRW / EXCHANGE_RATE;
/// Monthly worker wage for the workforce model (~$3,386).
pub const WORKER_MONTHLY_WAGE_USD: f64 = WORKER_MONTHLY_WAGE_KRW / EXCHANGE_RATE;
/// Equipment operator daily wage for the delay-cost term (~$181.82).
pub const EQUIPMENT_DRIVER_DAILY_WAGE_USD: f64 =
    EQUIPMENT_DRIVER_DAILY_WAGE_KRW / EXCHANGE_RATE;

/// Fixed legal cost per fatal accident, USD.
pub const LEGAL_COST_USD: f64 = 291_439.0;
/// Fixed safety-investigation cost per fatal accident, USD.
pub const INVESTIGATION_COST_USD: f64 = 36_430.0;

/// Share of total cost assumed to be labor, for the workforce model.
pub const LABOR_COST_SHARE: f64 = 0.3;

/// Monte Carlo iterations per simulation run.
pub const DEFAULT_ITERATIONS: usize = 1000;

// ─── Break-Even Surface Grid ────────────────────────────────────────────────

/// Points per axis of the required-efficiency surface.
pub const SURFACE_GRID_POINTS: usize = 21;
/// Investment-ratio axis range, percent of total cost.
pub const SURFACE_RATIO_MIN_PCT: f64 = 0.01;
pub const SURFACE_RATIO_MAX_PCT: f64 = 0.10;
/// Total-cost axis spans [1 - SPAN, 1 + SPAN] x base cost.
pub const SURFACE_COST_SPAN: f64 = 0.3;

// ─── Coarse Break-Even Overlay ──────────────────────────────────────────────

/// Investment ratios for the closed-form break-even point list, percent.
pub const BREAK_EVEN_RATIOS_PCT: [f64; 10] =
    [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 10.0, 15.0, 20.0];
/// Cost levels as multiples of the base total cost.
pub const BREAK_EVEN_COST_LEVELS: [f64; 5] = [0.5, 0.75, 1.0, 1.25, 1.5];
/// Points needing more than this efficiency are dropped from the overlay.
pub const BREAK_EVEN_EFFICIENCY_CAP_PCT: f64 = 200.0;
