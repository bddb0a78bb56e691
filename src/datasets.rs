// Copyright 2026 Hypermesh Foundation. All rights reserved.
// SafeCost Simulation Suite - Empirical Accident Datasets

//! Fixed empirical sample sets behind the three lognormal cost components.
//!
//! Settlement and penalty amounts come from adjudicated fatal-accident cases
//! and are recorded in KRW; delay durations are in days. The datasets are
//! compile-time constants and are never mutated — each run estimates its
//! lognormal parameters from them once and samples from those parameters.

use crate::constants::EXCHANGE_RATE;

/// Construction-halt durations observed after fatal accidents, days.
pub const DELAY_DAYS: [f64; 4] = [49.6, 51.4, 63.7, 54.3];

/// Settlement amounts from fatal-accident case records, KRW.
pub const SETTLEMENT_AMOUNTS_KRW: [f64; 30] = [
    110_000_000.0,
    120_000_000.0,
    130_000_000.0,
    150_000_000.0,
    160_000_000.0,
    170_000_000.0,
    170_000_000.0,
    170_000_000.0,
    180_000_000.0,
    200_000_000.0,
    200_000_000.0,
    220_000_000.0,
    250_000_000.0,
    260_000_000.0,
    310_000_000.0,
    320_000_000.0,
    330_000_000.0,
    330_000_000.0,
    350_000_000.0,
    350_000_000.0,
    380_000_000.0,
    380_000_000.0,
    450_000_000.0,
    520_000_000.0,
    550_000_000.0,
    600_000_000.0,
    730_000_000.0,
    850_000_000.0,
    880_000_000.0,
    1_000_000_000.0,
];

/// Court-imposed penalties from the same case records, KRW.
pub const PENALTIES_KRW: [f64; 18] = [
    30_000_000.0,
    100_000_000.0,
    50_000_000.0,
    50_000_000.0,
    20_000_000.0,
    30_000_000.0,
    80_000_000.0,
    20_000_000.0,
    20_000_000.0,
    80_000_000.0,
    50_000_000.0,
    50_000_000.0,
    80_000_000.0,
    80_000_000.0,
    150_000_000.0,
    80_000_000.0,
    80_000_000.0,
    50_000_000.0,
];

/// Settlement dataset converted to USD.
pub fn settlement_amounts_usd() -> Vec<f64> {
    SETTLEMENT_AMOUNTS_KRW.iter().map(|v| v / EXCHANGE_RATE).collect()
}

/// Penalty dataset converted to USD.
pub fn penalties_usd() -> Vec<f64> {
    PENALTIES_KRW.iter().map(|v| v / EXCHANGE_RATE).collect()
}
