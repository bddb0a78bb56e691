// Copyright 2026 Hypermesh Foundation. All rights reserved.
// SafeCost Simulation Suite - Construction Safety Economics Engine

pub mod constants;
pub mod datasets;
pub mod distribution;
pub mod economics;
pub mod models;
pub mod simulation;
pub mod surface;
pub mod types;

pub use models::ProjectInputs;
pub use simulation::{
    run_simulation, run_simulation_seeded, run_simulation_with_cancel, CostDistributions,
    SimulationError,
};
pub use surface::CancelToken;
pub use types::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// Browser entry point: a `SimulationParams` object in, a `SimulationResult`
/// object out. Domain errors surface as JS exceptions; the host decides the
/// user-facing message.
#[wasm_bindgen]
pub fn simulate(params: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let params: SimulationParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("invalid simulation params: {e}")))?;

    let result = run_simulation(&params).map_err(|e| JsValue::from_str(&e.to_string()))?;

    log(&format!(
        "safecost: {} mode {}: mean safety cost ${:.0}, net benefit ${:.0}",
        result.project_label,
        result.analysis_mode,
        result.mean_safety_cost_usd,
        result.outcome.net_benefit_usd,
    ));

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}
