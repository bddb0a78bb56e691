// SafeCost Bench Runner v0.2.0 — Monte Carlo Convergence Validation
// N seeded runs per scenario, mean ± 95% CI on the simulated safety cost
//
// Usage:
//   cargo run --release --bin bench                     # Run all scenarios (30 runs each)
//   cargo run --release --bin bench -- --runs 5         # Quick mode (5 runs each)
//   cargo run --release --bin bench -- RAILWAY          # Filter by name
//   cargo run --release --bin bench -- --seed 42        # Custom base seed

mod report;
mod scenarios;

use report::*;
use scenarios::*;

use safecost_engine::run_simulation_seeded;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs { runs: 30, seed: 0, filter: None };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Scenario Execution ─────────────────────────────────────────────────────

/// Run one scenario `n_runs` times with seeds base..base+n and aggregate.
fn run_scenario(scenario: &Scenario, n_runs: usize, base_seed: u64) -> ScenarioReport {
    let mut runs = Vec::with_capacity(n_runs);

    for i in 0..n_runs {
        let seed = base_seed + i as u64;
        let start = Instant::now();
        let result = run_simulation_seeded(&scenario.params, seed)
            .expect("bench scenarios are sized to stay in the models' valid range");
        let elapsed_ms = start.elapsed().as_millis();

        let cells = &result.break_even_surface.required_efficiencies_pct;
        let cell_count = (cells.len() * cells[0].len()) as f64;
        let surface_mean = cells.iter().flatten().sum::<f64>() / cell_count;

        runs.push(RunResult {
            scenario: scenario.name.to_string(),
            seed,
            duration_months: result.duration_months,
            workers: result.workers,
            fatality_rate: result.fatality_rate,
            expected_fatalities: result.expected_fatalities,
            mean_safety_cost: result.mean_safety_cost_usd,
            std_safety_cost: result.std_safety_cost_usd,
            net_benefit: result.outcome.net_benefit_usd,
            feasible: result.outcome.feasible,
            surface_mean_required_efficiency: surface_mean,
            elapsed_ms,
        });
    }

    let duration_months = runs[0].duration_months;
    let workers = runs[0].workers;
    let fatality_rate = runs[0].fatality_rate;
    let deterministic_agreement = runs.iter().all(|r| {
        r.duration_months == duration_months
            && r.workers == workers
            && r.fatality_rate == fatality_rate
    });

    let mean_safety_cost =
        Stats::from_samples(&runs.iter().map(|r| r.mean_safety_cost).collect::<Vec<_>>());
    let net_benefit =
        Stats::from_samples(&runs.iter().map(|r| r.net_benefit).collect::<Vec<_>>());
    let elapsed_ms =
        Stats::from_samples(&runs.iter().map(|r| r.elapsed_ms as f64).collect::<Vec<_>>());
    let feasible_rate = runs.iter().filter(|r| r.feasible).count() as f64 / runs.len() as f64;

    ScenarioReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        analysis_mode: scenario.params.mode.index(),
        n_runs,
        duration_months,
        workers,
        fatality_rate,
        deterministic_agreement,
        mean_safety_cost,
        net_benefit,
        feasible_rate,
        elapsed_ms,
        individual_runs: runs,
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios
                .iter()
                .filter(|s| {
                    s.name.to_lowercase().contains(&f_lower)
                        || s.label.to_lowercase().contains(&f_lower)
                })
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    println!("\n  SafeCost Bench Runner v0.2.0");
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!(
        "  {:<42} {:>4} {:>13} {:>7} {:>9} {:>6}",
        "Scenario", "Mode", "MeanCost($)", "CI%", "Feas%", "Time"
    );
    println!("  {}", "-".repeat(88));

    let suite_start = Instant::now();
    let mut reports = Vec::new();
    let mut converged = 0usize;

    for scenario in &to_run {
        let report = run_scenario(scenario, cli.runs, cli.seed);

        let rel_ci = report.mean_safety_cost.ci_half_width()
            / report.mean_safety_cost.mean.abs().max(f64::EPSILON);
        let pass = report.deterministic_agreement && rel_ci <= scenario.max_rel_ci;
        if pass {
            converged += 1;
        }

        println!(
            "  {:<42} {:>4} {:>13.0} {:>6.2}% {:>8.0}% {:>4.0}ms  {}",
            report.label,
            report.analysis_mode,
            report.mean_safety_cost.mean,
            rel_ci * 100.0,
            report.feasible_rate * 100.0,
            report.elapsed_ms.mean,
            if pass { "PASS" } else { "FAIL" },
        );

        reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();
    let total = reports.len();
    let failed = total - converged;

    println!("  {}", "-".repeat(88));
    println!(
        "  Total: {}  Converged: {}  Failed: {}  Suite time: {:.1}s\n",
        total,
        converged,
        failed,
        suite_elapsed.as_secs_f64()
    );

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis();
    let timestamp = format!("{}", ts);

    let bench_report = BenchReport {
        timestamp: timestamp.clone(),
        version: "0.2.0",
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        summary: Summary { total, converged, failed },
        scenarios: reports,
    };

    let dir = std::path::Path::new("bench-results");
    if !dir.exists() {
        std::fs::create_dir_all(dir).expect("Failed to create bench-results/");
    }
    let path = dir.join(format!("bench-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&bench_report).expect("Failed to serialize");
    std::fs::write(&path, &json).expect("Failed to write benchmark file");
    println!("  Results saved to: {}\n", path.display());

    if failed > 0 {
        std::process::exit(1);
    }
}
