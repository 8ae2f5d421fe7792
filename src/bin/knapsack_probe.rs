use std::env;
use std::time::Instant;

use knapsack_dag::{build_graph, KnapsackEngine, KnapsackInstance, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack DAG Probe: Scaling and Correctness");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Solves deterministic integer instances of increasing size and checks");
    eprintln!("each result against a capacity-indexed table DP (up to {} items).", options.verify_limit);
    eprintln!();
    eprintln!("Columns:");
    eprintln!("  • vertices/edges: size of the decision DAG");
    eprintln!("  • wall_s: wall-clock time in seconds for the full pipeline");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = above verify limit");
    eprintln!();

    let mut sys = System::new();
    let strategies = options.strategies();
    let total = strategies.len();
    let mut measurements = Vec::new();
    for (idx, &strategy) in strategies.iter().enumerate() {
        eprintln!("[{}/{}] Strategy '{}'...", idx + 1, total, strategy);
        measurements.extend(run_strategy(strategy, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("knapsack_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    strategy: Option<Strategy>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 200usize;
        let mut strategy = None;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let (key, inline) = match arg.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = || -> Result<String, String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {key}")),
                }
            };
            match key.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--verify-limit" => {
                    verify_limit = value()?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a non-negative integer".to_string())?
                }
                "--strategy" => {
                    let v = value()?;
                    strategy = if v == "all" { None } else { Some(v.parse::<Strategy>()?) };
                }
                _ => return Err(format!("unrecognized argument '{key}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            strategy,
        })
    }

    fn strategies(&self) -> Vec<Strategy> {
        match self.strategy {
            Some(s) => vec![s],
            None => vec![Strategy::Layered, Strategy::Dijkstra],
        }
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin knapsack_probe [-- <options>]

Options:
  --format <csv|table|json>          Output format (default: csv)
  --verify-limit <N>                 Largest item count checked against the table DP (default: 200)
  --strategy <layered|dijkstra|all>  Solver(s) to probe (default: all)
  -h, --help                         Print this help message

Examples:
  cargo run --bin knapsack_probe
  cargo run --release --bin knapsack_probe -- --format table --strategy layered
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    strategy: Strategy,
    items: usize,
    vertices: usize,
    edges: usize,
    value: f64,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_strategy(strategy: Strategy, options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[8, 16, 32, 64, 128, 256, 512];
    let engine = KnapsackEngine::with_strategy(strategy);
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] {} items... ", idx + 1, total, n);
            let (values, volumes, capacity) = deterministic_items(n);
            let graph = build_graph(&values, &volumes, capacity);
            let (vertices, edges) = (graph.num_vertices(), graph.num_edges());
            drop(graph);

            let instance = match KnapsackInstance::new(values, volumes, capacity) {
                Ok(inst) => inst,
                Err(err) => {
                    eprintln!("✗ invalid instance: {err}");
                    return Measurement {
                        strategy,
                        items: n,
                        vertices,
                        edges,
                        value: 0.0,
                        wall_s: 0.0,
                        rss_delta_kib: 0,
                        status: VerificationStatus::Failed,
                        detail: Some(err.to_string()),
                    };
                }
            };

            let before = rss_kib(sys);
            let start = Instant::now();
            let solution = engine.run(&instance);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (status, detail) = if n > options.verify_limit {
                (VerificationStatus::NotChecked, None)
            } else {
                let expected = table_dp(instance.values(), instance.volumes(), capacity);
                if solution.value != expected {
                    (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {}", solution.value)),
                    )
                } else if solution.volume > capacity {
                    (
                        VerificationStatus::Failed,
                        Some(format!("volume {} exceeds {capacity}", solution.volume)),
                    )
                } else {
                    (VerificationStatus::Passed, None)
                }
            };

            eprintln!(
                "{} value={}, vertices={}, edges={}, time={:.3}s, status={}",
                status.icon(),
                solution.value,
                vertices,
                edges,
                wall_s,
                status.label()
            );

            Measurement {
                strategy,
                items: n,
                vertices,
                edges,
                value: solution.value,
                wall_s,
                rss_delta_kib,
                status,
                detail,
            }
        })
        .collect()
}

fn print_summary(measurements: &[Measurement]) {
    let count = |s: VerificationStatus| measurements.iter().filter(|m| m.status == s).count();
    let (passed, failed, not_checked) = (
        count(VerificationStatus::Passed),
        count(VerificationStatus::Failed),
        count(VerificationStatus::NotChecked),
    );

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary: {passed} passed, {failed} failed, {not_checked} not checked");
    for m in measurements.iter().filter(|m| m.status == VerificationStatus::Failed) {
        eprintln!("  ✗ {} ({} items)", m.strategy, m.items);
        if let Some(ref detail) = m.detail {
            eprintln!("     Error: {detail}");
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("strategy,items,vertices,edges,value,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{},{:.3},{},{},\"{}\"",
            m.strategy,
            m.items,
            m.vertices,
            m.edges,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "{:<9}  {:>6}  {:>10}  {:>10}  {:>12}  {:>9}  {:>13}  {:>11}  detail",
        "strategy", "items", "vertices", "edges", "value", "wall_s", "rss_delta_kib", "status"
    );
    println!("{}", "-".repeat(100));
    for m in measurements {
        println!(
            "{:<9}  {:>6}  {:>10}  {:>10}  {:>12}  {:>9.3}  {:>13}  {:>11}  {}",
            m.strategy.as_str(),
            m.items,
            m.vertices,
            m.edges,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"strategy\":\"{}\",\"items\":{},\"vertices\":{},\"edges\":{},\"value\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.strategy,
            m.items,
            m.vertices,
            m.edges,
            m.value,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

/// Integer-valued instance whose capacity is half the total volume.
fn deterministic_items(n: usize) -> (Vec<f64>, Vec<f64>, f64) {
    let values: Vec<f64> = (0..n).map(|i| (1 + (i * 37 + 11) % 97) as f64).collect();
    let volumes: Vec<f64> = (0..n).map(|i| (1 + (i * 13 + 5) % 29) as f64).collect();
    let capacity = (volumes.iter().sum::<f64>() / 2.0).floor();
    (values, volumes, capacity)
}

/// Best value by the textbook capacity-indexed table; integer volumes only.
fn table_dp(values: &[f64], volumes: &[f64], capacity: f64) -> f64 {
    let cap = capacity as usize;
    let mut best = vec![0.0f64; cap + 1];
    for (&v, &w) in values.iter().zip(volumes) {
        let w = w as usize;
        for c in (w..=cap).rev() {
            best[c] = best[c].max(best[c - w] + v);
        }
    }
    best[cap]
}
