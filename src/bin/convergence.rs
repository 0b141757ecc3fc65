use clap::Parser;
use convsim_rs::Result;
use convsim_rs::dist::{RngSampler, round_to};
use convsim_rs::scenario::{
    ScenarioResult, ScenarioSpec, SimParams, TopologySpec, parameter_summaries,
    simulate_link_failure,
};
use convsim_rs::topo::{TopologyKind, default_topologies};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "convergence",
    about = "Estimate control-plane convergence time after a single link failure"
)]
struct Args {
    /// Path to a scenario JSON file
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Override topology kind: mesh, ring, star or fat_tree
    #[arg(long)]
    topology: Option<TopologyKind>,

    /// Override switch count (fat-tree rounds down to a valid pod count)
    #[arg(long)]
    switches: Option<usize>,

    /// Override number of controller replicas
    #[arg(long)]
    controllers: Option<usize>,

    /// Override Monte-Carlo iteration count
    #[arg(long)]
    iterations: Option<usize>,

    /// Seed for the scenario RNG
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    ralpha: Option<f64>,
    #[arg(long)]
    rxmin: Option<f64>,
    #[arg(long)]
    walpha: Option<f64>,
    #[arg(long)]
    wxmin: Option<f64>,
    #[arg(long)]
    psalpha: Option<f64>,
    #[arg(long)]
    psxmin: Option<f64>,
    #[arg(long)]
    pcalpha: Option<f64>,
    #[arg(long)]
    pcxmin: Option<f64>,

    /// Hold the ingress switch back until the atomic commit point
    #[arg(long)]
    consistent_updates: bool,

    /// Run every preset topology instead of the configured one
    #[arg(long)]
    all_presets: bool,

    /// Print p50/p99.9 of each delay distribution
    #[arg(long)]
    param_stats: bool,

    /// Write the full result as JSON
    #[arg(long)]
    json_out: Option<PathBuf>,
}

/// 命令行给出的值覆盖场景文件，未给出的保持文件中的值
fn apply_overrides(args: &Args, spec: &mut ScenarioSpec) -> Result<()> {
    if args.topology.is_some() || args.switches.is_some() {
        let kind = args.topology.unwrap_or_else(|| spec.topology.kind());
        let switches = match args.switches {
            Some(n) => n,
            None => spec.topology.switches()?,
        };
        spec.topology = TopologySpec::new(kind, switches);
    }
    if args.seed.is_some() {
        spec.seed = args.seed;
    }

    let p: &mut SimParams = &mut spec.params;
    if let Some(v) = args.controllers {
        p.num_controllers = v;
    }
    if let Some(v) = args.iterations {
        p.iterations = v;
    }
    let floats = [
        (args.ralpha, &mut p.ralpha),
        (args.rxmin, &mut p.rxmin),
        (args.walpha, &mut p.walpha),
        (args.wxmin, &mut p.wxmin),
        (args.psalpha, &mut p.psalpha),
        (args.psxmin, &mut p.psxmin),
        (args.pcalpha, &mut p.pcalpha),
        (args.pcxmin, &mut p.pcxmin),
    ];
    for (arg, slot) in floats {
        if let Some(v) = arg {
            *slot = v;
        }
    }
    if args.consistent_updates {
        p.consistent_updates = true;
    }
    Ok(())
}

fn print_result(name: &str, result: &ScenarioResult) {
    let failed = result
        .failed_link
        .map(|l| l.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!(
        "topology=\"{name}\" switches={} failed={failed} switches_to_update={}",
        result.num_switches,
        result.switches_to_update.len()
    );
    for s in &result.summaries {
        println!(
            "scheme={} samples={} p50={} p999={}",
            s.scheme,
            s.samples,
            round_to(s.p50, 2),
            round_to(s.p999, 2)
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut spec = match &args.spec {
        Some(path) => ScenarioSpec::from_path(path)?,
        None => ScenarioSpec {
            topology: TopologySpec::new(TopologyKind::Mesh, 20),
            params: SimParams::default(),
            seed: None,
        },
    };
    apply_overrides(args, &mut spec)?;
    spec.params.validate()?;

    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.param_stats {
        let mut sampler = RngSampler::new(StdRng::seed_from_u64(rng.next_u64()));
        for s in parameter_summaries(&spec.params, &mut sampler)? {
            println!(
                "param={} expected={} p50={} p999={}",
                s.name,
                round_to(s.expected, 2),
                round_to(s.p50, 2),
                round_to(s.p999, 2)
            );
        }
    }

    let json = if args.all_presets {
        let mut reports = Vec::new();
        for (name, topology) in default_topologies() {
            let result = simulate_link_failure(&topology, &spec.params, &mut rng)?;
            print_result(name, &result);
            reports.push(serde_json::json!({ "name": name, "result": result }));
        }
        serde_json::Value::Array(reports)
    } else {
        let topology = spec.topology.build()?;
        let name = format!("{}-switch {}", topology.num_switches, topology.kind);
        let result = simulate_link_failure(&topology, &spec.params, &mut rng)?;
        print_result(&name, &result);
        serde_json::to_value(&result)?
    };

    if let Some(path) = &args.json_out {
        fs::write(path, serde_json::to_string_pretty(&json)?)?;
    }
    Ok(())
}
