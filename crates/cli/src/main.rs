use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use sbh::{random_sequence, solve, spectrum, Solution, SolveCfg, WalkKind};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "sbh")]
#[command(about = "Sequencing by hybridization: rebuild a sequence from its l-mers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reconstruct a sequence from a file with one l-mer per line
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON report path (a provenance sidecar is written next to it)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Accept symbols outside A/C/G/T
        #[arg(long, default_value_t = false)]
        allow_any_symbol: bool,
    },
    /// Print the ordered l-spectrum of a sequence
    Spectrum {
        #[arg(long)]
        sequence: String,
        #[arg(short = 'l', long = "lmer-len")]
        l: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a seeded random sequence and write its l-spectrum
    Simulate {
        #[arg(long)]
        length: usize,
        #[arg(short = 'l', long = "lmer-len")]
        l: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

/// JSON report written by `solve --out`.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a Path,
    sequence: &'a str,
    length: usize,
    lmer_len: usize,
    lmer_count: usize,
    path_vertices: usize,
    covered_edges: usize,
    walk: &'static str,
}

impl<'a> Report<'a> {
    fn new(input: &'a Path, sol: &'a Solution) -> Self {
        Self {
            input,
            sequence: &sol.sequence,
            length: sol.sequence.chars().count(),
            lmer_len: sol.lmer_len,
            lmer_count: sol.lmer_count,
            path_vertices: sol.path_vertices,
            covered_edges: sol.covered_edges,
            walk: match sol.walk {
                WalkKind::Path => "path",
                WalkKind::Circuit => "circuit",
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            allow_any_symbol,
        } => run_solve(&input, out.as_deref(), allow_any_symbol),
        Action::Spectrum { sequence, l, out } => run_spectrum(&sequence, l, out.as_deref()),
        Action::Simulate {
            length,
            l,
            seed,
            out,
        } => run_simulate(length, l, seed, &out),
    }
}

fn run_solve(input: &Path, out: Option<&Path>, allow_any_symbol: bool) -> Result<()> {
    tracing::info!(input = %input.display(), "solve");
    let lmers = input::read_lmers(input)?;

    println!("Detected l-mer length: {}", lmers[0].chars().count());
    println!("Number of l-mers: {}", lmers.len());
    println!();

    let cfg = SolveCfg {
        check_alphabet: !allow_any_symbol,
    };
    let sol = solve(&lmers, cfg).with_context(|| format!("solving {}", input.display()))?;
    tracing::info!(
        vertices = sol.path_vertices,
        edges = sol.covered_edges,
        "walk covers all l-mers"
    );
    println!("Reconstructed sequence: {}", sol.sequence);
    println!("Length: {}", sol.sequence.chars().count());

    if let Some(out) = out {
        ensure_parent(out)?;
        let report = Report::new(input, &sol);
        fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        write_sidecar(
            out,
            Payload::new(serde_json::json!({
                "command": "solve",
                "input": input,
                "allow_any_symbol": allow_any_symbol
            })),
        )?;
    }
    Ok(())
}

fn run_spectrum(sequence: &str, l: usize, out: Option<&Path>) -> Result<()> {
    tracing::info!(len = sequence.len(), l, "spectrum");
    let lmers = checked_spectrum(sequence, l)?;
    let text = lines(&lmers);
    match out {
        Some(out) => {
            ensure_parent(out)?;
            fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_simulate(length: usize, l: usize, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(length, l, seed, out = %out.display(), "simulate");
    let mut rng = StdRng::seed_from_u64(seed);
    let sequence = random_sequence(&mut rng, length);
    let lmers = checked_spectrum(&sequence, l)?;
    ensure_parent(out)?;
    fs::write(out, lines(&lmers)).with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "simulate",
            "length": length,
            "l": l,
            "seed": seed,
            "sequence": sequence
        })),
    )?;
    Ok(())
}

fn checked_spectrum(sequence: &str, l: usize) -> Result<Vec<String>> {
    if l < 2 {
        bail!("l-mer length must be at least 2, got {l}");
    }
    let lmers = spectrum(sequence, l);
    if lmers.is_empty() {
        bail!(
            "sequence of length {} is shorter than l = {l}",
            sequence.chars().count()
        );
    }
    Ok(lmers)
}

fn lines(lmers: &[String]) -> String {
    let mut text = lmers.join("\n");
    text.push('\n');
    text
}
