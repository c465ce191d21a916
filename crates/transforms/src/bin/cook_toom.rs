// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Cook–Toom Transform CLI
//!
//! Synthesizes the matrices of a minimal filter F(n, r) for the given points
//! and proves them correct symbolically.

use anyhow::{Context, Result};
use clap::Parser;
use ct_transforms::utils::format_triple;
use ct_transforms::{ConfigOverrides, Framing, ScalingPolicy, SynthesisConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Synthesize Cook-Toom / Winograd minimal filtering transforms F(n, r) over exact rationals."
)]
struct Args {
    /// Comma-separated evaluation points, e.g. "0,1,-1,1/2". A trailing "inf" is optional.
    #[arg(long, allow_hyphen_values = true)]
    points: Option<String>,

    /// Output length n
    #[arg(short = 'n', long = "n")]
    n: Option<usize>,

    /// Filter length r
    #[arg(short = 'r', long = "r")]
    r: Option<usize>,

    /// Where the scale factors go: filter|G, output|A, input|B, separate|F (or 0..=3)
    #[arg(long)]
    policy: Option<ScalingPolicy>,

    /// Print A, G, B for the convolution framing instead of AT, G, BT
    #[arg(long, default_value_t = false)]
    convolution: bool,

    /// Skip the symbolic check
    #[arg(long, default_value_t = false)]
    no_verify: bool,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level written to stderr
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            points: self.points.clone(),
            n: self.n,
            r: self.r,
            policy: self.policy,
            framing: self.convolution.then_some(Framing::Convolution),
            verify: self.no_verify.then_some(false),
        }
    }
}

fn setup_simple_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    setup_simple_tracing(args.log_level);

    let config = SynthesisConfig::load(args.config.as_deref(), &args.overrides())
        .context("Could not load configuration")?;
    let points = config.point_set()?;
    info!("loaded configuration {:?}", config);

    let triple = config.synthesize()?;

    println!("=== Cook-Toom Transform Synthesizer ===");
    println!("F({}, {}) on points {}", triple.n(), triple.r(), points);
    println!(
        "Multiplications: {} (direct: {})",
        triple.alpha(),
        triple.n() * triple.r()
    );
    println!("Scaling policy: {}\n", triple.policy());

    println!("{}", format_triple(&triple, config.framing));

    if config.policy == ScalingPolicy::ExposeAsSeparateFactor {
        let data = match config.framing {
            Framing::Filter => "BT·d",
            Framing::Convolution => "A·d",
        };
        println!("Apply f⁻¹ to {data} before the elementwise product.\n");
    }

    if config.verify {
        let result = config.framing.check(&triple)?;
        print!("{}", result);
        println!("✓ Verification passed: transform matches the direct formula");
    }

    Ok(())
}
