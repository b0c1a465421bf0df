//! Saturn configuration compiler — command-line front end.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use saturn_confgen_core::{emit, translate, ConfigDocument};

#[derive(Parser)]
#[command(
    name = "saturn-confgen",
    version,
    about = "Compile a Saturn partition descriptor into generated BSP source"
)]
struct Cli {
    /// Configuration input file (JSON partition descriptor)
    #[arg(short, long)]
    input: PathBuf,

    /// Generated output file
    #[arg(short, long, default_value = "saturn_config.hpp")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let doc = ConfigDocument::parse(&content)
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    println!("[GEN] found configuration version: {}", doc.version);

    let total = doc.partitions.len();
    let mut body = String::new();
    for (index, partition) in doc.partitions.iter().enumerate() {
        println!("[GEN] parsing partition {}", index + 1);
        println!("[GEN]    partition os: {}", partition.system);
        body.push_str(&translate::partition_blocks(partition, index, total)?);
    }

    fs::write(&cli.output, emit::module(&body))
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!(
        "[GEN] {} partition(s) written to {}",
        total,
        cli.output.display()
    );
    Ok(())
}
