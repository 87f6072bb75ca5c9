use anyhow::Result;
use std::env;

use sales_report::config::Config;
use sales_report::pipeline;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: cargo run -- [working_dir]");
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(dir) => Config::with_root(dir),
        None => Config::default(),
    };
    pipeline::run(&config)?;

    Ok(())
}
