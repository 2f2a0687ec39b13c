use clap::Parser;

mod adapters;
mod cli;
mod config;
mod flows;
mod gateways;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run(cli::Args::parse())
}
