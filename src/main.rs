use clap::Parser;
use env_logger::Env;
use v6_ipam::cli::Cli;
use v6_ipam::commands::run;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    run(&args).await?;
    Ok(())
}
