use aniremap::cli::Cli;
use aniremap::{Config, run};
use clap::{CommandFactory, Parser};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = if command.loads_config() {
        let config = Config::load()?;
        config.validate()?;
        config
    } else {
        Config::default()
    };
    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(command, config))
}
