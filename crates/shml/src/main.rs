mod cli;
mod commands;
mod config;
mod context;
mod data;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = Context::new(cli.config.as_deref(), cli.verbose).and_then(|ctx| {
        match cli.command {
            Commands::Render {
                template,
                data,
                format,
                missing,
                output,
            } => commands::render::run(&ctx, &template, &data, format, missing, output.as_deref()),
            Commands::Vars { template, json } => commands::vars::run(&ctx, &template, json),
            Commands::Index { data, format, json } => {
                commands::index::run(&ctx, &data, format, json)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
