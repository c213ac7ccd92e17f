mod cli;

use tmdb2mkvtags::{
    config,
    error::{EXIT_FAILURE, EXIT_OK},
    run::{self, EpisodeRequest, MovieRequest, OutputTarget, RunReport},
    select::TerminalPrompt,
    tmdb::TmdbClient,
    Error,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{number_arg, Cli, Commands};
use std::path::Path;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_FAILURE } else { EXIT_OK };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tmdb2mkvtags=debug".to_string()
        } else {
            "tmdb2mkvtags=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<Error>()
            .map(Error::exit_code)
            .unwrap_or(EXIT_FAILURE);
        std::process::exit(code);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    if let Commands::Validate = cli.command {
        return validate_config(config_path);
    }

    let config = config::load_config_or_default(config_path)?;
    let client = TmdbClient::new(&config)?;
    let mut prompt = TerminalPrompt;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let report = match cli.command {
        Commands::Movie {
            language,
            title,
            outdir,
        } => {
            let request = MovieRequest {
                language,
                title,
                output: OutputTarget::from_arg(outdir.as_deref()),
            };
            rt.block_on(run::run_movie(&client, &config, &request, &mut prompt))?
        }
        Commands::Tv {
            output,
            language,
            title,
            season,
            episode,
        } => {
            let request = EpisodeRequest {
                language,
                title,
                season: number_arg(season.as_deref()),
                episode: number_arg(episode.as_deref()),
                output: OutputTarget::from_arg(output.as_deref()),
            };
            rt.block_on(run::run_episode(&client, &config, &request, &mut prompt))?
        }
        Commands::Validate => return Ok(()),
    };

    report_outcome(&report);
    Ok(())
}

fn report_outcome(report: &RunReport) {
    match &report.outdir {
        Some(dir) => {
            let shown = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.clone());
            eprintln!("Files written into directory:\n{}", shown.display());
        }
        None => eprintln!("Not downloading images"),
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;
    println!("✓ Configuration is valid");
    if let Some(source) = config::find_config(path) {
        println!("  Loaded from: {}", source.display());
    }
    println!("  API base URL: {}", config.api_base_url);
    println!("  Include adult: {}", config.include_adult);
    println!("  Original image size: {}", config.image_size_original);
    println!("  All images: {}", config.all_images);
    println!("  Warn on unknown crew: {}", config.warn_unknown_crew);
    Ok(())
}
