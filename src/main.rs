// ABOUTME: Main entry point for the podium program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static presentation site from Markdown sources
    Build(BuildArgs),

    /// Watch sources and rebuild on change, optionally serving the output
    Watch(WatchArgs),

    /// Fetch remote slides and generate a self-contained presentation page
    Fetch(FetchArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Presentations source root
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory (cleared on every build)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct WatchArgs {
    /// Presentations source root
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory (cleared on every rebuild)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Serve the output directory over HTTP
    #[arg(long)]
    serve: bool,

    /// Port for the local web server
    #[arg(long)]
    port: Option<u16>,

    /// Debounce time in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,
}

#[derive(Args)]
struct FetchArgs {
    /// Path to the output HTML page
    #[arg(short, long)]
    output: PathBuf,

    /// Repository owner
    #[arg(long)]
    owner: Option<String>,

    /// Repository name
    #[arg(long)]
    repo: Option<String>,

    /// Branch to fetch from
    #[arg(long)]
    branch: Option<String>,

    /// Path to the slides directory inside the repository
    #[arg(long)]
    path: Option<String>,

    /// Slide file names, in presentation order
    #[arg(long, value_delimiter = ',')]
    files: Option<Vec<String>>,

    /// Page title
    #[arg(long, default_value = "Presentation")]
    title: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = podium::Config::from_env();

    let result = match &cli.command {
        Some(Commands::Build(args)) => {
            println!("Executing build command...");

            let build_config = config.get_build_config(args.source.clone(), args.output.clone());
            podium::build_site(&build_config)
                .map(|_summary| println!("Build completed successfully!"))
        }
        Some(Commands::Watch(args)) => {
            println!("Executing watch command...");

            let watch_config = config.get_watch_config(
                args.source.clone(),
                args.output.clone(),
                args.serve,
                args.port,
                args.debounce_ms,
            );
            podium::watch_presentations(watch_config)
        }
        Some(Commands::Fetch(args)) => {
            println!("Executing fetch command...");

            let defaults = podium::RemoteSource::default();
            let source = podium::RemoteSource {
                owner: args.owner.clone().unwrap_or(defaults.owner),
                repo: args.repo.clone().unwrap_or(defaults.repo),
                branch: args.branch.clone().unwrap_or(defaults.branch),
                slide_path: args.path.clone().unwrap_or(defaults.slide_path),
                api_base: defaults.api_base,
            };
            let files: Vec<String> = args.files.clone().unwrap_or_else(|| {
                podium::DEFAULT_SLIDE_FILES
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });

            let mut page = podium::HtmlSlidePage::new(&args.title);
            let outcome =
                podium::load_remote_slides(&source, &files, config.fetch_timeout_ms, &mut page);

            // The page is written either way: on failure it carries the
            // visible error section instead of slides.
            fs::write(&args.output, page.render())
                .map_err(|e| anyhow::anyhow!("Failed to write output file: {}", e))?;

            outcome.map(|_| {
                println!("Presentation page generated: {:?}", args.output);
            })
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
