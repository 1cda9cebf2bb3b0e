use clap::{Parser, Subcommand};
use fedpack::{
    commands::{
        build::{self, BuildCommand},
        declare::{self, DeclareCommand},
        finalize, init,
        init::InitCommand,
        inspect::{self, InspectCommand},
        manifest, resolve,
    },
    logger, GlobalOpts,
};
use fedpack_config::VERSION_ENV_VAR;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fedpack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Federated plugin packager",
    long_about = "fedpack packages a UI component as a federated remote module and emits a manifest.json hosts use to discover it."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a plugin.toml template
    Init(InitCommand),
    /// Show the resolved plugin configuration
    Resolve,
    /// Print the bundler declaration (build phase)
    Declare(DeclareCommand),
    /// Print the manifest without writing it
    Manifest,
    /// Write manifest.json beside an existing bundle (finalize phase)
    Finalize,
    /// Declare, run the bundler, then finalize
    Build(BuildCommand),
    /// Show the fields of an emitted manifest.json
    Inspect(InspectCommand),
}

fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logger::verbosity_filter(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() {
    let mut cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing(cli.global.verbosity_level());

    // The only place the process environment is consulted for the version
    cli.global.version_override = std::env::var(VERSION_ENV_VAR).ok();

    let opts = &cli.global;
    let result: anyhow::Result<()> = match cli.command {
        Commands::Init(cmd) => init::handle_init(cmd, opts),
        Commands::Resolve => resolve::handle_resolve(opts).map_err(Into::into),
        Commands::Declare(cmd) => declare::handle_declare(cmd, opts).map_err(Into::into),
        Commands::Manifest => manifest::handle_manifest(opts).map_err(Into::into),
        Commands::Finalize => finalize::handle_finalize(opts).map_err(Into::into),
        Commands::Build(cmd) => build::handle_build(cmd, opts).map_err(Into::into),
        Commands::Inspect(cmd) => inspect::handle_inspect(cmd, opts),
    };

    if let Err(e) = result {
        logger::error(&format!("{:#}", e));
        if opts.verbosity_level() > 0 {
            logger::show_log_path();
        }
        std::process::exit(1);
    }
}
