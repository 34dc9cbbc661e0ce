//! nvml-amd - NVML-style GPU monitoring tool for AMD GPUs
//!
//! A command-line tool that reports AMD GPU utilization, memory and
//! temperature through the NVML-compatible adapter.

use clap::Parser;
use nvml_amd::cli::args::{generate_completions, Cli, Commands};
use nvml_amd::commands::{run_list, run_query, run_watch};
use nvml_amd::config::ConfigBuilder;
use nvml_amd::error::{AppError, NvmlError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still takes precedence
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let watch_interval = match &cli.command {
        Commands::Watch(args) => args.interval,
        _ => None,
    };

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .with_interval(watch_interval)
        .with_gpu_index(cli.gpu)
        .with_sysfs_root(cli.sysfs_root.clone())
        .build();

    let result = match &cli.command {
        Commands::List => run_list(&config, cli.format),

        Commands::Query => run_query(&config, cli.format),

        Commands::Watch(args) => run_watch(args, &config, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Nvml(NvmlError::InitializationFailed(_)) => {
            eprintln!();
            eprintln!("Hint: Make sure the amdgpu kernel driver is loaded.");
            eprintln!("      Use --sysfs-root to point at a different DRM directory.");
        }
        AppError::NoGpusFound => {
            eprintln!();
            eprintln!("Hint: No card under the DRM directory reports AMD's PCI vendor ID.");
        }
        AppError::Nvml(NvmlError::InvalidArgument(_)) => {
            eprintln!();
            eprintln!("Hint: Run 'nvml-amd list' to see valid GPU indices.");
        }
        _ => {}
    }
}
