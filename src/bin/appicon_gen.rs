use std::path::PathBuf;

use clap::Parser;

use appicon_renderer::{manifest, IconGenerator, ImageLoader, STANDARD_TARGETS};

#[derive(Parser)]
#[command(name = "appicon-gen")]
#[command(about = "Generate square rounded-corner app icons from an image", long_about = None)]
#[command(version)]
struct Args {
    /// Input image (any format the `image` crate can decode)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Print the matching web-manifest `icons` fragment
    #[arg(long, default_value_t)]
    manifest: bool,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, default_value_t)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setup_logging(args.verbose, args.quiet);

    if !args.input.exists() {
        return Err(format!("input file does not exist: {}", args.input.display()).into());
    }

    if !args.output_dir.exists() {
        std::fs::create_dir_all(&args.output_dir)?;
    }

    let mut loader = ImageLoader::new();
    let source = loader.resolve_from_path(&args.input)?.clone();
    let dims = source.dimensions();

    if !args.quiet {
        log::info!(
            "loaded {} ({}x{})",
            args.input.display(),
            dims.width,
            dims.height
        );
    }

    let generator = IconGenerator::new(source);
    let written = generator.export_standard(&args.output_dir)?;

    if !args.quiet {
        for path in &written {
            log::info!("wrote {}", path.display());
        }
    }

    if args.manifest {
        println!("{}", manifest::icons_json(&STANDARD_TARGETS)?);
    }

    Ok(())
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
