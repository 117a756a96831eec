use biodivine_algo_link_variants::cli::{CommonArgs, run_and_report};
use biodivine_algo_link_variants::orchestrator::{EnumerationMode, VariantGenerator};
use clap::Parser;

#[derive(Parser)]
#[command(name = "biodivine_link_sample")]
#[command(about = "Generate random link-operator variants of a logical model")]
struct Args {
    /// Number of random variants (drawn with replacement)
    #[arg(long, require_equals = true)]
    num: u64,

    /// Seed of the random generator (default: random)
    #[arg(long, require_equals = true)]
    seed: Option<u64>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();
    args.common.init_logging();

    let model = args.common.load_model().unwrap_or_else(|e| {
        eprintln!("Failed to load model file {}: {}", args.common.file, e);
        std::process::exit(1);
    });

    println!(
        "Loaded model `{}` with {} equations.",
        model.name(),
        model.equations().len()
    );

    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let results = args.common.results_directory(model.name());
    let config = args.common.config(EnumerationMode::Random {
        count: args.num,
        seed,
    });
    let generator = VariantGenerator::new(model, config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    println!(
        "Sampling {} of {} variants (seed {}) using {} workers into `{}`.",
        args.num,
        generator.num_variants(),
        seed,
        generator.worker_count(),
        results.display()
    );

    run_and_report(&generator, &results);
}
