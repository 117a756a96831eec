use biodivine_algo_link_variants::cli::{CommonArgs, run_and_report};
use biodivine_algo_link_variants::orchestrator::{EnumerationMode, VariantGenerator};
use clap::Parser;

#[derive(Parser)]
#[command(name = "biodivine_link_variants")]
#[command(about = "Enumerate all link-operator variants of a logical model")]
struct Args {
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

    let results = args.common.results_directory(model.name());
    let config = args.common.config(EnumerationMode::Exhaustive);
    let generator = VariantGenerator::new(model, config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    println!(
        "Generating {} variants using {} workers into `{}`.",
        generator.num_variants(),
        generator.worker_count(),
        results.display()
    );

    run_and_report(&generator, &results);
}
