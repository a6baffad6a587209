use anyhow::Result;
use chatwrapped::{analyzer, init_default_stop_words, utils, Args};
use clap::Parser;
use tracing::error;

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if args.init {
        return init_default_stop_words();
    }

    utils::validate_args(&args)?;

    match analyzer::analyze_file(&args) {
        Ok(result) => analyzer::print_output(&result, &args),
        Err(e) => {
            error!(error = %format!("{:#}", e), "Analysis failed");
            std::process::exit(1);
        }
    }
}
