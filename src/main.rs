use clap::Parser;
use github_cli::{Cli, logging, output};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (json, outcome) = cli.run().await;
    output::print_output(json, &outcome);

    if outcome.is_err() {
        std::process::exit(1);
    }
}
