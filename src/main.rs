use clap::Parser;

use circulib::cli::{Cli, Commands, demo, menu};

fn main() -> std::io::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Demo { json }) => {
            demo::run(json);
            Ok(())
        }
        None => menu::run(),
    }
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // keep interactive output readable: no module targets, no timestamps
        .with_target(false)
        .without_time()
        .init();
}
