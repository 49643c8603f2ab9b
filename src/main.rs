#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe on the command line", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Play a single game and exit instead of offering a rematch.
    #[arg(long)]
    once: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use std::io;
    use tictactoe::{init_logging, Session};

    let cli = Cli::parse();
    init_logging();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    let outcome = if cli.once {
        session.run()?
    } else {
        session.play()?
    };
    log::debug!("exiting after {:?}", outcome);
    // Quit and end-of-input both exit with status 0; they are
    // player-intended terminations, not errors.
    Ok(())
}
