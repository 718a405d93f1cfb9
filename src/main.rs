//! Codenames Binary
//!
//! Two-team Codenames at the terminal, with JSON save/load.

use clap::Parser;
use codenames::play::engine::Engine;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// resume from the save file instead of prompting
    #[arg(long)]
    load: bool,
    /// where to save and load game state
    #[arg(long, default_value = codenames::SAVE_PATH)]
    save: String,
}

fn main() {
    codenames::log();
    let args = Args::parse();
    Engine::new(args.save, args.load).play();
}
