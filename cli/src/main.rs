mod report;
mod tui;

use anyhow::Result;
use clap::Parser;
use staygrid_core::BoardService;

#[derive(Parser)]
#[command(name = "staygrid")]
#[command(about = "A weekly hotel booking board for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive booking board
    Board,
    /// Print one week of the board as a table
    Schedule {
        /// Week window to print (0-based)
        #[arg(long, default_value_t = 0)]
        week: usize,
        /// Emit the board as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the booking records for a week
    Bookings {
        /// Week window to list (0-based)
        #[arg(long, default_value_t = 0)]
        week: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let service = BoardService::sample();

    match cli.command {
        Some(Commands::Board) | None => tui::run(service),
        Some(Commands::Schedule { week, json }) => report::print_schedule(&service, week, json),
        Some(Commands::Bookings { week }) => report::print_bookings(&service, week),
    }
}
