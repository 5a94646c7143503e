mod command;
mod config;
mod offline;
mod render;

use clap::{Parser, ValueEnum};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{BotType, TieBreakMode};
use tictactoe_common::{log, logger};

use config::{get_config_manager, Config, ConfigManager};
use offline::run_tictactoe_games;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeatArg {
    Human,
    Random,
    Minimax,
}

impl SeatArg {
    fn bot_type(self) -> Option<BotType> {
        match self {
            SeatArg::Human => None,
            SeatArg::Random => Some(BotType::Random),
            SeatArg::Minimax => Some(BotType::Minimax),
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to a YAML config; defaults to tictactoe_config.yaml next to the binary
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum)]
    player_a: Option<SeatArg>,
    #[arg(long, value_enum)]
    player_b: Option<SeatArg>,
    /// Search depth ceiling in plies
    #[arg(long)]
    depth: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Break ties between equally good moves at random instead of by lowest cell
    #[arg(long)]
    random_tie_break: bool,
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(seat) = self.player_a {
            config.player_a_bot = seat.bot_type();
        }
        if let Some(seat) = self.player_b {
            config.player_b_bot = seat.bot_type();
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.random_tie_break {
            config.tie_break = TieBreakMode::Random;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.bot_delay_ms = delay_ms;
        }
        if self.use_log_prefix && config.log.prefix.is_none() {
            config.log.prefix = Some("TicTacToe".to_string());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => ConfigManager::<_, Config, _>::from_yaml_file(path.as_str()).get_config()?,
        None => get_config_manager().get_config()?,
    };
    args.apply(&mut config);
    config.validate()?;

    logger::init_logger(config.log.prefix.clone(), config.log.sink())?;
    log!("Starting with config: {:?}", config);

    run_tictactoe_games(&config).await;

    log!("Exiting");
    Ok(())
}
