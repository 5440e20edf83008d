use anyhow::Result;
use clap::Parser;
use maze_snake::game::GameConfig;
use maze_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "maze_snake")]
#[command(version, about = "Snake in a randomly carved maze")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "8")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "8")]
    height: usize,

    /// Play on a fully open grid instead of a carved maze
    #[arg(long)]
    open: bool,

    /// Initial snake length; segments start stacked on the center cell
    #[arg(long, default_value = "2")]
    length: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let mut config = GameConfig::new(cli.width, cli.height);
    config.carve_walls = !cli.open;
    config.initial_snake_length = cli.length;

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await
}
