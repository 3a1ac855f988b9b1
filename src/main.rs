use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Cells per side of the square grid
    #[arg(long, default_value = "20")]
    grid: i32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.grid.max(2));
    config.tick_interval_ms = cli.tick_ms.max(1);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
