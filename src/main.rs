use clap::Parser;
use color_eyre::Result;
use glyphdash::app;
use glyphdash::ui::layout::Variant;

#[derive(Parser)]
#[command(
    name = "glyphdash",
    version,
    about = "Terminal dashboard with CPU cache heatmap, gauges, disk/network flow and top processes"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();
    app::launch(Variant::System).await
}
