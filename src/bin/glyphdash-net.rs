use clap::Parser;
use color_eyre::Result;
use glyphdash::app;
use glyphdash::ui::layout::Variant;

#[derive(Parser)]
#[command(
    name = "glyphdash-net",
    version,
    about = "Terminal dashboard with active network connections and system information"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();
    app::launch(Variant::Network).await
}
