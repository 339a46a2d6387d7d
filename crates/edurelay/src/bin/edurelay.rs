//! edurelay binary entry point

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    edurelay::cli::main().await
}
