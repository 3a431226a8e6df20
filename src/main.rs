#[tokio::main]
async fn main() -> anyhow::Result<()> {
    watchtower_lib::run().await
}
