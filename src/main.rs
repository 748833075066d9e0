/*
 * Responsibility
 * - tokio runtime entrypoint
 * - delegate to app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    supafast_api::app::run().await
}
