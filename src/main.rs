/*
 * Responsibility
 * - tokio runtime の起動
 * - app::run() の呼び出し（ロジックは置かない）
 */
use anyhow::Result;

use request_identity::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
