use std::io;

use hello_fetch::composer::Composer;
use hello_fetch::config::AppConfig;
use hello_fetch::net::ReqwestClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::builder().build()?;
    let client = ReqwestClient::new(&config)?;

    let mut composer = Composer::new(client, io::stdout().lock());
    composer.run(&config).await?;

    Ok(())
}
