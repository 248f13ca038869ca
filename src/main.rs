use courier::config::Config;
use courier::server;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // One thread drives everything: the accept loop and every connection
    // task run on the same LocalSet, so connection state never crosses
    // threads and never needs a lock.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                tokio::select! {
                    res = server::run(&cfg) => {
                        res
                    }

                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                        Ok(())
                    }
                }
            })
            .await
    })
}
