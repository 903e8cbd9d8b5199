//! Demo entry point: replays the Tech Store walkthrough on stdout.

fn main() -> anyhow::Result<()> {
    minimart_observability::init();

    let mut stdout = std::io::stdout().lock();
    let outcome = minimart_demo::run(&mut stdout)?;

    tracing::info!(
        catalog_size = outcome.store.size(),
        users = outcome.store.user_count(),
        "demo finished"
    );
    Ok(())
}
