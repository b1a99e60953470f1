use menu_store::cart::DEFAULT_BILL_WIDTH;
use menu_store::{MenuState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;

    tracing::info!(work_dir = %config.work_dir, "Menu store starting...");

    // 2. Open storage and hydrate
    let (state, worker) = MenuState::initialize(&config).await?;

    // 3. Summary
    for (index, category) in state.catalog().iter().enumerate() {
        tracing::info!(
            index,
            category = %category.category,
            dishes = category.dishes.len(),
            "Category"
        );
    }
    tracing::info!(
        lines = state.cart().len(),
        items = state.cart_item_count(),
        total = state.cart_total(),
        "Cart"
    );

    if let Ok(bill) = state.bill(shared::util::now_millis()) {
        println!("{}", bill.render(DEFAULT_BILL_WIDTH));
    }

    // 4. Drain queued writes and let the worker exit
    state.flush().await;
    drop(state);
    worker.await?;

    tracing::info!("Menu store stopped");
    Ok(())
}
