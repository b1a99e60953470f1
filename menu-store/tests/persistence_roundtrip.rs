use menu_store::persistence::{MENU_DATA_KEY, RecordSource, RecordStore, RedbRecordStore};
use menu_store::{Config, MenuState};
use shared::models::{Category, Dish, DishUpdate};

fn config_in(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::with_work_dir(dir.path().join("menu").to_string_lossy());
    config.db_file = "menu.redb".into();
    config.seed_on_empty = true;
    config
}

/// Stop the state and wait until the database file is released
async fn shutdown(state: MenuState, worker: tokio::task::JoinHandle<()>) {
    state.flush().await;
    drop(state);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_restart_restores_catalog_and_cart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let (state, worker) = MenuState::initialize(&config).await.unwrap();
    state.add_category("Soups", Some("soup"), false).unwrap();
    let soup = state.add_dish("Soups", "Tomato Soup", 90.0, true).unwrap();
    state
        .edit_dish(
            "Starters",
            "samosa",
            &DishUpdate {
                price: Some(45.0),
                ..Default::default()
            },
        )
        .unwrap();
    state.add_to_cart(&soup);
    state.add_to_cart(&soup);

    let catalog = state.catalog();
    let cart = state.cart();
    shutdown(state, worker).await;

    let (restored, worker) = MenuState::initialize(&config).await.unwrap();
    assert_eq!(restored.catalog(), catalog);
    assert_eq!(restored.cart(), cart);
    assert_eq!(restored.cart_total(), 180.0);
    assert_eq!(restored.catalog()[0].dish("samosa").unwrap().price, 45.0);
    shutdown(restored, worker).await;
}

#[tokio::test]
async fn test_empty_catalog_without_seed() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.seed_on_empty = false;

    let (state, worker) = MenuState::initialize(&config).await.unwrap();
    assert_eq!(state.category_count(), 0);
    assert_eq!(state.selected_index(), None);
    assert!(state.selected_dishes(&Default::default()).is_empty());
    shutdown(state, worker).await;
}

#[tokio::test]
async fn test_deleting_everything_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let (state, worker) = MenuState::initialize(&config).await.unwrap();
    while state.delete_category(0).is_some() {}
    assert_eq!(state.selected_index(), None);
    shutdown(state, worker).await;

    // A stored empty catalog is respected, not replaced by the seed
    let (state, worker) = MenuState::initialize(&config).await.unwrap();
    assert_eq!(state.category_count(), 0);
    shutdown(state, worker).await;
}

#[tokio::test]
async fn test_corrupted_menu_record_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::create_dir_all(&config.work_dir).unwrap();

    {
        let store = RedbRecordStore::open(config.db_path()).unwrap();
        store.put(MENU_DATA_KEY, b"\"not a catalog\"").unwrap();
    }

    let (state, worker) = MenuState::initialize(&config).await.unwrap();
    let loaded = state.hydrate();
    assert_eq!(loaded.catalog_source, RecordSource::Corrupted);
    assert_eq!(loaded.cart_source, RecordSource::Missing);
    assert_eq!(state.category_count(), 4);
    shutdown(state, worker).await;
}

#[tokio::test]
async fn test_stored_duplicate_ids_are_repaired_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::create_dir_all(&config.work_dir).unwrap();

    let stored = vec![
        Category::new("Soups", "soup", false).with_dishes(vec![
            Dish::new("Tomato", 80.0, true),
            Dish::new("Tomato", 90.0, true),
        ]),
        Category::new("soups", "soup", false),
    ];
    {
        let store = RedbRecordStore::open(config.db_path()).unwrap();
        store
            .put(MENU_DATA_KEY, &serde_json::to_vec(&stored).unwrap())
            .unwrap();
    }

    let (state, worker) = MenuState::initialize(&config).await.unwrap();
    let catalog = state.catalog();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].dishes.len(), 1);
    assert_eq!(catalog[0].dishes[0].price, 80.0);
    shutdown(state, worker).await;
}
