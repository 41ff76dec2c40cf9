use tracing::info;

use crate::core::config::Config;
use crate::core::state::AppState;
use crate::models::product::Product;

/// Last id handed out before the first create; new products start at 101
pub const SEED_ID_COUNTER: i64 = 100;

/// Catalog every process starts with. Nothing survives a restart.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Nugget Kanzler",
            "Nugget",
            45000,
            "https://images.unsplash.com/photo-1569691105751-88df003de7a4?w=500&q=80",
        ),
        Product::new(
            2,
            "Sosis Kanzler Beef",
            "Sosis",
            48000,
            "https://images.unsplash.com/photo-1585325701165-351af92f9656?w=500&q=80",
        ),
        Product::new(
            3,
            "Daging Slice 500g",
            "Daging",
            65000,
            "https://images.unsplash.com/photo-1607623814075-e51df1bdc82f?w=500&q=80",
        ),
        Product::new(
            4,
            "Kentang Goreng",
            "Snack",
            28000,
            "https://images.unsplash.com/photo-1630384060421-cb20d0e0649d?w=500&q=80",
        ),
    ]
}

// this runs at boot time
pub fn build_state(config: Config) -> AppState {
    let state = AppState::new(config, seed_products(), SEED_ID_COUNTER);

    info!(
        products = state.store.len(),
        id_counter = SEED_ID_COUNTER,
        "Catalog seeded"
    );

    state
}
