// comanda-dashboard/tests/polling.rs
// Poll loop lifecycle: periodic refresh, overlap skipping, and
// cancellation on every exit path

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use common::{FakeApi, burger};
use comanda_dashboard::poll::{
    Poller, spawn_catalog_poller_with_period, spawn_management_poller_with_period,
};
use comanda_dashboard::{CatalogView, ManagementView};
use shared::models::OrderStatus;
use tokio::sync::RwLock;

const PERIOD: Duration = Duration::from_millis(20);

async fn settle() {
    tokio::time::sleep(PERIOD * 5).await;
}

#[tokio::test]
async fn test_catalog_poller_refreshes_view() {
    common::init_tracing();
    let api: Arc<FakeApi> = Arc::new(FakeApi::with_products(vec![burger()]));
    let view = Arc::new(RwLock::new(CatalogView::new()));

    let handle = spawn_catalog_poller_with_period(api, view.clone(), PERIOD);
    settle().await;

    {
        let view = view.read().await;
        assert!(!view.is_loading());
        assert_eq!(view.products().len(), 1);
    }

    handle.stop().await;
}

#[tokio::test]
async fn test_management_poller_refreshes_orders_and_stocks() {
    common::init_tracing();
    let api = Arc::new(FakeApi::new());
    api.seed_order(OrderStatus::Pending);
    api.seed_stock("Burger", 15);
    let view = Arc::new(RwLock::new(ManagementView::new()));

    let handle = spawn_management_poller_with_period(api.clone(), view.clone(), PERIOD);
    settle().await;

    {
        let view = view.read().await;
        assert_eq!(view.orders().len(), 1);
        assert_eq!(view.stock_for("Burger"), 15);
    }

    // Later ticks pick up backend changes
    api.seed_order(OrderStatus::Delivered);
    settle().await;
    assert_eq!(view.read().await.orders().len(), 2);

    handle.stop().await;
}

#[tokio::test]
async fn test_stop_halts_ticking() {
    let count = Arc::new(AtomicU32::new(0));
    let tick_count = count.clone();

    let handle = Poller::spawn("counter", PERIOD, move || {
        let tick_count = tick_count.clone();
        async move {
            tick_count.fetch_add(1, Ordering::SeqCst);
        }
    });

    settle().await;
    handle.stop().await;
    let after_stop = count.load(Ordering::SeqCst);
    assert!(after_stop > 0);

    settle().await;
    assert_eq!(count.load(Ordering::SeqCst), after_stop);
}

#[tokio::test]
async fn test_drop_cancels_the_loop() {
    let count = Arc::new(AtomicU32::new(0));
    let tick_count = count.clone();

    let handle = Poller::spawn("counter", PERIOD, move || {
        let tick_count = tick_count.clone();
        async move {
            tick_count.fetch_add(1, Ordering::SeqCst);
        }
    });

    settle().await;
    drop(handle);

    // Give the loop a moment to observe the cancelled token
    tokio::time::sleep(PERIOD).await;
    let after_drop = count.load(Ordering::SeqCst);
    settle().await;
    assert_eq!(count.load(Ordering::SeqCst), after_drop);
}

#[tokio::test]
async fn test_slow_tick_skips_instead_of_stacking() {
    let count = Arc::new(AtomicU32::new(0));
    let tick_count = count.clone();

    let handle = Poller::spawn("slow", PERIOD, move || {
        let tick_count = tick_count.clone();
        async move {
            tick_count.fetch_add(1, Ordering::SeqCst);
            // Each tick outlasts several periods
            tokio::time::sleep(PERIOD * 3).await;
        }
    });

    tokio::time::sleep(PERIOD * 12).await;
    handle.stop().await;

    // Without skipping this would approach 12; with ticks awaited inline
    // it lands near 12 / 3
    let ticks = count.load(Ordering::SeqCst);
    assert!(ticks >= 2, "expected at least 2 ticks, got {ticks}");
    assert!(ticks <= 6, "expected skipped ticks, got {ticks}");
}

#[tokio::test]
async fn test_panicking_tick_stops_the_loop() {
    let count = Arc::new(AtomicU32::new(0));
    let tick_count = count.clone();

    let handle = Poller::spawn("panicky", PERIOD, move || {
        let tick_count = tick_count.clone();
        async move {
            tick_count.fetch_add(1, Ordering::SeqCst);
            panic!("tick exploded");
        }
    });

    settle().await;
    assert!(handle.is_finished());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    handle.stop().await;
}
