//! Tests for the stampede coordinator

use futures::FutureExt;
use futures::future::BoxFuture;
use hycache_application::StampedeCoordinator;
use hycache_domain::error::{Error, Result};
use hycache_domain::value_objects::HybridCacheEntryFlags;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn slow_value(
    calls: &Arc<AtomicUsize>,
    value: u32,
) -> impl FnOnce(CancellationToken) -> BoxFuture<'static, Result<u32>> {
    let calls = Arc::clone(calls);
    move |_token| {
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(value)
        }
        .boxed()
    }
}

#[tokio::test]
async fn test_follower_shares_owner_outcome() {
    let coordinator = StampedeCoordinator::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let flags = HybridCacheEntryFlags::empty();

    let owner = coordinator
        .join::<u32, _, _>("k", flags, slow_value(&calls, 1))
        .expect("owner");
    let follower = coordinator
        .join::<u32, _, _>("k", flags, slow_value(&calls, 2))
        .expect("follower");

    assert!(owner.is_owner());
    assert!(!follower.is_owner());
    assert_eq!(coordinator.in_flight(), 1);

    let token = CancellationToken::new();
    let (a, b) = tokio::join!(owner.wait(&token), follower.wait(&token));
    assert_eq!(a.expect("owner value"), 1);
    assert_eq!(b.expect("follower value"), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_different_flags_do_not_share_episode() {
    let coordinator = StampedeCoordinator::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let plain = coordinator
        .join::<u32, _, _>("k", HybridCacheEntryFlags::empty(), slow_value(&calls, 1))
        .expect("join");
    let bypass = coordinator
        .join::<u32, _, _>(
            "k",
            HybridCacheEntryFlags::DISABLE_LOCAL_CACHE_READ,
            slow_value(&calls, 2),
        )
        .expect("join");

    assert!(plain.is_owner());
    assert!(bypass.is_owner());
    assert_eq!(coordinator.in_flight(), 2);

    let token = CancellationToken::new();
    assert_eq!(plain.wait(&token).await.expect("plain"), 1);
    assert_eq!(bypass.wait(&token).await.expect("bypass"), 2);
}

#[tokio::test]
async fn test_failure_is_shared_by_pointer() {
    let coordinator = StampedeCoordinator::new();
    let flags = HybridCacheEntryFlags::empty();

    let owner = coordinator
        .join::<u32, _, _>("k", flags, |_| async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Err(Error::internal("boom"))
        })
        .expect("owner");
    let follower = coordinator
        .join::<u32, _, _>("k", flags, |_| async { Ok(0) })
        .expect("follower");

    let token = CancellationToken::new();
    let (a, b) = tokio::join!(owner.wait(&token), follower.wait(&token));
    let (a, b) = (a.expect_err("owner"), b.expect_err("follower"));
    assert!(Arc::ptr_eq(
        a.factory_source().expect("factory"),
        b.factory_source().expect("factory")
    ));
}

#[tokio::test]
async fn test_cancelled_follower_leaves_owner_running() {
    let coordinator = StampedeCoordinator::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let flags = HybridCacheEntryFlags::empty();

    let owner = coordinator
        .join::<u32, _, _>("k", flags, slow_value(&calls, 9))
        .expect("owner");
    let follower = coordinator
        .join::<u32, _, _>("k", flags, slow_value(&calls, 0))
        .expect("follower");

    let follower_token = CancellationToken::new();
    follower_token.cancel();
    let err = follower.wait(&follower_token).await.expect_err("cancelled");
    assert!(err.is_cancelled());

    let value = owner.wait(&CancellationToken::new()).await.expect("owner");
    assert_eq!(value, 9);
}

#[tokio::test]
async fn test_new_episode_after_completion() {
    let coordinator = StampedeCoordinator::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let flags = HybridCacheEntryFlags::empty();
    let token = CancellationToken::new();

    let first = coordinator
        .join::<u32, _, _>("k", flags, slow_value(&calls, 1))
        .expect("first");
    assert_eq!(first.wait(&token).await.expect("first"), 1);
    tokio::time::sleep(Duration::from_millis(20)).await;

    let second = coordinator
        .join::<u32, _, _>("k", flags, slow_value(&calls, 2))
        .expect("second");
    assert!(second.is_owner());
    assert_eq!(second.wait(&token).await.expect("second"), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
