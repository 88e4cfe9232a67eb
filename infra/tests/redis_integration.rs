//! Redis integration tests for the code store backings
//!
//! These tests require a live Redis server and are ignored by default:
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379 cargo test -p cg_infra -- --ignored
//! ```

use cg_core::domain::entities::{ProfileMetadata, VerificationRecord};
use cg_core::store::{CodeQueue, CodeStore};
use cg_infra::cache::RedisClient;
use cg_infra::store::{RedisCodeQueue, RedisCodeStore};
use cg_shared::config::CacheConfig;
use rand::Rng;

fn test_config() -> CacheConfig {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    // Unique prefix per run keeps parallel test runs from colliding
    let suffix: u32 = rand::thread_rng().gen();
    CacheConfig::new(url).with_prefix(&format!("codegate-test-{:08x}", suffix))
}

fn record(requester_id: &str, code: &str, ttl_seconds: i64) -> VerificationRecord {
    let mut record =
        VerificationRecord::new(requester_id, ProfileMetadata::default(), ttl_seconds);
    record.code = code.to_string();
    record
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn store_round_trip() {
    let client = RedisClient::connect(test_config()).await.unwrap();
    let store = RedisCodeStore::new(client);

    store.put(record("42", "1234", 60)).await.unwrap();

    let fetched = store.get("42").await.unwrap().unwrap();
    assert_eq!(fetched.code, "1234");
    assert_eq!(fetched.requester_id, "42");

    assert!(store.delete("42").await.unwrap());
    assert!(store.get("42").await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn store_overwrites_per_requester() {
    let client = RedisClient::connect(test_config()).await.unwrap();
    let store = RedisCodeStore::new(client);

    store.put(record("42", "1111", 60)).await.unwrap();
    store.put(record("42", "2222", 60)).await.unwrap();

    let fetched = store.get("42").await.unwrap().unwrap();
    assert_eq!(fetched.code, "2222");

    store.delete("42").await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn expired_record_reported_absent() {
    let client = RedisClient::connect(test_config()).await.unwrap();
    let store = RedisCodeStore::new(client);

    // TTL floor keeps the key in Redis briefly, but the embedded expiry
    // is already in the past, so the read path must reject it
    store.put(record("7", "5678", -5)).await.unwrap();
    assert!(store.get("7").await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn queue_order_independent_redemption() {
    let client = RedisClient::connect(test_config()).await.unwrap();
    let queue = RedisCodeQueue::new(client);

    queue.enqueue(record("A", "1111", 60)).await.unwrap();
    queue.enqueue(record("B", "2222", 60)).await.unwrap();

    // Redeeming the later code first leaves the earlier one redeemable
    let second = queue.find_and_remove("2222").await.unwrap().unwrap();
    assert_eq!(second.requester_id, "B");

    let first = queue.find_and_remove("1111").await.unwrap().unwrap();
    assert_eq!(first.requester_id, "A");

    assert!(queue.find_and_remove("1111").await.unwrap().is_none());
    assert_eq!(queue.len().await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn queue_entry_with_expired_guard_is_dead() {
    let client = RedisClient::connect(test_config()).await.unwrap();
    let queue = RedisCodeQueue::new(client);

    queue.enqueue(record("A", "4444", -5)).await.unwrap();
    assert!(queue.find_and_remove("4444").await.unwrap().is_none());
    // The scan pruned the dead entry
    assert_eq!(queue.len().await.unwrap(), 0);
}
