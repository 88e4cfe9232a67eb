//! Redis cache client

pub mod redis_client;

pub use redis_client::RedisClient;
