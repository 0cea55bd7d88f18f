//! Integration tests for stack_readiness
//!
//! Each test starts in-process stub services on loopback ports and builds
//! throwaway project trees, so no external service is needed.
//! Run with: cargo test --test integration


mod group_probes;
mod http_probes;
mod latency;
mod session;
