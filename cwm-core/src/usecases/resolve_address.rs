use super::prelude::*;
use std::{thread, time::Duration};

pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// How often a transient geocoding failure is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Pause between two attempts. Zero means retry immediately.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: Duration::ZERO,
        }
    }
}

/// Resolve the position of an address.
///
/// Only transient failures (timeouts, unavailable service) are retried.
/// If the service answers without a match the address is unresolved
/// right away.
pub fn resolve_address<G>(gateway: &G, address: &str, policy: &RetryPolicy) -> Option<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let mut retries_left = policy.max_retries;
    loop {
        log::debug!("Resolving address '{address}' ({retries_left} retries left)");
        match gateway.resolve_address_lat_lng(address) {
            Ok(Some(pos)) => {
                log::debug!("Resolved address location '{address}': {pos}");
                return Some(pos);
            }
            Ok(None) => {
                log::debug!("No location found for address '{address}'");
                return None;
            }
            Err(err) if err.is_transient() => {
                if retries_left == 0 {
                    log::info!(
                        "Giving up on address '{address}' after {} attempts: {err}",
                        policy.max_retries.saturating_add(1)
                    );
                    return None;
                }
                log::warn!("Failed to resolve address location '{address}': {err}");
                retries_left -= 1;
                if !policy.backoff.is_zero() {
                    thread::sleep(policy.backoff);
                }
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{address}': {err}");
                return None;
            }
        }
    }
}
