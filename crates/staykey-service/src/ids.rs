//! Bounded random allocation of fresh account ids.
//!
//! Both the local creation path and federated account linking allocate ids
//! through this helper, so the collision-retry discipline is identical in
//! both. A collision is retried transparently; the caller only sees an
//! error once the attempt budget runs out.

use rand::RngExt;
use tracing::warn;

use staykey_core::error::{AppError, ErrorKind};
use staykey_core::result::AppResult;

use crate::store::UserStore;

/// Draws random positive ids until one is unused, up to `max_attempts`.
///
/// The retry loop is mandatory even though collision probability over a
/// 63-bit space is negligible: id uniqueness is an invariant, not a
/// statistical expectation.
pub async fn allocate_id(store: &dyn UserStore, max_attempts: u32) -> AppResult<i64> {
    for attempt in 0..max_attempts {
        let candidate = (rand::rng().random::<u64>() >> 1) as i64;
        if candidate == 0 {
            continue;
        }
        if !store.exists_by_id(candidate).await? {
            return Ok(candidate);
        }
        warn!(candidate, attempt, "Account id collision, redrawing");
    }

    Err(AppError::new(
        ErrorKind::IdExhausted,
        format!("No free account id found after {max_attempts} attempts"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;

    #[tokio::test]
    async fn allocates_a_positive_unused_id() {
        let store = MemoryUserStore::new();
        let id = allocate_id(&store, 16).await.unwrap();
        assert!(id > 0);
        assert!(!store.exists_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn distinct_draws_do_not_collide() {
        let store = MemoryUserStore::new();
        let a = allocate_id(&store, 16).await.unwrap();
        let b = allocate_id(&store, 16).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn exhaustion_surfaces_id_exhausted() {
        let store = MemoryUserStore::new();
        let err = allocate_id(&store, 0).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::IdExhausted);
    }
}
