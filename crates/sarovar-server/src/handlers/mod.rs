pub mod booking;
pub mod chat;
pub mod health;
pub mod menu;
pub mod rating;

use std::sync::Arc;

use actix_web::web;
use sarovar_store::{StorageResult, Store};

use crate::error::ApiError;

/// Run a store call on the blocking pool. A missing store and storage
/// failures both come back as `ApiError::Internal`.
pub(crate) async fn with_store<T, F>(store: &Option<Arc<Store>>, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Store) -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = store
        .clone()
        .ok_or_else(|| ApiError::internal("Database unavailable"))?;

    web::block(move || f(&store))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .map_err(ApiError::from)
}
