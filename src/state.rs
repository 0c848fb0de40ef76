use std::sync::Arc;

use crate::credentials::CredentialVerifier;
use crate::db::DbPool;
use crate::storage::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub uploads: UploadStore,
    pub credentials: Arc<dyn CredentialVerifier>,
}
