//! The slice of the data store the screens depend on.

use dex_client::{DexClient, GatewayError};
use dex_core::{AuditLogEntry, BaseStats, Entry, NewEntry};

/// Data store operations consumed by the views.
///
/// Implemented by [`DexClient`] and by references to any gateway, so a
/// session can borrow one; tests provide in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait CatalogGateway {
    async fn list_page(&self, page: u32) -> Result<Vec<Entry>, GatewayError>;

    async fn list_all(&self) -> Result<Vec<Entry>, GatewayError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Entry>, GatewayError>;

    async fn audit_logs(&self, name: &str, limit: u32)
    -> Result<Vec<AuditLogEntry>, GatewayError>;

    async fn create(&self, entry: &NewEntry) -> Result<Option<Entry>, GatewayError>;

    async fn update_stats(
        &self,
        name: &str,
        stats: &BaseStats,
    ) -> Result<Option<Entry>, GatewayError>;

    async fn delete(&self, name: &str) -> Result<(), GatewayError>;

    async fn purge(&self) -> Result<(), GatewayError>;
}

impl CatalogGateway for DexClient {
    async fn list_page(&self, page: u32) -> Result<Vec<Entry>, GatewayError> {
        Self::list_page(self, page).await
    }

    async fn list_all(&self) -> Result<Vec<Entry>, GatewayError> {
        Self::list_all(self).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Entry>, GatewayError> {
        Self::get_by_name(self, name).await
    }

    async fn audit_logs(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<AuditLogEntry>, GatewayError> {
        Self::audit_logs(self, name, limit).await
    }

    async fn create(&self, entry: &NewEntry) -> Result<Option<Entry>, GatewayError> {
        Self::create(self, entry).await
    }

    async fn update_stats(
        &self,
        name: &str,
        stats: &BaseStats,
    ) -> Result<Option<Entry>, GatewayError> {
        Self::update_stats(self, name, stats).await
    }

    async fn delete(&self, name: &str) -> Result<(), GatewayError> {
        Self::delete(self, name).await
    }

    async fn purge(&self) -> Result<(), GatewayError> {
        Self::purge(self).await
    }
}

impl<G: CatalogGateway> CatalogGateway for &G {
    async fn list_page(&self, page: u32) -> Result<Vec<Entry>, GatewayError> {
        G::list_page(self, page).await
    }

    async fn list_all(&self) -> Result<Vec<Entry>, GatewayError> {
        G::list_all(self).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Entry>, GatewayError> {
        G::get_by_name(self, name).await
    }

    async fn audit_logs(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<AuditLogEntry>, GatewayError> {
        G::audit_logs(self, name, limit).await
    }

    async fn create(&self, entry: &NewEntry) -> Result<Option<Entry>, GatewayError> {
        G::create(self, entry).await
    }

    async fn update_stats(
        &self,
        name: &str,
        stats: &BaseStats,
    ) -> Result<Option<Entry>, GatewayError> {
        G::update_stats(self, name, stats).await
    }

    async fn delete(&self, name: &str) -> Result<(), GatewayError> {
        G::delete(self, name).await
    }

    async fn purge(&self) -> Result<(), GatewayError> {
        G::purge(self).await
    }
}
