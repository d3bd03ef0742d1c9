use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use invtrack_ai::{ForecastOutcome, ForecastService, forecast_all};
use invtrack_core::{DomainError, ItemId};
use invtrack_infra::{
    FileStateStore, INVENTORY_SLOT, StateStore, StoreError, User, load_or_seed,
};
use invtrack_inventory::{DashboardStats, Inventory, InventoryItem, ItemUpdate, NewItem};

use crate::config::AppConfig;

/// Failure of an inventory operation: the domain rejected it, or the
/// result could not be persisted.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Shared application state behind the router.
///
/// Every mutation is applied to a copy, persisted, and only then swapped in,
/// so a failed write leaves the in-memory list unchanged. Store IO runs on the
/// blocking pool.
pub struct AppServices {
    inventory: Mutex<Inventory>,
    store: Arc<dyn StateStore>,
    forecaster: ForecastService,
    region: String,
}

impl AppServices {
    /// Load (or seed) the inventory from `store`.
    pub fn new(
        store: Arc<dyn StateStore>,
        forecaster: ForecastService,
        region: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let inventory = load_or_seed(store.as_ref(), Utc::now())?;
        Ok(Self {
            inventory: Mutex::new(inventory),
            store,
            forecaster,
            region: region.into(),
        })
    }

    /// File-backed store + HTTP inference client.
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let store = Arc::new(FileStateStore::new(&config.data_dir));
        let forecaster = ForecastService::with_gemini(&config.forecast);
        Self::new(store, forecaster, config.region.clone())
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn model_id(&self) -> &str {
        self.forecaster.display_model_id()
    }

    /// Whether the persisted state can currently be read.
    pub async fn storage_reachable(&self) -> bool {
        self.with_store(|store| store.read_slot(INVENTORY_SLOT))
            .await
            .is_ok()
    }

    pub async fn list_items(&self) -> Vec<InventoryItem> {
        let inventory = self.inventory.lock().await;
        inventory.sorted_by_name().into_iter().cloned().collect()
    }

    pub async fn get_item(&self, id: ItemId) -> Option<InventoryItem> {
        self.inventory.lock().await.get(id).cloned()
    }

    pub async fn add_item(&self, input: NewItem) -> Result<InventoryItem, ServiceError> {
        self.mutate(|inv| inv.add(input, Utc::now()).cloned()).await
    }

    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<InventoryItem, ServiceError> {
        self.mutate(|inv| inv.update(id, update, Utc::now()).cloned()).await
    }

    pub async fn remove_item(&self, id: ItemId) -> Result<InventoryItem, ServiceError> {
        self.mutate(|inv| inv.remove(id)).await
    }

    pub async fn dashboard(&self) -> DashboardStats {
        DashboardStats::from_inventory(&*self.inventory.lock().await)
    }

    /// Forecast every item; the lock is released before any network call.
    pub async fn insights(&self) -> BTreeMap<ItemId, ForecastOutcome> {
        let items = self.inventory.lock().await.items().to_vec();
        forecast_all(&self.forecaster, &items).await
    }

    pub async fn current_user(&self) -> Result<Option<User>, ServiceError> {
        self.with_store(|store| store.load_user()).await
    }

    pub async fn set_current_user(&self, user: Option<User>) -> Result<(), ServiceError> {
        self.with_store(move |store| store.save_user(user.as_ref())).await
    }

    async fn with_store<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn StateStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let out = tokio::task::spawn_blocking(move || f(store.as_ref())).await??;
        Ok(out)
    }

    async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Inventory) -> Result<T, DomainError>,
    ) -> Result<T, ServiceError> {
        let mut guard = self.inventory.lock().await;
        let mut next = guard.clone();
        let out = f(&mut next)?;
        let next = self
            .with_store(move |store| store.save_inventory(&next).map(|()| next))
            .await?;
        *guard = next;
        Ok(out)
    }
}
