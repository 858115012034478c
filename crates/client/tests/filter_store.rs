//! `FilterStore` against the live mock API and against a scripted backend.

mod common;

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use async_trait::async_trait;
use common::RecordingNotifier;
use imagiq_client::backend::{FilterBackend, HttpFilterBackend};
use imagiq_client::store::FilterStore;
use imagiq_client::ClientError;
use imagiq_core::error::CoreError;
use imagiq_core::filters::{
    BulkDeleteResult, ColumnValues, CreateFilter, DisplayType, DynamicFilter, DynamicValueConfig,
    FilterOperator, FilterRange, FilterScope, FilterValueConfig, ManualValueConfig,
    OperatorMode, OrderAssignment, ReorderRequest, ScopeKind, UpdateFilter,
};
use imagiq_core::types::EntityId;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn price_filter(name: &str, categories: &[&str]) -> CreateFilter {
    CreateFilter {
        section_name: name.to_string(),
        column: "precioNormal".to_string(),
        operator: Some(FilterOperator::Range),
        operator_mode: OperatorMode::Column,
        value_config: FilterValueConfig::Manual(ManualValueConfig {
            ranges: vec![
                FilterRange {
                    label: "Hasta 2M".to_string(),
                    min: 0.0,
                    max: 2_000_000.0,
                },
                FilterRange {
                    label: "Más de 2M".to_string(),
                    min: 2_000_000.0,
                    max: 20_000_000.0,
                },
            ],
            ..Default::default()
        }),
        display_type: DisplayType::Checkbox,
        scope: FilterScope {
            categories: categories.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
            ..Default::default()
        },
        order: None,
        is_active: true,
    }
}

async fn live_store() -> (FilterStore, Arc<RecordingNotifier>) {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;
    let notifier = RecordingNotifier::shared();
    let store = FilterStore::new(
        Arc::new(HttpFilterBackend::new(api, session)),
        notifier.clone(),
    );
    (store, notifier)
}

fn color_filter(name: &str, selected: &[&str]) -> CreateFilter {
    CreateFilter {
        section_name: name.to_string(),
        column: "color".to_string(),
        operator: Some(FilterOperator::Includes),
        operator_mode: OperatorMode::Column,
        value_config: FilterValueConfig::Dynamic(DynamicValueConfig {
            selected_values: selected.iter().map(|v| v.to_string()).collect(),
        }),
        display_type: DisplayType::Checkbox,
        scope: FilterScope {
            categories: BTreeSet::from(["cat-mobile".to_string()]),
            ..Default::default()
        },
        order: None,
        is_active: true,
    }
}

fn scope_ids(store: &FilterStore, kind: ScopeKind, scope_id: &str) -> Vec<String> {
    store
        .filters_for_scope(kind, scope_id, false)
        .iter()
        .map(|f| f.id.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Live API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_appends_and_caches() {
    let (mut store, notifier) = live_store().await;
    store.load().await.unwrap();
    assert!(store.filters().is_empty());

    let first = store.create(price_filter("A", &["cat-mobile"])).await.unwrap();
    let second = store
        .create(price_filter("B", &["cat-mobile", "cat-tv"]))
        .await
        .unwrap();

    assert_eq!(first.position_in(ScopeKind::Category, "cat-mobile"), Some(0));
    assert_eq!(second.position_in(ScopeKind::Category, "cat-mobile"), Some(1));
    assert_eq!(second.position_in(ScopeKind::Category, "cat-tv"), Some(0));
    assert_eq!(store.filters().len(), 2);
    assert_eq!(notifier.success_count(), 2);
}

#[tokio::test]
async fn test_unloaded_store_lets_server_append() {
    let api = common::spawn_api().await;
    let session = common::login(&api).await;
    let backend = Arc::new(HttpFilterBackend::new(api, session));

    let mut first = FilterStore::new(backend.clone(), RecordingNotifier::shared());
    first.create(price_filter("A", &["cat-mobile"])).await.unwrap();

    // Never loaded, so its cache knows nothing about "A".
    let mut second = FilterStore::new(backend, RecordingNotifier::shared());
    let b = second.create(price_filter("B", &["cat-mobile"])).await.unwrap();
    assert_eq!(b.position_in(ScopeKind::Category, "cat-mobile"), Some(1));

    second.load().await.unwrap();
    let positions: Vec<Option<u32>> = second
        .filters_for_scope(ScopeKind::Category, "cat-mobile", false)
        .iter()
        .map(|f| f.position_in(ScopeKind::Category, "cat-mobile"))
        .collect();
    assert_eq!(positions, vec![Some(0), Some(1)]);
}

#[tokio::test]
async fn test_dynamic_selection_checked_against_live_values() {
    let (mut store, notifier) = live_store().await;

    let err = store
        .create(color_filter("Color", &["Negro", "Dorado"]))
        .await
        .unwrap_err();
    assert!(err.user_message().contains("Dorado"));
    assert_eq!(notifier.error_count(), 1);

    let ok = store.create(color_filter("Color", &["Negro", "Azul"])).await.unwrap();
    assert_eq!(store.filters(), std::slice::from_ref(&ok));
}

#[tokio::test]
async fn test_invalid_filter_never_reaches_api() {
    let (mut store, notifier) = live_store().await;

    let mut input = price_filter("Precio", &["cat-mobile"]);
    input.operator = Some(FilterOperator::Contains);
    let err = store.create(input).await.unwrap_err();

    assert_matches!(err, ClientError::Validation(CoreError::Validation(_)));
    assert_eq!(notifier.error_count(), 1);

    store.load().await.unwrap();
    assert!(store.filters().is_empty());
}

#[tokio::test]
async fn test_toggle_active_round_trips() {
    let (mut store, _) = live_store().await;
    let filter = store.create(price_filter("A", &["cat-mobile"])).await.unwrap();

    let toggled = store.toggle_active(&filter.id).await.unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.section_name, "A");
    assert!(store
        .filters_for_scope(ScopeKind::Category, "cat-mobile", true)
        .is_empty());

    store.load().await.unwrap();
    assert!(!store.get(&filter.id).unwrap().is_active);
}

#[tokio::test]
async fn test_reorder_then_refetch() {
    let (mut store, _) = live_store().await;
    let a = store
        .create(price_filter("A", &["cat-mobile", "cat-tv"]))
        .await
        .unwrap();
    let b = store
        .create(price_filter("B", &["cat-mobile", "cat-tv"]))
        .await
        .unwrap();

    let assignments = store
        .reorder(
            ScopeKind::Category,
            "cat-mobile",
            vec![b.id.clone(), a.id.clone()],
        )
        .await
        .unwrap();
    assert_eq!(assignments.len(), 2);

    assert_eq!(
        scope_ids(&store, ScopeKind::Category, "cat-mobile"),
        vec![b.id.clone(), a.id.clone()]
    );
    assert_eq!(
        scope_ids(&store, ScopeKind::Category, "cat-tv"),
        vec![a.id.clone(), b.id.clone()]
    );
}

#[tokio::test]
async fn test_reorder_with_missing_member_rejected_locally() {
    let (mut store, notifier) = live_store().await;
    let a = store.create(price_filter("A", &["cat-mobile"])).await.unwrap();
    store.create(price_filter("B", &["cat-mobile"])).await.unwrap();

    let before = scope_ids(&store, ScopeKind::Category, "cat-mobile");
    let result = store
        .reorder(ScopeKind::Category, "cat-mobile", vec![a.id.clone()])
        .await;

    assert!(result.is_err());
    assert_eq!(notifier.error_count(), 1);
    assert_eq!(scope_ids(&store, ScopeKind::Category, "cat-mobile"), before);
}

#[tokio::test]
async fn test_delete_unknown_filter_keeps_cache() {
    let (mut store, notifier) = live_store().await;
    store.create(price_filter("A", &["cat-mobile"])).await.unwrap();

    let err = store.delete("does-not-exist").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(store.filters().len(), 1);
    assert_eq!(notifier.error_count(), 1);

    store.load().await.unwrap();
    assert_eq!(store.filters().len(), 1);
}

#[tokio::test]
async fn test_bulk_delete_removes_only_confirmed_ids() {
    let (mut store, _) = live_store().await;
    let a = store.create(price_filter("A", &["cat-mobile"])).await.unwrap();
    let b = store.create(price_filter("B", &["cat-mobile"])).await.unwrap();

    let result = store
        .bulk_delete(&[a.id.clone(), "ghost".to_string()])
        .await
        .unwrap();

    assert_eq!(result.deleted, vec![a.id.clone()]);
    assert_eq!(result.not_found, vec!["ghost".to_string()]);
    assert_eq!(scope_ids(&store, ScopeKind::Category, "cat-mobile"), vec![b.id.clone()]);
}

// ---------------------------------------------------------------------------
// Scripted backend
// ---------------------------------------------------------------------------

/// Backend that rejects every mutation and counts the calls it receives.
/// Column values are served from `catalog` when one is set.
#[derive(Default)]
struct RejectingBackend {
    filters: Vec<DynamicFilter>,
    catalog: Option<Vec<String>>,
    calls: Mutex<Vec<&'static str>>,
}

impl RejectingBackend {
    fn rejected(&self, call: &'static str) -> ClientError {
        self.calls.lock().unwrap().push(call);
        ClientError::Api {
            status: 500,
            message: "Error interno".to_string(),
            errors: None,
        }
    }
}

#[async_trait]
impl FilterBackend for RejectingBackend {
    async fn list(&self) -> Result<Vec<DynamicFilter>, ClientError> {
        self.calls.lock().unwrap().push("list");
        Ok(self.filters.clone())
    }

    async fn create(&self, _input: &CreateFilter) -> Result<DynamicFilter, ClientError> {
        Err(self.rejected("create"))
    }

    async fn update(&self, _id: &str, _input: &UpdateFilter) -> Result<DynamicFilter, ClientError> {
        Err(self.rejected("update"))
    }

    async fn delete(&self, _id: &str) -> Result<(), ClientError> {
        Err(self.rejected("delete"))
    }

    async fn bulk_delete(&self, _ids: &[EntityId]) -> Result<BulkDeleteResult, ClientError> {
        Err(self.rejected("bulk_delete"))
    }

    async fn reorder(&self, _request: &ReorderRequest) -> Result<Vec<OrderAssignment>, ClientError> {
        Err(self.rejected("reorder"))
    }

    async fn column_values(&self, column: &str) -> Result<ColumnValues, ClientError> {
        match &self.catalog {
            Some(values) => {
                self.calls.lock().unwrap().push("column_values");
                Ok(ColumnValues {
                    column: column.to_string(),
                    values: values.clone(),
                })
            }
            None => Err(self.rejected("column_values")),
        }
    }
}

#[tokio::test]
async fn test_failed_mutations_leave_cache_untouched() {
    // Seed the scripted backend with two filters created against the live API.
    let (mut live, _) = live_store().await;
    live.create(price_filter("A", &["cat-mobile"])).await.unwrap();
    live.create(price_filter("B", &["cat-mobile"])).await.unwrap();
    let seeded = live.filters().to_vec();

    let backend = Arc::new(RejectingBackend {
        filters: seeded.clone(),
        ..Default::default()
    });
    let notifier = RecordingNotifier::shared();
    let mut store = FilterStore::new(backend.clone(), notifier.clone());
    store.load().await.unwrap();

    let id = seeded[0].id.clone();
    assert!(store.create(price_filter("C", &["cat-mobile"])).await.is_err());
    assert!(store.toggle_active(&id).await.is_err());
    assert!(store.delete(&id).await.is_err());
    assert!(store.bulk_delete(&[id.clone()]).await.is_err());
    let reversed: Vec<EntityId> = seeded.iter().rev().map(|f| f.id.clone()).collect();
    assert!(store
        .reorder(ScopeKind::Category, "cat-mobile", reversed)
        .await
        .is_err());

    assert_eq!(store.filters(), seeded.as_slice());
    assert_eq!(notifier.error_count(), 5);
    assert_eq!(notifier.success_count(), 0);
    assert_eq!(
        *backend.calls.lock().unwrap(),
        vec!["list", "create", "update", "delete", "bulk_delete", "reorder"]
    );
    assert_eq!(
        notifier.errors.lock().unwrap()[0],
        "Error interno".to_string()
    );
}

#[tokio::test]
async fn test_update_of_uncached_filter_skips_backend() {
    let backend = Arc::new(RejectingBackend::default());
    let notifier = RecordingNotifier::shared();
    let mut store = FilterStore::new(backend.clone(), notifier.clone());

    let err = store
        .update("missing", UpdateFilter::default())
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Validation(CoreError::NotFound { .. }));
    assert!(backend.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_dynamic_values_never_submitted() {
    let backend = Arc::new(RejectingBackend {
        catalog: Some(vec!["Negro".to_string(), "Azul".to_string()]),
        ..Default::default()
    });
    let notifier = RecordingNotifier::shared();
    let mut store = FilterStore::new(backend.clone(), notifier.clone());

    let err = store
        .create(color_filter("Color", &["Negro", "Dorado"]))
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Validation(CoreError::Validation(_)));
    assert_eq!(*backend.calls.lock().unwrap(), vec!["column_values"]);
    assert_eq!(notifier.error_count(), 1);

    // A selection inside the catalog goes through to the backend.
    assert!(store
        .create(color_filter("Color", &["Azul"]))
        .await
        .is_err());
    assert_eq!(
        *backend.calls.lock().unwrap(),
        vec!["column_values", "column_values", "create"]
    );
}

#[tokio::test]
async fn test_update_checks_new_dynamic_selection() {
    let (mut live, _) = live_store().await;
    let existing = live.create(color_filter("Color", &["Negro"])).await.unwrap();

    let backend = Arc::new(RejectingBackend {
        filters: vec![existing.clone()],
        catalog: Some(vec!["Negro".to_string(), "Azul".to_string()]),
        ..Default::default()
    });
    let mut store = FilterStore::new(backend.clone(), RecordingNotifier::shared());
    store.load().await.unwrap();

    let err = store
        .update(
            &existing.id,
            UpdateFilter {
                value_config: Some(FilterValueConfig::Dynamic(DynamicValueConfig {
                    selected_values: vec!["Dorado".to_string()],
                })),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Validation(CoreError::Validation(_)));

    // Toggling leaves the selection alone and skips the lookup.
    assert!(store.toggle_active(&existing.id).await.is_err());
    assert_eq!(
        *backend.calls.lock().unwrap(),
        vec!["list", "column_values", "update"]
    );
    assert_eq!(store.filters(), std::slice::from_ref(&existing));
}
