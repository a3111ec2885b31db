//! Order Persistence
//!
//! Pushes list order to the backend after reorder, create and delete.
//! Updates are independent: one failing request never cancels or rolls back
//! its siblings, and the next full re-fetch reconciles local state.

use futures::future::join_all;
use leptos::prelude::*;

use crate::api::{ApiError, LookupApi};
use crate::forms::{validate_label, FormError};
use crate::lookup::LookupResource;
use crate::models::{NewItem, OrderableItem};
use crate::reorder::{renumbered, reorder, without};
use crate::store::{apply_local, refresh, LookupStateStoreFields, LookupStore};

/// Outcome of a bulk renumber
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of items whose update succeeded
    pub updated: usize,
    /// Ids whose update failed
    pub failed: Vec<String>,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Issue one `PUT` per item carrying `order = index`.
///
/// All requests are in flight at once; failures are logged and swallowed.
pub async fn persist_order<A: LookupApi + ?Sized>(
    api: &A,
    resource: LookupResource,
    list: &[OrderableItem],
) -> SyncReport {
    let items = renumbered(list);
    let results = join_all(items.iter().map(|item| api.update(resource, item))).await;

    let mut report = SyncReport::default();
    for (item, result) in items.iter().zip(results) {
        match result {
            Ok(()) => report.updated += 1,
            Err(e) => {
                log::warn!("[SYNC] {} order update failed for {}: {}", resource.path(), item.id, e);
                report.failed.push(item.id.clone());
            }
        }
    }
    log::debug!(
        "[SYNC] {} renumbered: {} ok, {} failed",
        resource.path(),
        report.updated,
        report.failed.len()
    );
    report
}

/// Apply a drop of row `from` onto row `to` to the displayed list at once.
///
/// Returns the renumbered list to persist, or `None` when nothing moved.
pub fn apply_drop(store: &LookupStore, from: usize, to: usize) -> Option<Vec<OrderableItem>> {
    let current = store.items().try_get_untracked()?;
    if from == to || from >= current.len() || to >= current.len() {
        return None;
    }
    let local = renumbered(&reorder(&current, from, to));
    apply_local(store, local.clone());
    Some(local)
}

/// Persist a dropped list, then re-fetch once to reconcile
pub async fn persist_drop<A: LookupApi + ?Sized>(
    store: LookupStore,
    api: &A,
    resource: LookupResource,
    list: Vec<OrderableItem>,
) -> SyncReport {
    let report = persist_order(api, resource, &list).await;
    if !report.is_complete() {
        log::warn!("[SYNC] {} of {} order updates failed", report.failed.len(), list.len());
    }
    refresh(store, api, resource).await;
    report
}

/// Delete `id`, then renumber the remainder so it stays contiguous.
///
/// On delete failure nothing is renumbered and the error is returned.
/// On success returns the renumbered remaining list.
pub async fn delete_and_renumber<A: LookupApi + ?Sized>(
    api: &A,
    resource: LookupResource,
    list: &[OrderableItem],
    id: &str,
) -> Result<Vec<OrderableItem>, ApiError> {
    if let Err(e) = api.delete(resource, id).await {
        log::error!("[SYNC] delete {} from {} failed: {}", id, resource.path(), e);
        return Err(e);
    }
    let remaining = without(list, id);
    persist_order(api, resource, &remaining).await;
    Ok(renumbered(&remaining))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Create a new item at the end of a list of `current_len` items
pub async fn create_item<A: LookupApi + ?Sized>(
    api: &A,
    resource: LookupResource,
    label: &str,
    current_len: usize,
) -> Result<(), SubmitError> {
    let label = validate_label(label)?;
    let body = NewItem {
        label_key: resource.label_key(),
        label,
        order: current_len as i32,
    };
    api.create(resource, &body).await?;
    Ok(())
}

/// Change an item's label; `order` and other fields are sent unchanged
pub async fn rename_item<A: LookupApi + ?Sized>(
    api: &A,
    resource: LookupResource,
    item: &OrderableItem,
    label: &str,
) -> Result<OrderableItem, SubmitError> {
    let label = validate_label(label)?;
    let updated = item.clone().with_label(resource.label_key(), label);
    api.update(resource, &updated).await?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use crate::reorder::is_contiguous;
    use crate::store::create_lookup_store;

    const RES: LookupResource = LookupResource::DocumentCategories;

    fn make_list(ids: &[&str]) -> Vec<OrderableItem> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| OrderableItem::new(*id, i as i32).with_label("name", id.to_uppercase()))
            .collect()
    }

    #[tokio::test]
    async fn test_drag_last_to_first_issues_three_updates() {
        let list = make_list(&["a", "b", "c"]);
        let api = FakeApi::with_items(list.clone());

        let local = reorder(&list, 2, 0);
        let ids: Vec<_> = local.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);

        let report = persist_order(&api, RES, &local).await;
        assert!(report.is_complete());
        assert_eq!(report.updated, 3);

        let mut updates = api.updates();
        updates.sort();
        assert_eq!(
            updates,
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 0)]
        );

        let fetched = api.list(RES).await.unwrap();
        assert!(is_contiguous(&fetched));
        assert_eq!(fetched[0].id, "c");
    }

    #[tokio::test]
    async fn test_updates_are_dispatched_together() {
        let list = make_list(&["a", "b", "c"]);
        let api = FakeApi::with_items(list.clone());

        persist_order(&api, RES, &list).await;

        let trace = api.update_trace.borrow();
        let first_end = trace.iter().position(|t| t.starts_with("end:")).unwrap();
        assert_eq!(first_end, 3, "all updates should start before any finishes: {trace:?}");
    }

    #[tokio::test]
    async fn test_put_body_keeps_domain_fields() {
        let list = vec![OrderableItem::new("a", 7).with_label("name", "Permits")];
        let api = FakeApi::with_items(list.clone());

        persist_order(&api, RES, &list).await;

        let stored = api.items.borrow()[0].clone();
        assert_eq!(stored.order, 0);
        assert_eq!(stored.label("name"), "Permits");
    }

    #[tokio::test]
    async fn test_partial_failure_does_not_block_siblings() {
        let list = make_list(&["a", "b", "c", "d"]);
        let api = FakeApi::with_items(make_list(&["d", "c", "b", "a"]));
        api.fail_update_for("c");

        let report = persist_order(&api, RES, &list).await;

        assert_eq!(report.updated, 3);
        assert_eq!(report.failed, vec!["c".to_string()]);
        assert_eq!(api.order_of("a"), Some(0));
        assert_eq!(api.order_of("b"), Some(1));
        assert_eq!(api.order_of("d"), Some(3));
        // Stale until the next reorder
        assert_eq!(api.order_of("c"), Some(1));
    }

    #[tokio::test]
    async fn test_delete_renumbers_remaining() {
        let list = make_list(&["a", "b", "c", "d"]);
        let api = FakeApi::with_items(list.clone());

        let remaining = delete_and_renumber(&api, RES, &list, "b").await.unwrap();

        assert_eq!(remaining.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["a", "c", "d"]);
        assert!(is_contiguous(&remaining));
        assert_eq!(api.order_of("a"), Some(0));
        assert_eq!(api.order_of("c"), Some(1));
        assert_eq!(api.order_of("d"), Some(2));
        assert_eq!(api.order_of("b"), None);
    }

    #[tokio::test]
    async fn test_failed_delete_skips_renumber() {
        let list = make_list(&["a", "b", "c"]);
        let api = FakeApi::with_items(list.clone());
        api.fail_deletes();

        let err = delete_and_renumber(&api, RES, &list, "b").await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(api.count(|c| matches!(c, Call::Update { .. })), 0);
        assert_eq!(api.items.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_create_appends_at_end() {
        let list = make_list(&["a", "b"]);
        let api = FakeApi::with_items(list.clone());

        create_item(&api, RES, "  Contracts ", list.len()).await.unwrap();

        assert_eq!(
            api.calls.borrow().last(),
            Some(&Call::Create { label: "Contracts".to_string(), order: 2 })
        );
        let fetched = api.list(RES).await.unwrap();
        assert_eq!(fetched.last().map(|i| i.label("name")), Some("Contracts"));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_label_without_request() {
        let api = FakeApi::default();

        let err = create_item(&api, RES, "   ", 0).await.unwrap_err();

        assert_eq!(err, SubmitError::Invalid(FormError::Required));
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_rename_keeps_order() {
        let list = make_list(&["a", "b"]);
        let api = FakeApi::with_items(list.clone());

        let renamed = rename_item(&api, RES, &list[1], "Blueprints").await.unwrap();

        assert_eq!(renamed.order, 1);
        assert_eq!(api.updates(), vec![("b".to_string(), 1)]);
        assert_eq!(api.items.borrow()[1].label("name"), "Blueprints");
    }

    fn store_with(list: &[OrderableItem]) -> LookupStore {
        let store = create_lookup_store();
        apply_local(&store, list.to_vec());
        store
    }

    #[tokio::test]
    async fn test_drop_applies_renumbered_list_before_requests() {
        let owner = Owner::new();
        owner.set();

        let list = make_list(&["a", "b", "c"]);
        let api = FakeApi::with_items(list.clone());
        let store = store_with(&list);

        let local = apply_drop(&store, 2, 0).unwrap();

        let shown: Vec<_> = store.items().get_untracked().into_iter().map(|i| (i.id, i.order)).collect();
        assert_eq!(shown, vec![("c".to_string(), 0), ("a".to_string(), 1), ("b".to_string(), 2)]);
        assert!(api.calls.borrow().is_empty());

        let report = persist_drop(store, &api, RES, local).await;

        assert!(report.is_complete());
        assert_eq!(api.count(|c| matches!(c, Call::Update { .. })), 3);
        assert_eq!(api.count(|c| *c == Call::List), 1);
        assert!(matches!(api.calls.borrow().last(), Some(Call::List)));
    }

    #[test]
    fn test_drop_on_origin_row_does_nothing() {
        let owner = Owner::new();
        owner.set();

        let list = make_list(&["a", "b"]);
        let store = store_with(&list);

        assert_eq!(apply_drop(&store, 1, 1), None);
        assert_eq!(apply_drop(&store, 0, 2), None);
        assert_eq!(store.items().get_untracked(), list);
    }

    #[tokio::test]
    async fn test_rename_after_drag_keeps_new_position() {
        let owner = Owner::new();
        owner.set();

        let list = make_list(&["a", "b", "c"]);
        let api = FakeApi::with_items(list.clone());
        let store = store_with(&list);

        let local = apply_drop(&store, 2, 0).unwrap();
        // Edit dialog opened before the reconcile fetch lands
        let shown_c = store.items().get_untracked()[0].clone();
        persist_drop(store, &api, RES, local).await;

        rename_item(&api, RES, &shown_c, "C2").await.unwrap();

        assert_eq!(api.order_of("c"), Some(0));
        assert_eq!(api.order_of("a"), Some(1));
        assert_eq!(api.order_of("b"), Some(2));
    }
}
