//! In-memory [`LookupApi`] for tests: records every call and can be told to
//! fail specific requests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use super::{ApiError, ApiResult, LookupApi};
use crate::lookup::LookupResource;
use crate::models::{NewItem, OrderableItem};
use crate::reorder::sort_by_order;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create { label: String, order: i32 },
    Update { id: String, order: i32 },
    Delete(String),
}

#[derive(Default)]
pub struct FakeApi {
    pub items: RefCell<Vec<OrderableItem>>,
    pub calls: RefCell<Vec<Call>>,
    /// "start:<id>" / "end:<id>" markers around each update
    pub update_trace: RefCell<Vec<String>>,
    fail_updates: RefCell<HashSet<String>>,
    fail_delete: Cell<bool>,
    fail_list: Cell<bool>,
    next_id: Cell<u32>,
}

impl FakeApi {
    pub fn with_items(items: Vec<OrderableItem>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Default::default()
        }
    }

    pub fn fail_update_for(&self, id: &str) {
        self.fail_updates.borrow_mut().insert(id.to_string());
    }

    pub fn fail_deletes(&self) {
        self.fail_delete.set(true);
    }

    pub fn fail_lists(&self) {
        self.fail_list.set(true);
    }

    pub fn order_of(&self, id: &str) -> Option<i32> {
        self.items.borrow().iter().find(|i| i.id == id).map(|i| i.order)
    }

    pub fn updates(&self) -> Vec<(String, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Update { id, order } => Some((id.clone(), *order)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }
}

#[async_trait(?Send)]
impl LookupApi for FakeApi {
    async fn list(&self, _resource: LookupResource) -> ApiResult<Vec<OrderableItem>> {
        self.calls.borrow_mut().push(Call::List);
        if self.fail_list.get() {
            return Err(ApiError::Status(503));
        }
        let mut items = self.items.borrow().clone();
        sort_by_order(&mut items);
        Ok(items)
    }

    async fn create(&self, _resource: LookupResource, item: &NewItem) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call::Create {
            label: item.label.clone(),
            order: item.order,
        });
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        let created = OrderableItem::new(format!("new-{n}"), item.order).with_label(item.label_key, item.label.clone());
        self.items.borrow_mut().push(created);
        Ok(())
    }

    async fn update(&self, _resource: LookupResource, item: &OrderableItem) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call::Update {
            id: item.id.clone(),
            order: item.order,
        });
        self.update_trace.borrow_mut().push(format!("start:{}", item.id));
        tokio::task::yield_now().await;
        self.update_trace.borrow_mut().push(format!("end:{}", item.id));

        if self.fail_updates.borrow().contains(&item.id) {
            return Err(ApiError::Status(500));
        }
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(ApiError::NotFound(item.id.clone())),
        }
    }

    async fn delete(&self, _resource: LookupResource, id: &str) -> ApiResult<()> {
        self.calls.borrow_mut().push(Call::Delete(id.to_string()));
        if self.fail_delete.get() {
            return Err(ApiError::Transport("connection reset".to_string()));
        }
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
