use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use itemforge_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, NewItem};

/// Tombstones are only swept once there are at least this many.
const COMPACT_MIN_TOMBSTONES: usize = 32;

/// The five-call contract the HTTP edge programs against.
///
/// `NotFound` comes back as `Err(DomainError::NotFound)`; no other error
/// originates here.
pub trait ItemStore: Send + Sync {
    /// All current items, in insertion order.
    fn list(&self) -> Vec<Item>;
    fn get(&self, id: ItemId) -> DomainResult<Item>;
    /// Assigns the next id and stores the item. Never fails.
    fn create(&self, fields: NewItem) -> Item;
    /// Full replacement of `name`/`description`. Never inserts.
    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<Item>;
    fn delete(&self, id: ItemId) -> DomainResult<()>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn create(&self, fields: NewItem) -> Item {
        (**self).create(fields)
    }

    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<Item> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: ItemId) -> DomainResult<()> {
        (**self).delete(id)
    }
}

#[derive(Debug)]
struct Inner {
    /// Insertion-ordered; a deleted item stays behind as `None` until the
    /// next compaction, so delete never shifts the map.
    slots: IndexMap<ItemId, Option<Item>>,
    live: usize,
    next_id: ItemId,
}

impl Inner {
    fn live_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.slots.get_mut(&id).and_then(Option::as_mut)
    }

    /// Sweep tombstones once they outnumber live items. Each sweep is paid
    /// for by the deletes that produced its tombstones.
    fn compact_if_sparse(&mut self) {
        let dead = self.slots.len() - self.live;
        if dead >= COMPACT_MIN_TOMBSTONES && dead > self.live {
            self.slots.retain(|_, slot| slot.is_some());
            tracing::debug!(swept = dead, live = self.live, "item store compacted");
        }
    }
}

/// Process-local item store.
///
/// Mapping and counter share one lock: mutations take it for writing, so a
/// create's "assign, bump, insert" is indivisible and readers never see half
/// of it. Mutations check before they write and none of their writes can
/// panic, so state behind a poisoned lock is still consistent and is reused.
///
/// Lookup, create, update and delete are O(1) (delete amortized over
/// compaction); `list` walks tombstones too, bounded by twice the live count.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                slots: IndexMap::new(),
                live: 0,
                next_id: ItemId::FIRST,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().live
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next `create` will assign.
    pub fn peek_next_id(&self) -> ItemId {
        self.read().next_id
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Vec<Item> {
        self.read().slots.values().flatten().cloned().collect()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.read()
            .slots
            .get(&id)
            .and_then(Option::as_ref)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id))
    }

    fn create(&self, fields: NewItem) -> Item {
        let mut inner = self.write();

        let id = inner.next_id;
        let next_id = id.next();

        let item = fields.into_item(id);
        inner.slots.insert(id, Some(item.clone()));
        inner.live += 1;
        inner.next_id = next_id;

        tracing::debug!(item_id = %id, next_id = %next_id, "item created");
        item
    }

    fn update(&self, id: ItemId, fields: NewItem) -> DomainResult<Item> {
        let mut inner = self.write();
        let item = inner.live_mut(id).ok_or_else(|| DomainError::not_found(id))?;

        item.replace_fields(fields);

        tracing::debug!(item_id = %id, "item updated");
        Ok(item.clone())
    }

    fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut inner = self.write();
        let slot = inner
            .slots
            .get_mut(&id)
            .filter(|slot| slot.is_some())
            .ok_or_else(|| DomainError::not_found(id))?;

        *slot = None;
        inner.live -= 1;
        inner.compact_if_sparse();

        tracing::debug!(item_id = %id, "item deleted");
        Ok(())
    }
}
