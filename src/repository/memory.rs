//! In-memory event store with a derived day index

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::EventRepository;
use crate::{error::AppResult, models::event::Event};

#[derive(Default)]
struct Store {
    events: HashMap<Uuid, Event>,
    by_day: BTreeMap<NaiveDate, BTreeSet<(NaiveDateTime, Uuid)>>,
}

impl Store {
    fn index(&mut self, event: &Event) {
        self.by_day
            .entry(event.day())
            .or_default()
            .insert((event.start, event.id));
    }

    fn unindex(&mut self, event: &Event) {
        let day = event.day();
        if let Some(bucket) = self.by_day.get_mut(&day) {
            bucket.remove(&(event.start, event.id));
            if bucket.is_empty() {
                self.by_day.remove(&day);
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events
    pub async fn len(&self) -> usize {
        self.store.read().await.events.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.store.read().await.events.contains_key(&id))
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Event>> {
        Ok(self.store.read().await.events.get(&id).cloned())
    }

    async fn save(&self, event: &Event) -> AppResult<()> {
        let mut store = self.store.write().await;
        if let Some(previous) = store.events.remove(&event.id) {
            store.unindex(&previous);
        }
        store.index(event);
        store.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut store = self.store.write().await;
        if let Some(previous) = store.events.remove(&id) {
            store.unindex(&previous);
        }
        Ok(())
    }

    async fn events_for_day(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        let store = self.store.read().await;
        let events = store
            .by_day
            .get(&date)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|(_, id)| store.events.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(events)
    }
}
