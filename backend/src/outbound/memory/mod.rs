//! In-process implementation of every record repository.
//!
//! Used when no database URL is configured and throughout the HTTP tests.
//! Tables live behind one `Mutex`; ids are allocated per table starting at 1
//! and timestamps come from the injected clock.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    AboutRepository, CollectionProbe, MessageRepository, PersistenceError, ProjectRepository,
    VisitorRepository,
};
use crate::domain::{
    AboutId, AboutProfile, AboutUpdate, Collection, Message, MessageId, NewMessage, NewVisitor,
    Project, ProjectChanges, ProjectDraft, ProjectId, Visitor, VisitorId,
};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn allocate(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Debug, Default)]
struct StoreState {
    visitors: Table<Visitor>,
    about: Table<AboutProfile>,
    projects: Table<Project>,
    messages: Table<Message>,
    missing: BTreeSet<Collection>,
}

impl StoreState {
    fn ensure(&self, collection: Collection) -> Result<(), PersistenceError> {
        if self.missing.contains(&collection) {
            return Err(PersistenceError::missing_collection(collection));
        }
        Ok(())
    }
}

/// Repository adapter holding every table in memory.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use folio::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new(Arc::new(mockable::DefaultClock)));
/// ```
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
        }
    }

    /// Builder form of [`InMemoryStore::drop_collection`].
    #[must_use]
    pub fn without_collection(self, collection: Collection) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.missing.insert(collection);
        }
        self
    }

    /// Behave as though `collection` was never provisioned. Its rows are
    /// discarded.
    pub fn drop_collection(&self, collection: Collection) -> Result<(), PersistenceError> {
        let mut state = self.lock()?;
        state.missing.insert(collection);
        match collection {
            Collection::Visitors => state.visitors = Table::default(),
            Collection::About => state.about = Table::default(),
            Collection::Projects => state.projects = Table::default(),
            Collection::Messages => state.messages = Table::default(),
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, PersistenceError> {
        self.state
            .lock()
            .map_err(|_| PersistenceError::connection("in-memory store lock poisoned"))
    }

    fn lock_collection(
        &self,
        collection: Collection,
    ) -> Result<MutexGuard<'_, StoreState>, PersistenceError> {
        let state = self.lock()?;
        state.ensure(collection)?;
        Ok(state)
    }
}

#[async_trait]
impl VisitorRepository for InMemoryStore {
    async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, PersistenceError> {
        let visit_time = self.clock.utc();
        let mut state = self.lock_collection(Collection::Visitors)?;
        let id = state.visitors.allocate();
        let stored = Visitor {
            id: VisitorId::new(id),
            name: visitor.name().to_owned(),
            relation: visitor.relation().to_owned(),
            visit_time,
        };
        state.visitors.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Visitor>, PersistenceError> {
        let state = self.lock_collection(Collection::Visitors)?;
        let mut rows = state.visitors.rows.clone();
        rows.sort_by(|a, b| {
            b.visit_time
                .cmp(&a.visit_time)
                .then_with(|| b.id.get().cmp(&a.id.get()))
        });
        Ok(rows)
    }
}

#[async_trait]
impl AboutRepository for InMemoryStore {
    async fn find_first(&self) -> Result<Option<AboutProfile>, PersistenceError> {
        let state = self.lock_collection(Collection::About)?;
        Ok(state
            .about
            .rows
            .iter()
            .min_by_key(|profile| profile.id.get())
            .cloned())
    }

    async fn insert(&self, update: &AboutUpdate) -> Result<AboutProfile, PersistenceError> {
        let mut state = self.lock_collection(Collection::About)?;
        let id = state.about.allocate();
        let profile = update.to_new_profile(AboutId::new(id));
        state.about.rows.push(profile.clone());
        Ok(profile)
    }

    async fn update(
        &self,
        id: AboutId,
        update: &AboutUpdate,
    ) -> Result<Option<AboutProfile>, PersistenceError> {
        let mut state = self.lock_collection(Collection::About)?;
        Ok(state
            .about
            .rows
            .iter_mut()
            .find(|profile| profile.id == id)
            .map(|profile| {
                update.apply_to(profile);
                profile.clone()
            }))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_newest_first(&self) -> Result<Vec<Project>, PersistenceError> {
        let state = self.lock_collection(Collection::Projects)?;
        let mut rows = state.projects.rows.clone();
        rows.sort_by_key(|project| std::cmp::Reverse(project.id.get()));
        Ok(rows)
    }

    async fn insert(&self, draft: &ProjectDraft) -> Result<Project, PersistenceError> {
        let mut state = self.lock_collection(Collection::Projects)?;
        let id = state.projects.allocate();
        let project = draft.clone().into_project(ProjectId::new(id));
        state.projects.rows.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
    ) -> Result<Option<Project>, PersistenceError> {
        let mut state = self.lock_collection(Collection::Projects)?;
        Ok(state
            .projects
            .rows
            .iter_mut()
            .find(|project| project.id == id)
            .map(|project| {
                changes.apply_to(project);
                project.clone()
            }))
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, PersistenceError> {
        let mut state = self.lock_collection(Collection::Projects)?;
        let before = state.projects.rows.len();
        state.projects.rows.retain(|project| project.id != id);
        Ok(state.projects.rows.len() < before)
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn insert(&self, message: &NewMessage) -> Result<Message, PersistenceError> {
        let timestamp = self.clock.utc();
        let mut state = self.lock_collection(Collection::Messages)?;
        let id = state.messages.allocate();
        let stored = Message {
            id: MessageId::new(id),
            name: message.name().to_owned(),
            email: message.email().to_owned(),
            message: message.message().to_owned(),
            timestamp,
        };
        state.messages.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Message>, PersistenceError> {
        let state = self.lock_collection(Collection::Messages)?;
        let mut rows = state.messages.rows.clone();
        rows.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.get().cmp(&a.id.get()))
        });
        Ok(rows)
    }
}

#[async_trait]
impl CollectionProbe for InMemoryStore {
    async fn probe(&self, collection: Collection) -> Result<(), PersistenceError> {
        self.lock_collection(collection).map(|_| ())
    }
}
