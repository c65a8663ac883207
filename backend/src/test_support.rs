//! In-memory adapters for tests.
//!
//! [`InMemoryStore`] implements all three repository ports against a single
//! mutex-guarded state so HTTP and behaviour tests can exercise the real
//! services without PostgreSQL. It mirrors the store rules the Diesel
//! adapters rely on: generated ids, store-managed timestamps, unique
//! emails, foreign keys on mugs and cascading deletes.
//!
//! Only compiled for tests or with the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    LocationRepository, LocationRepositoryError, MugRepository, MugRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    AuditStamps, Location, LocationDetails, LocationId, LocationService, LocationWithMugs, Mug,
    MugDetails, MugId, MugService, User, UserDetails, UserId, UserService, UserWithMugs,
};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Clone)]
struct MugRecord {
    id: MugId,
    display_name: String,
    user_id: UserId,
    location_id: LocationId,
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    locations: Vec<Location>,
    mugs: Vec<MugRecord>,
}

impl State {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|location| location.id() == id)
    }

    fn resolve(&self, record: &MugRecord) -> Option<Mug> {
        let user = self.user(record.user_id)?.clone();
        let location = self.location(record.location_id)?.clone();
        Some(Mug::new(record.id, record.display_name.clone(), user, location))
    }

    fn email_taken(&self, email: Option<&str>, except: Option<UserId>) -> bool {
        email.is_some_and(|email| {
            self.users
                .iter()
                .any(|user| user.email() == Some(email) && Some(user.id()) != except)
        })
    }

    fn check_references(&self, details: &MugDetails) -> Result<(), MugRepositoryError> {
        if self.user(details.user_id).is_none() {
            return Err(MugRepositoryError::missing_reference("mugs_user_id_fkey"));
        }
        if self.location(details.location_id).is_none() {
            return Err(MugRepositoryError::missing_reference("mugs_location_id_fkey"));
        }
        Ok(())
    }
}

/// Shared in-memory backing store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    unavailable: Mutex<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap_or_else(PoisonError::into_inner) = unavailable;
    }

    /// Number of stored mugs, for asserting cascades.
    pub fn mug_count(&self) -> usize {
        self.state().mugs.len()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_unavailable(&self) -> bool {
        *self.unavailable.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

const OFFLINE: &str = "in-memory store offline";

/// Wire the real services over `store` into an [`HttpState`].
pub fn in_memory_http_state(store: &Arc<InMemoryStore>) -> HttpState {
    let mugs = Arc::new(MugService::new(Arc::clone(store)));
    let users = Arc::new(UserService::new(Arc::clone(store), Arc::clone(&mugs)));
    let locations = Arc::new(LocationService::new(Arc::clone(store)));
    HttpState::from_services(users, mugs, locations)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        if self.is_unavailable() {
            return Err(UserRepositoryError::connection(OFFLINE));
        }
        Ok(self.state().users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        if self.is_unavailable() {
            return Err(UserRepositoryError::connection(OFFLINE));
        }
        Ok(self.state().user(id).cloned())
    }

    async fn find_by_id_with_mugs(
        &self,
        id: UserId,
    ) -> Result<Option<UserWithMugs>, UserRepositoryError> {
        if self.is_unavailable() {
            return Err(UserRepositoryError::connection(OFFLINE));
        }
        let state = self.state();
        let Some(user) = state.user(id).cloned() else {
            return Ok(None);
        };
        let mugs = state
            .mugs
            .iter()
            .filter(|record| record.user_id == id)
            .filter_map(|record| state.resolve(record))
            .collect();
        Ok(Some(UserWithMugs { user, mugs }))
    }

    async fn insert(&self, details: &UserDetails) -> Result<User, UserRepositoryError> {
        if self.is_unavailable() {
            return Err(UserRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        if state.email_taken(details.email.as_deref(), None) {
            return Err(UserRepositoryError::unique_violation("users_email_key"));
        }
        let now = Utc::now();
        let user = User::new(UserId::random(), details.clone(), AuditStamps::new(now, now));
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<Option<User>, UserRepositoryError> {
        if self.is_unavailable() {
            return Err(UserRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        if state.email_taken(details.email.as_deref(), Some(id)) {
            return Err(UserRepositoryError::unique_violation("users_email_key"));
        }
        let Some(slot) = state.users.iter_mut().find(|user| user.id() == id) else {
            return Ok(None);
        };
        let audit = AuditStamps::new(slot.audit().created_at(), Utc::now());
        *slot = User::new(id, details.clone(), audit);
        Ok(Some(slot.clone()))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserRepositoryError> {
        if self.is_unavailable() {
            return Err(UserRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        state.users.retain(|user| user.id() != id);
        state.mugs.retain(|record| record.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl LocationRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Location>, LocationRepositoryError> {
        if self.is_unavailable() {
            return Err(LocationRepositoryError::connection(OFFLINE));
        }
        Ok(self.state().locations.clone())
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, LocationRepositoryError> {
        if self.is_unavailable() {
            return Err(LocationRepositoryError::connection(OFFLINE));
        }
        Ok(self.state().location(id).cloned())
    }

    async fn find_by_id_with_mugs(
        &self,
        id: LocationId,
    ) -> Result<Option<LocationWithMugs>, LocationRepositoryError> {
        if self.is_unavailable() {
            return Err(LocationRepositoryError::connection(OFFLINE));
        }
        let state = self.state();
        let Some(location) = state.location(id).cloned() else {
            return Ok(None);
        };
        let mugs = state
            .mugs
            .iter()
            .filter(|record| record.location_id == id)
            .filter_map(|record| state.resolve(record))
            .collect();
        Ok(Some(LocationWithMugs { location, mugs }))
    }

    async fn insert(&self, details: &LocationDetails) -> Result<Location, LocationRepositoryError> {
        if self.is_unavailable() {
            return Err(LocationRepositoryError::connection(OFFLINE));
        }
        let now = Utc::now();
        let location = Location::new(LocationId::random(), details.clone(), AuditStamps::new(now, now));
        self.state().locations.push(location.clone());
        Ok(location)
    }

    async fn update(
        &self,
        id: LocationId,
        details: &LocationDetails,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        if self.is_unavailable() {
            return Err(LocationRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        let Some(slot) = state.locations.iter_mut().find(|location| location.id() == id) else {
            return Ok(None);
        };
        let audit = AuditStamps::new(slot.audit().created_at(), Utc::now());
        *slot = Location::new(id, details.clone(), audit);
        Ok(Some(slot.clone()))
    }

    async fn delete_by_id(&self, id: LocationId) -> Result<(), LocationRepositoryError> {
        if self.is_unavailable() {
            return Err(LocationRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        state.locations.retain(|location| location.id() != id);
        state.mugs.retain(|record| record.location_id != id);
        Ok(())
    }
}

#[async_trait]
impl MugRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Mug>, MugRepositoryError> {
        if self.is_unavailable() {
            return Err(MugRepositoryError::connection(OFFLINE));
        }
        let state = self.state();
        Ok(state.mugs.iter().filter_map(|record| state.resolve(record)).collect())
    }

    async fn find_by_id(&self, id: MugId) -> Result<Option<Mug>, MugRepositoryError> {
        if self.is_unavailable() {
            return Err(MugRepositoryError::connection(OFFLINE));
        }
        let state = self.state();
        Ok(state
            .mugs
            .iter()
            .find(|record| record.id == id)
            .and_then(|record| state.resolve(record)))
    }

    async fn list_by_user_id(&self, user_id: UserId) -> Result<Vec<Mug>, MugRepositoryError> {
        if self.is_unavailable() {
            return Err(MugRepositoryError::connection(OFFLINE));
        }
        let state = self.state();
        Ok(state
            .mugs
            .iter()
            .filter(|record| record.user_id == user_id)
            .filter_map(|record| state.resolve(record))
            .collect())
    }

    async fn insert(&self, details: &MugDetails) -> Result<Mug, MugRepositoryError> {
        if self.is_unavailable() {
            return Err(MugRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        state.check_references(details)?;
        let record = MugRecord {
            id: MugId::random(),
            display_name: details.display_name.clone(),
            user_id: details.user_id,
            location_id: details.location_id,
        };
        let mug = state
            .resolve(&record)
            .ok_or_else(|| MugRepositoryError::query("inserted mug could not be reloaded"))?;
        state.mugs.push(record);
        Ok(mug)
    }

    async fn update(
        &self,
        id: MugId,
        details: &MugDetails,
    ) -> Result<Option<Mug>, MugRepositoryError> {
        if self.is_unavailable() {
            return Err(MugRepositoryError::connection(OFFLINE));
        }
        let mut state = self.state();
        if !state.mugs.iter().any(|record| record.id == id) {
            return Ok(None);
        }
        state.check_references(details)?;
        let record = MugRecord {
            id,
            display_name: details.display_name.clone(),
            user_id: details.user_id,
            location_id: details.location_id,
        };
        let mug = state.resolve(&record);
        if let Some(slot) = state.mugs.iter_mut().find(|existing| existing.id == id) {
            *slot = record;
        }
        Ok(mug)
    }

    async fn delete_by_id(&self, id: MugId) -> Result<(), MugRepositoryError> {
        if self.is_unavailable() {
            return Err(MugRepositoryError::connection(OFFLINE));
        }
        self.state().mugs.retain(|record| record.id != id);
        Ok(())
    }
}
