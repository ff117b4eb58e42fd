use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::modules::career::application::domain::CareerRecord;
use crate::modules::career::application::ports::outgoing::{
    CareerRepository, CareerRepositoryError,
};

struct State<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
    /// `None` accepts any profile id.
    profiles: Option<HashSet<i32>>,
}

/// Career table kept in memory. Clones share the same rows.
pub struct InMemoryCareerRepository<T> {
    state: Arc<Mutex<State<T>>>,
}

impl<T> Clone for InMemoryCareerRepository<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for InMemoryCareerRepository<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                rows: BTreeMap::new(),
                next_id: 1,
                profiles: None,
            })),
        }
    }
}

impl<T: CareerRecord> InMemoryCareerRepository<T> {
    /// Rejects records pointing at any profile outside `profiles`.
    pub fn with_profiles(profiles: &[i32]) -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().profiles = Some(profiles.iter().copied().collect());
        repo
    }

    pub fn seeded(records: Vec<T>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state.lock().unwrap();
            for record in records {
                state.next_id = state.next_id.max(record.id() + 1);
                state.rows.insert(record.id(), record);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    fn check_profile(state: &State<T>, record: &T) -> Result<(), CareerRepositoryError> {
        match &state.profiles {
            Some(known) if !known.contains(&record.profile_id()) => {
                Err(CareerRepositoryError::ProfileNotFound)
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<T: CareerRecord> CareerRepository<T> for InMemoryCareerRepository<T> {
    async fn create(&self, data: T::Data) -> Result<T, CareerRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let record = T::from_data(state.next_id, data);
        Self::check_profile(&state, &record)?;

        state.next_id += 1;
        state.rows.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, data: T::Data) -> Result<T, CareerRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.rows.contains_key(&id) {
            return Err(CareerRepositoryError::NotFound);
        }

        let record = T::from_data(id, data);
        Self::check_profile(&state, &record)?;

        state.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, CareerRepositoryError> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<T>, CareerRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|r| profile_id.map_or(true, |p| r.profile_id() == p))
            .cloned()
            .collect())
    }

    async fn list_visible_for_profile(
        &self,
        profile_id: i32,
    ) -> Result<Vec<T>, CareerRepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|r| r.profile_id() == profile_id && r.is_visible())
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i32) -> Result<(), CareerRepositoryError> {
        self.state
            .lock()
            .unwrap()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(CareerRepositoryError::NotFound)
    }
}
