use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::headhunter::models::Headhunter;
use crate::domain::headhunter::models::HeadhunterId;
use crate::domain::headhunter::models::NewHeadhunter;
use crate::domain::headhunter::ports::HeadhunterDirectory;
use crate::headhunter::errors::DirectoryError;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    headhunters: HashMap<HeadhunterId, Headhunter>,
}

/// Process-local headhunter directory.
///
/// Identifiers are assigned from a counter starting at 1. Emails are unique.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHeadhunterDirectory {
    store: Arc<RwLock<Store>>,
}

impl InMemoryHeadhunterDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.headhunters.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl HeadhunterDirectory for InMemoryHeadhunterDirectory {
    async fn create(&self, headhunter: NewHeadhunter) -> Result<Headhunter, DirectoryError> {
        let mut store = self.store.write().await;

        if store
            .headhunters
            .values()
            .any(|existing| existing.email == headhunter.email)
        {
            return Err(DirectoryError::Conflict(
                headhunter.email.as_str().to_string(),
            ));
        }

        store.next_id += 1;
        let id = HeadhunterId(store.next_id);
        let now = Utc::now();

        let created = Headhunter {
            id: Some(id),
            name: headhunter.name,
            phone: headhunter.phone,
            email: headhunter.email,
            password_hash: headhunter.password_hash,
            role: headhunter.role,
            area_id: headhunter.area_id,
            created_at: now,
            updated_at: now,
        };
        store.headhunters.insert(id, created.clone());

        tracing::debug!(headhunter_id = %id, "Headhunter stored in memory");

        Ok(created)
    }

    async fn find_by_id(&self, id: HeadhunterId) -> Result<Option<Headhunter>, DirectoryError> {
        Ok(self.store.read().await.headhunters.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Headhunter>, DirectoryError> {
        Ok(self
            .store
            .read()
            .await
            .headhunters
            .values()
            .find(|headhunter| headhunter.email.as_str() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::headhunter::models::AreaId;
    use crate::domain::headhunter::models::EmailAddress;
    use crate::domain::headhunter::models::Name;
    use crate::domain::headhunter::models::Phone;
    use crate::domain::headhunter::models::Role;

    fn new_headhunter(email: &str) -> NewHeadhunter {
        NewHeadhunter {
            name: Name::new("Ann".to_string()).unwrap(),
            phone: Phone::new("0123456789".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
            role: Role::default(),
            area_id: AreaId::new(1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let directory = InMemoryHeadhunterDirectory::new();

        let first = directory.create(new_headhunter("a@x.com")).await.unwrap();
        let second = directory.create(new_headhunter("b@x.com")).await.unwrap();

        assert_eq!(first.id, Some(HeadhunterId(1)));
        assert_eq!(second.id, Some(HeadhunterId(2)));
        assert_eq!(directory.len().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let directory = InMemoryHeadhunterDirectory::new();

        directory.create(new_headhunter("a@x.com")).await.unwrap();
        let result = directory.create(new_headhunter("a@x.com")).await;

        assert!(matches!(result, Err(DirectoryError::Conflict(email)) if email == "a@x.com"));
        assert_eq!(directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_lookups() {
        let directory = InMemoryHeadhunterDirectory::new();
        let created = directory.create(new_headhunter("a@x.com")).await.unwrap();
        let id = created.id.unwrap();

        let by_id = directory.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.email.as_str(), "a@x.com");

        let by_email = directory.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, Some(id));

        assert!(directory.find_by_id(HeadhunterId(99)).await.unwrap().is_none());
        assert!(directory.find_by_email("z@x.com").await.unwrap().is_none());
    }
}
