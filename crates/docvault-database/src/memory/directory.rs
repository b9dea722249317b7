//! In-memory account directory and profile store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use docvault_core::result::AppResult;
use docvault_core::traits::AccountDirectory;
use docvault_core::types::{Role, UserId};
use docvault_entity::Profile;

use crate::store::ProfileStore;

/// Profiles keyed by account ID.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    profiles: DashMap<UserId, Profile>,
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account with the given role. Returns its new ID.
    pub fn add(&self, email: &str, role: Role) -> UserId {
        let id = UserId::new();
        self.profiles.insert(
            id,
            Profile {
                id,
                full_name: None,
                email: email.to_string(),
                role,
                created_at: Utc::now(),
            },
        );
        id
    }
}

#[async_trait]
impl AccountDirectory for MemoryDirectory {
    async fn role_of(&self, user_id: &UserId) -> AppResult<Option<Role>> {
        Ok(self.profiles.get(user_id).map(|p| p.role))
    }
}

#[async_trait]
impl ProfileStore for MemoryDirectory {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<Profile>> {
        Ok(self.profiles.get(id).map(|p| p.value().clone()))
    }

    async fn update_role(&self, id: &UserId, role: Role) -> AppResult<bool> {
        Ok(match self.profiles.get_mut(id) {
            Some(mut profile) => {
                profile.role = role;
                true
            }
            None => false,
        })
    }

    async fn upsert(
        &self,
        id: &UserId,
        email: &str,
        full_name: Option<&str>,
        role: Role,
    ) -> AppResult<Profile> {
        let mut entry = self.profiles.entry(*id).or_insert_with(|| Profile {
            id: *id,
            full_name: None,
            email: email.to_string(),
            role,
            created_at: Utc::now(),
        });
        entry.email = email.to_string();
        if let Some(name) = full_name {
            entry.full_name = Some(name.to_string());
        }
        entry.role = role;
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_account_has_no_role() {
        let dir = MemoryDirectory::new();
        assert_eq!(dir.role_of(&UserId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_role() {
        let dir = MemoryDirectory::new();
        let id = dir.add("u@example.com", Role::User);
        assert!(dir.update_role(&id, Role::Admin).await.unwrap());
        assert_eq!(dir.role_of(&id).await.unwrap(), Some(Role::Admin));
        assert!(!dir.update_role(&UserId::new(), Role::Admin).await.unwrap());
    }

    #[tokio::test]
    async fn test_upsert_overwrites_existing() {
        let dir = MemoryDirectory::new();
        let id = dir.add("old@example.com", Role::User);
        let p = dir
            .upsert(&id, "new@example.com", Some("New Name"), Role::Admin)
            .await
            .unwrap();
        assert_eq!(p.email, "new@example.com");
        assert_eq!(p.full_name.as_deref(), Some("New Name"));
        assert!(p.is_admin());
    }
}
