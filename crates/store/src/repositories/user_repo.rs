//! Repository for the user collection.

use chronicle_core::error::CoreError;
use chronicle_core::user::User;
use uuid::Uuid;

use crate::models::user::CreateUser;
use crate::MemoryStore;

/// Provides create and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created record.
    ///
    /// Usernames are unique (case-sensitive); a duplicate yields
    /// [`CoreError::Conflict`].
    pub fn create(store: &MemoryStore, input: CreateUser) -> Result<User, CoreError> {
        let mut users = store.users.write();
        if users.iter().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            )));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: input.username,
            password_hash: input.password_hash,
        };
        users.push(user.clone());
        Ok(user)
    }

    /// Find a user by id.
    pub fn find_by_id(store: &MemoryStore, id: &str) -> Option<User> {
        store.users.read().iter().find(|u| u.id == id).cloned()
    }

    /// Find a user by username (case-sensitive).
    pub fn find_by_username(store: &MemoryStore, username: &str) -> Option<User> {
        store
            .users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[test]
    fn create_then_find() {
        let store = MemoryStore::new();
        let user = UserRepo::create(&store, input("lachlan")).unwrap();

        assert_eq!(UserRepo::find_by_id(&store, &user.id).unwrap().username, "lachlan");
        assert_eq!(UserRepo::find_by_username(&store, "lachlan").unwrap().id, user.id);
    }

    #[test]
    fn duplicate_username_conflicts() {
        let store = MemoryStore::new();
        UserRepo::create(&store, input("lachlan")).unwrap();

        assert_matches!(
            UserRepo::create(&store, input("lachlan")),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn username_lookup_is_case_sensitive() {
        let store = MemoryStore::new();
        UserRepo::create(&store, input("lachlan")).unwrap();
        assert!(UserRepo::find_by_username(&store, "Lachlan").is_none());
    }
}
