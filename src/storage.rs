// src/storage.rs

use std::collections::HashMap;
use thiserror::Error;

pub const NAME_KEY: &str = "userName";
pub const AVATAR_KEY: &str = "userAvatar";

/// Emoji avatars offered on the welcome and settings screens.
pub const AVATARS: [&str; 4] = ["🐯", "🐼", "🦊", "🐰"];
pub const DEFAULT_NAME: &str = "Student";

/// Opaque string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

impl<'a> KeyValueStore for dyn eframe::Storage + 'a {
    fn get(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.set_string(key, value);
    }
}

/// Used by tests and when the platform has no persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Please choose an avatar")]
    NoAvatar,
    #[error("Avatar {0} does not exist")]
    UnknownAvatar(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub avatar: Option<usize>,
}

impl Profile {
    /// Checked constructor used by the welcome form.
    pub fn new(name: &str, avatar: Option<usize>) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let avatar = avatar.ok_or(ProfileError::NoAvatar)?;
        if avatar >= AVATARS.len() {
            return Err(ProfileError::UnknownAvatar(avatar));
        }
        Ok(Self {
            display_name: name.to_owned(),
            avatar: Some(avatar),
        })
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let display_name = store.get(NAME_KEY).unwrap_or_default();
        let avatar = store.get(AVATAR_KEY).and_then(|raw| parse_avatar(&raw));
        log::info!(
            "profile loaded (name set: {}, avatar: {:?})",
            !display_name.is_empty(),
            avatar
        );
        Self {
            display_name,
            avatar,
        }
    }

    pub fn store<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        store.set(NAME_KEY, self.display_name.clone());
        // absent avatar is written as empty and reads back as None
        let avatar = self.avatar.map(|a| a.to_string()).unwrap_or_default();
        store.set(AVATAR_KEY, avatar);
        log::info!("profile saved");
    }

    /// Both a name and an avatar were stored.
    pub fn is_complete(&self) -> bool {
        !self.display_name.is_empty() && self.avatar.is_some()
    }

    pub fn name_or_default(&self) -> &str {
        if self.display_name.trim().is_empty() {
            DEFAULT_NAME
        } else {
            &self.display_name
        }
    }

    pub fn avatar_emoji(&self) -> Option<&'static str> {
        self.avatar.and_then(|a| AVATARS.get(a).copied())
    }
}

fn parse_avatar(raw: &str) -> Option<usize> {
    if raw.is_empty() {
        return None;
    }
    match raw.trim().parse::<usize>() {
        Ok(idx) if idx < AVATARS.len() => Some(idx),
        Ok(idx) => {
            log::warn!("stored avatar {idx} is out of range, ignoring");
            None
        }
        Err(err) => {
            log::warn!("stored avatar {raw:?} is not a number ({err}), ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_is_empty() {
        let profile = Profile::load(&MemoryStore::default());
        assert_eq!(profile, Profile::default());
        assert!(!profile.is_complete());
        assert_eq!(profile.name_or_default(), "Student");
    }

    #[test]
    fn store_then_load() {
        let mut store = MemoryStore::default();
        let profile = Profile::new("  Nimal ", Some(2)).unwrap();
        profile.store(&mut store);

        assert_eq!(store.get(NAME_KEY).as_deref(), Some("Nimal"));
        assert_eq!(store.get(AVATAR_KEY).as_deref(), Some("2"));

        let loaded = Profile::load(&store);
        assert_eq!(loaded, profile);
        assert!(loaded.is_complete());
        assert_eq!(loaded.avatar_emoji(), Some(AVATARS[2]));
    }

    #[test]
    fn malformed_avatar_is_absent() {
        let mut store = MemoryStore::default();
        store.set(NAME_KEY, "Kasun".into());
        store.set(AVATAR_KEY, "tiger".into());
        let profile = Profile::load(&store);
        assert_eq!(profile.avatar, None);
        assert!(!profile.is_complete());

        store.set(AVATAR_KEY, "9".into());
        assert_eq!(Profile::load(&store).avatar, None);
    }

    #[test]
    fn validation_errors() {
        assert_eq!(Profile::new("   ", Some(0)), Err(ProfileError::EmptyName));
        assert_eq!(Profile::new("Ama", None), Err(ProfileError::NoAvatar));
        assert_eq!(
            Profile::new("Ama", Some(4)),
            Err(ProfileError::UnknownAvatar(4))
        );
    }

    #[test]
    fn profile_without_avatar_round_trips() {
        let mut store = MemoryStore::default();
        let profile = Profile {
            display_name: "Ama".into(),
            avatar: None,
        };
        profile.store(&mut store);
        assert_eq!(Profile::load(&store), profile);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut store = MemoryStore::default();
        {
            let dyn_store: &mut dyn KeyValueStore = &mut store;
            Profile::new("Ama", Some(1)).unwrap().store(dyn_store);
        }
        assert!(Profile::load(&store).is_complete());
    }
}
