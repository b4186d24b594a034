use crate::audio::{AudioBackend, NullAudio};
use crate::config::AppConfig;
use crate::data::{Content, ContentError};
use crate::storage::{KeyValueStore, MemoryStore, Profile};
use crate::theme::ThemeStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submodules
pub mod actions;
pub mod navigation;
pub mod router;
pub mod screens;
pub mod view_models;

pub use crate::view_models::{NavItem, ProgressSummary};
pub use router::{NavParams, ScreenRouter};
pub use screens::{ProfileEditor, View, WelcomeForm};

pub struct KoreanPrepApp {
    pub content: Content,
    pub config: AppConfig,
    pub router: ScreenRouter,
    pub view: View,
    pub theme: ThemeStore,
    pub profile: Profile,
    /// Set when the profile changed and has not reached storage yet.
    pub profile_dirty: bool,
    /// Stand-in when eframe has no storage (tests, some web hosts).
    pub memory: MemoryStore,
    pub audio: Box<dyn AudioBackend>,
    pub rng: StdRng,
}

impl KoreanPrepApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, ContentError> {
        let content = Content::load()?;
        let mut app = Self::with_content(content, config);

        match cc.storage {
            Some(storage) => app.profile = Profile::load(storage),
            None => log::warn!("no persistent storage, the profile lasts for this session only"),
        }
        app.theme.apply(&cc.egui_ctx);
        Ok(app)
    }

    /// App on the splash screen with an empty profile and no audio.
    pub fn with_content(content: Content, config: AppConfig) -> Self {
        let router = ScreenRouter::default();
        let view = View::Splash(crate::timer::OneShotTimer::new(config.splash_delay));
        let theme = ThemeStore::new(config.initial_theme);
        Self {
            content,
            config,
            router,
            view,
            theme,
            profile: Profile::default(),
            profile_dirty: false,
            memory: MemoryStore::default(),
            audio: Box::new(NullAudio),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioBackend>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Writes the profile if it changed.
    pub fn persist_profile<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        if self.profile_dirty {
            self.profile.store(store);
            self.profile_dirty = false;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::app;
    use super::*;
    use crate::model::ScreenId;
    use crate::storage::{AVATAR_KEY, NAME_KEY};

    #[test]
    fn starts_on_splash() {
        let app = app();
        assert_eq!(app.router.current(), ScreenId::Splash);
        assert_eq!(app.view.screen(), ScreenId::Splash);
        assert!(app.theme.mode().is_dark());
    }

    #[test]
    fn profile_is_written_only_when_dirty() {
        let mut app = app();
        let mut store = MemoryStore::default();
        app.persist_profile(&mut store);
        assert_eq!(store.get(NAME_KEY), None);

        app.profile = Profile::new("Ama", Some(0)).unwrap();
        app.profile_dirty = true;
        app.persist_profile(&mut store);
        assert_eq!(store.get(NAME_KEY).as_deref(), Some("Ama"));
        assert_eq!(store.get(AVATAR_KEY).as_deref(), Some("0"));
        assert!(!app.profile_dirty);
    }
}
