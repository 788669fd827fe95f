//! Identity resolution.
//!
//! The widget never shows a login form. It asks a fixed list of strategies
//! in order and keeps the first user any of them produces; the last strategy
//! (guest synthesis) always succeeds.

use crate::error::StorageError;
use crate::{PlatformUser, User};

/// Persistence for the single cached profile
pub trait ProfileStore {
    fn load(&self) -> Option<User>;
    fn save(&self, user: &User) -> Result<(), StorageError>;
    fn clear(&self);
}

/// The embedding mini-app object (`Telegram.WebApp` or a compatible shim)
pub trait HostContext {
    fn ready(&self);
    fn expand(&self);
    /// Returns false when the host does not offer it
    fn enable_closing_confirmation(&self) -> bool;
    fn user(&self) -> Option<PlatformUser>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    Platform,
    AlternatePlatform,
    Simulated,
    Cached,
    Guest,
}

impl IdentitySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentitySource::Platform => "platform",
            IdentitySource::AlternatePlatform => "platform-alt",
            IdentitySource::Simulated => "simulated",
            IdentitySource::Cached => "cached",
            IdentitySource::Guest => "guest",
        }
    }
}

/// One step of the cascade
pub trait IdentityResolver {
    fn source(&self) -> IdentitySource;

    fn resolve(&self, store: &dyn ProfileStore) -> Option<User>;

    /// True when the strategy found its host object, even if it yielded no user
    fn host_detected(&self) -> bool {
        false
    }
}

/// Reads the user from a host mini-app context
pub struct HostContextResolver {
    host: Option<Box<dyn HostContext>>,
    source: IdentitySource,
    request_closing_confirmation: bool,
}

impl HostContextResolver {
    /// The standard `window.Telegram.WebApp` object
    pub fn primary(host: Option<Box<dyn HostContext>>) -> Self {
        Self {
            host,
            source: IdentitySource::Platform,
            request_closing_confirmation: true,
        }
    }

    /// The legacy `window.TelegramWebApp` object
    pub fn alternate(host: Option<Box<dyn HostContext>>) -> Self {
        Self {
            host,
            source: IdentitySource::AlternatePlatform,
            request_closing_confirmation: false,
        }
    }
}

impl IdentityResolver for HostContextResolver {
    fn source(&self) -> IdentitySource {
        self.source
    }

    fn resolve(&self, _store: &dyn ProfileStore) -> Option<User> {
        let host = self.host.as_ref()?;
        host.ready();
        host.expand();
        if self.request_closing_confirmation {
            host.enable_closing_confirmation();
        }
        host.user().map(User::from)
    }

    fn host_detected(&self) -> bool {
        self.host.is_some()
    }
}

/// Fixed test user, enabled by the `tgWebApp=1` query flag
pub struct SimulatedResolver {
    enabled: bool,
}

impl SimulatedResolver {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether a query string (with or without the leading `?`) asks for simulation
    pub fn flag_in_query(query: &str) -> bool {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == "tgWebApp" && value == "1")
    }
}

impl IdentityResolver for SimulatedResolver {
    fn source(&self) -> IdentitySource {
        IdentitySource::Simulated
    }

    fn resolve(&self, _store: &dyn ProfileStore) -> Option<User> {
        self.enabled.then(User::simulated)
    }
}

/// Profile cached by an earlier visit
pub struct CachedProfileResolver;

impl IdentityResolver for CachedProfileResolver {
    fn source(&self) -> IdentitySource {
        IdentitySource::Cached
    }

    fn resolve(&self, store: &dyn ProfileStore) -> Option<User> {
        store.load()
    }
}

/// Fresh guest identity with an id drawn from `next_id`
pub struct GuestResolver {
    next_id: Box<dyn Fn() -> i64>,
}

impl GuestResolver {
    pub fn new(next_id: impl Fn() -> i64 + 'static) -> Self {
        Self { next_id: Box::new(next_id) }
    }

    pub fn user(&self) -> User {
        User::guest((self.next_id)())
    }
}

impl IdentityResolver for GuestResolver {
    fn source(&self) -> IdentitySource {
        IdentitySource::Guest
    }

    fn resolve(&self, _store: &dyn ProfileStore) -> Option<User> {
        Some(self.user())
    }
}

/// Result of running the cascade
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityOutcome {
    pub user: User,
    pub source: IdentitySource,
    /// A host object was present but exposed no user payload
    pub host_detected_without_user: bool,
    /// Set when caching the profile failed; the user is still usable
    pub persist_error: Option<StorageError>,
}

/// Ordered strategies, terminated by guest synthesis
pub struct IdentityCascade {
    resolvers: Vec<Box<dyn IdentityResolver>>,
    guest: GuestResolver,
}

impl IdentityCascade {
    pub fn new(guest: GuestResolver) -> Self {
        Self { resolvers: Vec::new(), guest }
    }

    pub fn with(mut self, resolver: impl IdentityResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    pub fn resolve(&self, store: &dyn ProfileStore) -> IdentityOutcome {
        let mut host_detected_without_user = false;
        let mut resolved = None;

        for resolver in &self.resolvers {
            match resolver.resolve(store) {
                Some(user) => {
                    resolved = Some((user, resolver.source()));
                    break;
                }
                None if resolver.host_detected() => host_detected_without_user = true,
                None => {}
            }
        }

        let (user, source) = resolved.unwrap_or_else(|| (self.guest.user(), IdentitySource::Guest));
        let persist_error = store.save(&user).err();

        IdentityOutcome {
            user,
            source,
            host_detected_without_user,
            persist_error,
        }
    }
}

/// Forgets the cached profile; the next resolution starts from scratch
pub fn reset_identity(store: &dyn ProfileStore) {
    store.clear();
}
