//! Social media platforms and account connections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Platforms a post can target.
///
/// Declaration order is the canonical iteration order; derived views use it
/// as the deterministic tie-break.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Platform {
    /// YouTube
    YouTube,
    /// Instagram
    Instagram,
    /// TikTok
    TikTok,
    /// Facebook
    Facebook,
    /// Pinterest
    Pinterest,
}

impl Platform {
    /// All platforms in declaration order.
    pub fn all() -> Vec<Platform> {
        Platform::iter().collect()
    }
}

/// Connection status of one platform account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Whether the account is connected
    pub connected: bool,
    /// Account username granted by the (simulated) OAuth flow
    pub username: Option<String>,
}

/// Per-platform connection state.
///
/// Defaults match a fresh session: YouTube, Instagram, and TikTok connected,
/// Facebook and Pinterest not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSet {
    accounts: BTreeMap<Platform, Connection>,
}

impl Default for ConnectionSet {
    fn default() -> Self {
        let mut accounts = BTreeMap::new();
        for platform in Platform::iter() {
            let connected = matches!(
                platform,
                Platform::YouTube | Platform::Instagram | Platform::TikTok
            );
            accounts.insert(
                platform,
                Connection {
                    connected,
                    username: None,
                },
            );
        }
        Self { accounts }
    }
}

impl ConnectionSet {
    /// Whether the platform is currently connected.
    pub fn is_connected(&self, platform: Platform) -> bool {
        self.accounts
            .get(&platform)
            .map(|c| c.connected)
            .unwrap_or(false)
    }

    /// The connection record for a platform.
    pub fn get(&self, platform: Platform) -> Option<&Connection> {
        self.accounts.get(&platform)
    }

    /// Flip the connection state, clearing any username on disconnect.
    ///
    /// Returns the new connected state.
    pub fn toggle(&mut self, platform: Platform) -> bool {
        let entry = self.accounts.entry(platform).or_default();
        entry.connected = !entry.connected;
        if !entry.connected {
            entry.username = None;
        }
        entry.connected
    }

    /// Mark the platform connected with the username from an OAuth grant.
    pub fn grant(&mut self, platform: Platform, username: impl Into<String>) {
        let entry = self.accounts.entry(platform).or_default();
        entry.connected = true;
        entry.username = Some(username.into());
    }

    /// Number of connected platforms.
    pub fn connected_count(&self) -> usize {
        self.accounts.values().filter(|c| c.connected).count()
    }

    /// Connected platforms in declaration order.
    pub fn connected_platforms(&self) -> Vec<Platform> {
        self.accounts
            .iter()
            .filter(|(_, c)| c.connected)
            .map(|(p, _)| *p)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trip() {
        use std::str::FromStr;
        for platform in Platform::all() {
            let name = platform.to_string();
            assert_eq!(Platform::from_str(&name).unwrap(), platform);
        }
    }

    #[test]
    fn default_connections() {
        let set = ConnectionSet::default();
        assert_eq!(set.connected_count(), 3);
        assert!(set.is_connected(Platform::YouTube));
        assert!(!set.is_connected(Platform::Pinterest));
    }

    #[test]
    fn toggle_clears_username() {
        let mut set = ConnectionSet::default();
        set.grant(Platform::Facebook, "creator");
        assert!(set.is_connected(Platform::Facebook));
        assert!(!set.toggle(Platform::Facebook));
        assert_eq!(set.get(Platform::Facebook).unwrap().username, None);
    }
}
