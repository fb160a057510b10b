use crate::commands;
use crate::netsh::{CommandError, Netsh, Runner};
use crate::network;
use crate::store::{ProfileStore, StoreError};
use crate::types::DnsProfile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Profile name and preferred DNS are required")]
    InvalidProfile,
    #[error("No profile at index {0}")]
    NoSuchProfile(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

pub type Result<T> = std::result::Result<T, ManagerError>;

/// Orchestrates the profile list and the per-interface DNS state.
///
/// Owns the store and the in-memory list exclusively; every accepted
/// mutation is persisted immediately, and a failed save rolls the list back
/// so memory and file never diverge. Profiles are addressed by position, and
/// indices are only valid until the next structural mutation.
///
/// Holds no locks and runs one external command at a time; the async
/// operations block on that command and are meant to be driven from a
/// background worker, not a UI thread.
pub struct DnsManager<R = Netsh> {
    store: ProfileStore,
    profiles: Vec<DnsProfile>,
    runner: R,
}

impl DnsManager<Netsh> {
    /// Manager over the default store location and the real netsh runner.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(ProfileStore::at_default_location()?, Netsh::new()))
    }
}

impl<R: Runner> DnsManager<R> {
    pub fn new(store: ProfileStore, runner: R) -> Self {
        let profiles = store.load();
        Self {
            store,
            profiles,
            runner,
        }
    }

    pub fn profiles(&self) -> &[DnsProfile] {
        &self.profiles
    }

    /// Appends a profile and persists the list. Rejected profiles leave the
    /// store file untouched.
    pub fn create_profile(&mut self, profile: DnsProfile) -> Result<()> {
        if !profile.is_valid() {
            return Err(ManagerError::InvalidProfile);
        }
        self.profiles.push(profile);
        if let Err(e) = self.store.save(&self.profiles) {
            self.profiles.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Replaces the profile at `index` and persists the list.
    pub fn update_profile(&mut self, index: usize, profile: DnsProfile) -> Result<()> {
        if index >= self.profiles.len() {
            return Err(ManagerError::NoSuchProfile(index));
        }
        if !profile.is_valid() {
            return Err(ManagerError::InvalidProfile);
        }
        let previous = std::mem::replace(&mut self.profiles[index], profile);
        if let Err(e) = self.store.save(&self.profiles) {
            self.profiles[index] = previous;
            return Err(e.into());
        }
        Ok(())
    }

    /// Removes the profile at `index` and persists the list. Later profiles
    /// shift down by one.
    pub fn delete_profile(&mut self, index: usize) -> Result<()> {
        if index >= self.profiles.len() {
            return Err(ManagerError::NoSuchProfile(index));
        }
        let removed = self.profiles.remove(index);
        if let Err(e) = self.store.save(&self.profiles) {
            self.profiles.insert(index, removed);
            return Err(e.into());
        }
        Ok(())
    }

    /// Interface names in OS order; empty on any enumeration failure.
    pub async fn list_interfaces(&self) -> Vec<String> {
        network::list_interfaces(&self.runner).await
    }

    /// Raw DNS configuration text for an interface, or the error's text when
    /// the query fails. Opaque diagnostic output, not parsed addresses; the
    /// manager cannot recognize which profile (if any) produced it.
    pub async fn current_dns(&self, interface: &str) -> String {
        commands::get_current_dns(&self.runner, interface).await
    }

    /// Applies the profile at `index` to an interface as static DNS.
    pub async fn apply(&self, index: usize, interface: &str) -> Result<()> {
        let profile = self
            .profiles
            .get(index)
            .ok_or(ManagerError::NoSuchProfile(index))?;
        commands::set_dns(&self.runner, profile, interface).await?;
        Ok(())
    }

    /// Reverts an interface to automatic DNS.
    pub async fn clear(&self, interface: &str) -> Result<()> {
        commands::clear_dns(&self.runner, interface).await?;
        Ok(())
    }
}
