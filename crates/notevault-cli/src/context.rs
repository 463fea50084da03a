use notevault_core::{Config, ConfigError, ConfigStore, ProcessGateway, Vault};
use tracing::debug;

/// Session state passed to every command handler
///
/// Holds the one piece of mutable state the session has, the current vault
/// path, next to the store that persists it and the gateway used to reach
/// external programs. Nothing is global, so tests can run several sessions
/// against different vaults side by side.
pub struct Context {
    store: ConfigStore,
    vault_path: String,
    gateway: Box<dyn ProcessGateway>,
}

impl Context {
    /// Session with no vault configured yet
    pub fn new(store: ConfigStore, gateway: Box<dyn ProcessGateway>) -> Self {
        Self {
            store,
            vault_path: String::new(),
            gateway,
        }
    }

    /// Pick up the vault path from the config file
    ///
    /// On error the current path is left untouched.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let config = self.store.load()?;
        self.vault_path = config.vault_path;
        debug!(vault = %self.vault_path, "session vault loaded");
        Ok(())
    }

    /// Current vault path, verbatim (may be empty)
    pub fn vault_path(&self) -> &str {
        &self.vault_path
    }

    pub fn vault(&self) -> Vault {
        Vault::new(&self.vault_path)
    }

    /// Switch to a new vault and persist the choice
    ///
    /// The in-memory path changes even when saving fails.
    pub fn set_vault_path(&mut self, path: &str) -> Result<(), ConfigError> {
        self.vault_path = path.to_string();
        self.store.save(&Config::with_vault_path(path))
    }

    pub fn gateway(&self) -> &dyn ProcessGateway {
        self.gateway.as_ref()
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}
