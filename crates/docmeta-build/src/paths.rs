use crate::config::ConfigError;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Env var overriding the runtime crate path used in emitted code.
pub const CORE_CRATE_ENV: &str = "DOCMETA_CORE_CRATE";

const INTERNAL_CRATES: &[&str] = &["docmeta", "docmeta-build", "docmeta-core", "docmeta-schema"];

fn parse_path(value: &str) -> Option<TokenStream> {
    syn::parse_str::<Path>(value.trim()).ok().map(|path| quote!(#path))
}

///
/// CratePaths
///
/// Resolves the runtime crate root named by emitted mirrors. Internal
/// docmeta crates link `docmeta_core` directly; everyone else goes through
/// the `docmeta::core` facade. `DOCMETA_CORE_CRATE` overrides both.
///

#[derive(Clone, Debug)]
pub struct CratePaths {
    pub core: TokenStream,
}

impl CratePaths {
    #[must_use]
    pub fn new() -> Self {
        let pkg = std::env::var("CARGO_PKG_NAME").unwrap_or_default();
        Self::for_package(&pkg)
    }

    /// Resolve for the named consuming package, honoring the env override.
    #[must_use]
    pub fn for_package(pkg: &str) -> Self {
        let core = if INTERNAL_CRATES.contains(&pkg) {
            quote!(::docmeta_core)
        } else {
            quote!(::docmeta::core)
        };

        Self {
            core: std::env::var(CORE_CRATE_ENV)
                .ok()
                .and_then(|value| parse_path(&value))
                .unwrap_or(core),
        }
    }

    /// Apply an explicit `core_crate` config value, which beats the env.
    pub fn with_core(mut self, core: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(core) = core {
            self.core = parse_path(core).ok_or_else(|| ConfigError::Invalid {
                key: "core_crate",
                message: format!("'{core}' is not a path"),
            })?;
        }

        Ok(self)
    }
}

impl Default for CratePaths {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, sync::Mutex};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TempEnv {
        key: &'static str,
        prev: Option<String>,
    }

    impl TempEnv {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let prev = env::var(key).ok();
            unsafe {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
            Self { key, prev }
        }
    }

    impl Drop for TempEnv {
        fn drop(&mut self) {
            unsafe {
                match &self.prev {
                    Some(value) => env::set_var(self.key, value),
                    None => env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    fn internal_crates_link_core_directly() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _core = TempEnv::set(CORE_CRATE_ENV, None);

        assert_eq!(
            CratePaths::for_package("docmeta-core").core.to_string(),
            quote!(::docmeta_core).to_string()
        );
        assert_eq!(
            CratePaths::for_package("my-app").core.to_string(),
            quote!(::docmeta::core).to_string()
        );
    }

    #[test]
    fn env_then_config_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _core = TempEnv::set(CORE_CRATE_ENV, Some("custom::core"));

        let paths = CratePaths::for_package("my-app");
        assert_eq!(paths.core.to_string(), quote!(custom::core).to_string());

        let paths = paths.with_core(Some("::other::rt")).expect("valid path");
        assert_eq!(paths.core.to_string(), quote!(::other::rt).to_string());

        assert!(CratePaths::for_package("my-app").with_core(Some("not a path")).is_err());
    }
}
