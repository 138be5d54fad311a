//! # Configuração do Servidor
//!
//! Lida de variáveis de ambiente, com padrões que permitem `cargo run` sem
//! nenhuma configuração:
//!
//! | Variável | Padrão | Uso |
//! |----------|--------|-----|
//! | `AI_PAGE_ADDR` | `0.0.0.0:3000` | Endereço de bind do TCP listener |
//! | `AI_PAGE_ASSETS` | `assets` | Diretório servido em `/assets` |
//! | `RUST_LOG` | `info` | Filtro do tracing (lido em `main`) |

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

pub const ADDR_VAR: &str = "AI_PAGE_ADDR";
pub const ASSETS_VAR: &str = "AI_PAGE_ASSETS";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ASSETS: &str = "assets";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid socket address in {var}: {value:?}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuração resolvida do processo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Lê a configuração de uma função de busca qualquer.
    ///
    /// Valores vazios contam como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let raw_addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw_addr.clone(),
                source,
            })?;

        let assets_dir = get(ASSETS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS));

        Ok(Self { addr, assets_dir })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    /// Sem variáveis, usa porta 3000 e `assets/`
    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "127.0.0.1:8080"),
            (ASSETS_VAR, "/srv/page/assets"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/page/assets"));
    }

    /// Valor vazio é tratado como ausente
    #[test]
    fn test_blank_value_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "  ")])).unwrap();
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn test_invalid_addr_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        let ConfigError::InvalidAddr { var, value, .. } = err;
        assert_eq!(var, ADDR_VAR);
        assert_eq!(value, "localhost");
    }
}
