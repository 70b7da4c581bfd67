use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::api::error;

/// Key under which the signed-in user is persisted.
pub const SESSION_KEY: &str = "currentUser";

pub const CONVERSATION_ID_SEPARATOR: &str = "-";

pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1516116216624-53e697fedbea?q=80&w=2728&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    File,
    Redis,
    Memory,
}

impl FromStr for SessionBackend {
    type Err = error::SystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(SessionBackend::File),
            "redis" => Ok(SessionBackend::Redis),
            "memory" => Ok(SessionBackend::Memory),
            other => Err(error::SystemError::config(format!(
                "SESSION_BACKEND must be one of file, redis, memory (got '{other}')"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Env {
    pub session_backend: SessionBackend,
    pub session_dir: PathBuf,
    pub redis_url: String,
    pub simulated_latency: Duration,
}

impl Env {
    /// Reads `.env` (if any) and the process environment.
    pub fn load() -> Result<Self, error::SystemError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, error::SystemError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Env::default();

        let session_backend = match lookup("SESSION_BACKEND") {
            Some(value) => value.parse::<SessionBackend>()?,
            None => defaults.session_backend,
        };

        let session_dir = lookup("SESSION_DIR").map(PathBuf::from).unwrap_or(defaults.session_dir);
        let redis_url = lookup("REDIS_URL").unwrap_or(defaults.redis_url);

        let simulated_latency = match lookup("SIMULATED_LATENCY_MS") {
            Some(value) => value.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                error::SystemError::config("SIMULATED_LATENCY_MS must be a valid u64 integer")
            })?,
            None => defaults.simulated_latency,
        };

        Ok(Env { session_backend, session_dir, redis_url, simulated_latency })
    }
}

impl Default for Env {
    fn default() -> Self {
        Env {
            session_backend: SessionBackend::File,
            session_dir: PathBuf::from(".campus-portal"),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let env = Env::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(env.session_backend, SessionBackend::File);
        assert_eq!(env.session_dir, PathBuf::from(".campus-portal"));
        assert_eq!(env.simulated_latency, Duration::from_millis(1000));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let env = Env::from_lookup(lookup_from(&[
            ("SESSION_BACKEND", "Redis"),
            ("REDIS_URL", "redis://cache:6379"),
            ("SIMULATED_LATENCY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(env.session_backend, SessionBackend::Redis);
        assert_eq!(env.redis_url, "redis://cache:6379");
        assert!(env.simulated_latency.is_zero());
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = Env::from_lookup(lookup_from(&[("SESSION_BACKEND", "sqlite")])).unwrap_err();
        assert!(matches!(err, error::SystemError::Config(_)));

        let err = Env::from_lookup(lookup_from(&[("SIMULATED_LATENCY_MS", "soon")])).unwrap_err();
        assert!(matches!(err, error::SystemError::Config(_)));
    }
}
