use crate::{alphabet::Alphabet, alphabets, error::Error};
use std::{env, error, net::IpAddr};

#[derive(Debug, Clone)]
pub struct Configuration {
    host: IpAddr,
    port: u16,
    threads: usize,
    alphabet: Alphabet,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {} ({})", key, value, error))),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let host = var_map(&lookup, "HOST", |host| host.parse(), Some(IpAddr::from([127, 0, 0, 1])))?;
        let port = var_map(&lookup, "PORT", |port| port.parse(), Some(8000))?;
        let threads = var_map(&lookup, "THREADS", |threads| threads.parse(), Some(4))?;
        if threads == 0 {
            return Err(Error::new("Invalid THREADS 0"));
        }
        let alphabet = var(&lookup, "ALPHABET", Some("base58".to_string()))?;
        let alphabet = alphabets::resolve(&alphabet).map_err(|error| Error::new(format!("Invalid ALPHABET {} ({})", alphabet, error)))?;
        Ok(Self {
            host,
            port,
            threads,
            alphabet,
        })
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
