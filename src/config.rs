
use crate::{Error, Result};
use std::{env, str::FromStr, sync::OnceLock};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
#[derive(Debug)]
pub struct Config {
    pub PORT: u16,
    pub DATA_FILE: String,
    pub WEB_FOLDER: String,
}

impl Config {
    fn load_from_env() -> Result<Config> {
        Ok(Config {
            PORT: get_env_parse_or("SERVICE_PORT", 3000)?,
            DATA_FILE: get_env_or("SERVICE_DATA_FILE", "records.json")?,
            WEB_FOLDER: get_env_or("SERVICE_WEB_FOLDER", "public")?,
        })
    }
}

fn get_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::ConfigMissingEnv(name))
}

fn get_env_or(name: &'static str, default: &str) -> Result<String> {
    match get_env(name) {
        Err(Error::ConfigMissingEnv(_)) => Ok(default.to_string()),
        other => other,
    }
}

fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T> {
    match get_env(name) {
        Ok(val) => val.parse::<T>().map_err(|_| Error::ConfigWrongFormat(name)),
        Err(Error::ConfigMissingEnv(_)) => Ok(default),
        Err(e) => Err(e),
    }
}
