use std::any::Any;
use std::env::vars;

use log::info;
use members_states::State;
use serde::Deserialize;

use crate::table::DEFAULT_PAGE_SIZE;

/// Endpoint serving the member list.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub members_url: String,
    pub page_size: usize,
}

/// Environment overrides; every field is optional.
#[derive(Debug, Deserialize)]
struct RawConfig {
    members_url: Option<String>,
    members_page_size: Option<usize>,
}

impl BusinessConfig {
    /// Config pointing at `members_url` with the default page size.
    pub fn new(members_url: impl Into<String>) -> Self {
        Self {
            members_url: members_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Read `MEMBERS_URL` and `MEMBERS_PAGE_SIZE`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            members_url,
            members_page_size,
        } = raw;

        let members_url = match members_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided MEMBERS_URL: {url}");
                url
            }
            _ => DEFAULT_MEMBERS_URL.to_owned(),
        };

        let page_size = match members_page_size {
            Some(0) => anyhow::bail!("MEMBERS_PAGE_SIZE must be at least 1"),
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            members_url,
            page_size,
        })
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
