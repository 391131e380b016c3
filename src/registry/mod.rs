//! DEX source registry
//!
//! Caller-owned configuration object describing which DEX sources feed the
//! scanner. Constructed explicitly and passed down; there is no process-wide
//! registry. The endpoint metadata itself comes from an external feed; the
//! built-in catalog exists for the demo binary and tests.

use std::collections::HashMap;

use serde::Serialize;

use crate::errors::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Polygon,
    Ethereum,
    Arbitrum,
    Base,
    Bsc,
}

#[derive(Debug, Clone, Serialize)]
pub struct DexSource {
    pub name: String,
    pub identifier: String,
    pub chain: Chain,
    pub enabled: bool,
    /// Higher priority sources are scanned first.
    pub priority: u8,
    pub router_address: Option<String>,
    pub supports_flashloan: bool,
}

impl DexSource {
    pub fn new(name: &str, identifier: &str, chain: Chain, priority: u8) -> Self {
        DexSource {
            name: name.to_string(),
            identifier: identifier.to_string(),
            chain,
            enabled: true,
            priority,
            router_address: None,
            supports_flashloan: false,
        }
    }

    pub fn with_router(mut self, router_address: &str) -> Self {
        self.router_address = Some(router_address.to_string());
        self
    }

    pub fn with_flashloan_support(mut self) -> Self {
        self.supports_flashloan = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DexRegistry {
    sources: HashMap<String, DexSource>,
}

impl DexRegistry {
    pub fn new(sources: impl IntoIterator<Item = DexSource>) -> Self {
        DexRegistry {
            sources: sources
                .into_iter()
                .map(|source| (source.identifier.clone(), source))
                .collect(),
        }
    }

    /// Small built-in catalog for the demo binary and tests.
    pub fn with_default_catalog() -> Self {
        Self::new([
            DexSource::new("Uniswap V3", "uniswap_v3", Chain::Polygon, 10)
                .with_router("0xE592427A0AEce92De3Edee1F18E0157C05861564"),
            DexSource::new("QuickSwap", "quickswap", Chain::Polygon, 9)
                .with_router("0xa5E0829CaCEd8fFDD4De3c43696c57F7D7A678ff"),
            DexSource::new("SushiSwap", "sushiswap", Chain::Polygon, 9)
                .with_router("0x1b02dA8Cb0d097eB8D57A175b88c7D8b47997506"),
            DexSource::new("Balancer V2", "balancer_v2", Chain::Polygon, 10)
                .with_router("0xBA12222222228d8Ba445958a75a0704d566BF2C8")
                .with_flashloan_support(),
            DexSource::new("DODO", "dodo", Chain::Polygon, 8).with_flashloan_support(),
            DexSource::new("Aerodrome", "aerodrome", Chain::Base, 8),
        ])
    }

    pub fn get(&self, identifier: &str) -> Option<&DexSource> {
        self.sources.get(identifier)
    }

    pub fn is_enabled(&self, identifier: &str) -> bool {
        self.sources.get(identifier).is_some_and(|s| s.enabled)
    }

    pub fn enable(&mut self, identifier: &str) -> EngineResult<()> {
        self.set_enabled(identifier, true)
    }

    pub fn disable(&mut self, identifier: &str) -> EngineResult<()> {
        self.set_enabled(identifier, false)
    }

    fn set_enabled(&mut self, identifier: &str, enabled: bool) -> EngineResult<()> {
        match self.sources.get_mut(identifier) {
            Some(source) => {
                source.enabled = enabled;
                Ok(())
            }
            None => Err(EngineError::UnknownDexSource { identifier: identifier.to_string() }),
        }
    }

    /// Enabled sources, highest priority first; identifier breaks ties so
    /// the order is deterministic.
    pub fn active_sources(&self) -> Vec<&DexSource> {
        let mut active: Vec<&DexSource> =
            self.sources.values().filter(|s| s.enabled).collect();
        active.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        active
    }

    pub fn active_count(&self) -> usize {
        self.sources.values().filter(|s| s.enabled).count()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
