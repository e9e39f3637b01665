use std::{
    env,
    fmt::{self, Display, Formatter},
};

use thiserror::Error;

use crate::{ParseVariantError, Variant};

pub const VARIANTS_VAR: &str = "STONE_PAIRS_VARIANTS";
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid STONE_PAIRS_VARIANTS: {0}")]
    Variant(#[from] ParseVariantError),
    #[error("STONE_PAIRS_VARIANTS is set but names no variants")]
    NoVariants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    variants: Vec<Variant>,
    log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let variants = env::var(VARIANTS_VAR).ok();
        let log_filter = env::var(LOG_VAR).ok();

        Self::parse(variants.as_deref(), log_filter)
    }

    pub fn parse(variants: Option<&str>, log_filter: Option<String>) -> Result<Self, ConfigError> {
        let variants = match variants {
            Some(raw) => parse_variants(raw)?,
            None => Variant::ALL.to_vec(),
        };

        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { variants, log_filter })
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_variants(raw: &str) -> Result<Vec<Variant>, ConfigError> {
    let mut variants = Vec::with_capacity(Variant::ALL.len());

    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let variant = name.parse::<Variant>()?;
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    if variants.is_empty() {
        return Err(ConfigError::NoVariants);
    }

    Ok(variants)
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("variants=")?;
        for (i, variant) in self.variants.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{variant}")?;
        }
        write!(f, " log_filter={}", self.log_filter)
    }
}
