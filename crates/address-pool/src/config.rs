/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Longest prefix (smallest network) a pool may be built over: a /30 has four
/// addresses, two of which are left once network and broadcast are excluded.
pub const IPV4_NETWORK_MIN_PREFIX_LEN: u8 = 30;
/// Shortest prefix (largest network) a pool may be built over. Reservations
/// are kept in dense bitmaps that are scanned linearly, so this bounds both
/// memory and the cost of a free-address search.
pub const IPV4_NETWORK_MAX_PREFIX_LEN: u8 = 16;

pub const IPV4_NETWORK_MIN_NUM_HOSTS: u64 = ipv4_num_hosts(IPV4_NETWORK_MIN_PREFIX_LEN);
pub const IPV4_NETWORK_MAX_NUM_HOSTS: u64 = ipv4_num_hosts(IPV4_NETWORK_MAX_PREFIX_LEN);

/// Number of addresses in an IPv4 network with the given prefix length.
pub const fn ipv4_num_hosts(prefix_len: u8) -> u64 {
    1u64 << (32 - prefix_len as u32)
}

/// Size limits applied when building an [`crate::AddressPool`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    /// Longest admissible prefix length (smallest network).
    #[serde(default = "Defaults::min_prefix_len")]
    pub min_prefix_len: u8,
    /// Shortest admissible prefix length (largest network).
    #[serde(default = "Defaults::max_prefix_len")]
    pub max_prefix_len: u8,
}

pub struct Defaults;

impl Defaults {
    pub fn min_prefix_len() -> u8 {
        IPV4_NETWORK_MIN_PREFIX_LEN
    }
    pub fn max_prefix_len() -> u8 {
        IPV4_NETWORK_MAX_PREFIX_LEN
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: Defaults::min_prefix_len(),
            max_prefix_len: Defaults::max_prefix_len(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
    #[error(
        "Invalid pool size bounds: need {lowest} <= max_prefix_len ({max_prefix_len}) <= min_prefix_len ({min_prefix_len}) <= {highest}",
        lowest = IPV4_NETWORK_MAX_PREFIX_LEN,
        highest = IPV4_NETWORK_MIN_PREFIX_LEN
    )]
    InvalidBounds {
        min_prefix_len: u8,
        max_prefix_len: u8,
    },
}

impl PoolConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        let config = toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// A config may only narrow the built-in range, never widen it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_prefix_len < IPV4_NETWORK_MAX_PREFIX_LEN
            || self.max_prefix_len > self.min_prefix_len
            || self.min_prefix_len > IPV4_NETWORK_MIN_PREFIX_LEN
        {
            return Err(ConfigError::InvalidBounds {
                min_prefix_len: self.min_prefix_len,
                max_prefix_len: self.max_prefix_len,
            });
        }
        Ok(())
    }

    /// Whether a network with this prefix length may back a pool.
    pub fn admits(&self, prefix_len: u8) -> bool {
        (self.max_prefix_len..=self.min_prefix_len).contains(&prefix_len)
    }
}
