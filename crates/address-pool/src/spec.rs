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
use serde::{Deserialize, Serialize};

/// The stored form of a network, as kept by the cluster configuration.
///
/// Everything here is a raw string: parsing and validation happen when a
/// [`crate::NetworkModel`] or [`crate::AddressPool`] is built from it. The two
/// reservation fields hold one `'0'`/`'1'` character per address of the IPv4
/// network, lowest address first. Empty strings are treated as absent.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NetworkSpec {
    pub network: Option<String>,
    pub gateway: Option<String>,
    pub network6: Option<String>,
    pub gateway6: Option<String>,
    /// Addresses used by instance NICs.
    pub reservations: Option<String>,
    /// Addresses excluded from allocation: network, broadcast, gateway, and
    /// anything an administrator blocked by hand.
    pub ext_reservations: Option<String>,
}

impl NetworkSpec {
    /// A spec for an IPv4 network with an optional gateway.
    pub fn ipv4(network: &str, gateway: Option<&str>) -> Self {
        Self {
            network: Some(network.to_string()),
            gateway: gateway.map(str::to_string),
            ..Default::default()
        }
    }

    /// Adds an IPv6 network and optional gateway.
    pub fn with_ipv6(self, network6: &str, gateway6: Option<&str>) -> Self {
        Self {
            network6: Some(network6.to_string()),
            gateway6: gateway6.map(str::to_string),
            ..self
        }
    }

    pub fn network(&self) -> Option<&str> {
        non_empty(&self.network)
    }

    pub fn gateway(&self) -> Option<&str> {
        non_empty(&self.gateway)
    }

    pub fn network6(&self) -> Option<&str> {
        non_empty(&self.network6)
    }

    pub fn gateway6(&self) -> Option<&str> {
        non_empty(&self.gateway6)
    }

    /// Both serialized layers, but only if both are present. A spec carrying
    /// just one of them is treated as having no saved state.
    pub fn saved_reservations(&self) -> Option<(&str, &str)> {
        non_empty(&self.reservations).zip(non_empty(&self.ext_reservations))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
