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
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipam_network::ip::network::{
    is_link_local_v6, parse_ipv4_address, parse_ipv4_network, parse_ipv6_address,
    parse_ipv6_network,
};
use ipam_network::ip::{Ipv4Net, Ipv6Net};

use crate::error::{PoolError, PoolResult};
use crate::spec::NetworkSpec;

/// The typed view of a [`NetworkSpec`]: parsed v4 and v6 networks and
/// gateways, with the gateway-containment rules enforced.
///
/// On its own this carries no reservation state. Networks that have an IPv4
/// subnet get an [`crate::AddressPool`] built on top of one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkModel {
    spec: NetworkSpec,
    network: Option<Ipv4Net>,
    gateway: Option<Ipv4Addr>,
    network6: Option<Ipv6Net>,
    gateway6: Option<Ipv6Addr>,
}

impl NetworkModel {
    pub fn new(spec: NetworkSpec) -> PoolResult<Self> {
        if let (Some(gateway), None) = (spec.gateway(), spec.network()) {
            return Err(PoolError::GatewayWithoutNetwork {
                gateway: gateway.to_string(),
            });
        }
        let network = spec.network().map(parse_ipv4_network).transpose()?;
        let gateway = spec.gateway().map(parse_ipv4_address).transpose()?;

        if let (Some(gateway6), None) = (spec.gateway6(), spec.network6()) {
            return Err(PoolError::Gateway6WithoutNetwork6 {
                gateway: gateway6.to_string(),
            });
        }
        let network6 = spec.network6().map(parse_ipv6_network).transpose()?;
        let gateway6 = spec.gateway6().map(parse_ipv6_address).transpose()?;

        let model = Self {
            spec,
            network,
            gateway,
            network6,
            gateway6,
        };
        model.validate()?;
        Ok(model)
    }

    /// Re-check the gateway rules: a v4 gateway must be inside the v4
    /// network, a v6 gateway inside the v6 network unless it is link-local.
    pub fn validate(&self) -> PoolResult<()> {
        match (self.gateway, self.network) {
            (Some(gateway), Some(network)) if !network.contains(&gateway) => {
                return Err(PoolError::GatewayNotInNetwork {
                    gateway: gateway.into(),
                    network: network.to_string(),
                });
            }
            (Some(gateway), None) => {
                return Err(PoolError::GatewayWithoutNetwork {
                    gateway: gateway.to_string(),
                });
            }
            _ => {}
        }

        match (self.gateway6, self.network6) {
            (Some(gateway6), Some(network6))
                if !network6.contains(&gateway6) && !is_link_local_v6(&gateway6) =>
            {
                Err(PoolError::GatewayNotInNetwork {
                    gateway: gateway6.into(),
                    network: network6.to_string(),
                })
            }
            (Some(gateway6), None) => Err(PoolError::Gateway6WithoutNetwork6 {
                gateway: gateway6.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Whether `address` is inside the network of its own IP version. False
    /// if no network of that version is configured.
    pub fn contains(&self, address: IpAddr) -> bool {
        match address {
            IpAddr::V4(addr) => self.network.is_some_and(|net| net.contains(&addr)),
            IpAddr::V6(addr) => self.network6.is_some_and(|net| net.contains(&addr)),
        }
    }

    pub fn network(&self) -> Option<Ipv4Net> {
        self.network
    }

    pub fn gateway(&self) -> Option<Ipv4Addr> {
        self.gateway
    }

    pub fn network6(&self) -> Option<Ipv6Net> {
        self.network6
    }

    pub fn gateway6(&self) -> Option<Ipv6Addr> {
        self.gateway6
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub(crate) fn spec_mut(&mut self) -> &mut NetworkSpec {
        &mut self.spec
    }

    pub fn into_spec(self) -> NetworkSpec {
        self.spec
    }
}
