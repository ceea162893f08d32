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
use std::net::{IpAddr, Ipv4Addr};

use ipam_network::NetworkError;

use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};
use crate::model::NetworkModel;
use crate::pool::{AddressPool, ReservationKind};
use crate::spec::NetworkSpec;
use crate::stats::PoolStats;

/// What callers can do with a configured network.
///
/// Only networks with an IPv4 subnet track reservations. Check
/// `supports_reservation()` first, or handle [`PoolError::Unsupported`]
/// from the reservation methods: networks without a pool never silently
/// ignore them.
pub trait NetworkOps {
    fn supports_reservation(&self) -> bool;

    fn contains(&self, address: IpAddr) -> bool;

    fn is_reserved(&self, address: IpAddr, kind: ReservationKind) -> PoolResult<bool>;

    fn reserve(&mut self, address: IpAddr, kind: ReservationKind) -> PoolResult<()>;

    fn release(&mut self, address: IpAddr, kind: ReservationKind) -> PoolResult<()>;

    /// Find the lowest free address and reserve it for an instance.
    fn get_free_address(&mut self) -> PoolResult<Ipv4Addr>;

    /// Find the lowest free address without reserving it.
    fn generate_free(&self) -> PoolResult<Ipv4Addr>;

    fn is_full(&self) -> PoolResult<bool>;

    /// None for networks without a pool.
    fn stats(&self) -> Option<PoolStats> {
        None
    }

    fn spec(&self) -> &NetworkSpec;
}

fn unsupported<T>(operation: &'static str) -> PoolResult<T> {
    Err(PoolError::Unsupported { operation })
}

impl NetworkOps for NetworkModel {
    fn supports_reservation(&self) -> bool {
        false
    }

    fn contains(&self, address: IpAddr) -> bool {
        NetworkModel::contains(self, address)
    }

    fn is_reserved(&self, _address: IpAddr, _kind: ReservationKind) -> PoolResult<bool> {
        unsupported("check reservations")
    }

    fn reserve(&mut self, _address: IpAddr, _kind: ReservationKind) -> PoolResult<()> {
        unsupported("reserve addresses")
    }

    fn release(&mut self, _address: IpAddr, _kind: ReservationKind) -> PoolResult<()> {
        unsupported("release addresses")
    }

    fn get_free_address(&mut self) -> PoolResult<Ipv4Addr> {
        unsupported("allocate addresses")
    }

    fn generate_free(&self) -> PoolResult<Ipv4Addr> {
        unsupported("generate free addresses")
    }

    fn is_full(&self) -> PoolResult<bool> {
        unsupported("check pool occupancy")
    }

    fn spec(&self) -> &NetworkSpec {
        NetworkModel::spec(self)
    }
}

impl NetworkOps for AddressPool {
    fn supports_reservation(&self) -> bool {
        true
    }

    fn contains(&self, address: IpAddr) -> bool {
        AddressPool::contains(self, address)
    }

    fn is_reserved(&self, address: IpAddr, kind: ReservationKind) -> PoolResult<bool> {
        AddressPool::is_reserved(self, address, kind)
    }

    fn reserve(&mut self, address: IpAddr, kind: ReservationKind) -> PoolResult<()> {
        AddressPool::reserve(self, address, kind)
    }

    fn release(&mut self, address: IpAddr, kind: ReservationKind) -> PoolResult<()> {
        AddressPool::release(self, address, kind)
    }

    fn get_free_address(&mut self) -> PoolResult<Ipv4Addr> {
        AddressPool::get_free_address(self)
    }

    fn generate_free(&self) -> PoolResult<Ipv4Addr> {
        AddressPool::generate_free(self)
    }

    fn is_full(&self) -> PoolResult<bool> {
        Ok(AddressPool::is_full(self))
    }

    fn stats(&self) -> Option<PoolStats> {
        Some(AddressPool::stats(self))
    }

    fn spec(&self) -> &NetworkSpec {
        AddressPool::spec(self)
    }
}

/// A network built from a [`NetworkSpec`]: a full address pool when the spec
/// defines an IPv4 subnet, otherwise a model that only validates and answers
/// containment queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    Pooled(AddressPool),
    Limited(NetworkModel),
}

impl Network {
    pub fn from_spec(spec: NetworkSpec) -> PoolResult<Self> {
        Self::from_spec_with_config(spec, &PoolConfig::default())
    }

    pub fn from_spec_with_config(spec: NetworkSpec, config: &PoolConfig) -> PoolResult<Self> {
        let model = NetworkModel::new(spec)?;
        match model.network() {
            Some(_) => AddressPool::from_model(model, config).map(Network::Pooled),
            None => Ok(Network::Limited(model)),
        }
    }

    /// Validate an (address, network) pair before building anything from it.
    pub fn check(address: Option<&str>, network: Option<&str>) -> Result<(), NetworkError> {
        ipam_network::check(address, network)
    }

    pub fn as_pool(&self) -> Option<&AddressPool> {
        match self {
            Network::Pooled(pool) => Some(pool),
            Network::Limited(_) => None,
        }
    }

    pub fn as_pool_mut(&mut self) -> Option<&mut AddressPool> {
        match self {
            Network::Pooled(pool) => Some(pool),
            Network::Limited(_) => None,
        }
    }

    pub fn model(&self) -> &NetworkModel {
        match self {
            Network::Pooled(pool) => pool.model(),
            Network::Limited(model) => model,
        }
    }

    pub fn into_spec(self) -> NetworkSpec {
        match self {
            Network::Pooled(pool) => pool.into_spec(),
            Network::Limited(model) => model.into_spec(),
        }
    }

    fn ops(&self) -> &dyn NetworkOps {
        match self {
            Network::Pooled(pool) => pool,
            Network::Limited(model) => model,
        }
    }

    fn ops_mut(&mut self) -> &mut dyn NetworkOps {
        match self {
            Network::Pooled(pool) => pool,
            Network::Limited(model) => model,
        }
    }
}

impl NetworkOps for Network {
    fn supports_reservation(&self) -> bool {
        self.ops().supports_reservation()
    }

    fn contains(&self, address: IpAddr) -> bool {
        self.ops().contains(address)
    }

    fn is_reserved(&self, address: IpAddr, kind: ReservationKind) -> PoolResult<bool> {
        self.ops().is_reserved(address, kind)
    }

    fn reserve(&mut self, address: IpAddr, kind: ReservationKind) -> PoolResult<()> {
        self.ops_mut().reserve(address, kind)
    }

    fn release(&mut self, address: IpAddr, kind: ReservationKind) -> PoolResult<()> {
        self.ops_mut().release(address, kind)
    }

    fn get_free_address(&mut self) -> PoolResult<Ipv4Addr> {
        self.ops_mut().get_free_address()
    }

    fn generate_free(&self) -> PoolResult<Ipv4Addr> {
        self.ops().generate_free()
    }

    fn is_full(&self) -> PoolResult<bool> {
        self.ops().is_full()
    }

    fn stats(&self) -> Option<PoolStats> {
        self.ops().stats()
    }

    fn spec(&self) -> &NetworkSpec {
        self.ops().spec()
    }
}
