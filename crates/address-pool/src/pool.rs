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
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipam_network::ip::{Ipv4HostIndex, Ipv4Net, Ipv6Net};

use crate::bitmap::ReservationBitmap;
use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};
use crate::model::NetworkModel;
use crate::spec::NetworkSpec;
use crate::stats::PoolStats;

/// Which of the two reservation layers an operation applies to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReservationKind {
    /// Addresses handed out to instance NICs.
    Internal,
    /// Addresses kept out of allocation for administrative reasons.
    External,
}

impl ReservationKind {
    pub fn other(&self) -> Self {
        match self {
            ReservationKind::Internal => ReservationKind::External,
            ReservationKind::External => ReservationKind::Internal,
        }
    }
}

/// `true` selects the external layer, matching the `external` flag used by
/// callers that store it as a boolean.
impl From<bool> for ReservationKind {
    fn from(external: bool) -> Self {
        match external {
            true => ReservationKind::External,
            false => ReservationKind::Internal,
        }
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationKind::Internal => write!(f, "internal"),
            ReservationKind::External => write!(f, "external"),
        }
    }
}

/// Tracks which addresses of an IPv4 network are in use.
///
/// Two bitmaps, one bit per address, are kept over the network: `internal`
/// for addresses given to instances and `external` for addresses excluded
/// by an administrator (network, broadcast and gateway addresses included).
/// An address is never set in both. Free-address search looks at the OR of
/// the two, which is computed on demand and never stored.
///
/// The pool owns the [`NetworkSpec`] it was built from and writes both
/// bitmaps back into it after every successful change, so `spec()` is always
/// ready to be persisted. There is no internal locking; callers serialize
/// access to a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPool {
    model: NetworkModel,
    network: Ipv4Net,
    reservations: ReservationBitmap,
    ext_reservations: ReservationBitmap,
}

impl AddressPool {
    /// Build a pool with the default size limits.
    pub fn new(spec: NetworkSpec) -> PoolResult<Self> {
        Self::with_config(spec, &PoolConfig::default())
    }

    pub fn with_config(spec: NetworkSpec, config: &PoolConfig) -> PoolResult<Self> {
        Self::from_model(NetworkModel::new(spec)?, config)
    }

    /// Build a pool over an already-validated model. Loads the reservations
    /// saved in the model's spec if it carries both layers, otherwise starts
    /// from scratch with network, broadcast and gateway externally reserved.
    pub fn from_model(model: NetworkModel, config: &PoolConfig) -> PoolResult<Self> {
        let Some(network) = model.network() else {
            return Err(PoolError::Unsupported {
                operation: "build an address pool",
            });
        };

        let size_error = || PoolError::SizePolicy {
            network,
            min_prefix_len: config.min_prefix_len,
            max_prefix_len: config.max_prefix_len,
        };
        if let Err(error) = config.validate() {
            tracing::warn!(%network, %error, "Rejecting pool size limits");
            return Err(size_error());
        }
        if !config.admits(network.prefix_len()) {
            return Err(size_error());
        }
        let host_count = usize::try_from(network.host_count()).map_err(|_| size_error())?;

        let saved = model
            .spec()
            .saved_reservations()
            .map(|(internal, external)| (internal.to_string(), external.to_string()));

        match saved {
            Some((internal, external)) => {
                let pool = Self {
                    reservations: load_layer(
                        network,
                        ReservationKind::Internal,
                        &internal,
                        host_count,
                    )?,
                    ext_reservations: load_layer(
                        network,
                        ReservationKind::External,
                        &external,
                        host_count,
                    )?,
                    model,
                    network,
                };
                if let Err(error) = pool.validate() {
                    tracing::warn!(%network, %error, "Rejecting saved reservations");
                    return Err(error);
                }
                tracing::debug!(
                    %network,
                    reserved = pool.reserved_count(),
                    "Loaded saved reservations"
                );
                Ok(pool)
            }
            None => {
                let mut pool = Self {
                    reservations: ReservationBitmap::new(host_count),
                    ext_reservations: ReservationBitmap::new(host_count),
                    model,
                    network,
                };
                pool.initialize_reservations();
                tracing::info!(
                    %network,
                    gateway = ?pool.gateway(),
                    free = pool.free_count(),
                    "Initialized address pool"
                );
                Ok(pool)
            }
        }
    }

    /// Exclude the addresses that can never go to an instance. The gateway
    /// may coincide with the network or broadcast address, so already set
    /// bits are left as they are.
    fn initialize_reservations(&mut self) {
        let last = self.ext_reservations.len() - 1;
        self.ext_reservations.set(0, true);
        self.ext_reservations.set(last, true);

        if let Some(idx) = self
            .model
            .gateway()
            .and_then(|gateway| self.network.host_offset(gateway))
        {
            self.ext_reservations.set(idx, true);
        }

        self.sync_spec();
    }

    /// Check the class invariants: gateway rules, both layers the size of
    /// the network, and no address reserved in both layers.
    pub fn validate(&self) -> PoolResult<()> {
        self.model.validate()?;

        let host_count = self.network.host_count();
        for (kind, layer) in [
            (ReservationKind::Internal, &self.reservations),
            (ReservationKind::External, &self.ext_reservations),
        ] {
            if layer.len() as u64 != host_count {
                return Err(PoolError::CorruptReservations {
                    network: self.network,
                    kind,
                    reason: format!("expected {host_count} entries, found {}", layer.len()),
                });
            }
        }

        if let Some(idx) = self.reservations.first_overlap(&self.ext_reservations) {
            return Err(PoolError::OverlappingReservations {
                network: self.network,
                offset: idx,
            });
        }
        Ok(())
    }

    //
    // Reservations
    //

    pub fn is_reserved<A: Into<IpAddr>>(
        &self,
        address: A,
        kind: ReservationKind,
    ) -> PoolResult<bool> {
        let (_, idx) = self.locate(address.into())?;
        Ok(self.layer(kind).get(idx).unwrap_or(false))
    }

    /// Mark `address` as reserved in the `kind` layer.
    ///
    /// Fails with `AlreadyReserved` if it is already reserved in either
    /// layer; an address has to be released before moving between layers.
    pub fn reserve<A: Into<IpAddr>>(
        &mut self,
        address: A,
        kind: ReservationKind,
    ) -> PoolResult<()> {
        let address = self.mark(address.into(), kind, true)?;
        self.sync_spec();
        tracing::debug!(network = %self.network, %address, %kind, "Reserved address");
        Ok(())
    }

    pub fn release<A: Into<IpAddr>>(
        &mut self,
        address: A,
        kind: ReservationKind,
    ) -> PoolResult<()> {
        let address = self.mark(address.into(), kind, false)?;
        self.sync_spec();
        tracing::debug!(network = %self.network, %address, %kind, "Released address");
        Ok(())
    }

    /// Reserve every address in `addresses` in the `kind` layer, or none of
    /// them. Listing an address twice fails like reserving it twice would.
    pub fn reserve_many<I, A>(&mut self, addresses: I, kind: ReservationKind) -> PoolResult<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<IpAddr>,
    {
        self.mark_many(addresses, kind, true)
    }

    /// Release every address in `addresses` from the `kind` layer, or none
    /// of them.
    pub fn release_many<I, A>(&mut self, addresses: I, kind: ReservationKind) -> PoolResult<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<IpAddr>,
    {
        self.mark_many(addresses, kind, false)
    }

    fn mark_many<I, A>(
        &mut self,
        addresses: I,
        kind: ReservationKind,
        reserved: bool,
    ) -> PoolResult<()>
    where
        I: IntoIterator<Item = A>,
        A: Into<IpAddr>,
    {
        let mut staged = self.clone();
        let mut count = 0usize;
        for address in addresses {
            staged.mark(address.into(), kind, reserved)?;
            count += 1;
        }
        staged.sync_spec();
        *self = staged;
        tracing::debug!(network = %self.network, count, %kind, reserved, "Updated reservations");
        Ok(())
    }

    /// Flip one bit after checking the transition is allowed. Leaves the
    /// spec untouched; callers sync once they're done.
    fn mark(
        &mut self,
        address: IpAddr,
        kind: ReservationKind,
        reserved: bool,
    ) -> PoolResult<Ipv4Addr> {
        let (addr, idx) = self.locate(address)?;
        let current = self.layer(kind).get(idx).unwrap_or(false);

        if reserved {
            if current {
                return Err(PoolError::AlreadyReserved {
                    address: addr,
                    kind,
                });
            }
            if self.layer(kind.other()).get(idx).unwrap_or(false) {
                return Err(PoolError::AlreadyReserved {
                    address: addr,
                    kind: kind.other(),
                });
            }
        } else if !current {
            return Err(PoolError::NotReserved {
                address: addr,
                kind,
            });
        }

        self.layer_mut(kind).set(idx, reserved);
        Ok(addr)
    }

    /// Reserve the lowest free address for an instance and return it.
    pub fn get_free_address(&mut self) -> PoolResult<Ipv4Addr> {
        let address = self.generate_free()?;
        self.reserve(address, ReservationKind::Internal)?;
        Ok(address)
    }

    /// The lowest free address, without reserving it.
    pub fn generate_free(&self) -> PoolResult<Ipv4Addr> {
        let exhausted = || PoolError::PoolExhausted {
            network: self.network,
        };
        let idx = self.all_reservations().first_clear().ok_or_else(exhausted)?;
        self.network.host_at(idx).ok_or_else(exhausted)
    }

    pub fn is_full(&self) -> bool {
        self.all_reservations().is_full()
    }

    //
    // Stats
    //

    pub fn stats(&self) -> PoolStats {
        let all = self.all_reservations();
        PoolStats {
            free_count: all.count_free(),
            reserved_count: all.count_reserved(),
            map: all.render_map(),
            external_reservations: self.external_reservations(),
        }
    }

    pub fn free_count(&self) -> usize {
        self.all_reservations().count_free()
    }

    pub fn reserved_count(&self) -> usize {
        self.all_reservations().count_reserved()
    }

    /// Externally reserved addresses, ascending.
    pub fn external_reservations(&self) -> Vec<Ipv4Addr> {
        self.ext_reservations
            .iter_reserved()
            .filter_map(|idx| self.network.host_at(idx))
            .collect()
    }

    //
    // Accessors
    //

    pub fn contains(&self, address: IpAddr) -> bool {
        self.model.contains(address)
    }

    pub fn network(&self) -> Ipv4Net {
        self.network
    }

    pub fn gateway(&self) -> Option<Ipv4Addr> {
        self.model.gateway()
    }

    pub fn network6(&self) -> Option<Ipv6Net> {
        self.model.network6()
    }

    pub fn gateway6(&self) -> Option<Ipv6Addr> {
        self.model.gateway6()
    }

    /// Number of addresses in the network, network and broadcast included.
    pub fn host_count(&self) -> usize {
        self.reservations.len()
    }

    pub fn model(&self) -> &NetworkModel {
        &self.model
    }

    pub fn spec(&self) -> &NetworkSpec {
        self.model.spec()
    }

    pub fn into_spec(self) -> NetworkSpec {
        self.model.into_spec()
    }

    //
    // Internals
    //

    fn all_reservations(&self) -> ReservationBitmap {
        self.reservations.union(&self.ext_reservations)
    }

    fn layer(&self, kind: ReservationKind) -> &ReservationBitmap {
        match kind {
            ReservationKind::Internal => &self.reservations,
            ReservationKind::External => &self.ext_reservations,
        }
    }

    fn layer_mut(&mut self, kind: ReservationKind) -> &mut ReservationBitmap {
        match kind {
            ReservationKind::Internal => &mut self.reservations,
            ReservationKind::External => &mut self.ext_reservations,
        }
    }

    /// The IPv4 address and its bitmap offset, if `address` is in the pool.
    fn locate(&self, address: IpAddr) -> PoolResult<(Ipv4Addr, usize)> {
        let located = match address {
            IpAddr::V4(addr) => self.network.host_offset(addr).map(|idx| (addr, idx)),
            IpAddr::V6(_) => None,
        };
        located.ok_or(PoolError::AddressNotInPool {
            address,
            network: self.network,
        })
    }

    /// Both layers are always written together so the stored pair never
    /// mixes generations.
    fn sync_spec(&mut self) {
        let reservations = self.reservations.encode();
        let ext_reservations = self.ext_reservations.encode();
        let spec = self.model.spec_mut();
        spec.reservations = Some(reservations);
        spec.ext_reservations = Some(ext_reservations);
    }
}

fn load_layer(
    network: Ipv4Net,
    kind: ReservationKind,
    encoded: &str,
    host_count: usize,
) -> PoolResult<ReservationBitmap> {
    let corrupt = |reason: String| PoolError::CorruptReservations {
        network,
        kind,
        reason,
    };
    let layer = ReservationBitmap::decode(encoded).map_err(|e| corrupt(e.to_string()))?;
    if layer.len() != host_count {
        return Err(corrupt(format!(
            "expected {host_count} entries, found {}",
            layer.len()
        )));
    }
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::ErrorKind;

    fn addr(s: &str) -> Ipv4Addr {
        Ipv4Addr::from_str(s).unwrap()
    }

    fn pool(network: &str, gateway: Option<&str>) -> AddressPool {
        AddressPool::new(NetworkSpec::ipv4(network, gateway)).expect("Couldn't build pool")
    }

    fn assert_layers_disjoint(pool: &AddressPool) {
        assert!(!pool.reservations.overlaps(&pool.ext_reservations));
        assert_eq!(pool.reservations.len(), pool.host_count());
        assert_eq!(pool.ext_reservations.len(), pool.host_count());
    }

    #[test]
    fn test_fresh_pool_reserves_network_and_broadcast() {
        let pool = pool("198.51.100.0/24", None);
        assert_eq!(pool.host_count(), 256);
        assert!(pool.is_reserved(addr("198.51.100.0"), ReservationKind::External).unwrap());
        assert!(pool.is_reserved(addr("198.51.100.255"), ReservationKind::External).unwrap());
        assert!(!pool.is_reserved(addr("198.51.100.0"), ReservationKind::Internal).unwrap());
        assert_eq!(pool.free_count(), 254);
        assert_eq!(pool.reserved_count(), 2);
        assert_layers_disjoint(&pool);
    }

    #[test]
    fn test_fresh_pool_reserves_gateway() {
        let pool = pool("198.51.100.0/24", Some("198.51.100.1"));
        assert!(pool.is_reserved(addr("198.51.100.1"), ReservationKind::External).unwrap());
        assert_eq!(pool.free_count(), 253);
        assert_eq!(pool.generate_free().unwrap(), addr("198.51.100.2"));
    }

    #[test]
    fn test_gateway_on_network_address() {
        let pool = pool("198.51.100.0/24", Some("198.51.100.0"));
        assert_eq!(pool.free_count(), 254);
    }

    #[test]
    fn test_spec_is_written_back() {
        let mut pool = pool("192.0.2.0/30", None);
        assert_eq!(pool.spec().reservations.as_deref(), Some("0000"));
        assert_eq!(pool.spec().ext_reservations.as_deref(), Some("1001"));

        pool.reserve(addr("192.0.2.2"), ReservationKind::Internal).unwrap();
        assert_eq!(pool.spec().reservations.as_deref(), Some("0010"));
        assert_eq!(pool.spec().ext_reservations.as_deref(), Some("1001"));
    }

    #[test]
    fn test_reserve_release_round_trip() {
        let mut pool = pool("198.51.100.0/24", None);
        let before = pool.clone();

        pool.reserve(addr("198.51.100.10"), ReservationKind::External).unwrap();
        assert!(pool.is_reserved(addr("198.51.100.10"), ReservationKind::External).unwrap());
        pool.release(addr("198.51.100.10"), ReservationKind::External).unwrap();

        assert_eq!(pool, before);
    }

    #[test]
    fn test_double_reserve_fails_without_change() {
        let mut pool = pool("198.51.100.0/24", None);
        pool.reserve(addr("198.51.100.10"), ReservationKind::Internal).unwrap();
        let before = pool.clone();

        let err = pool
            .reserve(addr("198.51.100.10"), ReservationKind::Internal)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyReserved);
        assert_eq!(pool, before);
    }

    #[test]
    fn test_reserve_held_by_other_layer() {
        let mut pool = pool("198.51.100.0/24", None);
        let err = pool
            .reserve(addr("198.51.100.0"), ReservationKind::Internal)
            .unwrap_err();
        assert!(matches!(
            err,
            PoolError::AlreadyReserved {
                kind: ReservationKind::External,
                ..
            }
        ));
        assert_layers_disjoint(&pool);
    }

    #[test]
    fn test_release_unreserved_fails_without_change() {
        let mut pool = pool("198.51.100.0/24", None);
        let before = pool.clone();
        let err = pool
            .release(addr("198.51.100.10"), ReservationKind::Internal)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotReserved);

        // reserved, but in the other layer
        let err = pool
            .release(addr("198.51.100.0"), ReservationKind::Internal)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotReserved);
        assert_eq!(pool, before);
    }

    #[test]
    fn test_address_outside_pool() {
        let mut pool = pool("198.51.100.0/24", None);
        let err = pool
            .is_reserved(addr("203.0.113.5"), ReservationKind::Internal)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let v6 = IpAddr::from_str("2001:db8::1").unwrap();
        let err = pool.reserve(v6, ReservationKind::External).unwrap_err();
        assert!(matches!(err, PoolError::AddressNotInPool { .. }));
    }

    #[test]
    fn test_get_free_address_is_lowest_and_reserves() {
        let mut pool = pool("198.51.100.0/24", None);
        assert_eq!(pool.get_free_address().unwrap(), addr("198.51.100.1"));
        assert!(pool.is_reserved(addr("198.51.100.1"), ReservationKind::Internal).unwrap());
        assert_eq!(pool.get_free_address().unwrap(), addr("198.51.100.2"));

        // a hole below the next candidate is found first
        pool.release(addr("198.51.100.1"), ReservationKind::Internal).unwrap();
        assert_eq!(pool.get_free_address().unwrap(), addr("198.51.100.1"));
        assert_eq!(pool.get_free_address().unwrap(), addr("198.51.100.3"));
        assert_layers_disjoint(&pool);
    }

    #[test]
    fn test_generate_free_is_read_only() {
        let pool = pool("198.51.100.0/24", None);
        let before = pool.clone();
        assert_eq!(pool.generate_free().unwrap(), addr("198.51.100.1"));
        assert_eq!(pool.generate_free().unwrap(), addr("198.51.100.1"));
        assert_eq!(pool, before);
    }

    #[test]
    fn test_exhaustion() {
        let mut pool = pool("192.0.2.0/30", None);
        assert_eq!(pool.free_count(), 2);
        assert_eq!(pool.get_free_address().unwrap(), addr("192.0.2.1"));
        assert_eq!(pool.get_free_address().unwrap(), addr("192.0.2.2"));
        assert!(pool.is_full());

        let err = pool.get_free_address().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PoolExhausted);
        let err = pool.generate_free().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PoolExhausted);
    }

    #[test]
    fn test_size_policy() {
        for network in ["10.0.0.0/15", "192.0.2.0/31", "192.0.2.1/32"] {
            let err = AddressPool::new(NetworkSpec::ipv4(network, None)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SizePolicyViolation, "{network}");
        }
        AddressPool::new(NetworkSpec::ipv4("10.0.0.0/16", None)).expect("/16 is allowed");

        let config = PoolConfig {
            min_prefix_len: 28,
            max_prefix_len: 24,
        };
        let err = AddressPool::with_config(NetworkSpec::ipv4("192.0.2.0/30", None), &config)
            .unwrap_err();
        assert!(matches!(
            err,
            PoolError::SizePolicy {
                min_prefix_len: 28,
                ..
            }
        ));
    }

    #[test]
    fn test_no_ipv4_network_is_unsupported() {
        let model = NetworkModel::new(NetworkSpec::default()).unwrap();
        let err = AddressPool::from_model(model, &PoolConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn test_reserve_many_is_atomic() {
        let mut pool = pool("198.51.100.0/24", None);
        pool.reserve(addr("198.51.100.7"), ReservationKind::Internal).unwrap();
        let before = pool.clone();

        let err = pool
            .reserve_many(
                [addr("198.51.100.5"), addr("198.51.100.6"), addr("198.51.100.7")],
                ReservationKind::External,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyReserved);
        assert_eq!(pool, before);

        let err = pool
            .reserve_many(
                [addr("198.51.100.5"), addr("198.51.100.5")],
                ReservationKind::External,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyReserved);
        assert_eq!(pool, before);

        pool.reserve_many(
            [addr("198.51.100.5"), addr("198.51.100.6")],
            ReservationKind::External,
        )
        .unwrap();
        assert_eq!(
            pool.external_reservations(),
            vec![
                addr("198.51.100.0"),
                addr("198.51.100.5"),
                addr("198.51.100.6"),
                addr("198.51.100.255")
            ]
        );

        pool.release_many(
            [addr("198.51.100.5"), addr("198.51.100.6")],
            ReservationKind::External,
        )
        .unwrap();
        assert_eq!(pool.external_reservations().len(), 2);
    }

    #[test]
    fn test_stats() {
        let mut pool = pool("192.0.2.0/29", Some("192.0.2.1"));
        pool.get_free_address().unwrap();
        let stats = pool.stats();
        assert_eq!(stats.free_count, 4);
        assert_eq!(stats.reserved_count, 4);
        assert_eq!(stats.map, "XXX....X");
        assert_eq!(
            stats.external_reservations,
            vec![addr("192.0.2.0"), addr("192.0.2.1"), addr("192.0.2.7")]
        );
    }

    #[test]
    fn test_load_saved_reservations() {
        let mut spec = NetworkSpec::ipv4("192.0.2.0/30", None);
        spec.reservations = Some("0100".to_string());
        spec.ext_reservations = Some("1000".to_string());
        let pool = AddressPool::new(spec).unwrap();

        // saved state is used as-is, broadcast is not re-added
        assert!(pool.is_reserved(addr("192.0.2.1"), ReservationKind::Internal).unwrap());
        assert!(!pool.is_reserved(addr("192.0.2.3"), ReservationKind::External).unwrap());
        assert_eq!(pool.generate_free().unwrap(), addr("192.0.2.2"));
    }

    #[test]
    fn test_load_rejects_corrupt_state() {
        let cases = [
            ("010", "1000"),   // too short
            ("0100", "10001"), // too long
            ("01x0", "1000"),  // not a bit
            ("1100", "1000"),  // overlapping layers
        ];
        for (internal, external) in cases {
            let mut spec = NetworkSpec::ipv4("192.0.2.0/30", None);
            spec.reservations = Some(internal.to_string());
            spec.ext_reservations = Some(external.to_string());
            let err = AddressPool::new(spec).unwrap_err();
            assert!(
                matches!(
                    err,
                    PoolError::CorruptReservations { .. }
                        | PoolError::OverlappingReservations { .. }
                ),
                "{internal}/{external}: {err}"
            );
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
        }
    }

    #[test]
    fn test_overlap_names_both_layers() {
        let mut spec = NetworkSpec::ipv4("192.0.2.0/30", None);
        spec.reservations = Some("0110".to_string());
        spec.ext_reservations = Some("1011".to_string());

        let err = AddressPool::new(spec).unwrap_err();
        let network = Ipv4Net::from_str("192.0.2.0/30").unwrap();
        assert_eq!(
            err,
            PoolError::OverlappingReservations { network, offset: 2 }
        );
        assert!(err.to_string().contains("both for an instance and externally"));
    }

    #[test]
    fn test_reservation_kind_from_bool() {
        assert_eq!(ReservationKind::from(true), ReservationKind::External);
        assert_eq!(ReservationKind::from(false), ReservationKind::Internal);
        assert_eq!(ReservationKind::Internal.other(), ReservationKind::External);
    }
}
