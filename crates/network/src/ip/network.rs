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
use std::str::FromStr;

// These are part of our public API because the network model hands them out.
pub use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use super::address_family::{IdentifyAddressFamily, IpAddressFamily};
use crate::error::NetworkError;

//
// Parsing
//

/// Parse an IP address literal of either family.
pub fn parse_address(value: &str) -> Result<IpAddr, NetworkError> {
    IpAddr::from_str(value).map_err(|source| NetworkError::InvalidAddress {
        value: value.to_string(),
        source,
    })
}

/// Parse a CIDR of either family. Host bits after the prefix are dropped, so
/// "192.0.2.7/24" is read as 192.0.2.0/24.
pub fn parse_network(value: &str) -> Result<IpNet, NetworkError> {
    IpNet::from_str(value)
        .map(|net| net.trunc())
        .map_err(|source| NetworkError::InvalidNetwork {
            value: value.to_string(),
            source,
        })
}

pub fn parse_ipv4_address(value: &str) -> Result<Ipv4Addr, NetworkError> {
    match parse_address(value)? {
        IpAddr::V4(addr) => Ok(addr),
        IpAddr::V6(_) => Err(wrong_family(value, IpAddressFamily::Ipv4)),
    }
}

pub fn parse_ipv6_address(value: &str) -> Result<Ipv6Addr, NetworkError> {
    match parse_address(value)? {
        IpAddr::V6(addr) => Ok(addr),
        IpAddr::V4(_) => Err(wrong_family(value, IpAddressFamily::Ipv6)),
    }
}

pub fn parse_ipv4_network(value: &str) -> Result<Ipv4Net, NetworkError> {
    match parse_network(value)? {
        IpNet::V4(net) => Ok(net),
        IpNet::V6(_) => Err(wrong_family(value, IpAddressFamily::Ipv4)),
    }
}

pub fn parse_ipv6_network(value: &str) -> Result<Ipv6Net, NetworkError> {
    match parse_network(value)? {
        IpNet::V6(net) => Ok(net),
        IpNet::V4(_) => Err(wrong_family(value, IpAddressFamily::Ipv6)),
    }
}

fn wrong_family(value: &str, expected: IpAddressFamily) -> NetworkError {
    NetworkError::WrongAddressFamily {
        value: value.to_string(),
        expected,
    }
}

//
// Host indexing
//

/// Maps the addresses of an IPv4 network onto a dense `0..host_count()`
/// index space, where offset 0 is the network base address and the last
/// offset is the broadcast address.
pub trait Ipv4HostIndex {
    /// `2^(32 - prefix_len)`, including network and broadcast addresses.
    fn host_count(&self) -> u64;

    /// The offset of `addr` from the network base, or None if `addr` is
    /// outside the network.
    fn host_offset(&self, addr: Ipv4Addr) -> Option<usize>;

    /// The address at `offset`, or None if it is past the end of the network.
    fn host_at(&self, offset: usize) -> Option<Ipv4Addr>;
}

impl Ipv4HostIndex for Ipv4Net {
    fn host_count(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix_len()))
    }

    fn host_offset(&self, addr: Ipv4Addr) -> Option<usize> {
        if !self.contains(&addr) {
            return None;
        }
        let offset = addr.to_bits() - self.network().to_bits();
        usize::try_from(offset).ok()
    }

    fn host_at(&self, offset: usize) -> Option<Ipv4Addr> {
        let offset = u32::try_from(offset).ok()?;
        if u64::from(offset) >= self.host_count() {
            return None;
        }
        Some(Ipv4Addr::from_bits(self.network().to_bits() + offset))
    }
}

//
// Misc
//

/// Whether `addr` is in fe80::/10.
pub fn is_link_local_v6(addr: &Ipv6Addr) -> bool {
    (addr.segments()[0] & 0xffc0) == 0xfe80
}

/// Family-checked containment. Unlike comparing raw integers, a v6 address
/// is never reported as part of a v4 network.
pub fn network_contains(network: &IpNet, addr: &IpAddr) -> bool {
    addr.is_address_family(network.address_family()) && network.contains(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_truncates_host_bits() {
        let net = parse_network("192.0.2.7/24").expect("Couldn't parse network");
        assert_eq!(net, IpNet::from_str("192.0.2.0/24").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_network("xxxxx").expect_err("Unexpectedly parsed a garbage network");
        assert!(err.is_invalid_value());

        let err = parse_address("198.51.100.300").expect_err("Unexpectedly parsed bad address");
        assert!(matches!(err, NetworkError::InvalidAddress { .. }));

        let err = parse_ipv4_network("2001:db8::/64").expect_err("v6 accepted as v4 network");
        assert!(matches!(
            err,
            NetworkError::WrongAddressFamily {
                expected: IpAddressFamily::Ipv4,
                ..
            }
        ));

        parse_ipv6_address("192.0.2.1").expect_err("v4 accepted as v6 address");
        parse_ipv4_address("192.0.2.1").expect("Couldn't parse IPv4 address");
        parse_ipv6_network("2001:db8::/64").expect("Couldn't parse IPv6 network");
    }

    #[test]
    fn test_host_count() {
        let net = parse_ipv4_network("198.51.100.0/24").unwrap();
        assert_eq!(net.host_count(), 256);
        let net = parse_ipv4_network("192.0.2.0/30").unwrap();
        assert_eq!(net.host_count(), 4);
        let net = parse_ipv4_network("10.0.0.0/16").unwrap();
        assert_eq!(net.host_count(), 65536);
        let net = parse_ipv4_network("0.0.0.0/0").unwrap();
        assert_eq!(net.host_count(), 1 << 32);
    }

    #[test]
    fn test_host_offset_and_host_at() {
        let net = parse_ipv4_network("198.51.100.0/24").unwrap();
        assert_eq!(net.host_offset(Ipv4Addr::new(198, 51, 100, 0)), Some(0));
        assert_eq!(net.host_offset(Ipv4Addr::new(198, 51, 100, 255)), Some(255));
        assert_eq!(net.host_offset(Ipv4Addr::new(198, 51, 101, 0)), None);

        assert_eq!(net.host_at(1), Some(Ipv4Addr::new(198, 51, 100, 1)));
        assert_eq!(net.host_at(255), Some(Ipv4Addr::new(198, 51, 100, 255)));
        assert_eq!(net.host_at(256), None);
    }

    #[test]
    fn test_link_local() {
        assert!(is_link_local_v6(&Ipv6Addr::from_str("fe80::1").unwrap()));
        assert!(is_link_local_v6(&Ipv6Addr::from_str("febf::1").unwrap()));
        assert!(!is_link_local_v6(&Ipv6Addr::from_str("fec0::1").unwrap()));
        assert!(!is_link_local_v6(&Ipv6Addr::from_str("2001:db8::1").unwrap()));
    }

    #[test]
    fn test_network_contains() {
        let v4 = parse_network("192.0.2.0/24").unwrap();
        assert!(network_contains(&v4, &parse_address("192.0.2.9").unwrap()));
        assert!(!network_contains(&v4, &parse_address("203.0.113.9").unwrap()));
        assert!(!network_contains(&v4, &parse_address("::ffff:192.0.2.9").unwrap()));
    }
}
