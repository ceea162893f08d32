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
use std::net::IpAddr;

use ipnet::IpNet;

/// The IP version of an address or network. Used to dispatch containment
/// checks to the v4 or v6 half of a network definition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IpAddressFamily {
    Ipv4,
    Ipv6,
}

impl IpAddressFamily {
    /// The numeric IP version (4 or 6).
    pub fn version(&self) -> u8 {
        match self {
            IpAddressFamily::Ipv4 => 4,
            IpAddressFamily::Ipv6 => 6,
        }
    }
}

impl fmt::Display for IpAddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv{}", self.version())
    }
}

pub trait IdentifyAddressFamily {
    fn address_family(&self) -> IpAddressFamily;

    fn is_address_family(&self, address_family: IpAddressFamily) -> bool {
        address_family == self.address_family()
    }
}

impl IdentifyAddressFamily for IpAddr {
    fn address_family(&self) -> IpAddressFamily {
        match self {
            IpAddr::V4(_) => IpAddressFamily::Ipv4,
            IpAddr::V6(_) => IpAddressFamily::Ipv6,
        }
    }
}

impl IdentifyAddressFamily for IpNet {
    fn address_family(&self) -> IpAddressFamily {
        match self {
            IpNet::V4(_) => IpAddressFamily::Ipv4,
            IpNet::V6(_) => IpAddressFamily::Ipv6,
        }
    }
}
