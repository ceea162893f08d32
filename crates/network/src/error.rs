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
use std::net::IpAddr;

use ipnet::IpNet;

use crate::ip::address_family::IpAddressFamily;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Invalid IP address '{value}': {source}")]
    InvalidAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Invalid network '{value}': {source}")]
    InvalidNetwork {
        value: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    #[error("Expected an {expected} value, got '{value}'")]
    WrongAddressFamily {
        value: String,
        expected: IpAddressFamily,
    },

    #[error("Address '{address}' but no network")]
    AddressWithoutNetwork { address: IpAddr },

    #[error("Address '{address}' not in network '{network}'")]
    AddressNotInNetwork { address: IpAddr, network: IpNet },
}

impl NetworkError {
    /// True for errors caused by a literal that could not be parsed, as
    /// opposed to well-formed values that contradict each other.
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            NetworkError::InvalidAddress { .. }
                | NetworkError::InvalidNetwork { .. }
                | NetworkError::WrongAddressFamily { .. }
        )
    }
}
