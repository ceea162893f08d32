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
use crate::error::NetworkError;
use crate::ip::network::{network_contains, parse_address, parse_network};

/// Standalone check of an (address, network) pair, as given by a user before
/// anything is built from them. Either side may be absent; empty strings
/// count as absent.
///
/// Fails when a present value doesn't parse, when an address is given
/// without a network, or when the address is outside the network.
pub fn check(address: Option<&str>, network: Option<&str>) -> Result<(), NetworkError> {
    let network = network
        .filter(|s| !s.is_empty())
        .map(parse_network)
        .transpose()?;
    let address = address
        .filter(|s| !s.is_empty())
        .map(parse_address)
        .transpose()?;

    match (address, network) {
        (Some(address), None) => Err(NetworkError::AddressWithoutNetwork { address }),
        (Some(address), Some(network)) if !network_contains(&network, &address) => {
            Err(NetworkError::AddressNotInNetwork { address, network })
        }
        _ => Ok(()),
    }
}
