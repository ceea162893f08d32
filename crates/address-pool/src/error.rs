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
use ipam_network::ip::Ipv4Net;

use crate::ReservationKind;

pub type PoolResult<T> = Result<T, PoolError>;

/// The broad class of a [`PoolError`]. All errors are raised before any
/// state is changed, so every kind is terminal for the request that caused
/// it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A malformed CIDR or address literal, or corrupt serialized state.
    InvalidValue,
    /// Well-formed values that contradict each other.
    ConfigurationConflict,
    SizePolicyViolation,
    AlreadyReserved,
    NotReserved,
    PoolExhausted,
    /// A reservation operation on a network that has no IPv4 pool.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Gateway '{gateway}' given without a network")]
    GatewayWithoutNetwork { gateway: String },

    #[error("IPv6 gateway '{gateway}' given without an IPv6 network")]
    Gateway6WithoutNetwork6 { gateway: String },

    #[error("Gateway '{gateway}' not in network '{network}'")]
    GatewayNotInNetwork { gateway: IpAddr, network: String },

    #[error("Address '{address}' is not part of network '{network}'")]
    AddressNotInPool { address: IpAddr, network: Ipv4Net },

    #[error(
        "Network '{network}' is outside the allowed size range: prefix length must be between /{max_prefix_len} and /{min_prefix_len}"
    )]
    SizePolicy {
        network: Ipv4Net,
        min_prefix_len: u8,
        max_prefix_len: u8,
    },

    #[error("IP {address} is already {}", reserved_phrase(.kind))]
    AlreadyReserved {
        address: Ipv4Addr,
        kind: ReservationKind,
    },

    #[error("IP {address} is not {}", reserved_phrase(.kind))]
    NotReserved {
        address: Ipv4Addr,
        kind: ReservationKind,
    },

    #[error("{network} is full")]
    PoolExhausted { network: Ipv4Net },

    #[error("Network has no IPv4 address pool, cannot {operation}")]
    Unsupported { operation: &'static str },

    #[error("Corrupt {kind} reservations for '{network}': {reason}")]
    CorruptReservations {
        network: Ipv4Net,
        kind: ReservationKind,
        reason: String,
    },

    #[error(
        "Corrupt reservations for '{network}': offset {offset} is reserved both for an instance and externally"
    )]
    OverlappingReservations { network: Ipv4Net, offset: usize },
}

fn reserved_phrase(kind: &ReservationKind) -> &'static str {
    match kind {
        ReservationKind::Internal => "used by an instance",
        ReservationKind::External => "externally reserved",
    }
}

impl PoolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PoolError::Network(e) if e.is_invalid_value() => ErrorKind::InvalidValue,
            PoolError::Network(_) => ErrorKind::ConfigurationConflict,
            PoolError::GatewayWithoutNetwork { .. }
            | PoolError::Gateway6WithoutNetwork6 { .. }
            | PoolError::GatewayNotInNetwork { .. } => ErrorKind::ConfigurationConflict,
            PoolError::AddressNotInPool { .. } => ErrorKind::InvalidValue,
            PoolError::SizePolicy { .. } => ErrorKind::SizePolicyViolation,
            PoolError::AlreadyReserved { .. } => ErrorKind::AlreadyReserved,
            PoolError::NotReserved { .. } => ErrorKind::NotReserved,
            PoolError::PoolExhausted { .. } => ErrorKind::PoolExhausted,
            PoolError::Unsupported { .. } => ErrorKind::Unsupported,
            PoolError::CorruptReservations { .. } | PoolError::OverlappingReservations { .. } => {
                ErrorKind::InvalidValue
            }
        }
    }
}
