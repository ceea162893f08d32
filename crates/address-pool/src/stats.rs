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
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Occupancy of an address pool, as shown by network info/list output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Addresses reserved in neither layer.
    pub free_count: usize,
    /// Addresses reserved in either layer.
    pub reserved_count: usize,
    /// One character per address, lowest first: `X` reserved, `.` free.
    pub map: String,
    /// Externally reserved addresses, ascending.
    pub external_reservations: Vec<Ipv4Addr>,
}

impl PoolStats {
    pub fn external_reservations_joined(&self) -> String {
        self.external_reservations
            .iter()
            .map(Ipv4Addr::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
