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

//! IPv4 address pools for networks that instance NICs are attached to.
//!
//! A [`NetworkSpec`] is the stored form of a network. [`Network::from_spec`]
//! turns it into either an [`AddressPool`], which tracks reserved addresses
//! in two bitmaps and writes them back into the spec after every change, or
//! a plain [`NetworkModel`] for networks without an IPv4 subnet.

pub mod bitmap;
pub mod config;
pub mod error;
pub mod model;
pub mod network;
pub mod pool;
pub mod spec;
pub mod stats;

pub use bitmap::ReservationBitmap;
pub use config::PoolConfig;
pub use error::{ErrorKind, PoolError, PoolResult};
pub use model::NetworkModel;
pub use network::{Network, NetworkOps};
pub use pool::{AddressPool, ReservationKind};
pub use spec::NetworkSpec;
pub use stats::PoolStats;
