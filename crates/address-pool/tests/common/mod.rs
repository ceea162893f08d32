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
use std::str::FromStr;
use std::sync::Once;

use address_pool::{AddressPool, ReservationKind};

static LOG_SETUP: Once = Once::new();

/// Send library logs to the test harness output.
/// Use `export RUST_LOG=debug` to see every reservation change.
pub fn setup_logging() {
    use tracing::metadata::LevelFilter;
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt::TestWriter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::util::SubscriberInitExt;

    LOG_SETUP.call_once(|| {
        if let Err(e) = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .compact()
                    .with_writer(TestWriter::new),
            )
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .try_init()
        {
            panic!("Failed to initialize trace logging for address pool tests: {e}");
        }
    });
}

pub fn addr(s: &str) -> Ipv4Addr {
    Ipv4Addr::from_str(s).expect("Couldn't parse IPv4 address")
}

/// Check the invariants that must hold in every reachable pool state, and
/// that the spec carries exactly what the pool holds.
pub fn assert_consistent(pool: &AddressPool) {
    pool.validate().expect("pool invariants violated");

    let spec = pool.spec();
    let internal = spec.reservations.as_deref().expect("reservations not written");
    let external = spec
        .ext_reservations
        .as_deref()
        .expect("ext_reservations not written");
    assert_eq!(internal.len(), pool.host_count());
    assert_eq!(external.len(), pool.host_count());

    for (idx, (i, e)) in internal.chars().zip(external.chars()).enumerate() {
        assert!(
            !(i == '1' && e == '1'),
            "offset {idx} reserved in both layers"
        );
    }

    let stats = pool.stats();
    assert_eq!(stats.free_count + stats.reserved_count, pool.host_count());
    for address in &stats.external_reservations {
        assert!(
            pool.is_reserved(*address, ReservationKind::External)
                .expect("external reservation outside network")
        );
    }
}
