// Copyright (c) 2026 Oleksandr Melnychenko, Ukraine
// Ecliptix Security — PAK-DH
// Licensed under the MIT License

use criterion::{criterion_group, criterion_main, Criterion};
use pakdh_agent::*;
use pakdh_core::exchange::ClientContext;
use pakdh_core::group::GroupId;
use pakdh_relay::*;

const PASSWORD: &[u8] = b"benchmark password for protocol";

fn parties() -> (PakInitiator, PakResponder) {
    let initiator = PakInitiator::new(
        ClientContext::new(PASSWORD, GroupId::Modp1024).unwrap(),
        b"bench-initiator",
        b"bench-responder",
    )
    .unwrap();
    let responder = PakResponder::new(
        ClientContext::new(PASSWORD, GroupId::Modp1024).unwrap(),
        b"bench-initiator",
        b"bench-responder",
    )
    .unwrap();
    (initiator, responder)
}

fn bench_hello(c: &mut Criterion) {
    let (initiator, _) = parties();
    let mut group = c.benchmark_group("initiator");
    group.bench_function("generate_hello", |b| {
        b.iter(|| {
            let mut state = InitiatorState::new();
            generate_hello(&initiator, &mut state).unwrap();
        })
    });
    group.finish();
}

fn bench_full_exchange(c: &mut Criterion) {
    let (initiator, responder) = parties();
    let mut group = c.benchmark_group("exchange");
    group.sample_size(20);
    group.bench_function("full", |b| {
        b.iter(|| {
            let mut client_state = InitiatorState::new();
            let hello = generate_hello(&initiator, &mut client_state).unwrap();
            let mut server_state = ResponderState::new();
            let reply = generate_reply(&responder, &hello, &mut server_state).unwrap();
            let confirm = generate_confirm(&initiator, &reply, &mut client_state).unwrap();
            responder_finish(&confirm, &mut server_state).unwrap();
            initiator_finish(&mut client_state).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_hello, bench_full_exchange);
criterion_main!(benches);
