//! Benchmarks for CellGuard authorization operations

use std::collections::HashSet;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cellguard_access::{AccessPolicy, CredentialParser, KeyCardParser, Room};
use cellguard_core::{Person, RoomId};
use cellguard_test::{FacilityGenerator, GeneratorConfig};

fn bench_allows_entrance(c: &mut Criterion) {
    let policy = AccessPolicy::new().with_standing_grant("Vladimir,Morozov");
    let allowed: HashSet<Person> = (0..100)
        .map(|i| Person::new(format!("Inmate{}", i), "Doe"))
        .collect();
    let room = Room::under_policy(RoomId::new(0), allowed, &policy);

    let listed = Person::new("Inmate42", "Doe");
    let stranger = Person::new("Siim", "Valdaru");

    c.bench_function("allows_entrance_listed", |b| {
        b.iter(|| black_box(room.allows_entrance(black_box(&listed))))
    });

    c.bench_function("allows_entrance_denied", |b| {
        b.iter(|| black_box(room.allows_entrance(black_box(&stranger))))
    });
}

fn bench_parse(c: &mut Criterion) {
    let plain = KeyCardParser::new();
    let granted = KeyCardParser::with_policy(Arc::new(
        AccessPolicy::new().with_standing_grant("Vladimir,Morozov"),
    ));

    c.bench_function("parse_plain_card", |b| {
        b.iter(|| black_box(plain.read(black_box("Siim,Valdaru"))))
    });

    c.bench_function("parse_granted_card", |b| {
        b.iter(|| black_box(granted.read(black_box("Vladimir,Morozov"))))
    });
}

fn bench_cell_lookup(c: &mut Criterion) {
    let inmates: Vec<Person> = (0..50)
        .map(|i| Person::new(format!("Inmate{}", i), "Doe"))
        .collect();
    let facility = FacilityGenerator::new(GeneratorConfig::default())
        .generate(&inmates)
        .expect("facility");
    let inmate = Person::new("Inmate25", "Doe");

    c.bench_function("cell_for", |b| {
        b.iter(|| black_box(facility.registry.cell_for(black_box(&inmate))))
    });
}

criterion_group!(benches, bench_allows_entrance, bench_parse, bench_cell_lookup);
criterion_main!(benches);
