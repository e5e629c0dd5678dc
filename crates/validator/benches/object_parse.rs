// Object parse benchmarks.
//
// Measures schema evaluation over already decoded records and over raw JSON
// payloads, with and without rule failures.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ursa_validator::prelude::*;

fn signup_schema() -> ObjectValidator {
    object()
        .field("Name", string().rule(min_length(3)).rule(max_length(64)))
        .field("Email", string().rule(email()).required())
        .field("Age", uint8().rule(min(18_u8)))
        .field("Plan", string().rule(one_of(["free", "pro", "team"])).with_default("free"))
        .field(
            "Address",
            object()
                .field("City", string().required())
                .field("Zip", string().rule(matches("^[0-9]{5}$"))),
        )
        .build()
}

const VALID: &[u8] = br#"{"Name":"Ursa","Email":"ursa@example.com","Age":"30","Address":{"City":"Oslo","Zip":"01234"}}"#;
const INVALID: &[u8] = br#"{"Name":"U","Email":"nope","Age":12,"Plan":"gold","Address":{"Zip":"x"}}"#;

fn json_payloads(c: &mut Criterion) {
    let schema = signup_schema();
    let mut group = c.benchmark_group("parse_json");
    for (label, payload) in [("valid", VALID), ("invalid", INVALID)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), payload, |b, payload| {
            b.iter(|| black_box(schema.parse_json(black_box(payload))));
        });
    }
    group.finish();
}

fn decoded_records(c: &mut Criterion) {
    let schema = signup_schema();
    let record = Value::from(serde_json::from_slice::<serde_json::Value>(VALID).unwrap());

    c.bench_function("parse_record", |b| {
        b.iter(|| black_box(schema.parse_value(black_box(&record))));
    });
}

fn scalar_coercion(c: &mut Criterion) {
    let count = int().rule(min(0_i64)).build();
    c.bench_function("scalar_text_to_int", |b| {
        b.iter(|| black_box(count.parse(black_box("12345"))));
    });
}

criterion_group!(benches, json_payloads, decoded_records, scalar_coercion);
criterion_main!(benches);
