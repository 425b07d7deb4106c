use bunner_cors_rules::{CorsHandler, RuleSet};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use http::{Request, Response};

fn layered_config(rule_count: usize) -> String {
    let mut config = String::new();
    for idx in 0..rule_count {
        config.push_str(&format!(
            "cors /svc{idx:03} https://svc{idx:03}.bench.allowed {{\n  origin_regexp ^https://edge{idx:03}\\.bench\\.allowed$\n  max_age 600\n}}\n"
        ));
    }
    config.push_str("cors /\n");
    config
}

fn preflight(path: &str) -> Request<()> {
    Request::builder()
        .method("OPTIONS")
        .uri(path)
        .header("Origin", "HTTPS://EDGE063.BENCH.ALLOWED")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "X-Bench, Content-Type")
        .body(())
        .expect("valid benchmark request")
}

fn simple(path: &str) -> Request<()> {
    Request::builder()
        .uri(path)
        .header("Origin", "https://svc063.bench.allowed")
        .body(())
        .expect("valid benchmark request")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for rule_count in [1usize, 16, 128] {
        let config = layered_config(rule_count);
        group.throughput(Throughput::Bytes(config.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(rule_count),
            &config,
            |b, config| {
                b.iter(|| RuleSet::parse_str(black_box(config)).expect("valid benchmark config"))
            },
        );
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let handler = CorsHandler::new(
        RuleSet::parse_str(&layered_config(128)).expect("valid benchmark config"),
    );
    let mut group = c.benchmark_group("dispatch");

    let cases = [
        ("first_rule_simple", simple("/svc000/items")),
        ("deep_rule_simple", simple("/SVC063/items")),
        ("deep_rule_preflight", preflight("/svc063/items")),
        ("fallback_preflight", preflight("/unmatched/path")),
    ];

    for (name, request) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut response = Response::new(());
                black_box(handler.dispatch(black_box(request), &mut response));
                response
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_dispatch);
criterion_main!(benches);
