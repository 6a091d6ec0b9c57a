//! Benchmarks for command dispatch and the grep post-filter.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use netlab_shell::{CommandRegistry, Session, ShellState};

/// A mixed workload weighted toward the commands lessons lean on.
const WORKLOAD: &[&str] = &[
    "pwd",
    "ls",
    "nmap -O 10.0.0.5",
    "ip addr",
    "ping 192.168.1.1",
    "wg show",
    "iptables -L",
    "cd scripts",
    "cd ..",
    "unknown-tool --flag",
];

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("mixed_workload", |b| {
        let registry = CommandRegistry::with_builtins();
        let mut state = ShellState::seeded();
        b.iter(|| {
            for line in WORKLOAD {
                std::hint::black_box(registry.execute(line, &mut state));
            }
        });
    });

    for pattern in ["inet", "zzz"] {
        let line = format!("ip addr | grep {pattern}");
        group.bench_with_input(
            BenchmarkId::new("grep_filter", pattern),
            &line,
            |b, line| {
                let registry = CommandRegistry::with_builtins();
                let mut state = ShellState::seeded();
                b.iter(|| std::hint::black_box(registry.execute(line, &mut state)));
            },
        );
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("session_eval_scrollback", |b| {
        b.iter(|| {
            let mut session = Session::new();
            for line in WORKLOAD {
                std::hint::black_box(session.eval(line));
            }
            session.history().len()
        });
    });
}

criterion_group!(benches, bench_dispatch, bench_session);
criterion_main!(benches);
