use criterion::{Criterion, criterion_group, criterion_main};
use hermes::{BufferSink, FormatTemplate, Logger, Severity};
use std::hint::black_box;
use std::sync::Arc;

fn bench_template_parse(c: &mut Criterion) {
    c.bench_function("FormatTemplate::parse", |b| {
        b.iter(|| FormatTemplate::parse(black_box("[{logname}] {loglevel}: {logmessage}")));
    });
}

fn bench_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse("[{logname}] {loglevel}: {logmessage}");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| {
            template.render(
                black_box("app"),
                black_box(Severity::Info),
                black_box("application started successfully"),
            )
        });
    });
}

fn bench_log_dispatch(c: &mut Criterion) {
    let buf = Arc::new(BufferSink::new());
    let mut logger = Logger::builder()
        .name("app")
        .format("[{logname}] {loglevel}: {logmessage}")
        .color(true)
        .no_config()
        .sink(Arc::clone(&buf))
        .build();

    c.bench_function("Logger::log", |b| {
        b.iter(|| {
            logger.log(black_box("application started successfully"), Severity::Info);
            buf.clear();
        });
    });
}

criterion_group!(
    benches,
    bench_template_parse,
    bench_template_render,
    bench_log_dispatch
);
criterion_main!(benches);
