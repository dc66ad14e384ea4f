//! Benchmarks for the markdown to HTML pipeline.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use grip_renderer::{GripRenderer, Theme};

/// Generate markdown exercising every hook: alerts, emoji, task lists and
/// fenced code.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::with_capacity(sections * 300);
    md.push_str("# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str("> [!NOTE]\n> Remember to **save** your work :floppy_disk:\n\n");
        md.push_str("- [x] write code\n- [ ] write tests :sweat_smile:\n\n");
        md.push_str(&format!(
            "```rust\nfn section_{i}() -> usize {{\n    {i} * 2\n}}\n```\n\n"
        ));
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let renderer = GripRenderer::new(Theme::Auto);

    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| renderer.md_to_html(b"# Hello\n\nSimple content with :smile:."));
    });
}

fn bench_render_mermaid(c: &mut Criterion) {
    let renderer = GripRenderer::new(Theme::Dark);
    let markdown = b"```mermaid\ngraph TD;\n  A-->B;\n  B-->C;\n```\n";

    c.bench_function("render_mermaid_block", |b| {
        b.iter(|| renderer.md_to_html(markdown));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = GripRenderer::new(Theme::Auto);
    let mut group = c.benchmark_group("render_by_size");

    for sections in [5, 20, 50] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s")),
            markdown.as_bytes(),
            |b, input| b.iter(|| renderer.md_to_html(input)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_mermaid,
    bench_render_varying_sizes
);
criterion_main!(benches);
