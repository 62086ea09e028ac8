use criterion::{Criterion, criterion_group, criterion_main};
use file_input::{ByteUnit, BytesFormatter, FileHandle, FileSet, FileValidators, Validator};
use std::hint::black_box;

fn benchmark_formatting(c: &mut Criterion) {
    let formatter = BytesFormatter::new();

    c.bench_function("format_auto_unit", |b| {
        b.iter(|| black_box(formatter.format(black_box(734_003_200_u64)).into_string()))
    });

    c.bench_function("format_explicit_units", |b| {
        b.iter(|| {
            let outcome =
                formatter.request(black_box(861)).precision(4).from_unit(ByteUnit::B).to_unit("kB").format();
            black_box(outcome.into_string())
        })
    });

    c.bench_function("format_passthrough", |b| b.iter(|| black_box(formatter.format(black_box("n/a")))));
}

fn benchmark_validation(c: &mut Criterion) {
    let set: FileSet = (0..256_u64).map(|i| FileHandle::new(format!("file{i}.bin"), i * 1024)).collect();
    let max = FileValidators::max_content_size(16 * 1024 * 1024);

    c.bench_function("max_content_size_256_files", |b| b.iter(|| black_box(max.validate(black_box(Some(&set))))));
}

criterion_group!(benches, benchmark_formatting, benchmark_validation);
criterion_main!(benches);
