use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use scriptwright_engine::{Script, classify, to_xml};

const SCENE: &str = "\
INT. HOUSE - DAY

JOHN
(beat)
Hello there.

He walks to the window and looks out at the street below.

CUT TO:

EXT. STREET - NIGHT

MARY
You're late.
";

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_mixed_lines", |b| {
        let lines: Vec<&str> = SCENE.lines().filter(|l| !l.trim().is_empty()).collect();
        b.iter(|| {
            for line in &lines {
                black_box(classify(black_box(line)));
            }
        })
    });
}

fn bench_serialize(c: &mut Criterion) {
    c.bench_function("serialize_scene", |b| {
        let script = Script::from_text("Bench", SCENE);
        b.iter(|| black_box(to_xml(black_box(&script))))
    });
}

criterion_group!(benches, bench_classify, bench_serialize);
criterion_main!(benches);
