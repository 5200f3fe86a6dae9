use criterion::criterion_main;

pub mod keybench;

criterion_main!(keybench::key_benches);
