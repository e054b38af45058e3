use aoc2025_day_8::{part1, part2, Config};

fn main() {
    divan::main();
}

/// Deterministic cloud of junction boxes, roughly the size of a real input.
fn junction_boxes(n: u64) -> String {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % 100_000
    };
    (0..n)
        .map(|_| format!("{},{},{}", next(), next(), next()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench]
fn bench_part1(bencher: divan::Bencher) {
    let input = junction_boxes(1000);
    bencher.bench(|| part1::process_with(divan::black_box(&input), Config::default()).unwrap());
}

#[divan::bench]
fn bench_part2(bencher: divan::Bencher) {
    let input = junction_boxes(1000);
    bencher.bench(|| part2::process(divan::black_box(&input)).unwrap());
}
