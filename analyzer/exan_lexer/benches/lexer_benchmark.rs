use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use exan_lexer::tokenize;

fn generate_large_expression(terms: usize) -> String {
    let ops = ['+', '-', '*', '/', '^'];
    let operands = ['a', 'b', 'c', 'd', 'e', '1', '2', '3'];

    let mut expr = String::from("x");
    for i in 0..terms {
        expr.push(ops[i % ops.len()]);
        if i % 3 == 0 {
            expr.push('(');
            expr.push(operands[i % operands.len()]);
            expr.push(ops[(i + 1) % ops.len()]);
            expr.push(operands[(i + 1) % operands.len()]);
            expr.push(')');
        } else {
            expr.push(operands[i % operands.len()]);
        }
    }
    expr
}

fn bench_tokenize(c: &mut Criterion) {
    let input = generate_large_expression(2_000);

    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("tokenize_large_expression", |b| {
        b.iter(|| tokenize(&input).expect("benchmark input is valid"))
    });
    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
