use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;
use mathengine_rs::{default_context, evaluate, MathEvaluator};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let evaluator = MathEvaluator::default();

    let expr = "2 + 3 * 4";
    let rpn = evaluator.to_rpn(&evaluator.tokenize(expr)).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("mathengine_arithmetic", |b| {
        b.iter(|| evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("preconverted_rpn_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_rpn(black_box(&rpn)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });

    group.finish();
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let evaluator = MathEvaluator::default();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5 ^ 2 - -7";
    let meval_expr = "(10 + 20) * 3 / (4 - 1) + 5 ^ 2 - (-7)";
    let rpn = evaluator.to_rpn(&evaluator.tokenize(expr)).unwrap();

    group.bench_function("mathengine_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("preconverted_rpn_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_rpn(black_box(&rpn)).unwrap())
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(meval_expr)).unwrap())
    });

    group.finish();
}

/// Benchmark function calls and variable lookups
fn benchmark_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function call Expression Evaluation");

    let context = default_context().with_variables([("x", 0.5), ("y", 2.0)]);
    let evaluator = MathEvaluator::new(context);

    let expr = "max(sin(x) * y, sqrt(16), log(100)) + sum(1, 2, 3, 4)";
    let meval_expr = "max(sin(x) * y, sqrt(16)) + 10";
    let meval_context = {
        let mut ctx = meval::Context::new();
        ctx.var("x", 0.5).var("y", 2.0);
        ctx
    };
    let meval_parsed: meval::Expr = meval_expr.parse().unwrap();

    group.bench_function("mathengine_functions", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("meval_functions", |b| {
        b.iter(|| meval_parsed.eval_with_context(black_box(&meval_context)).unwrap())
    });

    group.finish();
}

/// Benchmark many independent expressions, serial against parallel
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Expression Evaluation");

    let evaluator = MathEvaluator::default();
    let expressions: Vec<&str> = (0..256)
        .map(|i| if i % 2 == 0 { "2 ^ 10 - 3! * 4" } else { "Sum(4, Sqrt(25), Max(1, 2, 3))" })
        .collect();

    group.bench_function("serial_batch", |b| {
        b.iter(|| {
            expressions
                .iter()
                .map(|expression| evaluator.evaluate(expression))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("parallel_batch", |b| {
        b.iter(|| evaluator.evaluate_many(black_box(&expressions)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_functions,
    benchmark_batch
);
criterion_main!(benches);
