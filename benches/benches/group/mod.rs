pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// группа бенчмарков: запрос query(&context, кодпоинты) на каждом наборе кодпоинтов
#[macro_export]
macro_rules! group {
    ($fn: ident, $group: expr, $name: expr, $context: expr, $query: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let context = $context;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (sample_name, codes) in unicode_database_benches::samples() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, sample_name),
                    &(&context, codes),
                    |b, data| b.iter(|| $query(data.0, criterion::black_box(data.1.as_slice()))),
                );
            }

            let pairs = unicode_database_benches::composition_pairs();

            group.bench_with_input(
                criterion::BenchmarkId::new($name, "composition pairs"),
                &(&context, pairs),
                |b, data| b.iter(|| $query(data.0, criterion::black_box(data.1.as_slice()))),
            );

            group.finish();
        }
    };
}
