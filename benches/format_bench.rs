use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphoneinput::{
    CountryRecord, CountryTable, CountryTableConfig, FormatOptions, NumberFormatter,
    REFERENCE_DATA,
};

use phonenumber::{
    self as rlp,
    country::Id::{self, DE, GB, RU, US}, Mode,
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("12025550000", "us", US),
        ("442087654321", "gb", GB),
        ("4930123456", "de", DE),
        ("79161234567", "ru", RU),
    ]
}

fn find_records(table: &CountryTable, numbers: &[TestEntity]) -> Vec<Arc<CountryRecord>> {
    numbers
        .iter()
        .map(|s| {
            table
                .visible()
                .iter()
                .find(|record| record.iso2 == s.1)
                .cloned()
                .unwrap()
        })
        .collect()
}

fn convert_to_rlp_numbers(numbers: &[TestEntity]) -> Vec<rlp::PhoneNumber> {
    numbers
        .iter()
        .map(|s| rlp::parse(Some(s.2), format!("+{}", s.0)).unwrap())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let numbers = setup_numbers();
    let table = CountryTable::build(&CountryTableConfig::default(), &*REFERENCE_DATA);
    let records = find_records(&table, &numbers);
    let rlp_numbers = convert_to_rlp_numbers(&numbers);
    let formatter = NumberFormatter::new(FormatOptions::default());

    let mut group = c.benchmark_group("Formatting Comparison");

    group.bench_function("rphoneinput: format(full number)", |b| {
        b.iter(|| {
            for (number, record) in numbers.iter().zip(records.iter()) {
                formatter.format(black_box(number.0), Some(black_box(&**record)));
            }
        })
    });

    group.bench_function("rphoneinput: format(every keystroke)", |b| {
        b.iter(|| {
            for (number, record) in numbers.iter().zip(records.iter()) {
                for end in 1..=number.0.len() {
                    formatter.format(black_box(&number.0[..end]), Some(black_box(&**record)));
                }
            }
        })
    });

    group.bench_function(format!("rust-phonenumber: format({:?})", Mode::International), |b| {
        b.iter(|| {
            for number in &rlp_numbers {
                rlp::format(black_box(number)).mode(Mode::International).to_string();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
