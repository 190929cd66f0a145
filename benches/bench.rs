// Criterion benchmarks for Loan Qualifier

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loan_qualifier::core::{
    filters::{filter_credit_score, filter_max_loan_size},
    loan_to_value_ratio, monthly_debt_ratio, Qualifier,
};
use loan_qualifier::models::{ApplicantProfile, LoanOffer};
use loan_qualifier::services::parse_rate_sheet;

fn create_offer(id: usize) -> LoanOffer {
    LoanOffer {
        lender: format!("Lender {}", id),
        max_loan_amount: 100_000.0 + (id % 10) as f64 * 50_000.0,
        max_ltv: 0.70 + (id % 4) as f64 * 0.05,
        max_dti: 0.35 + (id % 5) as f64 * 0.03,
        min_credit_score: 600 + (id % 8) as u32 * 25,
        interest_rate: 3.0 + (id % 7) as f64 * 0.25,
    }
}

fn create_applicant() -> ApplicantProfile {
    ApplicantProfile {
        credit_score: 720,
        monthly_debt: 1500.0,
        monthly_income: 4000.0,
        loan_amount: 250_000.0,
        home_value: 320_000.0,
    }
}

fn bench_ratios(c: &mut Criterion) {
    c.bench_function("ratio_calculation", |b| {
        b.iter(|| {
            let dti = monthly_debt_ratio(black_box(1500.0), black_box(4000.0));
            let ltv = loan_to_value_ratio(black_box(250_000.0), black_box(320_000.0));
            (dti, ltv)
        });
    });
}

fn bench_qualifying(c: &mut Criterion) {
    let qualifier = Qualifier::new();
    let applicant = create_applicant();

    let mut group = c.benchmark_group("qualifying");

    for offer_count in [10, 100, 1000, 10_000].iter() {
        let sheet: Vec<LoanOffer> = (0..*offer_count).map(create_offer).collect();

        group.bench_with_input(
            BenchmarkId::new("find_qualifying_loans", offer_count),
            offer_count,
            |b, _| {
                b.iter(|| qualifier.find_qualifying_loans(black_box(&sheet), black_box(&applicant)));
            },
        );
    }

    group.finish();
}

fn bench_single_filters(c: &mut Criterion) {
    let sheet: Vec<LoanOffer> = (0..1000).map(create_offer).collect();

    c.bench_function("filter_max_loan_size_1000_offers", |b| {
        b.iter(|| filter_max_loan_size(black_box(250_000.0), black_box(&sheet)));
    });

    c.bench_function("filter_credit_score_1000_offers", |b| {
        b.iter(|| filter_credit_score(black_box(720), black_box(&sheet)));
    });
}

fn bench_parse_rate_sheet(c: &mut Criterion) {
    let mut csv = String::from("Lender,Max Loan Amount,Max LTV,Max DTI,Min Credit Score,Interest Rate\n");
    for offer in (0..1000).map(create_offer) {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            offer.lender,
            offer.max_loan_amount,
            offer.max_ltv,
            offer.max_dti,
            offer.min_credit_score,
            offer.interest_rate
        ));
    }

    c.bench_function("parse_rate_sheet_1000_rows", |b| {
        b.iter(|| parse_rate_sheet(black_box(csv.as_bytes())));
    });
}

criterion_group!(
    benches,
    bench_ratios,
    bench_qualifying,
    bench_single_filters,
    bench_parse_rate_sheet
);

criterion_main!(benches);
