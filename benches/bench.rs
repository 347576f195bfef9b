// Criterion benchmarks for the eligibility engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use govme_schemes::core::{EligibilityEngine, FinderSession, ProfileEdit};
use govme_schemes::models::{
    Category, CitizenProfile, Gender, Occupation, Restriction, SchemeRecord, TagMatchPolicy, TagSet,
};
use govme_schemes::services::InMemoryCatalog;

const CATEGORIES: &[&str] = &["Pension,Savings", "Insurance", "Education subsidy", "Subsidy,Cash transfer"];
const OCCUPATIONS: &[&str] = &["Any", "Student", "Pensioner,Senior citizen", "Salaried,Self-employed"];

fn create_scheme(id: usize) -> SchemeRecord {
    let occupation = OCCUPATIONS[id % OCCUPATIONS.len()];
    SchemeRecord {
        name: format!("Scheme {}", id),
        scheme_type: Some("Central".to_string()),
        category: TagSet::parse(CATEGORIES[id % CATEGORIES.len()]),
        gender: if id % 3 == 0 {
            Restriction::Specific(Gender::Female)
        } else {
            Restriction::Unrestricted
        },
        occupation: if occupation == "Any" {
            Restriction::Unrestricted
        } else {
            Restriction::Specific(TagSet::parse(occupation))
        },
        min_age: (id % 60) as i32,
        max_age: (id % 60) as i32 + 40,
        income_threshold: Restriction::Unrestricted,
        description: None,
        benefit: None,
        docs: None,
    }
}

fn create_profile() -> CitizenProfile {
    CitizenProfile {
        age: 45,
        gender: Restriction::Specific(Gender::Female),
        category_interest: Restriction::Specific(Category::Pension),
        occupation: Restriction::Specific(Occupation::Pensioner),
        income_group: Restriction::Unrestricted,
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let profile = create_profile();
    let mut group = c.benchmark_group("evaluate");

    for scheme_count in [10, 100, 1000].iter() {
        let catalog: Vec<SchemeRecord> = (0..*scheme_count).map(create_scheme).collect();

        for policy in [TagMatchPolicy::Substring, TagMatchPolicy::Exact] {
            let engine = EligibilityEngine::new(policy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), scheme_count),
                scheme_count,
                |b, _| b.iter(|| engine.evaluate(black_box(&profile), black_box(&catalog))),
            );
        }
    }

    group.finish();
}

fn bench_session_edits(c: &mut Criterion) {
    let catalog = InMemoryCatalog::new((0..500).map(create_scheme).collect());
    let mut session = FinderSession::default();
    tokio_test::block_on(session.activate(&catalog));

    c.bench_function("session_edit_cycle_500_schemes", |b| {
        b.iter(|| {
            session.apply(black_box(ProfileEdit::Age(62)));
            session.apply(black_box(ProfileEdit::Category(Restriction::Specific(Category::Pension))));
            session.apply(ProfileEdit::Reset);
            black_box(session.count())
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_session_edits);

criterion_main!(benches);
