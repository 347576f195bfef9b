use crate::models::{
    Category, CitizenProfile, Gender, IncomeBracket, Label, Occupation, Restriction,
    SchemeRecord, TagMatchPolicy,
};

/// Age dimension: inclusive window, no wildcard
///
/// An inverted window (`min_age > max_age`) never matches.
#[inline]
pub fn matches_age(age: i32, record: &SchemeRecord) -> bool {
    age >= record.min_age && age <= record.max_age
}

/// Gender dimension: either side being unrestricted passes
#[inline]
pub fn matches_gender(gender: Restriction<Gender>, record: &SchemeRecord) -> bool {
    match (gender, record.gender) {
        (Restriction::Unrestricted, _) | (_, Restriction::Unrestricted) => true,
        (Restriction::Specific(wanted), Restriction::Specific(allowed)) => wanted == allowed,
    }
}

/// Category dimension: only the profile side has a wildcard
///
/// A record without categories never matches a specific interest.
#[inline]
pub fn matches_category(
    interest: Restriction<Category>,
    record: &SchemeRecord,
    policy: TagMatchPolicy,
) -> bool {
    match interest {
        Restriction::Unrestricted => true,
        Restriction::Specific(category) => record.category.matches(category.label(), policy),
    }
}

/// Occupation dimension: wildcard on both sides, tag match otherwise
#[inline]
pub fn matches_occupation(
    occupation: Restriction<Occupation>,
    record: &SchemeRecord,
    policy: TagMatchPolicy,
) -> bool {
    match (occupation, &record.occupation) {
        (Restriction::Unrestricted, _) | (_, Restriction::Unrestricted) => true,
        (Restriction::Specific(occupation), Restriction::Specific(tags)) => {
            tags.matches(occupation.label(), policy)
        }
    }
}

/// Income dimension: wildcard on both sides, exact label otherwise
#[inline]
pub fn matches_income(income: Restriction<IncomeBracket>, record: &SchemeRecord) -> bool {
    match (income, &record.income_threshold) {
        (Restriction::Unrestricted, _) | (_, Restriction::Unrestricted) => true,
        (Restriction::Specific(bracket), Restriction::Specific(threshold)) => {
            threshold == bracket.label()
        }
    }
}

/// A record qualifies only when every dimension passes
#[inline]
pub fn is_eligible(profile: &CitizenProfile, record: &SchemeRecord, policy: TagMatchPolicy) -> bool {
    matches_age(profile.age, record)
        && matches_gender(profile.gender, record)
        && matches_category(profile.category_interest, record, policy)
        && matches_occupation(profile.occupation, record, policy)
        && matches_income(profile.income_group, record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagSet;

    fn create_test_record() -> SchemeRecord {
        SchemeRecord {
            name: "Test Scheme".to_string(),
            scheme_type: Some("Central".to_string()),
            category: TagSet::parse("Pension,Savings"),
            gender: Restriction::Specific(Gender::Female),
            occupation: Restriction::Specific(TagSet::parse("Pensioner,Senior citizen")),
            min_age: 18,
            max_age: 25,
            income_threshold: Restriction::Specific("BPL".to_string()),
            description: None,
            benefit: None,
            docs: None,
        }
    }

    #[test]
    fn test_age_window_is_inclusive() {
        let record = create_test_record();

        assert!(matches_age(18, &record));
        assert!(matches_age(25, &record));
        assert!(!matches_age(17, &record));
        assert!(!matches_age(26, &record));
    }

    #[test]
    fn test_inverted_age_window_never_matches() {
        let mut record = create_test_record();
        record.min_age = 60;
        record.max_age = 18;

        assert!((0..=120).all(|age| !matches_age(age, &record)));
    }

    #[test]
    fn test_gender_wildcards() {
        let mut record = create_test_record();

        assert!(matches_gender(Restriction::Unrestricted, &record));
        assert!(matches_gender(Restriction::Specific(Gender::Female), &record));
        assert!(!matches_gender(Restriction::Specific(Gender::Male), &record));

        record.gender = Restriction::Unrestricted;
        for gender in [Gender::Male, Gender::Female, Gender::Transgender] {
            assert!(matches_gender(Restriction::Specific(gender), &record));
        }
    }

    #[test]
    fn test_category_substring_policy() {
        let record = create_test_record();
        let policy = TagMatchPolicy::Substring;

        assert!(matches_category(Restriction::Specific(Category::Pension), &record, policy));
        assert!(matches_category(Restriction::Specific(Category::Savings), &record, policy));
        assert!(!matches_category(Restriction::Specific(Category::Insurance), &record, policy));
        assert!(matches_category(Restriction::Unrestricted, &record, policy));
    }

    #[test]
    fn test_empty_category_never_matches_specific() {
        let mut record = create_test_record();
        record.category = TagSet::default();

        assert!(!matches_category(
            Restriction::Specific(Category::Pension),
            &record,
            TagMatchPolicy::Substring
        ));
        assert!(matches_category(Restriction::Unrestricted, &record, TagMatchPolicy::Substring));
    }

    #[test]
    fn test_occupation_partial_word_depends_on_policy() {
        let mut record = create_test_record();
        record.occupation = Restriction::Specific(TagSet::parse("Senior citizen"));
        let wanted = Restriction::Specific(Occupation::SeniorCitizen);

        assert!(matches_occupation(wanted, &record, TagMatchPolicy::Exact));
        assert!(matches_occupation(wanted, &record, TagMatchPolicy::Substring));

        // "Pension" sits inside "Pensioner" but is not that tag
        record.category = TagSet::parse("Pensioner benefits");
        let pension = Restriction::Specific(Category::Pension);
        assert!(matches_category(pension, &record, TagMatchPolicy::Substring));
        assert!(!matches_category(pension, &record, TagMatchPolicy::Exact));
    }

    #[test]
    fn test_occupation_wildcards() {
        let mut record = create_test_record();
        let student = Restriction::Specific(Occupation::Student);

        assert!(!matches_occupation(student, &record, TagMatchPolicy::Substring));
        assert!(matches_occupation(Restriction::Unrestricted, &record, TagMatchPolicy::Substring));

        record.occupation = Restriction::Unrestricted;
        assert!(matches_occupation(student, &record, TagMatchPolicy::Substring));

        record.occupation = Restriction::Specific(TagSet::default());
        assert!(!matches_occupation(student, &record, TagMatchPolicy::Substring));
    }

    #[test]
    fn test_income_exact_label() {
        let mut record = create_test_record();

        assert!(matches_income(Restriction::Specific(IncomeBracket::BelowPovertyLine), &record));
        assert!(!matches_income(Restriction::Specific(IncomeBracket::UptoTwoLakh), &record));
        assert!(matches_income(Restriction::Unrestricted, &record));

        record.income_threshold = Restriction::Unrestricted;
        assert!(matches_income(Restriction::Specific(IncomeBracket::UptoThreeLakh), &record));

        record.income_threshold = Restriction::Specific(String::new());
        assert!(!matches_income(Restriction::Specific(IncomeBracket::UptoThreeLakh), &record));
    }

    #[test]
    fn test_is_eligible_requires_every_dimension() {
        let record = create_test_record();
        let profile = CitizenProfile {
            age: 20,
            gender: Restriction::Specific(Gender::Female),
            category_interest: Restriction::Specific(Category::Pension),
            occupation: Restriction::Specific(Occupation::Pensioner),
            income_group: Restriction::Specific(IncomeBracket::BelowPovertyLine),
        };
        assert!(is_eligible(&profile, &record, TagMatchPolicy::Substring));

        let wrong_income = CitizenProfile {
            income_group: Restriction::Specific(IncomeBracket::UptoTwoLakh),
            ..profile
        };
        assert!(!is_eligible(&wrong_income, &record, TagMatchPolicy::Substring));

        let too_old = CitizenProfile { age: 30, ..profile };
        assert!(!is_eligible(&too_old, &record, TagMatchPolicy::Substring));
    }
}
