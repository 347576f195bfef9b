use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Age a fresh or reset profile starts with
pub const DEFAULT_AGE: i32 = 25;

/// Errors raised when a profile value does not name a known option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Unknown {dimension} option: {value}")]
    UnknownLabel {
        dimension: &'static str,
        value: String,
    },
}

/// Reasons a catalog row is quarantined instead of entering the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("Unknown gender restriction: {0}")]
    UnknownGender(String),

    #[error("Row does not have the scheme shape: {0}")]
    Shape(String),
}

/// A closed set of selectable options on one eligibility dimension
pub trait Label: Sized + Copy + PartialEq + 'static {
    /// Name of the dimension, used in error messages
    const DIMENSION: &'static str;
    /// Label that means "impose no restriction on this dimension"
    const WILDCARD: &'static str;
    const VARIANTS: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(value))
    }
}

/// Either side of an eligibility dimension: no restriction, or one specific value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Restriction<T> {
    Unrestricted,
    Specific(T),
}

impl<T> Default for Restriction<T> {
    fn default() -> Self {
        Restriction::Unrestricted
    }
}

impl<T> Restriction<T> {
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Restriction::Unrestricted)
    }

    pub fn specific(&self) -> Option<&T> {
        match self {
            Restriction::Unrestricted => None,
            Restriction::Specific(value) => Some(value),
        }
    }
}

impl<T: Label> Restriction<T> {
    /// Parse a label, treating the dimension's wildcard as `Unrestricted`
    pub fn parse(value: &str) -> Result<Self, ProfileError> {
        if value.trim().eq_ignore_ascii_case(T::WILDCARD) {
            return Ok(Restriction::Unrestricted);
        }

        T::from_label(value)
            .map(Restriction::Specific)
            .ok_or_else(|| ProfileError::UnknownLabel {
                dimension: T::DIMENSION,
                value: value.to_string(),
            })
    }

    /// Parse a label exactly as stored in the catalog, with no trimming or case folding
    pub fn parse_exact(value: &str) -> Option<Self> {
        if value == T::WILDCARD {
            return Some(Restriction::Unrestricted);
        }

        T::VARIANTS
            .iter()
            .copied()
            .find(|v| v.label() == value)
            .map(Restriction::Specific)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Restriction::Unrestricted => T::WILDCARD,
            Restriction::Specific(value) => value.label(),
        }
    }
}

impl<T: Label> Serialize for Restriction<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de, T: Label> Deserialize<'de> for Restriction<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Restriction::parse(&raw).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Transgender,
}

impl Label for Gender {
    const DIMENSION: &'static str = "gender";
    const WILDCARD: &'static str = "All";
    const VARIANTS: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Transgender];

    fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Transgender => "Transgender",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CashTransfer,
    EducationSubsidy,
    FinancialInclusion,
    Insurance,
    Pension,
    Savings,
    SkillDevelopment,
    Subsidy,
    TaxBenefit,
}

impl Label for Category {
    const DIMENSION: &'static str = "category";
    const WILDCARD: &'static str = "All";
    const VARIANTS: &'static [Self] = &[
        Category::CashTransfer,
        Category::EducationSubsidy,
        Category::FinancialInclusion,
        Category::Insurance,
        Category::Pension,
        Category::Savings,
        Category::SkillDevelopment,
        Category::Subsidy,
        Category::TaxBenefit,
    ];

    fn label(self) -> &'static str {
        match self {
            Category::CashTransfer => "Cash transfer",
            Category::EducationSubsidy => "Education subsidy",
            Category::FinancialInclusion => "Financial Inclusion",
            Category::Insurance => "Insurance",
            Category::Pension => "Pension",
            Category::Savings => "Savings",
            // Spelled the way the catalog stores it
            Category::SkillDevelopment => "Skill Devleopment",
            Category::Subsidy => "Subsidy",
            Category::TaxBenefit => "Tax Benefit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupation {
    Household,
    InformalSector,
    LandholdingFarmer,
    Pensioner,
    Salaried,
    SelfEmployed,
    SeniorCitizen,
    Student,
    Unemployed,
    UnorganisedWorker,
}

impl Label for Occupation {
    const DIMENSION: &'static str = "occupation";
    const WILDCARD: &'static str = "Any";
    const VARIANTS: &'static [Self] = &[
        Occupation::Household,
        Occupation::InformalSector,
        Occupation::LandholdingFarmer,
        Occupation::Pensioner,
        Occupation::Salaried,
        Occupation::SelfEmployed,
        Occupation::SeniorCitizen,
        Occupation::Student,
        Occupation::Unemployed,
        Occupation::UnorganisedWorker,
    ];

    fn label(self) -> &'static str {
        match self {
            Occupation::Household => "Household",
            Occupation::InformalSector => "Informal sector",
            Occupation::LandholdingFarmer => "Landholding farmer",
            Occupation::Pensioner => "Pensioner",
            Occupation::Salaried => "Salaried",
            Occupation::SelfEmployed => "Self-employed",
            Occupation::SeniorCitizen => "Senior citizen",
            Occupation::Student => "Student",
            Occupation::Unemployed => "Unemployed",
            Occupation::UnorganisedWorker => "Unorganised worker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeBracket {
    BelowPovertyLine,
    UptoTwoLakh,
    UptoThreeLakh,
}

impl Label for IncomeBracket {
    const DIMENSION: &'static str = "income group";
    const WILDCARD: &'static str = "All";
    const VARIANTS: &'static [Self] = &[
        IncomeBracket::BelowPovertyLine,
        IncomeBracket::UptoTwoLakh,
        IncomeBracket::UptoThreeLakh,
    ];

    fn label(self) -> &'static str {
        match self {
            IncomeBracket::BelowPovertyLine => "BPL",
            IncomeBracket::UptoTwoLakh => "Upto ₹2,00,000",
            IncomeBracket::UptoThreeLakh => "Upto ₹3,00,000",
        }
    }
}

/// How a profile option is compared against a record's tag list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatchPolicy {
    /// Any tag containing the option as a substring counts ("Pension" hits "Pensioner")
    #[default]
    Substring,
    /// Only a whole tag equal to the option counts
    Exact,
}

/// Parsed form of a comma-joined tag column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// First tag, used as the headline category when displaying a scheme
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn matches(&self, option: &str, policy: TagMatchPolicy) -> bool {
        match policy {
            TagMatchPolicy::Substring => self.iter().any(|tag| tag.contains(option)),
            TagMatchPolicy::Exact => self.iter().any(|tag| tag == option),
        }
    }

    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// The filter criteria a citizen has currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenProfile {
    pub age: i32,
    pub gender: Restriction<Gender>,
    pub category_interest: Restriction<Category>,
    pub occupation: Restriction<Occupation>,
    pub income_group: Restriction<IncomeBracket>,
}

impl Default for CitizenProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: Restriction::Unrestricted,
            category_interest: Restriction::Unrestricted,
            occupation: Restriction::Unrestricted,
            income_group: Restriction::Unrestricted,
        }
    }
}

/// A catalog row as the store returns it, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemeRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(alias = "minAge", default)]
    pub min_age: Option<Value>,
    #[serde(alias = "maxAge", default)]
    pub max_age: Option<Value>,
    #[serde(alias = "incomeThreshold", default, skip_serializing_if = "Option::is_none")]
    pub income_threshold: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// One benefit program with validated eligibility metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemeRow", into = "SchemeRow")]
pub struct SchemeRecord {
    pub name: String,
    pub scheme_type: Option<String>,
    pub category: TagSet,
    pub gender: Restriction<Gender>,
    pub occupation: Restriction<TagSet>,
    pub min_age: i32,
    pub max_age: i32,
    /// Bracket label; an absent column is kept as an empty label that never matches
    pub income_threshold: Restriction<String>,
    pub description: Option<String>,
    pub benefit: Option<String>,
    pub docs: Option<String>,
}

const OCCUPATION_WILDCARD: &str = "Any";
const INCOME_WILDCARD: &str = "None";

fn integer_field(field: &'static str, value: Option<Value>) -> Result<i32, MalformedRecord> {
    let value = value
        .filter(|v| !v.is_null())
        .ok_or(MalformedRecord::MissingField(field))?;

    let parsed = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| MalformedRecord::NotAnInteger {
            field,
            value: value.to_string(),
        })
}

impl TryFrom<SchemeRow> for SchemeRecord {
    type Error = MalformedRecord;

    fn try_from(row: SchemeRow) -> Result<Self, Self::Error> {
        let name = row
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(MalformedRecord::MissingField("name"))?;

        let raw_gender = row.gender.ok_or(MalformedRecord::MissingField("gender"))?;
        let gender = Restriction::<Gender>::parse_exact(&raw_gender)
            .ok_or_else(|| MalformedRecord::UnknownGender(raw_gender.clone()))?;

        let occupation = match row.occupation.as_deref().map(str::trim) {
            Some(OCCUPATION_WILDCARD) => Restriction::Unrestricted,
            Some(raw) => Restriction::Specific(TagSet::parse(raw)),
            None => Restriction::Specific(TagSet::default()),
        };

        let income_threshold = match row.income_threshold.as_deref().map(str::trim) {
            Some(INCOME_WILDCARD) => Restriction::Unrestricted,
            Some(label) => Restriction::Specific(label.to_string()),
            None => Restriction::Specific(String::new()),
        };

        Ok(Self {
            name,
            scheme_type: row.scheme_type,
            category: row.category.as_deref().map(TagSet::parse).unwrap_or_default(),
            gender,
            occupation,
            min_age: integer_field("min_age", row.min_age)?,
            max_age: integer_field("max_age", row.max_age)?,
            income_threshold,
            description: row.description,
            benefit: row.benefit,
            docs: row.docs,
        })
    }
}

impl From<SchemeRecord> for SchemeRow {
    fn from(record: SchemeRecord) -> Self {
        let occupation = match &record.occupation {
            Restriction::Unrestricted => Some(OCCUPATION_WILDCARD.to_string()),
            Restriction::Specific(tags) if tags.is_empty() => None,
            Restriction::Specific(tags) => Some(tags.joined()),
        };
        let income_threshold = match &record.income_threshold {
            Restriction::Unrestricted => Some(INCOME_WILDCARD.to_string()),
            Restriction::Specific(label) if label.is_empty() => None,
            Restriction::Specific(label) => Some(label.clone()),
        };

        Self {
            name: Some(record.name),
            scheme_type: record.scheme_type,
            category: (!record.category.is_empty()).then(|| record.category.joined()),
            gender: Some(record.gender.label().to_string()),
            occupation,
            min_age: Some(Value::from(record.min_age)),
            max_age: Some(Value::from(record.max_age)),
            income_threshold,
            description: record.description,
            benefit: record.benefit,
            docs: record.docs,
        }
    }
}
