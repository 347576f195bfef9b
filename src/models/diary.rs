use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Financial diary form as the citizen fills it in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DiaryForm {
    #[validate(range(min = 0.0))]
    #[serde(default = "default_gross_salary")]
    pub gross_salary: f64,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_deductions_80c")]
    pub other_deductions_80c: f64,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_health_insurance")]
    pub health_insurance: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub nps_voluntary: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub equity_ltcg_profit: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub equity_stcg_profit: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub rental_income: f64,
}

fn default_gross_salary() -> f64 { 1_200_000.0 }
fn default_deductions_80c() -> f64 { 150_000.0 }
fn default_health_insurance() -> f64 { 25_000.0 }

impl Default for DiaryForm {
    fn default() -> Self {
        Self {
            gross_salary: default_gross_salary(),
            other_deductions_80c: default_deductions_80c(),
            health_insurance: default_health_insurance(),
            nps_voluntary: 0.0,
            equity_ltcg_profit: 0.0,
            equity_stcg_profit: 0.0,
            rental_income: 0.0,
        }
    }
}

/// One capital asset transaction sent to the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentEntry {
    pub asset_name: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub asset_type: String,
    pub is_long_term: bool,
}

/// One house property sent to the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub property_name: String,
    pub rental_income: f64,
    pub municipal_taxes: f64,
    pub loan_interest: f64,
    pub is_self_occupied: bool,
}

/// Body of `POST /analyze-diary` on the tax calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeDiaryRequest {
    pub gross_salary: f64,
    pub other_deductions_80c: f64,
    pub health_insurance: f64,
    pub nps_voluntary: f64,
    pub investments: Vec<InvestmentEntry>,
    pub properties: Vec<PropertyEntry>,
}

impl DiaryForm {
    /// Build the calculator payload from the form
    ///
    /// Equity profits are sent as zero-cost sales so the calculator taxes the
    /// whole amount; a rented property is only included when it earns rent.
    pub fn to_request(&self) -> AnalyzeDiaryRequest {
        let investments = vec![
            InvestmentEntry {
                asset_name: "Equity Portfolio (LTCG)".to_string(),
                buy_price: 0.0,
                sell_price: self.equity_ltcg_profit,
                asset_type: "equity".to_string(),
                is_long_term: true,
            },
            InvestmentEntry {
                asset_name: "Equity Portfolio (STCG)".to_string(),
                buy_price: 0.0,
                sell_price: self.equity_stcg_profit,
                asset_type: "equity".to_string(),
                is_long_term: false,
            },
        ];

        let properties = if self.rental_income > 0.0 {
            vec![PropertyEntry {
                property_name: "Rented House".to_string(),
                rental_income: self.rental_income,
                municipal_taxes: 0.0,
                loan_interest: 0.0,
                is_self_occupied: false,
            }]
        } else {
            vec![]
        };

        AnalyzeDiaryRequest {
            gross_salary: self.gross_salary,
            other_deductions_80c: self.other_deductions_80c,
            health_insurance: self.health_insurance,
            nps_voluntary: self.nps_voluntary,
            investments,
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeSummary {
    pub best_regime: String,
    pub savings: f64,
}

/// One bar group of the old-vs-new regime chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub label: String,
    #[serde(rename = "Old Regime")]
    pub old_regime: f64,
    #[serde(rename = "New Regime")]
    pub new_regime: f64,
}

/// Calculator response, relayed to the client unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeDiaryResponse {
    pub summary: RegimeSummary,
    pub comparison_chart: Vec<RegimeComparison>,
    #[serde(default)]
    pub details: Value,
    /// Any further fields the calculator sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
