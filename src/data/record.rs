//! Dataset Record Module
//! Typed row schema for the bank-marketing dataset.

use serde::Serialize;

/// Column names in schema order, matching the dataset header.
pub const COLUMNS: [&str; 17] = [
    "age",
    "job",
    "marital",
    "education",
    "default",
    "balance",
    "housing",
    "loan",
    "contact",
    "day",
    "month",
    "duration",
    "campaign",
    "pdays",
    "previous",
    "poutcome",
    "deposit",
];

/// Numeric columns, the subset of [`COLUMNS`] that participates in the
/// mean-features report.
pub const NUMERIC_COLUMNS: [&str; 7] = [
    "age",
    "balance",
    "day",
    "duration",
    "campaign",
    "pdays",
    "previous",
];

/// One client/campaign row.
///
/// Values are parsed and validated once at load time; everything downstream
/// reads them without further checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub age: i64,
    pub job: String,
    pub marital: String,
    pub education: String,
    pub default: String,
    pub balance: i64,
    pub housing: String,
    pub loan: String,
    pub contact: String,
    pub day: i64,
    pub month: String,
    pub duration: i64,
    pub campaign: i64,
    pub pdays: i64,
    pub previous: i64,
    pub poutcome: String,
    pub deposit: String,
}

impl Record {
    /// Whether this client accepted the term deposit offer.
    pub fn is_subscribed(&self) -> bool {
        self.deposit == "yes"
    }

    /// Whether this client is unmarried.
    pub fn is_single(&self) -> bool {
        self.marital == "single"
    }

    /// Values of the numeric columns, in [`NUMERIC_COLUMNS`] order.
    pub fn numeric_values(&self) -> [f64; NUMERIC_COLUMNS.len()] {
        [
            self.age as f64,
            self.balance as f64,
            self.day as f64,
            self.duration as f64,
            self.campaign as f64,
            self.pdays as f64,
            self.previous as f64,
        ]
    }

    /// All field values rendered as text, in [`COLUMNS`] order.
    pub fn field_values(&self) -> [String; COLUMNS.len()] {
        [
            self.age.to_string(),
            self.job.clone(),
            self.marital.clone(),
            self.education.clone(),
            self.default.clone(),
            self.balance.to_string(),
            self.housing.clone(),
            self.loan.clone(),
            self.contact.clone(),
            self.day.to_string(),
            self.month.clone(),
            self.duration.to_string(),
            self.campaign.to_string(),
            self.pdays.to_string(),
            self.previous.to_string(),
            self.poutcome.clone(),
            self.deposit.clone(),
        ]
    }
}

/// The full immutable collection of records, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Read access to the raw records, for table preview, export, and the
    /// chart derivations.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
