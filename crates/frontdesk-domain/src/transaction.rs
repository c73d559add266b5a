//! Domain models for financial transactions recorded against a booking.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{calendar_date, Displayable};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
/// Whether money came in or went out.
pub enum TransactionCategory {
    Income,
    Expense,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 2] =
        [TransactionCategory::Income, TransactionCategory::Expense];
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionCategory::Income => "Income",
            TransactionCategory::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionSubCategory {
    Salary,
    Electricity,
    Water,
    Rent,
    OtherExpense,
    RoomRent,
}

impl TransactionSubCategory {
    pub const ALL: [TransactionSubCategory; 6] = [
        TransactionSubCategory::Salary,
        TransactionSubCategory::Electricity,
        TransactionSubCategory::Water,
        TransactionSubCategory::Rent,
        TransactionSubCategory::OtherExpense,
        TransactionSubCategory::RoomRent,
    ];
}

impl fmt::Display for TransactionSubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionSubCategory::Salary => "Salary",
            TransactionSubCategory::Electricity => "Electricity",
            TransactionSubCategory::Water => "Water",
            TransactionSubCategory::Rent => "Rent",
            TransactionSubCategory::OtherExpense => "Other Expense",
            TransactionSubCategory::RoomRent => "Room Rent",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cash,
    Bank,
    Bkash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Bank, PaymentMethod::Bkash];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Bank => "Bank",
            PaymentMethod::Bkash => "Bkash",
        };
        f.write_str(label)
    }
}

/// User-entered transaction data that the server has not confirmed yet.
///
/// `amount` keeps the raw text from the entry form; it is coerced to a number
/// only when the draft is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDraft {
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub category: TransactionCategory,
    pub sub_category: TransactionSubCategory,
    pub method: PaymentMethod,
    pub description: String,
    pub amount: String,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        category: TransactionCategory,
        sub_category: TransactionSubCategory,
        method: PaymentMethod,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category,
            sub_category,
            method,
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// Payload of the `createTransaction` mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionInput {
    pub contact: String,
    pub booking: Option<String>,
    pub hotel: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub category: TransactionCategory,
    pub sub_category: TransactionSubCategory,
    pub method: PaymentMethod,
    pub description: String,
    pub amount: f64,
}

/// Server-confirmed transaction echoed back after a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedTransaction {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub category: TransactionCategory,
    pub sub_category: TransactionSubCategory,
    pub method: PaymentMethod,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
}

impl Displayable for RecordedTransaction {
    fn display_label(&self) -> String {
        format!(
            "txn:{} {} {} via {}",
            self.id, self.category, self.amount, self.method
        )
    }
}
