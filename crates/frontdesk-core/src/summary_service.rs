use chrono::{DateTime, Utc};

use frontdesk_domain::{Displayable, RecordedTransaction, RoomBookingLine, SessionContext};

use crate::charge_service::{ChargeService, ChargeTotals};
use crate::format::{format_amount, format_date};

pub const VAT_NOTE: &str = "Inclusive of 15% Value Added Tax (VAT)";

#[derive(Debug, Clone, PartialEq)]
pub struct LineItemView {
    pub check_in: DateTime<Utc>,
    pub label: String,
    pub rent: f64,
}

impl From<&RoomBookingLine> for LineItemView {
    fn from(line: &RoomBookingLine) -> Self {
        Self {
            check_in: line.check_in,
            label: line.display_label(),
            rent: line.rent,
        }
    }
}

/// What the booking-summary panel shows for the acting user.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    /// Full breakdown for elevated users.
    Full {
        lines: Vec<LineItemView>,
        totals: ChargeTotals,
        vat_note: &'static str,
    },
    /// Everyone else only sees what is still owed.
    DueOnly { due: f64 },
}

impl SummaryView {
    pub fn due(&self) -> f64 {
        match self {
            SummaryView::Full { totals, .. } => totals.due,
            SummaryView::DueOnly { due } => *due,
        }
    }
}

/// Label/value pairs describing a recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptView {
    pub fields: Vec<(&'static str, String)>,
}

impl ReceiptView {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value.as_str())
    }
}

impl From<&RecordedTransaction> for ReceiptView {
    fn from(txn: &RecordedTransaction) -> Self {
        Self {
            fields: vec![
                ("Date", format_date(txn.date)),
                ("Description", txn.description.clone()),
                ("Category", txn.category.to_string()),
                ("Sub-Category", txn.sub_category.to_string()),
                ("Method", txn.method.to_string()),
                ("Amount", format_amount(txn.amount)),
            ],
        }
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn project(lines: &[RoomBookingLine], session: &SessionContext) -> SummaryView {
        let totals = ChargeService::totals(lines);
        if session.is_elevated() {
            SummaryView::Full {
                lines: lines.iter().map(LineItemView::from).collect(),
                totals,
                vat_note: VAT_NOTE,
            }
        } else {
            SummaryView::DueOnly { due: totals.due }
        }
    }

    pub fn receipt(txn: &RecordedTransaction) -> ReceiptView {
        ReceiptView::from(txn)
    }
}
