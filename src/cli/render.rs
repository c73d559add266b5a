//! Plain-text rendering of the booking-summary panel.

use std::fmt::Write;

use frontdesk_core::{format_amount, ReceiptView, SummaryView};

const WIDTH: usize = 40;

fn separator(out: &mut String) {
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
}

fn row(out: &mut String, label: &str, value: &str) {
    let pad = WIDTH.saturating_sub(label.chars().count() + value.chars().count()).max(1);
    let _ = writeln!(out, "{label}{}{value}", " ".repeat(pad));
}

/// Renders the summary panel, with the receipt section when one is retained.
pub fn render_summary(view: &SummaryView, receipt: Option<&ReceiptView>) -> String {
    let mut out = String::from("Booking Summary\n");
    match view {
        SummaryView::Full {
            lines,
            totals,
            vat_note,
        } => {
            for line in lines {
                row(&mut out, &line.label, &format_amount(line.rent));
            }
            separator(&mut out);
            row(&mut out, "Subtotal", &format_amount(totals.subtotal));
            row(&mut out, "Discount", &format_amount(totals.discount_total));
            separator(&mut out);
            row(&mut out, "Grand Total", &format_amount(totals.grand_total()));
            out.push_str(vat_note);
            out.push_str("\n\nTransactions\n");
            if let Some(receipt) = receipt {
                out.push_str(&render_receipt(receipt));
            }
            separator(&mut out);
            row(&mut out, "Due", &format_amount(totals.due));
        }
        SummaryView::DueOnly { due } => {
            separator(&mut out);
            row(&mut out, "Due", &format_amount(*due));
        }
    }
    out
}

pub fn render_receipt(receipt: &ReceiptView) -> String {
    let mut out = String::new();
    for (label, value) in &receipt.fields {
        let _ = writeln!(out, "{label}: {value}");
    }
    out
}
