//! Room-booking line items as handed over by the booking-creation flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{null_as_default, Displayable};

/// One room booking's charge contribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomBookingLine {
    pub check_in: DateTime<Utc>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_bed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_breakfast: bool,
    /// Missing or null rent is read as zero.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl RoomBookingLine {
    pub fn new(check_in: DateTime<Utc>, rent: f64) -> Self {
        Self {
            check_in,
            kind: None,
            room_type_title: None,
            extra_bed: false,
            extra_breakfast: false,
            rent,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_room_type(mut self, title: impl Into<String>) -> Self {
        self.room_type_title = Some(title.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_extras(mut self, extra_bed: bool, extra_breakfast: bool) -> Self {
        self.extra_bed = extra_bed;
        self.extra_breakfast = extra_breakfast;
        self
    }

    /// Discount applied to this line, zero when none was given.
    pub fn discount_or_zero(&self) -> f64 {
        self.discount.unwrap_or(0.0)
    }

    /// Human-readable add-on annotations ("Extra Bed", "Extra Breakfast").
    pub fn add_ons(&self) -> Vec<&'static str> {
        let mut extras = Vec::new();
        if self.extra_bed {
            extras.push("Extra Bed");
        }
        if self.extra_breakfast {
            extras.push("Extra Breakfast");
        }
        extras
    }
}

impl Displayable for RoomBookingLine {
    fn display_label(&self) -> String {
        let mut label = String::new();
        if let Some(kind) = self.kind.as_deref().filter(|k| !k.is_empty()) {
            label.push_str(kind);
        }
        if let Some(title) = self.room_type_title.as_deref().filter(|t| !t.is_empty()) {
            if !label.is_empty() {
                label.push(' ');
            }
            label.push_str(title);
        }
        if label.is_empty() {
            label.push_str("Room");
        }
        let extras = self.add_ons();
        if !extras.is_empty() {
            label.push_str(&format!(" ({})", extras.join(" + ")));
        }
        label
    }
}

/// The booking under construction: identifiers plus its room lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub room_bookings: Option<Vec<RoomBookingLine>>,
}

impl BookingSnapshot {
    /// Room lines, or an empty slice when the booking carries none.
    pub fn lines(&self) -> &[RoomBookingLine] {
        self.room_bookings.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn check_in() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn label_combines_tag_title_and_extras() {
        let line = RoomBookingLine::new(check_in(), 1000.0)
            .with_room_type("Deluxe")
            .with_extras(true, true);
        assert_eq!(line.display_label(), "Deluxe (Extra Bed + Extra Breakfast)");

        let tagged = RoomBookingLine::new(check_in(), 500.0).with_kind("Suite");
        assert_eq!(tagged.display_label(), "Suite");
    }

    #[test]
    fn missing_rent_and_discount_deserialize_as_defaults() {
        let raw = r#"{ "checkIn": "2024-01-10T12:00:00Z", "roomTypeTitle": "Twin" }"#;
        let line: RoomBookingLine = serde_json::from_str(raw).expect("valid line");
        assert_eq!(line.rent, 0.0);
        assert_eq!(line.discount, None);
        assert_eq!(line.discount_or_zero(), 0.0);
        assert!(!line.extra_bed);
    }

    #[test]
    fn null_rent_and_extras_deserialize_as_defaults() {
        let raw = r#"{
            "checkIn": "2024-01-10T12:00:00Z",
            "rent": null,
            "discount": null,
            "extraBed": null,
            "extraBreakfast": null
        }"#;
        let line: RoomBookingLine = serde_json::from_str(raw).expect("nulls are accepted");
        assert_eq!(line.rent, 0.0);
        assert_eq!(line.discount, None);
        assert!(!line.extra_bed);
        assert!(!line.extra_breakfast);
        assert_eq!(line.display_label(), "Room");
    }

    #[test]
    fn snapshot_with_null_fields_still_loads() {
        let raw = r#"{
            "bookingId": null,
            "roomBookings": [
                { "checkIn": "2024-01-10T12:00:00Z", "rent": 800, "extraBed": null },
                { "checkIn": "2024-01-11T12:00:00Z", "rent": null }
            ]
        }"#;
        let snapshot: BookingSnapshot = serde_json::from_str(raw).expect("valid snapshot");
        assert_eq!(snapshot.booking_id, None);
        let rents: Vec<f64> = snapshot.lines().iter().map(|line| line.rent).collect();
        assert_eq!(rents, vec![800.0, 0.0]);
    }

    #[test]
    fn snapshot_without_rooms_has_no_lines() {
        let snapshot: BookingSnapshot =
            serde_json::from_str(r#"{ "bookingId": "b1" }"#).expect("valid snapshot");
        assert_eq!(snapshot.booking_id.as_deref(), Some("b1"));
        assert!(snapshot.lines().is_empty());
    }
}
