// crates/venue-core/src/model/venue.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One bookable sports facility.
///
/// Venues are immutable once the [`crate::Catalog`] is loaded. Optional
/// fields stay optional: a missing price means "price on request", not zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique within a catalog. Records without an id receive their
    /// catalog index (as a string, suffixed if that is taken) at load time.
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub description: String,
    /// Price per hour; `None` is "on request".
    pub price_per_hour: Option<f64>,
    /// Sport categories in display order, no duplicates.
    pub sports: Vec<String>,
    /// Facility features in display order, no duplicates.
    pub amenities: Vec<String>,
    pub opening_hours: OpeningHours,
    /// Outbound booking link at the operator.
    pub external_url: Option<String>,
}

impl Venue {
    /// Venue display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City name or an empty string when unknown.
    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    /// Street address or an empty string when unknown.
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }

    /// `city + " " + address`, the haystack of the free-text city filter.
    pub fn location_haystack(&self) -> String {
        format!("{} {}", self.city(), self.address())
    }

    /// Human readable location: "Address, City", either part may be missing.
    pub fn location_label(&self) -> String {
        match (self.address.as_deref(), self.city.as_deref()) {
            (Some(a), Some(c)) => format!("{a}, {c}"),
            (Some(a), None) => a.to_string(),
            (None, Some(c)) => c.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Price label, e.g. `"45 €/h"` or `"on request"`.
    pub fn price_label(&self) -> String {
        match self.price_per_hour {
            Some(p) if p.fract() == 0.0 => format!("{p:.0} €/h"),
            Some(p) => format!("{p:.2} €/h"),
            None => "on request".to_string(),
        }
    }

    pub fn has_sport(&self, sport: &str) -> bool {
        self.sports.iter().any(|s| s == sport)
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// The seven fixed days of the weekly opening-hours table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Case-insensitive English day name; three-letter abbreviations work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str() == key || (key.len() == 3 && d.as_str().starts_with(&key)))
            .ok_or_else(|| format!("unknown weekday: {s}"))
    }
}

/// State of a single day in the opening-hours table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayHours {
    /// Open; one of the two times may be empty when the source only knew one.
    Open { open: String, close: String },
    Closed,
    /// The venue publishes no opening hours at all.
    #[default]
    Unknown,
}

impl DayHours {
    /// Normalizes a raw `{open, close}` pair: both empty means closed.
    pub fn from_times(open: &str, close: &str) -> Self {
        let (open, close) = (open.trim(), close.trim());
        if open.is_empty() && close.is_empty() {
            DayHours::Closed
        } else {
            DayHours::Open {
                open: open.to_string(),
                close: close.to_string(),
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DayHours::Open { .. })
    }

    /// Display label, e.g. `"08:00 – 23:00"`, `"closed"`, `"unknown"`.
    pub fn label(&self) -> String {
        match self {
            DayHours::Open { open, close } if close.is_empty() => format!("from {open}"),
            DayHours::Open { open, close } if open.is_empty() => format!("until {close}"),
            DayHours::Open { open, close } => format!("{open} – {close}"),
            DayHours::Closed => "closed".to_string(),
            DayHours::Unknown => "unknown".to_string(),
        }
    }
}

/// Weekly opening hours, one [`DayHours`] per [`Weekday`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    days: [DayHours; 7],
}

impl OpeningHours {
    /// No published hours: every day is [`DayHours::Unknown`].
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Builds a published table. Days missing from `days` are closed.
    pub fn from_days(days: impl IntoIterator<Item = (Weekday, DayHours)>) -> Self {
        let mut table = Self {
            days: std::array::from_fn(|_| DayHours::Closed),
        };
        for (day, hours) in days {
            table.days[day.index()] = hours;
        }
        table
    }

    pub fn day(&self, day: Weekday) -> &DayHours {
        &self.days[day.index()]
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.day(day).is_open()
    }

    pub fn is_unknown(&self) -> bool {
        self.days.iter().all(|d| *d == DayHours::Unknown)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        Weekday::ALL.into_iter().zip(self.days.iter())
    }
}
