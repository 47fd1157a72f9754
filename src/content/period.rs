use chrono::NaiveDate;
use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// `Dec 2024`. Out of range months fall back to the bare year.
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|date| date.format("%b %Y").to_string())
            .unwrap_or_else(|| self.year.to_string())
    }
}

/// A month range; `end: None` means ongoing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: YearMonth,
    pub end: Option<YearMonth>,
}

impl Period {
    pub const fn ongoing(start: YearMonth) -> Self {
        Self { start, end: None }
    }

    pub const fn between(start: YearMonth, end: YearMonth) -> Self {
        Self { start, end: Some(end) }
    }

    pub fn label(&self) -> String {
        let end = self.end.map(|end| end.label()).unwrap_or_else(|| "Present".to_string());
        format!("{} – {}", self.start.label(), end)
    }
}
