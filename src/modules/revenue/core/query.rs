// Read-side query parameters, normalized from raw request input.
//
// Malformed input never fails: numbers are read from their leading digits,
// input without any falls back to the default, values below one are clamped,
// unknown periods mean "no time constraint".

use chrono::Duration;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    LastSevenDays,
    LastThirtyDays,
    #[default]
    All,
}

impl Period {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("7d") => Period::LastSevenDays,
            Some("30d") => Period::LastThirtyDays,
            _ => Period::All,
        }
    }

    pub fn window(self) -> Option<Duration> {
        match self {
            Period::LastSevenDays => Some(Duration::days(7)),
            Period::LastThirtyDays => Some(Duration::days(30)),
            Period::All => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueQuery {
    pub page: usize,
    pub page_size: usize,
    /// `None` matches every event, including those without a campaign.
    pub utm_campaign: Option<String>,
    pub period: Period,
}

impl Default for RevenueQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            utm_campaign: None,
            period: Period::All,
        }
    }
}

impl RevenueQuery {
    pub fn from_params(
        page: Option<&str>,
        page_size: Option<&str>,
        utm_campaign: Option<&str>,
        period: Option<&str>,
    ) -> Self {
        Self {
            page: parse_at_least_one(page, DEFAULT_PAGE),
            page_size: parse_at_least_one(page_size, DEFAULT_PAGE_SIZE),
            utm_campaign: utm_campaign
                .filter(|c| !c.is_empty() && *c != ALL)
                .map(str::to_string),
            period: Period::parse(period),
        }
    }
}

fn parse_at_least_one(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(leading_integer)
        .map(|n| usize::try_from(n.max(1)).unwrap_or(usize::MAX))
        .unwrap_or(default)
}

/// Reads an optionally signed integer from the start of `raw`, ignoring
/// whatever follows it: `"3abc"` is 3, `"2.5"` is 2.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    raw[..sign_len + digits_len].parse().ok()
}
