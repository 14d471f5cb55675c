use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    #[serde(alias = "entrada")]
    ClockIn,
    #[serde(alias = "pausa")]
    BreakStart,
    #[serde(alias = "retorno")]
    BreakEnd,
    #[serde(alias = "saida")]
    ClockOut,
}

impl PunchKind {
    pub const ALL: [PunchKind; 4] = [
        PunchKind::ClockIn,
        PunchKind::BreakStart,
        PunchKind::BreakEnd,
        PunchKind::ClockOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "clock_in",
            PunchKind::BreakStart => "break_start",
            PunchKind::BreakEnd => "break_end",
            PunchKind::ClockOut => "clock_out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "Clock in",
            PunchKind::BreakStart => "Start break",
            PunchKind::BreakEnd => "End break",
            PunchKind::ClockOut => "Clock out",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown punch kind '{0}', expected one of clock_in, break_start, break_end, clock_out")]
pub struct UnknownPunchKind(pub String);

impl FromStr for PunchKind {
    type Err = UnknownPunchKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "clock_in" | "entrada" => Ok(PunchKind::ClockIn),
            "break_start" | "pausa" => Ok(PunchKind::BreakStart),
            "break_end" | "retorno" => Ok(PunchKind::BreakEnd),
            "clock_out" | "saida" => Ok(PunchKind::ClockOut),
            other => Err(UnknownPunchKind(other.to_string())),
        }
    }
}

/// A single punch as stored on disk. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(alias = "type")]
    pub kind: PunchKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DailySummary {
    pub worked_ms: i64,
    pub break_ms: i64,
    pub count: usize,
    pub last_kind: Option<PunchKind>,
}

#[derive(Debug, Deserialize)]
pub struct PunchRequest {
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub worked_ms: i64,
    pub break_ms: i64,
    pub worked: String,
    pub break_time: String,
    pub count: usize,
    pub last_kind: Option<PunchKind>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub events: Vec<PunchEvent>,
    pub summary: SummaryResponse,
    pub next_actions: Vec<PunchKind>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PunchResponse {
    pub event: PunchEvent,
    pub saved: bool,
    pub warning: Option<String>,
    pub summary: SummaryResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub events: Vec<PunchEvent>,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub worked_ms: i64,
    pub break_ms: i64,
    pub worked: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct WeeklyPoint {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub worked_ms: i64,
    pub break_ms: i64,
    pub worked: String,
    pub days_worked: u8,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub last_7_days: Vec<DailyPoint>,
    pub weekly_totals: Vec<WeeklyPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AcceptedResponse {
    pub message: String,
}
