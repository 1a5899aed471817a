//! Chart selection and SVG geometry for the analytics page.
//!
//! DESIGN
//! ======
//! The mapping from question type to visualization is fixed: rating answers
//! chart as bars, choice answers as a pie, and free-form answers are never
//! charted (only a textual total). Geometry is computed here as plain data
//! so the chart components stay declarative and the math stays testable.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::f64::consts::PI;

use crate::net::types::{AnswerCount, QuestionType};

/// Palette cycled across pie slices and legend swatches.
pub const CHART_COLORS: [&str; 6] =
    ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#06B6D4"];

/// Which visualization a question's tallies get.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    /// Free-form answers: show a response total, no chart.
    Text,
}

impl ChartKind {
    pub fn for_type(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Rating => Self::Bar,
            QuestionType::Mcq | QuestionType::Checkbox | QuestionType::Dropdown => Self::Pie,
            QuestionType::Text | QuestionType::Textarea | QuestionType::File => Self::Text,
        }
    }
}

/// Sum of all answer counts for one question.
pub fn total_count(stats: &[AnswerCount]) -> i64 {
    stats.iter().map(|s| s.count).sum()
}

/// One bar of a bar chart, height scaled to the tallest bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub count: i64,
    /// 0..=100, percentage of the tallest bucket.
    pub height_pct: f64,
}

/// Scale buckets against the maximum count. Empty or all-zero input yields
/// zero-height bars rather than a division by zero.
pub fn bar_data(stats: &[AnswerCount]) -> Vec<BarDatum> {
    let max = stats.iter().map(|s| s.count).max().unwrap_or(0);
    stats
        .iter()
        .map(|s| BarDatum {
            label: s.answer.clone(),
            count: s.count,
            #[allow(clippy::cast_precision_loss)]
            height_pct: if max > 0 {
                (s.count as f64 / max as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// One slice of a pie chart, with a ready-to-render SVG path.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: i64,
    /// Share of the total, 0..=100.
    pub percent: f64,
    /// SVG path (`M .. L .. A .. Z`) for the slice wedge.
    pub path: String,
    pub color: &'static str,
}

impl PieSlice {
    /// Legend text in `label (NN%)` form.
    pub fn legend(&self) -> String {
        format!("{} ({:.0}%)", self.label, self.percent)
    }
}

/// Compute pie wedges for the given tallies around center `(cx, cy)` with
/// radius `r`. Buckets with zero count are skipped; an all-zero or empty
/// input yields no slices.
pub fn pie_slices(stats: &[AnswerCount], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total = total_count(stats);
    if total <= 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let mut slices = Vec::new();
    let mut angle = -PI / 2.0;

    for (i, bucket) in stats.iter().filter(|s| s.count > 0).enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let fraction = bucket.count as f64 / total;
        // A full-circle arc degenerates in SVG; stop a hair short of 360.
        let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
        let end = angle + sweep;

        let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
        let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
        let large_arc = i32::from(sweep > PI);

        slices.push(PieSlice {
            label: bucket.answer.clone(),
            count: bucket.count,
            percent: fraction * 100.0,
            path: format!(
                "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
            ),
            color: CHART_COLORS[i % CHART_COLORS.len()],
        });
        angle = end;
    }
    slices
}
