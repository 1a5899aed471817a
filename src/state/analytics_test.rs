use super::*;

fn buckets(counts: &[(&str, i64)]) -> Vec<AnswerCount> {
    counts
        .iter()
        .map(|(answer, count)| AnswerCount {
            answer: (*answer).to_owned(),
            count: *count,
        })
        .collect()
}

// =============================================================
// Chart kind mapping
// =============================================================

#[test]
fn rating_always_charts_as_bars() {
    assert_eq!(ChartKind::for_type(QuestionType::Rating), ChartKind::Bar);
}

#[test]
fn choice_types_always_chart_as_pie() {
    assert_eq!(ChartKind::for_type(QuestionType::Mcq), ChartKind::Pie);
    assert_eq!(ChartKind::for_type(QuestionType::Checkbox), ChartKind::Pie);
    assert_eq!(ChartKind::for_type(QuestionType::Dropdown), ChartKind::Pie);
}

#[test]
fn free_form_types_render_textual_totals_only() {
    assert_eq!(ChartKind::for_type(QuestionType::Text), ChartKind::Text);
    assert_eq!(ChartKind::for_type(QuestionType::Textarea), ChartKind::Text);
    assert_eq!(ChartKind::for_type(QuestionType::File), ChartKind::Text);
}

// =============================================================
// Bar geometry
// =============================================================

#[test]
fn bar_data_scales_to_tallest_bucket() {
    let data = bar_data(&buckets(&[("1", 2), ("2", 4), ("3", 1)]));
    assert_eq!(data.len(), 3);
    assert!((data[0].height_pct - 50.0).abs() < 1e-9);
    assert!((data[1].height_pct - 100.0).abs() < 1e-9);
    assert!((data[2].height_pct - 25.0).abs() < 1e-9);
}

#[test]
fn bar_data_handles_all_zero_counts() {
    let data = bar_data(&buckets(&[("1", 0), ("2", 0)]));
    assert!(data.iter().all(|d| d.height_pct == 0.0));
}

#[test]
fn total_count_sums_buckets() {
    assert_eq!(total_count(&buckets(&[("a", 3), ("b", 7)])), 10);
    assert_eq!(total_count(&[]), 0);
}

// =============================================================
// Pie geometry
// =============================================================

#[test]
fn pie_slices_split_percentages_by_share() {
    let slices = pie_slices(&buckets(&[("A", 1), ("B", 1)]), 50.0, 50.0, 40.0);
    assert_eq!(slices.len(), 2);
    assert!((slices[0].percent - 50.0).abs() < 1e-9);
    assert!((slices[1].percent - 50.0).abs() < 1e-9);
    let percent_sum: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((percent_sum - 100.0).abs() < 1e-9);
}

#[test]
fn pie_slices_emit_wedge_paths_and_cycled_colors() {
    let slices = pie_slices(
        &buckets(&[("A", 1), ("B", 2), ("C", 3)]),
        50.0,
        50.0,
        40.0,
    );
    for slice in &slices {
        assert!(slice.path.starts_with("M 50.00 50.00 L "));
        assert!(slice.path.ends_with('Z'));
    }
    assert_eq!(slices[0].color, CHART_COLORS[0]);
    assert_eq!(slices[1].color, CHART_COLORS[1]);
    assert_eq!(slices[2].color, CHART_COLORS[2]);
}

#[test]
fn pie_slices_skip_zero_buckets_and_empty_totals() {
    let slices = pie_slices(&buckets(&[("A", 0), ("B", 5)]), 50.0, 50.0, 40.0);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "B");

    assert!(pie_slices(&[], 50.0, 50.0, 40.0).is_empty());
    assert!(pie_slices(&buckets(&[("A", 0)]), 50.0, 50.0, 40.0).is_empty());
}

#[test]
fn single_bucket_pie_renders_near_full_circle() {
    let slices = pie_slices(&buckets(&[("All", 9)]), 50.0, 50.0, 40.0);
    assert_eq!(slices.len(), 1);
    assert!((slices[0].percent - 100.0).abs() < 1e-9);
    // Sweep is clamped just under a full turn so the arc stays renderable.
    assert!(slices[0].path.contains(" A 40.00 40.00 0 1 1 "));
}

#[test]
fn legend_formats_label_and_rounded_percent() {
    let slices = pie_slices(&buckets(&[("A", 1), ("B", 2)]), 50.0, 50.0, 40.0);
    assert_eq!(slices[0].legend(), "A (33%)");
    assert_eq!(slices[1].legend(), "B (67%)");
}
