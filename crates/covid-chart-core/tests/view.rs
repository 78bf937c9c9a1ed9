// File: crates/covid-chart-core/tests/view.rs
// Purpose: ChartView render output, domains and hover state transitions.

use chrono::NaiveDate;
use covid_chart_core::scene::{SceneNode, Transform};
use covid_chart_core::view::PLACEHOLDER_TEXT;
use covid_chart_core::{ChartError, ChartView, CountryTimeseries, Dataset, TimeSeriesPoint, TooltipStyle};

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, m, d).expect("valid date")
}

fn sample() -> Dataset {
    Dataset::new(vec![
        CountryTimeseries::from_totals("Italy", vec![(day(3, 1), 1.0), (day(3, 2), 5.0), (day(3, 3), 20.0)]),
        CountryTimeseries::from_totals("Spain", vec![(day(3, 1), 0.0), (day(3, 3), 10.0), (day(3, 5), 100.0)]),
    ])
}

fn point(country: &str, m: u32, d: u32, total: f64) -> TimeSeriesPoint {
    TimeSeriesPoint::new(day(m, d), country, total)
}

fn active_group_transform(view: &ChartView) -> Option<Transform> {
    let scene = view.render();
    let mut found = None;
    scene.walk(|n| {
        if let SceneNode::Group { class: Some("active-point"), transform, .. } = n {
            found = *transform;
        }
    });
    found
}

#[test]
fn renders_one_path_per_country() {
    let view = ChartView::new(sample(), 600.0, 400.0);
    let scene = view.render();
    let paths = scene.paths();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|(class, _)| *class == "marker-line"));
    assert_eq!(scene.circles(), 0);
    assert!(scene.tooltips().is_empty());
}

#[test]
fn series_without_points_still_gets_a_path() {
    let mut data = sample();
    data.add_series(CountryTimeseries::new("Nowhere", Vec::new()));
    let view = ChartView::new(data, 600.0, 400.0);
    let paths = view.render().paths().into_iter().map(|(_, d)| d.to_string()).collect::<Vec<_>>();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[2], "");
}

#[test]
fn domains_follow_data_with_epsilon_floor() {
    let view = ChartView::new(sample(), 600.0, 400.0);
    let layout = view.layout().expect("layout");
    assert_eq!(layout.x_domain(), (day(3, 1), day(3, 5)));
    assert_eq!(layout.y_domain(), (1.0, 100.0));
    assert_eq!(layout.most_recent_date(), day(3, 5));
    assert_eq!((layout.inner_width, layout.inner_height), (460.0, 270.0));

    let big = Dataset::new(vec![CountryTimeseries::from_totals("US", vec![(day(4, 1), 5000.0), (day(4, 2), 7000.0)])]);
    let view = ChartView::new(big, 600.0, 400.0);
    assert_eq!(view.layout().expect("layout").y_domain().0, 1.0);
}

#[test]
fn active_point_highlights_full_country_series() {
    let mut view = ChartView::new(sample(), 600.0, 400.0);
    assert!(view.handle_hover(Some(point("Spain", 3, 3, 10.0))));

    let scene = view.render();
    let paths = scene.paths();
    assert_eq!(paths.len(), 3);
    let (class, d) = paths[2];
    assert_eq!(class, "marker-line active");

    let layout = view.layout().expect("layout");
    let spain = view.data().find_country("Spain").expect("spain");
    let expected = layout.line_generator().generate(spain).expect("path");
    assert_eq!(d, expected);
    // Same geometry as the regular Spain line, three vertices.
    assert_eq!(d, paths[1].1);
    assert_eq!(d.matches('L').count(), 2);

    assert_eq!(scene.circles(), 1);
    let tips = scene.tooltips();
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].style, TooltipStyle::Stroke);
    assert_eq!(tips[1].style, TooltipStyle::Fill);
    assert_eq!(tips[0].text(), tips[1].text());
    assert_eq!(tips[1].text(), "Spain: 10 deaths as of Mar 03, 20");
    assert_eq!((tips[0].offset.x, tips[0].offset.y), (-10.0, -10.0));
}

#[test]
fn marker_group_sits_on_mapped_point() {
    let mut view = ChartView::new(sample(), 600.0, 400.0);
    let active = point("Italy", 3, 3, 20.0);
    view.handle_hover(Some(active.clone()));
    let at = view.layout().expect("layout").line_generator().position(&active);
    let t = active_group_transform(&view).expect("active group");
    assert_eq!((t.tx, t.ty), (at.x, at.y));
    assert_eq!(t.tx, 230.0);
}

#[test]
fn clearing_active_point_removes_decorations() {
    let mut view = ChartView::new(sample(), 600.0, 400.0);
    view.handle_hover(Some(point("Italy", 3, 2, 5.0)));
    assert!(view.clear_hover());
    assert!(view.active_point().is_none());

    let scene = view.render();
    assert_eq!(scene.paths().len(), 2);
    assert_eq!(scene.circles(), 0);
    assert!(scene.tooltips().is_empty());
    assert!(active_group_transform(&view).is_none());
}

#[test]
fn hover_on_unknown_country_is_ignored() {
    let mut view = ChartView::new(sample(), 600.0, 400.0);
    view.handle_hover(Some(point("Italy", 3, 1, 1.0)));
    assert!(!view.handle_hover(Some(point("Atlantis", 3, 1, 3.0))));
    assert_eq!(view.active_point().map(|p| p.country_name.as_str()), Some("Italy"));
}

#[test]
fn duplicate_country_names_resolve_to_first_series() {
    let mut data = sample();
    data.add_series(CountryTimeseries::from_totals("Italy", vec![(day(3, 1), 50.0), (day(3, 5), 60.0)]));
    let mut view = ChartView::new(data, 600.0, 400.0);
    view.handle_hover(Some(point("Italy", 3, 1, 50.0)));
    let scene = view.render();
    let paths = scene.paths();
    assert_eq!(paths.len(), 4);
    assert_eq!(paths[3].1, paths[0].1);
}

#[test]
fn pointer_hover_goes_through_margins() {
    let mut view = ChartView::new(sample(), 600.0, 400.0);
    let layout = *view.layout().expect("layout");
    let target = point("Spain", 3, 3, 10.0);
    let at = layout.line_generator().position(&target);

    assert!(view.hover_at(at.x + 100.0, at.y + 50.0 + 2.0));
    assert_eq!(view.active_point(), Some(&target));

    // Top-left margin corner is outside the plotting area.
    assert!(view.hover_at(5.0, 5.0));
    assert!(view.active_point().is_none());
}

#[test]
fn replacing_data_drops_stale_active_point() {
    let mut view = ChartView::new(sample(), 600.0, 400.0);
    view.handle_hover(Some(point("Spain", 3, 5, 100.0)));
    view.set_data(Dataset::new(vec![CountryTimeseries::from_totals("Italy", vec![(day(3, 1), 1.0), (day(3, 2), 2.0)])]));
    assert!(view.active_point().is_none());
    assert_eq!(view.render().paths().len(), 1);
}

#[test]
fn empty_dataset_renders_placeholder() {
    for data in [Dataset::default(), Dataset::new(vec![CountryTimeseries::new("Empty", Vec::new())])] {
        let mut view = ChartView::new(data, 600.0, 400.0);
        assert!(matches!(view.layout(), Err(ChartError::EmptyDataset)));
        assert!(!view.hover_at(300.0, 200.0));
        let scene = view.render();
        assert!(scene.paths().is_empty());
        assert!(scene.texts().iter().any(|t| t.content == PLACEHOLDER_TEXT));
    }
}

#[test]
fn margins_larger_than_surface_are_rejected() {
    let view = ChartView::new(sample(), 120.0, 400.0);
    assert!(matches!(view.layout(), Err(ChartError::InvalidDimensions { .. })));
    assert!(view.render().paths().is_empty());
}

#[test]
fn static_labels_are_rendered() {
    let view = ChartView::new(sample(), 600.0, 400.0);
    let scene = view.render();
    let texts = scene.texts();
    let contents: Vec<&str> = texts.iter().map(|t| t.content.as_str()).collect();
    assert!(contents.contains(&"Global Covid Deaths Over Time by Country"));
    assert!(contents.contains(&"Cumulative Deaths"));
    assert!(contents.contains(&"Time"));

    let y_label = texts.iter().find(|t| t.content == "Cumulative Deaths").expect("y label");
    let t = y_label.transform.expect("transform");
    assert_eq!((t.tx, t.ty, t.rotate_deg), (-40.0, 135.0, -90.0));
}
