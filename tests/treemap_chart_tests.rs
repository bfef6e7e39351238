use groupchart_rs::api::{ChartConfig, TreemapChartModel};
use groupchart_rs::core::{CapBehavior, Record, Viewport};
use groupchart_rs::render::{NullSurface, TransitionBehavior};

fn config() -> ChartConfig {
    ChartConfig::new(Viewport::new(400, 200))
        .with_transition(TransitionBehavior::immediate())
        .with_padding_px(0.0)
}

fn records() -> Vec<Record> {
    vec![
        Record::new("browser", 45.0),
        Record::new("editor", 30.0),
        Record::new("terminal", 15.0),
        Record::new("music", 10.0),
    ]
}

#[test]
fn cells_cover_the_viewport_without_padding() {
    let mut model = TreemapChartModel::new(config()).expect("model");
    let mut surface = NullSurface::default();

    model
        .redraw(&records(), |_| None, 0.0, &mut surface)
        .expect("redraw");
    model.advance(0.0, &mut surface);

    let total: f64 = model
        .items()
        .map(|item| item.geometry.width * item.geometry.height)
        .sum();
    assert!((total - 400.0 * 200.0).abs() < 1e-6);
}

#[test]
fn cap_folds_small_cells_into_others() {
    let cfg = config().with_cap(CapBehavior::uncapped().with_cap(3));
    let mut model = TreemapChartModel::new(cfg).expect("model");
    let mut surface = NullSurface::default();

    model
        .redraw(&records(), |_| None, 0.0, &mut surface)
        .expect("redraw");
    model.advance(0.0, &mut surface);

    let keys: Vec<&str> = model.items().map(|item| item.key.as_str()).collect();
    assert_eq!(keys.len(), 4);
    assert!(keys.contains(&"Others"));
    // Key ordering folds the lexicographic head, not the smallest values.
    assert!(!keys.contains(&"browser"));
    assert!(keys.contains(&"terminal"));
}

#[test]
fn empty_then_repopulated_round_trip() {
    let mut model = TreemapChartModel::new(config()).expect("model");
    let mut surface = NullSurface::default();

    model
        .redraw(&records(), |_| None, 0.0, &mut surface)
        .expect("redraw");
    model.advance(0.0, &mut surface);
    assert!(!model.is_empty_state());

    model
        .redraw(&[], |_| None, 1.0, &mut surface)
        .expect("redraw");
    model.advance(1.0, &mut surface);
    assert!(model.is_empty_state());
    assert_eq!(model.items().count(), 0);

    model
        .redraw(&records(), |_| None, 2.0, &mut surface)
        .expect("redraw");
    model.advance(2.0, &mut surface);
    assert!(!model.is_empty_state());
    assert_eq!(model.items().count(), 4);
}

#[test]
fn negative_total_is_treated_as_empty() {
    let mut model = TreemapChartModel::new(config()).expect("model");
    let mut surface = NullSurface::default();

    let records = vec![Record::new("a", -5.0), Record::new("b", 2.0)];
    model
        .redraw(&records, |_| None, 0.0, &mut surface)
        .expect("redraw");
    assert!(model.is_empty_state());
}

#[test]
fn grouped_layout_keeps_group_totals_proportional() {
    let mut model = TreemapChartModel::new(config()).expect("model");
    let mut surface = NullSurface::default();

    let records = vec![
        Record::new("a1", 30.0),
        Record::new("a2", 30.0),
        Record::new("b1", 20.0),
    ];
    model
        .redraw(
            &records,
            |record| Some(format!("group-{}", &record.key[..1])),
            0.0,
            &mut surface,
        )
        .expect("redraw");
    model.advance(0.0, &mut surface);

    let area_of = |key: &str| {
        model
            .items()
            .find(|item| item.key == key)
            .map(|item| item.geometry.width * item.geometry.height)
            .expect("cell")
    };
    // 80 units over 80000 px^2: 1000 px^2 per unit.
    assert!((area_of("a1") - 30_000.0).abs() < 1e-6);
    assert!((area_of("b1") - 20_000.0).abs() < 1e-6);
}

#[test]
fn selection_toggles_like_any_chart() {
    let mut model = TreemapChartModel::new(config()).expect("model");
    assert!(model.toggle_filter("browser"));
    assert!(model.filters().has_filter());
    assert!(!model.toggle_filter("browser"));
    assert!(!model.filters().has_filter());
}
