//! Layout properties and canonical scenarios, through the public API
//!
//! Run with: cargo test --test layout_scenarios --features tracing -- --nocapture
//! and RUST_LOG=wheelwright=debug to see each solver phase.

use std::fmt::Write as _;

use wheelwright::{
    ContentDescriptor, Corner, Dimensions, ElementId, LayoutConfig, LayoutOutcome, LayoutResult,
    LayoutWarning, Measurements, Px, TableKind, TablePlacement, WidgetKind, WidgetPlacement,
    WidgetSlot, compose, layout, measure, solve,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn dims(w: f64, h: f64) -> Dimensions {
    Dimensions::new(Px(w), Px(h))
}

/// Compact, stable text form of a layout for snapshots
fn summary(layout: &LayoutResult) -> String {
    let mut out = String::new();
    let wheel = &layout.wheel;
    let center = wheel.center();
    writeln!(out, "canvas {}", layout.canvas).unwrap();
    writeln!(out, "content {}", layout.content).unwrap();
    writeln!(out, "wheel {} @ {},{}", wheel.size, wheel.position.x, wheel.position.y).unwrap();
    writeln!(out, "center {},{}", center.x, center.y).unwrap();
    for (id, bounds) in layout.element_bounds() {
        writeln!(out, "{id}: {},{} {}", bounds.left(), bounds.top(), bounds.size).unwrap();
    }
    out
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn single_chart_without_tables() {
    init_tracing();
    let chart = ContentDescriptor::builder().wheel(10).build().unwrap();
    let outcome = layout(&chart, &LayoutConfig::default()).unwrap();
    assert!(outcome.warnings.is_empty());

    // Margins count toward the canvas; the wheel centre sits at (300, 300)
    // relative to the content origin.
    let l = &outcome.layout;
    let center = l.wheel.center();
    assert_eq!(center.x - l.margin, Px(300.0));
    assert_eq!(center.y - l.margin, Px(300.0));

    insta::assert_snapshot!(summary(l), @r"
    canvas 660x660
    content 600x600
    wheel 600 @ 30,30
    center 330,330
    ");
}

#[test]
fn single_chart_with_tables_right() {
    init_tracing();
    let chart = ContentDescriptor::builder()
        .wheel(10)
        .table(TableKind::Positions { wheel: 1 })
        .table(TableKind::Houses { wheel: 1 })
        .table(TableKind::Aspectarian { pair: None })
        .build()
        .unwrap();
    let measurements = Measurements::new()
        .with(ElementId::Table(0), dims(500.0, 420.0))
        .with(ElementId::Table(1), dims(320.0, 320.0))
        .with(ElementId::Table(2), dims(460.0, 460.0));
    let outcome = solve(&chart, &LayoutConfig::default(), &measurements).unwrap();
    let l = &outcome.layout;

    assert_eq!(l.arrangement.size(), dims(500.0, 1240.0));
    assert_eq!(l.content, dims(1100.0, 1240.0));

    insta::assert_snapshot!(summary(l), @r"
    canvas 1190x1300
    content 1100x1240
    wheel 600 @ 30,350
    center 330,650
    table #0: 660,30 500x420
    table #1: 660,470 320x320
    table #2: 660,810 460x460
    ");
}

#[test]
fn two_wheel_chart_nests_without_overlap() {
    let chart = ContentDescriptor::builder()
        .wheel_with_aspects(10, 4)
        .wheel_with_aspects(10, 6)
        .table(TableKind::Aspectarian { pair: None })
        .build()
        .unwrap();
    let config = LayoutConfig::default();
    let l = layout(&chart, &config).unwrap().layout;

    assert_eq!(l.wheel.rings.len(), 2);
    let expected = config.ring_ratios(2).unwrap();
    assert_eq!(l.wheel.zodiac.inner, expected.zodiac_inner() * l.wheel.size);
    let (outer, inner) = (l.wheel.rings[0], l.wheel.rings[1]);
    assert!(outer.inner >= inner.outer);
    assert!(l.wheel.zodiac.inner >= outer.outer);
    assert!(l.wheel.glyph_scale.raw() < 1.0);
}

#[test]
fn exhausted_corners_warn_and_still_compose() {
    init_tracing();
    let mut builder = ContentDescriptor::builder().wheel(10);
    for lines in 1..=5 {
        builder = builder.widget(WidgetKind::Summary { lines }, WidgetPlacement::Auto);
    }
    let chart = builder.build().unwrap();

    let composition =
        compose(&chart, &LayoutConfig::default(), &mut wheelwright::OutlineRenderer).unwrap();
    let l = composition.layout();
    assert_eq!(l.widgets.len(), 4);
    assert!(!l.widgets.contains_key(&ElementId::Widget(4)));
    assert_eq!(
        composition.warnings(),
        &[LayoutWarning::WidgetOmitted {
            widget: ElementId::Widget(4),
            kind: "summary".to_string(),
        }]
    );
    assert_no_widget_overlap(l);
}

#[test]
fn preferred_corners_are_honoured() {
    let chart = ContentDescriptor::builder()
        .wheel(10)
        .widget(WidgetKind::Legend { entries: 3 }, WidgetPlacement::Corner(Corner::BottomLeft))
        .widget(WidgetKind::Counts, WidgetPlacement::Auto)
        .build()
        .unwrap();
    let l = layout(&chart, &LayoutConfig::default()).unwrap().layout;
    let wheel = l.wheel.bounds();
    let legend = l.widgets[&ElementId::Widget(0)].bounds;
    assert_eq!(legend.left(), wheel.left());
    assert_eq!(legend.bottom(), wheel.bottom());
    let counts = l.widgets[&ElementId::Widget(1)].bounds;
    assert_eq!(counts.origin, wheel.origin);
}

#[test]
fn oversized_widget_is_reported_not_pushed_off_canvas() {
    let chart = ContentDescriptor::builder()
        .wheel(10)
        .widget(
            WidgetKind::Custom {
                width: Px(800.0),
                height: Px(50.0),
            },
            WidgetPlacement::Corner(Corner::TopRight),
        )
        .widget(WidgetKind::Counts, WidgetPlacement::Corner(Corner::TopRight))
        .build()
        .unwrap();
    let outcome = layout(&chart, &LayoutConfig::default()).unwrap();
    let l = &outcome.layout;

    assert!(!l.widgets.contains_key(&ElementId::Widget(0)));
    assert_eq!(
        outcome.warnings,
        vec![LayoutWarning::WidgetTooLarge {
            widget: ElementId::Widget(0),
            kind: "custom".to_string(),
            size: dims(800.0, 50.0),
            square: dims(600.0, 600.0),
        }]
    );
    let canvas = l.canvas_bounds();
    assert!(l.widgets.values().all(|w| canvas.contains(&w.bounds)));
    assert_eq!(l.widgets[&ElementId::Widget(1)].slot, WidgetSlot::Corner(Corner::TopRight));
}

#[test]
fn centred_diagram_gives_way_to_a_later_corner_widget() {
    let chart = ContentDescriptor::builder()
        .wheel(10)
        .widget(
            WidgetKind::Custom {
                width: Px(300.0),
                height: Px(300.0),
            },
            WidgetPlacement::Center,
        )
        .widget(
            WidgetKind::Custom {
                width: Px(200.0),
                height: Px(200.0),
            },
            WidgetPlacement::Auto,
        )
        .build()
        .unwrap();
    let outcome = layout(&chart, &LayoutConfig::default()).unwrap();
    assert!(outcome.warnings.is_empty());

    let l = &outcome.layout;
    assert_eq!(l.widgets[&ElementId::Widget(0)].slot, WidgetSlot::Corner(Corner::TopLeft));
    assert_eq!(l.widgets[&ElementId::Widget(1)].slot, WidgetSlot::Corner(Corner::TopRight));
    assert_no_widget_overlap(l);
}

// ============================================================================
// Properties over a grid of inputs
// ============================================================================

fn descriptors() -> Vec<ContentDescriptor> {
    let mut out = Vec::new();
    for wheels in 1..=4 {
        for objects in [0, 7, 15] {
            for with_tables in [false, true] {
                for widgets in [0, 2, 6] {
                    let mut b = ContentDescriptor::builder();
                    for w in 0..wheels {
                        b = b.wheel_with_aspects(objects + w, if w == 0 { objects } else { 0 });
                    }
                    if with_tables {
                        b = b
                            .table(TableKind::Positions { wheel: 1 })
                            .table(TableKind::Houses { wheel: wheels as usize })
                            .table(TableKind::Aspectarian { pair: None })
                            .custom_table(3, objects);
                    }
                    let kinds = [
                        (WidgetKind::Summary { lines: 5 }, WidgetPlacement::Auto),
                        (WidgetKind::Diagram, WidgetPlacement::Center),
                        (
                            WidgetKind::Legend { entries: 10 },
                            WidgetPlacement::Corner(Corner::TopRight),
                        ),
                        (WidgetKind::Counts, WidgetPlacement::Corner(Corner::TopRight)),
                        (WidgetKind::Summary { lines: 2 }, WidgetPlacement::Auto),
                        (WidgetKind::Diagram, WidgetPlacement::Auto),
                    ];
                    for (kind, placement) in kinds.into_iter().take(widgets) {
                        b = b.widget(kind, placement);
                    }
                    out.push(b.build().unwrap());
                }
            }
        }
    }
    out
}

fn configs() -> Vec<LayoutConfig> {
    let mut out = Vec::new();
    for placement in [TablePlacement::Right, TablePlacement::Left, TablePlacement::Below] {
        for auto_center in [true, false] {
            for auto_grow in [true, false] {
                let builder = LayoutConfig::builder()
                    .with_placement(placement)
                    .with_auto_center(auto_center)
                    .with_auto_grow_wheel(auto_grow);
                out.push(builder.clone().build().unwrap());
                out.push(builder.with_max_canvas(1000.0, 800.0).build().unwrap());
            }
        }
    }
    out
}

fn every_outcome() -> Vec<(ContentDescriptor, LayoutConfig, LayoutOutcome)> {
    let mut out = Vec::new();
    for config in configs() {
        for descriptor in descriptors() {
            let outcome = layout(&descriptor, &config).unwrap();
            out.push((descriptor.clone(), config.clone(), outcome));
        }
    }
    out
}

fn assert_no_widget_overlap(l: &LayoutResult) {
    let boxes: Vec<_> = l.widgets.values().map(|w| w.bounds).collect();
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn solving_is_deterministic() {
    for config in configs() {
        for descriptor in descriptors() {
            let measurements = measure(&descriptor, &config).unwrap();
            let first = solve(&descriptor, &config, &measurements).unwrap();
            let second = solve(&descriptor, &config, &measurements).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn canvas_contains_wheel_and_tables() {
    const EPS: f64 = 1e-9;
    for (_, config, outcome) in every_outcome() {
        let l = &outcome.layout;
        let margin = config.min_margin();
        assert!(l.canvas.width >= l.wheel.size + margin * 2.0);
        assert!(l.canvas.height >= l.wheel.size + margin * 2.0);

        let canvas = l.canvas_bounds();
        assert!(canvas.contains(&l.wheel.bounds()));
        let wheel = l.wheel.bounds();
        for bounds in l.tables.values() {
            assert!(canvas.contains(bounds), "{bounds:?} outside {canvas:?}");
            assert!(!bounds.intersects(&wheel));
            let gap = match config.placement() {
                TablePlacement::Right => bounds.left() - wheel.right(),
                TablePlacement::Left => wheel.left() - bounds.right(),
                TablePlacement::Below => bounds.top() - wheel.bottom(),
            };
            assert!(gap.raw() >= config.table_padding().raw() - EPS);
            assert!(bounds.left() >= margin && bounds.top() >= margin);
        }
    }
}

#[test]
fn radii_are_monotonic() {
    for (descriptor, _, outcome) in every_outcome() {
        let wheel = &outcome.layout.wheel;
        assert_eq!(wheel.rings.len(), descriptor.wheel_count());
        assert!(wheel.zodiac.outer <= wheel.size / 2.0);
        assert!(wheel.zodiac.outer > wheel.zodiac.inner);
        for ring in &wheel.rings {
            assert!(ring.outer > ring.inner);
            assert!(ring.inner > Px::ZERO);
        }
        for pair in wheel.rings.windows(2) {
            assert!(pair[1].outer <= pair[0].inner);
        }
    }
}

#[test]
fn tables_round_trip_through_the_stack_origin() {
    for (_, _, outcome) in every_outcome() {
        let l = &outcome.layout;
        assert_eq!(l.tables.len(), l.arrangement.entries().len());
        for (id, offset) in l.arrangement.entries() {
            assert_eq!(l.tables[id].origin, l.table_origin.offset_by(*offset));
        }
    }
}

#[test]
fn corner_widgets_never_overlap() {
    for (descriptor, _, outcome) in every_outcome() {
        let l = &outcome.layout;
        assert_no_widget_overlap(l);
        let omitted = outcome
            .warnings
            .iter()
            .filter(|w| {
                matches!(
                    w,
                    LayoutWarning::WidgetOmitted { .. } | LayoutWarning::WidgetTooLarge { .. }
                )
            })
            .count();
        assert_eq!(l.widgets.len() + omitted, descriptor.widgets().len());
    }
}
