//! End-to-end composition: layout, layer order and SVG output

use wheelwright::compose::{Layer, layer_for};
use wheelwright::{
    Angle, ComposeError, ContentDescriptor, CoordinateTransformer, LayerContent, LayerRenderer,
    LayoutConfig, OutlineRenderer, Px, RenderError, RenderLayer, Surface, TableKind, TablePlacement,
    WidgetKind, WidgetPlacement, compose,
};

fn natal_chart() -> ContentDescriptor {
    ContentDescriptor::builder()
        .wheel_with_aspects(12, 24)
        .table(TableKind::Positions { wheel: 1 })
        .table(TableKind::Houses { wheel: 1 })
        .table(TableKind::Aspectarian { pair: None })
        .widget(WidgetKind::Summary { lines: 4 }, WidgetPlacement::Auto)
        .widget(WidgetKind::Legend { entries: 12 }, WidgetPlacement::Auto)
        .rotation(30.0)
        .build()
        .unwrap()
}

fn count(svg: &str, tag: &str) -> usize {
    svg.matches(&format!("<{tag}")).count()
}

#[test]
fn outline_svg_has_one_shape_per_guide() {
    let composition =
        compose(&natal_chart(), &LayoutConfig::default(), &mut OutlineRenderer).unwrap();
    let svg = composition.svg();
    // zodiac 2 + wheel 3 + aspect disc 1
    assert_eq!(count(svg, "circle"), 6);
    // 12 sign boundaries
    assert_eq!(count(svg, "line"), 12);
    // 3 tables + 2 widgets
    assert_eq!(count(svg, "rect"), 5);
    assert_eq!(count(svg, "text"), 5);
}

/// Records what each layer was handed
#[derive(Default)]
struct Recorder {
    names: Vec<String>,
    centers: Vec<(Px, Px)>,
    rotation: Option<Angle>,
}

impl LayerRenderer for Recorder {
    fn render_layer(
        &mut self,
        content: &LayerContent<'_>,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
    ) -> Result<(), RenderError> {
        self.names.push(content.name());
        self.centers.push((transformer.center().x, transformer.center().y));
        self.rotation = Some(transformer.rotation());
        // Delegate to the built-in layers so the surface still fills up
        layer_for(content).render(transformer, surface, content)
    }
}

#[test]
fn custom_renderer_gets_layers_in_paint_order() {
    let mut recorder = Recorder::default();
    let composition = compose(&natal_chart(), &LayoutConfig::default(), &mut recorder).unwrap();

    assert_eq!(
        recorder.names,
        vec![
            "zodiac band",
            "wheel 1",
            "table #0 (positions)",
            "table #1 (houses)",
            "table #2 (aspectarian)",
            "widget #0 (summary)",
            "widget #1 (legend)",
        ]
    );
    let center = composition.layout().wheel.center();
    assert!(recorder.centers.iter().all(|c| *c == (center.x, center.y)));
    assert_eq!(recorder.rotation, Some(Angle(30.0)));
}

#[test]
fn transformer_matches_solved_geometry() {
    let chart = natal_chart();
    let composition = compose(&chart, &LayoutConfig::default(), &mut OutlineRenderer).unwrap();
    let wheel = &composition.layout().wheel;
    let t = CoordinateTransformer::for_wheel(wheel, chart.rotation());

    // Longitude equal to minus the rotation lands straight above the centre
    let top = t.to_pixel(Angle(-30.0), wheel.zodiac.outer);
    assert!((top.x.0 - wheel.center().x.0).abs() < 1e-9);
    assert!((wheel.center().y.0 - top.y.0 - wheel.zodiac.outer.0).abs() < 1e-9);
    // Every point on the zodiac rim stays inside the wheel square
    for p in t.circle_points(wheel.zodiac.outer, 36) {
        assert!(p.x >= wheel.position.x && p.x <= wheel.position.x + wheel.size);
        assert!(p.y >= wheel.position.y && p.y <= wheel.position.y + wheel.size);
    }
}

#[test]
fn render_failure_is_reported() {
    let mut refuse_widgets = |content: &LayerContent<'_>,
                              t: &CoordinateTransformer,
                              s: &mut Surface|
     -> Result<(), RenderError> {
        match content {
            LayerContent::Widget { .. } => Err(RenderError::Layer {
                layer: content.name(),
                message: "no widget theme".to_string(),
            }),
            _ => layer_for(content).render(t, s, content),
        }
    };
    let err = compose(&natal_chart(), &LayoutConfig::default(), &mut refuse_widgets).unwrap_err();
    match err {
        ComposeError::Render(RenderError::Layer { layer, message }) => {
            assert_eq!(layer, "widget #0 (summary)");
            assert_eq!(message, "no widget theme");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn registry_maps_content_to_its_layer() {
    let composition =
        compose(&natal_chart(), &LayoutConfig::default(), &mut OutlineRenderer).unwrap();
    let l = composition.layout();
    let zodiac = LayerContent::Zodiac { wheel: &l.wheel };
    assert!(matches!(layer_for(&zodiac), Layer::ZodiacBandLayer(_)));
}

#[test]
fn below_placement_writes_a_taller_canvas() {
    let config = LayoutConfig::builder()
        .with_placement(TablePlacement::Below)
        .build()
        .unwrap();
    let composition = compose(&natal_chart(), &config, &mut OutlineRenderer).unwrap();
    let canvas = composition.layout().canvas;
    assert!(canvas.height > canvas.width);

    let mut file = Vec::new();
    composition.write_to(&mut file).unwrap();
    let written = String::from_utf8(file).unwrap();
    assert!(written.contains(&format!(r#"height="{}""#, canvas.height)));
}

#[cfg(feature = "rayon")]
#[test]
fn batch_layout_matches_sequential() {
    let requests: Vec<_> = (1..=4)
        .map(|wheels| {
            let mut b = ContentDescriptor::builder();
            for _ in 0..wheels {
                b = b.wheel(10);
            }
            (b.build().unwrap(), LayoutConfig::default())
        })
        .collect();
    let batch = wheelwright::layout_batch(&requests);
    for ((descriptor, config), result) in requests.iter().zip(batch) {
        assert_eq!(result, wheelwright::layout(descriptor, config));
    }
}
