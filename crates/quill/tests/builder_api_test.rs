//! Integration tests for the SceneBuilder API

use quill::{
    QuillError, SceneBuilder,
    config::{AppConfig, OutputFormat},
    diagram::Diagram,
    draw::{Circle, Rectangle},
    geometry::{Point, Size},
};

const SIMPLE_SCENE: &str = r#"{ "elements": [
    { "type": "circle", "center": [50, 50], "radius": 20 },
    { "type": "regular_polygon", "center": [100, 50], "radius": 20, "sides": 6 },
    { "type": "bubble", "center": [150, 50], "radius": 20 }
] }"#;

fn config_from_json(json: &str) -> AppConfig {
    serde_json::from_str(json).expect("valid config")
}

#[test]
fn test_parse_simple_scene() {
    let builder = SceneBuilder::default();
    let diagram = builder.parse(SIMPLE_SCENE).expect("Failed to parse scene");
    assert_eq!(diagram.len(), 3);
}

#[test]
fn test_render_simple_scene_svg() {
    let builder = SceneBuilder::default();
    let diagram = builder.parse(SIMPLE_SCENE).expect("Failed to parse scene");
    let svg = builder.render_svg(&diagram).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    // Circle plus the two circles of the bubble.
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<path").count(), 1);
}

#[test]
fn test_render_text_matches_command_order() {
    let builder = SceneBuilder::default();
    let diagram = builder.parse(SIMPLE_SCENE).expect("Failed to parse scene");
    let text = builder.render_text(&diagram).expect("Failed to render");
    let lines: Vec<&str> = text.lines().collect();

    // 1 circle, 1 move + 6 lines, 2 circles
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "circle_at (50.0, 50.0) radius 20.0");
    assert!(lines[1].starts_with("move_to"));
    assert!(lines[8].starts_with("circle_at (150.0, 50.0)"));
}

#[test]
fn test_render_dispatches_on_format() {
    let builder = SceneBuilder::default();
    let diagram = Diagram::new().with(Circle::new(Point::new(0.0, 0.0), 1.0));

    let svg = builder.render(&diagram, OutputFormat::Svg).unwrap();
    let text = builder.render(&diagram, OutputFormat::Text).unwrap();
    assert!(svg.contains("<svg"));
    assert_eq!(text, "circle_at (0.0, 0.0) radius 1.0\n");
}

#[test]
fn test_programmatic_self_containment() {
    let mut diagram = Diagram::new()
        .with(Rectangle::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0)).unwrap());
    diagram.add(diagram.scaled(0.5).unwrap());
    diagram.add(diagram.scaled(0.5).unwrap());

    let text = SceneBuilder::default().render_text(&diagram).unwrap();
    // One rectangle outline is five commands, doubled twice.
    assert_eq!(text.lines().count(), 20);
    assert!(text.ends_with("line_to (0.0, 0.0)\n"));
}

#[test]
fn test_builder_with_config() {
    let config = config_from_json(
        r#"{ "style": { "background_color": "white", "stroke_color": "navy", "stroke_style": "dashed" },
             "render": { "padding": 0 } }"#,
    );
    let builder = SceneBuilder::new(config);
    let diagram = Diagram::new()
        .with(Rectangle::new(Point::new(0.0, 0.0), Size::new(40.0, 20.0)).unwrap());

    let svg = builder.render_svg(&diagram).unwrap();
    assert!(svg.contains("viewBox=\"0 0 40 20\""));
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("<rect"));
}

#[test]
fn test_invalid_style_is_export_error() {
    let config = config_from_json(r#"{ "style": { "fill_color": "definitely-not" } }"#);
    let builder = SceneBuilder::new(config);
    let err = builder.render_svg(&Diagram::new()).unwrap_err();
    assert!(matches!(err, QuillError::Export(_)));
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let builder = SceneBuilder::default();
    let err = builder.parse("this is not json").unwrap_err();
    assert!(matches!(err, QuillError::Scene { .. }));
}

#[test]
fn test_builder_reusability() {
    let builder = SceneBuilder::default();

    let first = builder
        .parse(r#"{ "elements": [ { "type": "circle", "center": [0, 0], "radius": 1 } ] }"#)
        .unwrap();
    let second = builder
        .parse(r#"{ "elements": [ { "type": "rectangle", "origin": [0, 0], "size": [1, 1] } ] }"#)
        .unwrap();

    let svg1 = builder.render_svg(&first).unwrap();
    let svg2 = builder.render_svg(&second).unwrap();
    assert!(svg1.contains("<circle"));
    assert!(svg2.contains("<path"));
    assert_ne!(svg1, svg2);
}
