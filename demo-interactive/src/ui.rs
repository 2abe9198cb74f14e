//! Panel layout and drawing
//!
//! Six panels in a 3×2 grid under a title bar, with a control strip along
//! the bottom:
//!
//! ```text
//! ┌ 3D Quark Structure ┐┌ QCD Color Field ┐┌ Quantum Fluctuations ┐
//! ├ Interactions ──────┤├ Quark Properties ┤├ Info ────────────────┤
//! └ Controls ─────────────────────────────┘└ Sliders ─────────────┘
//! ```

use crate::app::{to_color, App};
use quark_viz_core::animation::{MARKER_SIZE_MAX, MARKER_SIZE_MIN, SPEED_MAX, SPEED_MIN};
use quark_viz_core::scene::panels::CHARGE_AXIS;
use quark_viz_core::scene::{
    coordinate_axes, property_chart, sphere_mesh, Projection, INFO_SYMBOLS, INFO_TEXT,
};
use quark_viz_core::{Flavor, GluonLine, Point3D};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Points};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LineGauge,
    Paragraph, Wrap,
};
use ratatui::Frame;

/// Samples per gluon loop
const GLUON_SAMPLES: usize = 100;

/// Canvas half-extent of the 3D panels, slightly past the axis labels
const SCENE_BOUNDS: f64 = 2.6;

pub fn draw(f: &mut Frame, app: &App) {
    let [title, body, controls] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(6),
    ])
    .areas(f.area());
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [scene, colors, waves] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(top);
    let [interactions, properties, info] =
        Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(bottom);

    draw_title(f, title);
    draw_scene(f, scene, app);
    draw_color_field(f, colors, app);
    draw_wave_contour(f, waves, app);
    draw_interactions(f, interactions, app);
    draw_properties(f, properties);
    draw_info(f, info, app);
    draw_controls(f, controls, app);
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, bold(Color::White)))
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Quark Structure 3D Simulation",
            bold(Color::Yellow),
        )),
        Line::from(Span::styled(
            "Interactive Visualization of Quantum Chromodynamics",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Draw a projected polyline as connected segments
fn polyline(ctx: &mut Context, view: &Projection, points: &[Point3D], color: Color) {
    for pair in view.project_all(points).windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

fn draw_scene(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.projection;
    let frame = &app.frame;
    let limit = app.config.axis_limit;
    let resolution = app.config.sphere_resolution;

    let canvas = Canvas::default()
        .block(panel("3D Quark Structure"))
        .marker(Marker::Braille)
        .x_bounds([-SCENE_BOUNDS, SCENE_BOUNDS])
        .y_bounds([-SCENE_BOUNDS, SCENE_BOUNDS])
        .paint(|ctx| {
            for axis in coordinate_axes(limit) {
                let (x, y) = view.project(&axis.tip);
                ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, to_color(axis.color)));
                let (lx, ly) = view.project(&axis.label_at);
                ctx.print(
                    lx,
                    ly,
                    Span::styled(axis.label.to_string(), bold(to_color(axis.color))),
                );
            }

            for line in GluonLine::ALL {
                let trace = line.trace(GLUON_SAMPLES, frame.angle);
                polyline(ctx, view, &trace, to_color(line.color()));
            }
            ctx.layer();

            // Painter's order: farthest flavor first
            let mut placements = frame.placements.to_vec();
            placements.sort_by(|a, b| view.depth(&a.position).total_cmp(&view.depth(&b.position)));

            for placement in &placements {
                let color = to_color(placement.flavor.color());
                let mesh = sphere_mesh(placement.position, frame.marker_size, resolution);
                ctx.draw(&Points {
                    coords: &view.project_all(&mesh),
                    color,
                });

                let lift = Point3D::new(0.0, 0.0, frame.marker_size + 0.1);
                let (nx, ny) = view.project(&(placement.position + lift));
                ctx.print(nx, ny, Span::styled(placement.flavor.to_string(), bold(color)));
                let (qx, qy) = view.project(&(placement.position - lift));
                ctx.print(
                    qx,
                    qy,
                    Span::styled(
                        format!("Q={}", placement.flavor.charge_label()),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                );
            }
        });
    f.render_widget(canvas, area);
}

fn draw_color_field(f: &mut Frame, area: Rect, app: &App) {
    let canvas = Canvas::default()
        .block(panel("QCD Color Field"))
        .marker(Marker::HalfBlock)
        .x_bounds([-2.0, 2.0])
        .y_bounds([-2.0, 2.0])
        .paint(|ctx| {
            for (coord, color) in &app.panels.color_cells {
                ctx.draw(&Points {
                    coords: &[*coord],
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, area);
}

fn draw_wave_contour(f: &mut Frame, area: Rect, app: &App) {
    let (lo, hi) = app.panels.wave_range;
    let title = format!("Quantum Fluctuations [{lo:.2} .. {hi:.2}]");
    let canvas = Canvas::default()
        .block(panel(&title))
        .marker(Marker::HalfBlock)
        .x_bounds([-3.0, 3.0])
        .y_bounds([-3.0, 3.0])
        .paint(|ctx| {
            for (color, coords) in &app.panels.contour_bands {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });
    f.render_widget(canvas, area);
}

fn draw_interactions(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.projection;
    let canvas = Canvas::default()
        .block(panel("Quark Interactions & Force Lines"))
        .marker(Marker::Braille)
        .x_bounds([-3.0, 3.0])
        .y_bounds([-1.5, 3.5])
        .paint(|ctx| {
            for line in &app.panels.interactions {
                polyline(ctx, view, &line.points, to_color(line.color));
            }
            ctx.layer();
            for (i, line) in app.panels.interactions.iter().enumerate() {
                ctx.print(
                    1.4,
                    3.3 - 0.35 * i as f64,
                    Span::styled(line.label.clone(), Style::default().fg(to_color(line.color))),
                );
            }
        });
    f.render_widget(canvas, area);
}

fn draw_properties(f: &mut Frame, area: Rect) {
    let [bars_area, charge_area] =
        Layout::vertical([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);
    let rows = property_chart();

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .value(row.mass_mev.round() as u64)
                .text_value(row.flavor.mass_label().to_string())
                .label(Line::from(row.flavor.label()))
                .style(Style::default().fg(to_color(row.color)))
        })
        .collect();
    let bar_width = (bars_area.width.saturating_sub(2) / rows.len() as u16)
        .saturating_sub(1)
        .max(1);
    let chart = BarChart::default()
        .block(panel("Quark Properties: Mass (MeV)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    f.render_widget(chart, bars_area);

    let charges: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (i as f64, row.charge))
        .collect();
    let dataset = Dataset::default()
        .name("Charge")
        .marker(Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::White))
        .data(&charges);
    let symbols: Vec<String> = Flavor::ALL.iter().map(|f| f.symbol().to_string()).collect();
    let chart = Chart::new(vec![dataset])
        .block(panel("Electric Charge (e)"))
        .x_axis(
            Axis::default()
                .bounds([0.0, (rows.len() - 1) as f64])
                .labels(symbols),
        )
        .y_axis(
            Axis::default()
                .bounds([CHARGE_AXIS.0, CHARGE_AXIS.1])
                .labels(["-0.5", "0", "1.0"]),
        );
    f.render_widget(chart, charge_area);
}

fn draw_info(f: &mut Frame, area: Rect, app: &App) {
    let state = app.animator.state();
    let mut lines: Vec<Line> = INFO_TEXT
        .iter()
        .enumerate()
        .map(|(i, text)| {
            if i == 0 || text.ends_with(':') {
                Line::from(Span::styled(*text, bold(Color::LightBlue)))
            } else {
                Line::from(*text)
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(
        INFO_SYMBOLS
            .iter()
            .flat_map(|s| [Span::styled(*s, bold(Color::Yellow)), Span::raw("   ")])
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        if state.running {
            Span::styled("RUNNING", bold(Color::Green))
        } else {
            Span::styled("PAUSED", bold(Color::Red))
        },
        Span::styled(format!(" | {}", app.message), Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Angle: ", Style::default().fg(Color::Gray)),
        Span::styled(app.frame.angle.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" | Frame: {}", app.frame.index),
            Style::default().fg(Color::Gray),
        ),
    ]));

    let info = Paragraph::new(lines)
        .block(panel("Info"))
        .wrap(Wrap { trim: false });
    f.render_widget(info, area);
}

fn slider(title: &str, value: f64, min: f64, max: f64, color: Color) -> LineGauge<'_> {
    LineGauge::default()
        .block(Block::default().title(title))
        .filled_style(Style::default().fg(color))
        .ratio(((value - min) / (max - min)).clamp(0.0, 1.0))
        .label(format!("{value:.2}"))
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let [help_area, sliders_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Green));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::Gray));
    let help = Paragraph::new(vec![
        Line::from(vec![
            key("S"),
            text(" start, "),
            key("P"),
            text(" pause, "),
            key("Space"),
            text(" toggle, "),
            key("R"),
            text(" reset"),
        ]),
        Line::from(vec![
            key("+/-"),
            text(" rotation speed, "),
            key("[/]"),
            text(" quark size, "),
            key("Q"),
            text(" quit"),
        ]),
    ])
    .block(panel("Controls"));
    f.render_widget(help, help_area);

    let state = app.animator.state();
    let block = panel("Sliders");
    let inner = block.inner(sliders_area);
    f.render_widget(block, sliders_area);
    let [speed_area, size_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).areas(inner);
    f.render_widget(
        slider("Rotation Speed", state.speed, SPEED_MIN, SPEED_MAX, Color::Yellow),
        speed_area,
    );
    f.render_widget(
        slider(
            "Quark Size",
            state.marker_size,
            MARKER_SIZE_MIN,
            MARKER_SIZE_MAX,
            Color::Magenta,
        ),
        size_area,
    );
}
