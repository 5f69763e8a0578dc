use battcore::telemetry::{read_node, TelemetryTable, DATA_DIR};
use iced::{
    mouse,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, text, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Task, Theme,
};
use log::info;

/// Fixed voltage axis range, matching the field-test chart.
const Y_MIN: f32 = 3.8;
const Y_MAX: f32 = 4.4;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let node1 = read_node(DATA_DIR, 1)?;
    let node2 = read_node(DATA_DIR, 2)?;
    info!(
        "plotting {} records for node 1, {} for node 2",
        node1.len(),
        node2.len()
    );

    let boot = move || {
        (
            Plotter {
                node1: node1.clone(),
                node2: node2.clone(),
            },
            Task::none(),
        )
    };
    iced::application(boot, Plotter::update, Plotter::view)
        .title(application_title)
        .theme(application_theme)
        .run()?;
    Ok(())
}

fn application_title(_: &Plotter) -> String {
    "Battery Telemetry Plotter".into()
}

fn application_theme(_: &Plotter) -> Theme {
    Theme::Dark
}

#[derive(Debug, Clone)]
struct Plotter {
    node1: TelemetryTable,
    node2: TelemetryTable,
}

#[derive(Debug, Clone)]
enum Message {}

impl Plotter {
    fn update(_state: &mut Self, message: Message) -> Task<Message> {
        match message {}
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scatter = Canvas::new(VoltageScatter {
            node1: state.node1.voltage_series(),
            node2: state.node2.voltage_series(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let legend = row![
            text(format!("Node 1 ({} samples)", state.node1.len()))
                .size(14)
                .color(NODE1_COLOR),
            text(format!("Node 2 ({} samples)", state.node2.len()))
                .size(14)
                .color(NODE2_COLOR),
        ]
        .spacing(20);

        let layout = column![
            text("Voltage drop over time").size(26),
            legend,
            scatter,
            row![
                text(format!("Voltage drop [{Y_MIN} V, {Y_MAX} V]")).size(14),
                text("Time").size(14),
            ]
            .spacing(40),
        ]
        .spacing(10)
        .padding(16)
        .align_x(Alignment::Center);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

const NODE1_COLOR: Color = Color {
    r: 0.25,
    g: 0.45,
    b: 0.95,
    a: 1.0,
};
const NODE2_COLOR: Color = Color {
    r: 0.92,
    g: 0.25,
    b: 0.25,
    a: 1.0,
};

#[derive(Clone)]
struct VoltageScatter {
    node1: Vec<(f64, f64)>,
    node2: Vec<(f64, f64)>,
}

impl VoltageScatter {
    fn time_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(timestamp, _) in self.node1.iter().chain(&self.node2) {
            min = min.min(timestamp);
            max = max.max(timestamp);
        }
        (min, max)
    }
}

impl canvas::Program<Message> for VoltageScatter {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        // Horizontal gridlines every 0.1 V across the fixed axis range.
        let mut tick = Y_MIN;
        while tick <= Y_MAX + 1e-6 {
            let normalized = (tick - Y_MIN) / (Y_MAX - Y_MIN);
            let y = bounds.height - normalized * bounds.height;
            let line = Path::line(Point::new(0.0, y), Point::new(bounds.width, y));
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgb(0.18, 0.18, 0.18)),
            );
            tick += 0.1;
        }

        let (t_min, t_max) = self.time_range();
        let span = (t_max - t_min).max(1.0);
        let mut plot_series = |series: &[(f64, f64)], color: Color| {
            for &(timestamp, voltage) in series {
                let x = ((timestamp - t_min) / span) as f32 * bounds.width;
                let normalized = (voltage as f32 - Y_MIN) / (Y_MAX - Y_MIN);
                let y = bounds.height - normalized * bounds.height;
                frame.fill(&Path::circle(Point::new(x, y), 3.0), color);
            }
        };
        plot_series(&self.node1, NODE1_COLOR);
        plot_series(&self.node2, NODE2_COLOR);

        vec![frame.into_geometry()]
    }
}
