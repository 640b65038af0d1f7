use chrono::{Days, NaiveDate};
use gymlog_domain as domain;
use plotters::{
    chart::ChartBuilder,
    prelude::{Circle, DrawingAreaErrorKind, IntoDrawingArea, SVGBackend},
    series::LineSeries,
    style::{Color, IntoFont, Palette, Palette99, RGBColor, TextStyle, WHITE},
};

use crate::Theme;

pub const COLOR_MAX_WEIGHT: usize = 8;
pub const COLOR_AVG_WEIGHT: usize = 1;

pub const OPACITY_LINE: f64 = 0.9;
pub const OPACITY_POINT: f64 = 0.9;

pub const WIDTH_LINE: u32 = 2;
pub const SIZE_POINT: u32 = 3;

pub const WIDTH: u32 = 720;
pub const HEIGHT: u32 = 240;

pub const FONT: (&str, u32) = ("sans-serif", 11);

#[derive(Clone, Copy)]
pub enum PlotType {
    Circle(usize, f64, u32),
    Line(usize, f64, u32),
}

#[must_use]
pub fn plot_line_with_points(color: usize) -> Vec<PlotType> {
    vec![
        PlotType::Line(color, OPACITY_LINE, WIDTH_LINE),
        PlotType::Circle(color, OPACITY_POINT, SIZE_POINT),
    ]
}

#[derive(Clone)]
pub struct PlotData {
    pub values: Vec<(NaiveDate, f32)>,
    pub plots: Vec<PlotType>,
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Bounds {
    min: f32,
    max: f32,
}

impl Bounds {
    fn min_with_margin(self) -> f32 {
        if self.min <= f32::EPSILON {
            return self.min;
        }
        (self.min - self.margin()).max(0.0)
    }

    fn max_with_margin(self) -> f32 {
        self.max + self.margin()
    }

    fn margin(self) -> f32 {
        if (self.max - self.min).abs() > f32::EPSILON {
            return (self.max - self.min) * 0.1;
        }
        0.1
    }
}

/// Plot date series as an SVG document.
///
/// Every `PlotData` element is drawn in order, and for each element all of its
/// plots are drawn in order. The x domain is the given interval, widened by a
/// day on both sides if it covers a single date. `None` is returned if there
/// is nothing to plot.
#[allow(clippy::missing_errors_doc)]
pub fn plot(
    data: &[PlotData],
    interval: &domain::Interval,
    theme: Theme,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let Some(bounds) = determine_y_bounds(data) else {
        return Ok(None);
    };

    let (first, last) = if interval.first < interval.last {
        (interval.first, interval.last)
    } else {
        (
            interval
                .first
                .checked_sub_days(Days::new(1))
                .unwrap_or(interval.first),
            interval
                .last
                .checked_add_days(Days::new(1))
                .unwrap_or(interval.last),
        )
    };

    let mut result = String::new();

    {
        let root = SVGBackend::with_string(&mut result, (WIDTH, HEIGHT)).into_drawing_area();
        let (color, background_color) = colors(theme);

        root.fill(&background_color)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10f32)
            .x_label_area_size(30f32)
            .y_label_area_size(40f32)
            .build_cartesian_2d(
                first..last,
                bounds.min_with_margin()..bounds.max_with_margin(),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .set_all_tick_mark_size(3u32)
            .axis_style(color.mix(0.3))
            .bold_line_style(color.mix(0.05))
            .light_line_style(color.mix(0.0))
            .label_style(TextStyle::from(FONT.into_font()).color(&color))
            .x_labels(4)
            .y_labels(6)
            .draw()?;

        for plot_data in data {
            let mut values = plot_data.values.clone();
            values.sort_by_key(|e| e.0);

            for plot in &plot_data.plots {
                match *plot {
                    PlotType::Circle(color, opacity, size) => {
                        chart.draw_series(values.iter().map(|(x, y)| {
                            Circle::new(
                                (*x, *y),
                                size,
                                Palette99::pick(color).mix(opacity).filled(),
                            )
                        }))?;
                    }
                    PlotType::Line(color, opacity, size) => {
                        chart.draw_series(LineSeries::new(
                            values.iter().map(|(x, y)| (*x, *y)),
                            Palette99::pick(color).mix(opacity).stroke_width(size),
                        ))?;
                    }
                }
            }
        }

        root.present()
            .map_err(|err: DrawingAreaErrorKind<std::io::Error>| err.to_string())?;
    }

    Ok(Some(result))
}

/// Plot the maximum and average weight of each session of an exercise.
#[allow(clippy::missing_errors_doc)]
pub fn plot_progression(
    points: &[domain::ProgressionPoint],
    theme: Theme,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let Some(interval) = domain::Interval::enclosing(points.iter().map(|p| p.date)) else {
        return Ok(None);
    };

    plot(
        &[
            PlotData {
                values: points.iter().map(|p| (p.date, p.max_weight)).collect(),
                plots: plot_line_with_points(COLOR_MAX_WEIGHT),
            },
            PlotData {
                values: points.iter().map(|p| (p.date, p.avg_weight)).collect(),
                plots: plot_line_with_points(COLOR_AVG_WEIGHT),
            },
        ],
        &interval,
        theme,
    )
}

fn colors(theme: Theme) -> (RGBColor, RGBColor) {
    let dark = RGBColor(20, 22, 26);
    match theme {
        Theme::Light => (dark, WHITE),
        Theme::Dark => (WHITE, dark),
    }
}

fn determine_y_bounds(data: &[PlotData]) -> Option<Bounds> {
    data.iter()
        .flat_map(|plot| plot.values.iter().map(|(_, v)| *v))
        .fold(None, |bounds: Option<Bounds>, value| {
            Some(match bounds {
                None => Bounds {
                    min: value,
                    max: value,
                },
                Some(b) => Bounds {
                    min: b.min.min(value),
                    max: b.max.max(value),
                },
            })
        })
}
