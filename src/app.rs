use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveDate, Utc};
use eframe::App;
use egui::{self, Color32, Context, RichText, Ui};
use lru::LruCache;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::info;

use crate::activity::SubPhase;
use crate::color::{Rgb, ACTIVITY_GREEN, ACTIVITY_RED};
use crate::month::{day_cell, days_in_month, DayCell, MonthGrid, MONTH_NAMES, WEEKDAY_LABELS};
use crate::phase_table::{events, PhaseEvent, PhaseKind, TARGET_YEAR};

// Performance Metrics
#[derive(Default)]
pub struct Metrics {
    calculation_time: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_calculation(&self, duration: std::time::Duration) {
        self.calculation_time
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> String {
        format!(
            "Performance Metrics:\n\
             Calculation Time: {}µs\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.calculation_time.load(Ordering::Relaxed),
            self.cache_hits.load(Ordering::Relaxed),
            self.cache_misses.load(Ordering::Relaxed),
            self.cache_hit_rate() * 100.0
        )
    }

    fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits.load(Ordering::Relaxed) as f64;
        let misses = self.cache_misses.load(Ordering::Relaxed) as f64;
        let total = hits + misses;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

// Month Cache
pub struct MonthCache {
    cache: LruCache<u32, MonthGrid>,
}

impl MonthCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    pub fn get_month(&mut self, month: u32) -> Option<MonthGrid> {
        self.cache.get(&month).cloned()
    }

    pub fn put_month(&mut self, month: u32, grid: MonthGrid) {
        self.cache.put(month, grid);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

pub struct MonthCalculator {
    metrics: Arc<Metrics>,
    cache: Arc<RwLock<MonthCache>>,
}

impl MonthCalculator {
    pub fn new(cache: Arc<RwLock<MonthCache>>, metrics: Arc<Metrics>) -> Self {
        Self { metrics, cache }
    }

    /// Fetch a month grid, computing the day cells in parallel on a miss.
    pub fn calculate_month(&self, month: u32, events: &[PhaseEvent]) -> MonthGrid {
        {
            let mut cache = self.cache.write();
            if let Some(grid) = cache.get_month(month) {
                self.metrics.record_cache_hit();
                return grid;
            }
        }
        self.metrics.record_cache_miss();

        let start = Instant::now();
        let first = NaiveDate::from_ymd_opt(TARGET_YEAR, month, 1).unwrap();
        let cells: Vec<DayCell> = (1..=days_in_month(TARGET_YEAR, month))
            .into_par_iter()
            .map(|day| day_cell(first.with_day(day).unwrap(), events))
            .collect();
        let grid = MonthGrid {
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            cells,
        };

        let duration = start.elapsed();
        self.metrics.record_calculation(duration);
        info!(
            target: "month_calculation",
            "Calculated {} day cells for month {} in {}µs",
            grid.cells.len(),
            month,
            duration.as_micros()
        );

        let mut cache = self.cache.write();
        cache.put_month(month, grid.clone());

        grid
    }
}

// ---------- LUNAR CALENDAR STRUCT & METHODS ----------

pub struct LunarCalendar {
    displayed_month: u32,
    month_grid: MonthGrid,
    cache: Arc<RwLock<MonthCache>>,
    calculator: MonthCalculator,
    metrics: Arc<Metrics>,
}

impl LunarCalendar {
    pub fn new() -> Self {
        let metrics = Arc::new(Metrics::new());
        let cache = Arc::new(RwLock::new(MonthCache::new(NonZeroUsize::new(12).unwrap())));
        let calculator = MonthCalculator::new(Arc::clone(&cache), Arc::clone(&metrics));

        // Open on the current month when the clock is inside the target
        // year, on January otherwise.
        let today = Utc::now().date_naive();
        let displayed_month = if today.year() == TARGET_YEAR {
            today.month()
        } else {
            1
        };
        let month_grid = calculator.calculate_month(displayed_month, events());

        Self {
            displayed_month,
            month_grid,
            cache,
            calculator,
            metrics,
        }
    }

    fn show_month(&mut self, month: u32) {
        let month = month.clamp(1, 12);
        if month != self.displayed_month {
            self.displayed_month = month;
            self.month_grid = self.calculator.calculate_month(month, events());
        }
    }

    pub fn render(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_navigation(ui);
            ui.separator();
            self.render_grid(ui);
            ui.separator();
            self.render_legend(ui);

            if cfg!(debug_assertions) {
                ui.collapsing("📊 Performance Metrics", |ui| {
                    ui.monospace(self.metrics.report());
                    ui.monospace(format!("Cached Months: {}", self.cache.read().len()));
                });
            }
        });
    }

    fn render_navigation(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.show_month(self.displayed_month.saturating_sub(1));
            }
            ui.heading(format!(
                "{} {}",
                MONTH_NAMES[(self.displayed_month - 1) as usize],
                TARGET_YEAR
            ));
            if ui.button("▶").clicked() {
                self.show_month(self.displayed_month + 1);
            }
        });
    }

    fn render_grid(&self, ui: &mut Ui) {
        egui::Grid::new("activity_grid")
            .num_columns(7)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for label in WEEKDAY_LABELS {
                    ui.label(RichText::new(label).strong());
                }
                ui.end_row();

                let mut column = 0;
                for _ in 0..self.month_grid.leading_blanks {
                    ui.label("");
                    column += 1;
                }
                for cell in &self.month_grid.cells {
                    render_day(ui, cell);
                    column += 1;
                    if column % 7 == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_legend(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            legend_swatch(ui, ACTIVITY_RED, "Peak activity");
            legend_swatch(ui, ACTIVITY_GREEN, "Moderate activity");
            ui.label("🌑 new moon");
            ui.label("🌓 first quarter");
        });
    }
}

impl App for LunarCalendar {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

fn render_day(ui: &mut Ui, cell: &DayCell) {
    let marker = match cell.event {
        Some(PhaseKind::NewMoon) => " 🌑",
        Some(PhaseKind::FirstQuarter) => " 🌓",
        None => "",
    };
    let text = format!("{}{}", cell.day, marker);
    let mut button = egui::Button::new(RichText::new(text)).min_size(egui::vec2(52.0, 40.0));
    if let Some(rgb) = cell.color {
        button = button.fill(fill_color(rgb));
    }
    ui.add(button).on_hover_text(hover_text(cell));
}

fn hover_text(cell: &DayCell) -> String {
    match cell.classification.sub_phase {
        SubPhase::None => format!("{}: quiet day", cell.date),
        sub_phase => format!(
            "{}: {}, day {} of 7",
            cell.date,
            sub_phase.label(),
            cell.classification.day_index
        ),
    }
}

fn legend_swatch(ui: &mut Ui, rgb: Rgb, label: &str) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, fill_color(rgb));
    ui.label(label);
}

fn fill_color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
