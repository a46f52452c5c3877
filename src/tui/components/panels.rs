//! Read-only shell tabs: weather, market prices, and the farmer profile.
//!
//! All three are stateless and render compile-time sample data from
//! `core::panels`; the profile view also shows the signed-in farmer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Cell, Paragraph, Row, Table, Wrap};

use crate::core::panels::{
    FARM_DETAILS, MARKET_PRICES, PROFILE_EMAIL, PROFILE_STATS, PROFILE_TITLE, WEATHER,
    WeatherReading, format_inr,
};
use crate::core::profile::UserProfile;
use crate::tui::component::Component;

fn panel_block(title: &str) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .title(title)
}

pub struct WeatherPanel;

impl WeatherPanel {
    fn reading_lines(w: &WeatherReading) -> [Line<'static>; 2] {
        [
            Line::from(vec![
                Span::styled(
                    format!("📍 {:<11}", w.district),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "{:<14} {:>3}°C  💧 {:>2}%  🌧 {:>3} mm",
                    w.condition, w.temperature_c, w.humidity_pct, w.rainfall_mm
                )),
            ]),
            Line::styled(
                format!("   ↳ {}", w.advisory),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    }
}

impl Component for WeatherPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = WEATHER.iter().flat_map(Self::reading_lines).collect();
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel_block("Weather / കാലാവസ്ഥ"));
        frame.render_widget(paragraph, area);
    }
}

pub struct MarketPanel;

impl MarketPanel {
    fn change_style(change_permille: i16) -> Style {
        match change_permille.signum() {
            1 => Style::default().fg(Color::Green),
            -1 => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::DarkGray),
        }
    }
}

impl Component for MarketPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Commodity", "", "Market", "Price", "Unit", "Change"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = MARKET_PRICES.iter().map(|p| {
            Row::new([
                Cell::from(p.commodity),
                Cell::from(p.commodity_ml),
                Cell::from(p.market),
                Cell::from(format_inr(p.price_inr)),
                Cell::from(format!("/{}", p.unit)),
                Cell::from(Span::styled(p.change_label(), Self::change_style(p.change_permille))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(11),
                Constraint::Length(9),
                Constraint::Length(10),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(panel_block("Market Prices / മാർക്കറ്റ് വില"));
        frame.render_widget(table, area);
    }
}

pub struct ProfilePanel<'a> {
    pub profile: &'a UserProfile,
}

impl<'a> ProfilePanel<'a> {
    pub fn new(profile: &'a UserProfile) -> Self {
        Self { profile }
    }

    fn crop_badges(&self) -> Line<'a> {
        let mut spans = vec![Span::raw("Crops: ")];
        for crop in self.profile.crops() {
            spans.push(Span::styled(
                format!(" {crop} "),
                Style::default().fg(Color::Black).bg(Color::Green),
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl<'a> Component for ProfilePanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [card_area, stats_area, details_area, hint_area] = Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(3),
            Constraint::Length(FARM_DETAILS.len() as u16 + 2),
            Constraint::Min(1),
        ])
        .areas(area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let card = Paragraph::new(vec![
            Line::styled(self.profile.name.as_str(), bold.fg(Color::Green)),
            Line::styled(PROFILE_TITLE, Style::default().fg(Color::DarkGray)),
            Line::from(format!("📱 {}", self.profile.phone)),
            Line::from(format!("✉  {PROFILE_EMAIL}")),
            Line::from(format!("📍 {}", self.profile.farm_location)),
            Line::from(format!(
                "{} acres · {} years experience · ★ {}",
                self.profile.acres, self.profile.experience_years, self.profile.rating
            )),
            self.crop_badges(),
        ])
        .wrap(Wrap { trim: true })
        .block(panel_block("Profile / പ്രൊഫൈൽ"));
        frame.render_widget(card, card_area);

        let stats: Vec<Span> = PROFILE_STATS
            .iter()
            .flat_map(|s| {
                [
                    Span::styled(s.value.to_string(), bold.fg(Color::Green)),
                    Span::raw(format!(" {}   ", s.label)),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(stats)).block(panel_block("Activity")),
            stats_area,
        );

        let details: Vec<Line> = FARM_DETAILS
            .iter()
            .map(|d| {
                Line::from(vec![
                    Span::styled(format!("{}: ", d.label), bold),
                    Span::raw(d.value),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(details).block(panel_block("Farm Details")),
            details_area,
        );

        frame.render_widget(
            Paragraph::new(Line::styled(
                "[l] Logout / ലോഗൗട്ട്",
                Style::default().fg(Color::Red),
            )),
            hint_area,
        );
    }
}
