//! # FarmingLoader Component
//!
//! Animated "work in progress" indicator: a tractor crossing a field row
//! while a seedling grows, with a caption underneath. Shown while sign-in
//! is pending and while the assistant is composing a reply.
//!
//! The animation is driven entirely by the `spinner_frame` prop, which the
//! event loop advances on every tick. The component holds no state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::component::Component;

const GROWTH: [&str; 4] = ["·", "🌱", "🌿", "🌾"];
/// Cells in the field row the tractor drives across.
const TRACK_CELLS: usize = 12;
/// Field row + caption.
pub const LOADER_HEIGHT: u16 = 2;

#[derive(Clone, Copy)]
pub struct FarmingLoader<'a> {
    pub message: &'a str,
    pub spinner_frame: usize,
}

impl<'a> FarmingLoader<'a> {
    pub fn new(message: &'a str, spinner_frame: usize) -> Self {
        Self {
            message,
            spinner_frame,
        }
    }

    /// The field row for a given frame: furrows, the tractor, then the crop.
    pub fn track(spinner_frame: usize) -> String {
        let pos = spinner_frame % TRACK_CELLS;
        let plant = GROWTH[(spinner_frame / 3) % GROWTH.len()];
        let mut row = String::new();
        for cell in 0..TRACK_CELLS {
            if cell == pos {
                row.push_str("🚜");
            } else {
                row.push_str("~ ");
            }
        }
        row.push(' ');
        row.push_str(plant);
        row
    }
}

impl<'a> Widget for FarmingLoader<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                Self::track(self.spinner_frame),
                Style::default().fg(Color::Green),
            )),
            Line::from(Span::styled(
                self.message,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ];
        let [centered] = Layout::vertical([Constraint::Length(LOADER_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}

impl<'a> Component for FarmingLoader<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
