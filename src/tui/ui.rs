//! Terminal layout and widget definitions for the card.
//!
//! Renders the derived [`RenderState`] with Ratatui widgets:
//!
//! ```text
//! ┌─────────────────── Title ────────────────────┐
//! │           Tent A  /  Blue Dream              │
//! ├─────────────────── Chips ────────────────────┤
//! │ 🌡 Temperature 24 °C │ 💧 Humidity 60 %      │
//! ├────────────────── Details ───────────────────┤
//! │ Current Phase ................. Vegetative   │
//! │ Run Status .................... active       │
//! ├────────────────── Actions ───────────────────┤
//! │ [Change Phase]  [Add Note]  [End Run]        │
//! ├────────────────── Footer ────────────────────┤
//! │ p phase │ n note │ e end │ q quit            │
//! └──────────────────────────────────────────────┘
//! ```

use crate::card::{ActionButton, CardView, MetricChip, RenderState};
use crate::classify::ColorClass;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything the renderer needs for one frame.
pub struct CardFrame<'a> {
    pub state: &'a RenderState,
    /// Index of the highlighted action button, when the action row renders.
    pub selected_action: usize,
    /// One-line summary of the most recent service call, if any.
    pub last_call: Option<&'a str>,
}

/// Render one frame of the card.
pub fn render(frame: &mut Frame, card: &CardFrame) {
    let area = frame.area();

    match card.state {
        RenderState::NoConfig => {
            render_placeholder(frame, area, "No run_id configured.");
        }
        RenderState::MissingStatus { .. } => {
            // error_message is always present for this state
            let message = card.state.error_message().unwrap_or_default();
            render_error_panel(frame, area, &message);
        }
        RenderState::Idle(view) | RenderState::Running(view) => {
            render_view(frame, card, view);
        }
    }
}

fn render_view(frame: &mut Frame, card: &CardFrame, view: &CardView) {
    let actions_height = if card.state.actions_visible() { 5 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),              // Title
            Constraint::Length(4),              // Chips
            Constraint::Min(4),                 // Details
            Constraint::Length(actions_height), // Actions
            Constraint::Length(3),              // Footer
        ])
        .split(frame.area());

    render_title(frame, view, chunks[0]);
    render_chips(frame, view, chunks[1]);
    render_details(frame, view, chunks[2]);
    if card.state.actions_visible() {
        render_actions(frame, view, card.selected_action, chunks[3]);
    }
    render_footer(frame, card, chunks[4]);
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::styled(
        message.to_string(),
        Style::default().fg(Color::Gray),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" PlantRun "),
    );
    frame.render_widget(paragraph, area);
}

/// Inline error panel for a missing status sensor. Non-fatal: no action
/// affordances, nothing propagates to the host.
fn render_error_panel(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
    ]);
    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    " PlantRun ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        );
    frame.render_widget(paragraph, area);
}

fn render_title(frame: &mut Frame, view: &CardView, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .centered()];

    if let Some(subtitle) = &view.subtitle {
        lines.push(
            Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(Color::Gray),
            ))
            .centered(),
        );
    }

    let title = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn render_chips(frame: &mut Frame, view: &CardView, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, chip) in view.chips.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.extend(chip_spans(chip));
    }
    if spans.is_empty() {
        spans.push(Span::styled("no metrics", Style::default().fg(Color::DarkGray)));
    }

    let chips = Paragraph::new(Line::from(spans).centered())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(chips, area);
}

fn chip_spans(chip: &MetricChip) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{} ", icon_glyph(&chip.icon)),
            Style::default().fg(chip_color(chip.color_class)),
        ),
        Span::styled(
            format!("{} ", chip.label),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            chip.display_value(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

fn render_details(frame: &mut Frame, view: &CardView, area: Rect) {
    let lines: Vec<Line> = view
        .details
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", icon_glyph(&row.name_icon)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{:<16}", row.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{} ", icon_glyph(&row.value_icon)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    row.value.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let details = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::NONE)
            .padding(ratatui::widgets::Padding::horizontal(2)),
    );
    frame.render_widget(details, area);
}

fn render_actions(frame: &mut Frame, view: &CardView, selected: usize, area: Rect) {
    let constraints: Vec<Constraint> = view
        .actions
        .iter()
        .map(|_| Constraint::Ratio(1, view.actions.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (button, slot)) in view.actions.iter().zip(slots.iter()).enumerate() {
        render_action_button(frame, button, i == selected, *slot);
    }
}

fn render_action_button(frame: &mut Frame, button: &ActionButton, selected: bool, area: Rect) {
    let accent = if button.destructive {
        Color::Red
    } else {
        Color::Cyan
    };
    let border = if selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(&button.icon)),
                Style::default().fg(accent),
            ),
            Span::styled(
                button.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .centered(),
        Line::from(Span::styled(
            button.subtitle.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, card: &CardFrame, area: Rect) {
    let mut spans = vec![
        Span::styled("p", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" phase │ ", Style::default().fg(Color::Gray)),
        Span::styled("n", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" note │ ", Style::default().fg(Color::Gray)),
        Span::styled("e", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(" end run │ ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" quit", Style::default().fg(Color::Gray)),
    ];

    if let Some(call) = card.last_call {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("sent: ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            call.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, area);
}

/// Map a chip color class onto a terminal color.
fn chip_color(class: ColorClass) -> Color {
    match class {
        ColorClass::Temp => Color::Red,
        ColorClass::Humidity => Color::Gray,
        ColorClass::Energy => Color::Blue,
        ColorClass::Light => Color::Yellow,
        ColorClass::None => Color::Cyan,
    }
}

/// Map an MDI icon name onto a terminal glyph.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "mdi:thermometer" => "🌡",
        "mdi:water-percent" => "💧",
        "mdi:flash" => "⚡",
        "mdi:white-balance-sunny" => "☀",
        "mdi:watering-can" => "🚿",
        "mdi:door-open" => "🚪",
        "mdi:door-closed" => "🚪",
        "mdi:sprout" => "🌱",
        "mdi:cannabis" => "🌿",
        "mdi:play-circle" => "▶",
        "mdi:stop-circle" => "■",
        "mdi:update" => "↻",
        "mdi:notebook-edit" => "✎",
        "mdi:power" => "⏻",
        _ => "▦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyph_known_and_fallback() {
        assert_eq!(icon_glyph("mdi:thermometer"), "🌡");
        assert_eq!(icon_glyph("mdi:door-open"), "🚪");
        assert_eq!(icon_glyph("mdi:something-else"), "▦");
        assert_eq!(icon_glyph("mdi:chart-bell-curve-cumulative"), "▦");
    }
}
