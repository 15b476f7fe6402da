// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;

// Re-exports
pub use colors::*;
pub use helpers::{calculate_progress, centered_rect};
pub use input::{handle_key_event, GestureEvent, GestureTracker, KeyAction};

use crate::app::{App, Tab, ViewState};
use crate::domain::{stack_transform, DeckStore, DecisionStatistics, Item, VisualParams};
use helpers::{offset_rect, px_to_cells, scale_width};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

/// Number of cards drawn in the stack
pub const STACK_DEPTH: usize = 3;

const INDICATOR_WIDTH: u16 = 14;
const INDICATOR_HEIGHT: u16 = 5;
const CARD_MAX_HEIGHT: u16 = 14;
/// Stack offset drawn as one row; a single step is shorter than a cell
const STACK_STEP_PX: f64 = 4.0;

/// Renders the whole screen and records the card area for hit-testing
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Length(4), // Header with progress
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app.tab);
    render_header(frame, chunks[1], &app.store);

    match app.tab {
        Tab::Sort => {
            let frame_params = app.interpreter.frame();
            app.card_area = render_card_stack(frame, chunks[2], &app.store, &frame_params);
        }
        Tab::Saved => {
            app.card_area = None;
            render_saved_list(frame, chunks[2], &app.store);
        }
    }

    render_footer(frame, chunks[3], app.tab);

    match app.view {
        ViewState::Help => render_help_overlay(frame),
        ViewState::Summary => render_summary(frame, &app.store.statistics()),
        ViewState::Welcome => render_welcome_overlay(frame, app.store.capacity()),
        ViewState::Browsing => {}
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, tab: Tab) {
    let selected = match tab {
        Tab::Sort => 0,
        Tab::Saved => 1,
    };

    let tabs = Tabs::new(vec![" Sort ", " Saved "])
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .style(Style::default().fg(TEXT_SECONDARY))
        .highlight_style(
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Renders the saved counter and review progress
fn render_header(frame: &mut Frame, area: Rect, store: &DeckStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let counter = Line::from(vec![
        Span::styled(
            format!(
                " {} / {} cards saved ",
                store.saved_list().len(),
                store.capacity()
            ),
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} left ", store.remaining_capacity()),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);

    let header = Paragraph::new(counter)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(header, chunks[0]);

    let stats = store.statistics();
    let reviewed = stats.kept + stats.trashed;
    let progress = calculate_progress(reviewed, stats.total);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .gauge_style(Style::default().fg(ACCENT_SECONDARY).bg(BG_DARK))
        .ratio(progress)
        .label(format!("{} of {} reviewed", reviewed, stats.total));

    frame.render_widget(gauge, chunks[1]);
}

/// Renders the card stack with the keep/trash indicators on either side.
///
/// Returns the resting area of the front card, or `None` when the deck is
/// exhausted.
fn render_card_stack(
    frame: &mut Frame,
    area: Rect,
    store: &DeckStore,
    params: &VisualParams,
) -> Option<Rect> {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(INDICATOR_WIDTH),
            Constraint::Min(0),
            Constraint::Length(INDICATOR_WIDTH),
        ])
        .split(area);

    let preview = store.preview_items(STACK_DEPTH);
    if preview.is_empty() {
        frame.render_widget(render_empty_deck_widget(), area);
        return None;
    }

    let base = base_card_rect(columns[1]);

    // Back to front so the front card paints last
    for (index, item) in preview.iter().enumerate().skip(1).rev() {
        let transform = stack_transform(index);
        let rect = offset_rect(
            scale_width(base, transform.scale),
            0,
            stack_offset_rows(transform.translate_y),
            columns[1],
        );
        render_back_card(frame, rect, item);
    }

    let (dx, dy) = px_to_cells(params.translate_x, params.translate_y);
    let front_rect = offset_rect(base, dx, dy, area);
    render_front_card(frame, front_rect, preview[0], params.rotation_deg);

    // Indicators sit above the cards
    render_indicator(
        frame,
        columns[0],
        " ✓ KEEP ",
        ACCENT_SECONDARY,
        params.keep_opacity,
        params.keep_scale,
    );
    render_indicator(
        frame,
        columns[2],
        " ✗ TRASH ",
        ACCENT_PRIMARY,
        params.trash_opacity,
        params.trash_scale,
    );

    Some(base)
}

fn stack_offset_rows(translate_y: f64) -> i32 {
    (translate_y / STACK_STEP_PX).round() as i32
}

fn base_card_rect(area: Rect) -> Rect {
    let width = (area.width as u32 * 90 / 100) as u16;
    let height = area
        .height
        .saturating_sub(STACK_DEPTH as u16)
        .min(CARD_MAX_HEIGHT);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height.saturating_sub(height + STACK_DEPTH as u16)) / 2;
    Rect::new(x, y, width, height)
}

fn render_front_card(frame: &mut Frame, rect: Rect, item: &Item, rotation_deg: f64) {
    frame.render_widget(Clear, rect);

    let tilt = if rotation_deg.abs() < 0.5 {
        String::new()
    } else if rotation_deg < 0.0 {
        format!(" ↺ {:.0}° ", rotation_deg.abs())
    } else {
        format!(" ↻ {:.0}° ", rotation_deg)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            item.description.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
                .title(format!(" #{} ", item.id))
                .title(Line::from(tilt).alignment(Alignment::Right))
                .style(Style::default().bg(BG_DARK)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, rect);
}

fn render_back_card(frame: &mut Frame, rect: Rect, item: &Item) {
    frame.render_widget(Clear, rect);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(format!(" #{} ", item.id))
        .style(Style::default().bg(BG_DARK));

    frame.render_widget(card, rect);
}

/// Draws an indicator whose color intensity follows `opacity` and whose
/// height follows `scale`. Nothing is drawn while fully transparent.
fn render_indicator(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    color: Color,
    opacity: f64,
    scale: f64,
) {
    if opacity <= 0.0 || area.width == 0 {
        return;
    }

    let height = ((INDICATOR_HEIGHT as f64) * scale.clamp(0.0, 1.0))
        .round()
        .max(3.0) as u16;
    let height = height.min(area.height);
    let rect = Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    );

    let tint = fade(color, opacity);
    let mut style = Style::default().fg(tint);
    if opacity >= 1.0 {
        style = style.add_modifier(Modifier::BOLD);
    }

    let indicator = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(tint)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(indicator, rect);
}

/// Creates an empty state widget for when the deck is exhausted
fn render_empty_deck_widget() -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No more cards",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Every card has been sorted.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Tab to review your saved cards.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR))
                .title(" Deck "),
        )
        .alignment(Alignment::Center)
}

/// Renders the saved tab: kept cards in keep order
fn render_saved_list(frame: &mut Frame, area: Rect, store: &DeckStore) {
    let saved = store.saved_list();

    let lines: Vec<Line> = if saved.is_empty() {
        vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No saved cards yet",
                Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Swipe left on cards you want to keep. Your saved cards will appear here.",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ]
    } else {
        saved
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                [
                    Line::from(vec![
                        Span::styled(
                            format!("{:>3}. ", index + 1),
                            Style::default().fg(TEXT_SECONDARY),
                        ),
                        Span::styled(
                            item.title.clone(),
                            Style::default()
                                .fg(TEXT_PRIMARY)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", item.description),
                        Style::default().fg(TEXT_SECONDARY),
                    )),
                ]
            })
            .collect()
    };

    let alignment = if saved.is_empty() {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR))
                .title(" Saved Cards "),
        )
        .alignment(alignment)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Renders the footer with styled controls
fn render_footer(frame: &mut Frame, area: Rect, tab: Tab) {
    let mut spans = Vec::new();
    if tab == Tab::Sort {
        spans.extend([
            Span::styled(
                " ← ",
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Keep", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("  │  "),
            Span::styled(
                "→ ",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Trash", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("  │  "),
        ]);
    }
    spans.extend([
        Span::styled("Tab ", Style::default().fg(ACCENT_HIGHLIGHT)),
        Span::styled("Switch", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("? ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Help", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("q ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Quit", Style::default().fg(TEXT_SECONDARY)),
    ]);

    let footer = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR))
                .title(" Swipe left to keep, right to trash ")
                .title_alignment(Alignment::Center),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Renders the summary screen
pub fn render_summary(frame: &mut Frame, stats: &DecisionStatistics) {
    let summary_area = centered_rect(60, 50, frame.area());

    frame.render_widget(Clear, summary_area);

    let block = Block::default()
        .title(" Session Complete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(summary_area);
    frame.render_widget(block, summary_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Summary",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("   Total cards:  "),
            Span::styled(
                format!("{}", stats.total),
                Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("   ✓ ", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw("Kept:     "),
            Span::styled(
                format!("{}", stats.kept),
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("   ✗ ", Style::default().fg(ACCENT_PRIMARY)),
            Span::raw("Trashed:  "),
            Span::styled(
                format!("{}", stats.trashed),
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("   ○ ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("Unsorted: "),
            Span::styled(
                format!("{}", stats.remaining),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Press 2 to view saved cards, any other key to exit",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(50, 70, frame.area());

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let help_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Controls",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  drag ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("   Swipe the card with the mouse"),
        ]),
        Line::from(vec![
            Span::styled("  ← ", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw("or "),
            Span::styled("h", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw("     Keep card"),
        ]),
        Line::from(vec![
            Span::styled("  → ", Style::default().fg(ACCENT_PRIMARY)),
            Span::raw("or "),
            Span::styled("l", Style::default().fg(ACCENT_PRIMARY)),
            Span::raw("     Trash card"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Tab ", Style::default().fg(ACCENT_HIGHLIGHT)),
            Span::raw("or "),
            Span::styled("1/2", Style::default().fg(ACCENT_HIGHLIGHT)),
            Span::raw("  Sort / Saved"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("or "),
            Span::styled("Esc", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("     Quit"),
        ]),
        Line::from(vec![
            Span::styled("  ?", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("           Toggle help"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the welcome dialog overlay
pub fn render_welcome_overlay(frame: &mut Frame, capacity: usize) {
    let area = centered_rect(85, 85, frame.area());

    frame.render_widget(Clear, area);

    let welcome_lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Welcome to cardswipe!",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::raw(format!(
            "Sort the deck one card at a time. You can save at most {} cards,",
            capacity
        ))]),
        Line::from(vec![Span::raw("so choose the ones that matter.")]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Quick Start:",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  1. ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("Drag the front card "),
            Span::styled(
                "left",
                Style::default()
                    .fg(ACCENT_SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to save it, or "),
            Span::styled(
                "right",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to throw it away"),
        ]),
        Line::from(vec![
            Span::styled("  2. ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("Let go early and the card springs back"),
        ]),
        Line::from(vec![
            Span::styled("  3. ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("No mouse? Use ← and → instead"),
        ]),
        Line::from(vec![
            Span::styled("  4. ", Style::default().fg(TEXT_SECONDARY)),
            Span::raw("Open the Saved tab with Tab to see what you kept"),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to start sorting...",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    let welcome_text = Paragraph::new(welcome_lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " Welcome ",
                    Style::default()
                        .fg(ACCENT_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
                .style(Style::default().bg(BG_DARK)),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    frame.render_widget(welcome_text, area);
}
