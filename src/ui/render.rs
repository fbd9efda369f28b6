use std::ops::Range;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::app::Picker;
use crate::ui::theme;
use crate::ui::wrap::wrap_words;

pub const TITLE: &str = "Available ujust recipes";
pub const HELP: &str = "← → Change Category | ↑ ↓ Navigate Recipes | Enter: Select | Esc: Exit";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_RECIPES: &str = "No recipes found";

/// Columns taken by the box border and its inner padding.
pub const BORDER_ALLOWANCE: u16 = 4;
/// Width of the previous/next category fields on the navigation line.
const SIDE_FIELD_WIDTH: usize = 20;
/// Rows used by everything except the recipe list.
const LIST_OVERHEAD: u16 = 15;
const MIN_VISIBLE_RECIPES: usize = 5;

const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";

pub fn content_width(viewport_width: u16) -> usize {
    usize::from(viewport_width.saturating_sub(BORDER_ALLOWANCE))
}

pub fn max_visible_recipes(viewport_height: u16) -> usize {
    usize::from(viewport_height.saturating_sub(LIST_OVERHEAD)).max(MIN_VISIBLE_RECIPES)
}

/// Indices of the recipes to draw so that `selected` stays on screen.
///
/// The window starts at the top and only scrolls once the selection passes
/// the last visible row; it never runs past the end of the list.
pub fn scroll_window(selected: usize, total: usize, max_visible: usize) -> Range<usize> {
    let count = total.min(max_visible);
    if count == 0 {
        return 0..0;
    }

    let start = if selected >= count {
        (selected + 1 - count).min(total - count)
    } else {
        0
    };

    start..start + count
}

/// Build every line of the frame, top to bottom, without the border.
pub fn frame_lines(picker: &Picker) -> Vec<Line<'static>> {
    let width = content_width(picker.width());
    let divider = Line::from("─".repeat(width));

    let mut lines = vec![
        Line::from(theme::title(TITLE)),
        divider.clone(),
        navigation_line(picker, width),
        Line::from(theme::control(HELP)),
        divider.clone(),
        Line::default(),
    ];

    let recipes = picker.current_recipes();
    let window = scroll_window(
        picker.recipe_index(),
        recipes.len(),
        max_visible_recipes(picker.height()),
    );

    for index in window {
        let name = &recipes[index].name;
        let line = if index == picker.recipe_index() {
            theme::recipe_active(&format!("{SELECTED_MARKER}{name}"))
        } else {
            theme::recipe_inactive(&format!("{UNSELECTED_MARKER}{name}"))
        };
        lines.push(Line::from(line));
    }

    lines.push(Line::default());
    lines.push(Line::default());

    if let Some(recipe) = picker.selected_recipe() {
        lines.push(divider);
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw("Selected: "),
            theme::recipe_active(&recipe.name),
        ]));
        lines.push(Line::default());

        if recipe.description.is_empty() {
            lines.push(Line::from(NO_DESCRIPTION));
        } else {
            lines.extend(wrap_words(&recipe.description, width).into_iter().map(Line::from));
        }
        lines.push(Line::default());
    }

    lines
}

// Previous label left-aligned, current label centered, next label right-aligned.
fn navigation_line(picker: &Picker, width: usize) -> Line<'static> {
    let Some(current) = picker.current_category() else {
        return Line::from(theme::category_inactive(NO_RECIPES));
    };

    let mut spans = Vec::new();

    let left = picker
        .previous_category_name()
        .map(|name| format!("← {name}"))
        .unwrap_or_default();
    let left_width = left.width();
    spans.push(theme::category_inactive(&left));
    spans.push(padding(SIDE_FIELD_WIDTH.saturating_sub(left_width)));

    let center_width = width.saturating_sub(2 * SIDE_FIELD_WIDTH);
    let center_gap = center_width.saturating_sub(current.name.width());
    spans.push(padding(center_gap / 2));
    spans.push(theme::category_active(&current.name));
    spans.push(padding(center_gap - center_gap / 2));

    let right = picker
        .next_category_name()
        .map(|name| format!("{name} →"))
        .unwrap_or_default();
    spans.push(padding(SIDE_FIELD_WIDTH.saturating_sub(right.width())));
    spans.push(theme::category_inactive(&right));

    Line::from(spans)
}

fn padding(columns: usize) -> Span<'static> {
    Span::raw(" ".repeat(columns))
}

pub fn render(frame: &mut Frame, picker: &Picker) {
    let area = frame.area();
    let boxed = Rect {
        width: picker.width().min(area.width),
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(frame_lines(picker)).block(block);

    frame.render_widget(paragraph, boxed);
}
