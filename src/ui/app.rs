use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::recipe::{Catalog, Category, Recipe};

/// Narrowest viewport the layout is drawn for.
pub const MIN_WIDTH: u16 = 60;
/// Widest viewport the layout is drawn for.
pub const MAX_WIDTH: u16 = 100;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed a recipe; carries its name.
    Selected(String),
    Cancelled,
}

/// Input translated into a picker transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousCategory,
    NextCategory,
    PreviousRecipe,
    NextRecipe,
    Confirm,
    Cancel,
    Resize(u16, u16),
}

/// Navigation state of the picker.
///
/// `category_index` always points at an existing category (or is zero for an
/// empty catalog) and `recipe_index` at an existing recipe of that category.
/// Boundaries are hard stops; nothing wraps around.
#[derive(Debug, Clone)]
pub struct Picker {
    catalog: Catalog,
    category_index: usize,
    recipe_index: usize,
    width: u16,
    height: u16,
}

impl Picker {
    pub fn new(catalog: Catalog, width: u16, height: u16) -> Self {
        let mut picker = Self {
            catalog,
            category_index: 0,
            recipe_index: 0,
            width: MIN_WIDTH,
            height,
        };
        picker.resize(width, height);
        picker
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn recipe_index(&self) -> usize {
        self.recipe_index
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.catalog.get(self.category_index)
    }

    pub fn previous_category_name(&self) -> Option<&str> {
        self.category_index
            .checked_sub(1)
            .and_then(|i| self.catalog.get(i))
            .map(|c| c.name.as_str())
    }

    pub fn next_category_name(&self) -> Option<&str> {
        self.catalog
            .get(self.category_index + 1)
            .map(|c| c.name.as_str())
    }

    pub fn current_recipes(&self) -> &[Recipe] {
        self.current_category()
            .map(|c| c.recipes.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.current_recipes().get(self.recipe_index)
    }

    pub fn previous_category(&mut self) {
        if self.category_index > 0 {
            self.category_index -= 1;
            self.recipe_index = 0;
        }
    }

    pub fn next_category(&mut self) {
        if self.category_index + 1 < self.catalog.len() {
            self.category_index += 1;
            self.recipe_index = 0;
        }
    }

    pub fn previous_recipe(&mut self) {
        if self.recipe_index > 0 {
            self.recipe_index -= 1;
        }
    }

    pub fn next_recipe(&mut self) {
        if self.recipe_index + 1 < self.current_recipes().len() {
            self.recipe_index += 1;
        }
    }

    /// The selected outcome, or `None` when the current category is empty.
    pub fn confirm(&self) -> Option<Outcome> {
        self.selected_recipe()
            .map(|recipe| Outcome::Selected(recipe.name.clone()))
    }

    /// Width is clamped to [`MIN_WIDTH`]..=[`MAX_WIDTH`]; height is taken as is.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        self.height = height;
    }

    /// Apply one transition. Returns an outcome when the session should end.
    pub fn apply(&mut self, action: Action) -> Option<Outcome> {
        match action {
            Action::PreviousCategory => self.previous_category(),
            Action::NextCategory => self.next_category(),
            Action::PreviousRecipe => self.previous_recipe(),
            Action::NextRecipe => self.next_recipe(),
            Action::Confirm => return self.confirm(),
            Action::Cancel => return Some(Outcome::Cancelled),
            Action::Resize(width, height) => self.resize(width, height),
        }
        None
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Outcome> {
        action_for(event).and_then(|action| self.apply(action))
    }
}

/// Map a terminal event to a picker action.
///
/// Only key presses count; release and repeat events are ignored.
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
        Event::Resize(width, height) => Some(Action::Resize(*width, *height)),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PreviousRecipe),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NextRecipe),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Cancel),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
        _ => None,
    }
}
