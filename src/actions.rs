//! Journal Actions
//!
//! The closed set of operations the view can request, and the
//! collection edits they reduce to. Edits are applied copy-on-write:
//! `apply` builds a new collection and leaves its input untouched.

use chrono::NaiveDate;

use crate::models::{HoverTarget, Task, Theme};

/// Theme field updates
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeField {
    Title(String),
    Date(Option<NaiveDate>),
}

/// Task field updates
#[derive(Debug, Clone, PartialEq)]
pub enum TaskField {
    Title(String),
}

/// Everything the view can dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTheme,
    RemoveTheme { theme: usize },
    UpdateTheme { theme: usize, field: ThemeField },
    AddDay { theme: usize },
    RemoveDay { theme: usize, day: usize },
    AddTask { theme: usize },
    RemoveTask { theme: usize, task: usize },
    UpdateTask { theme: usize, task: usize, field: TaskField },
    UpdateDay { theme: usize, task: usize, day: usize },
    UpdateLabel { theme: usize, day: usize, value: String },
    HoverDay(HoverTarget),
    HoverReset,
    ToggleDemo,
}

/// A structural or field edit of the theme collection
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    AddTheme { date: Option<NaiveDate>, day_count: usize },
    RemoveTheme { theme: usize },
    UpdateTheme { theme: usize, field: ThemeField },
    AddDay { theme: usize },
    RemoveDay { theme: usize, day: usize },
    AddTask { theme: usize },
    RemoveTask { theme: usize, task: usize },
    UpdateTask { theme: usize, task: usize, field: TaskField },
    UpdateDay { theme: usize, task: usize, day: usize },
    UpdateLabel { theme: usize, day: usize, value: String },
}

impl Edit {
    /// Adds or removes a theme, day or task (positions shift)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Edit::AddTheme { .. }
                | Edit::RemoveTheme { .. }
                | Edit::AddDay { .. }
                | Edit::RemoveDay { .. }
                | Edit::AddTask { .. }
                | Edit::RemoveTask { .. }
        )
    }

    /// The one theme this edit rewrites, when the collection keeps its length
    pub fn theme(&self) -> Option<usize> {
        match self {
            Edit::AddTheme { .. } | Edit::RemoveTheme { .. } => None,
            Edit::UpdateTheme { theme, .. }
            | Edit::AddDay { theme }
            | Edit::RemoveDay { theme, .. }
            | Edit::AddTask { theme }
            | Edit::RemoveTask { theme, .. }
            | Edit::UpdateTask { theme, .. }
            | Edit::UpdateDay { theme, .. }
            | Edit::UpdateLabel { theme, .. } => Some(*theme),
        }
    }
}

/// Out-of-range index in an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange;

/// Apply `edit` to a copy of `themes`
pub fn apply(edit: &Edit, themes: &[Theme]) -> Result<Vec<Theme>, OutOfRange> {
    let mut draft = themes.to_vec();
    apply_in_place(edit, &mut draft)?;
    Ok(draft)
}

fn apply_in_place(edit: &Edit, themes: &mut Vec<Theme>) -> Result<(), OutOfRange> {
    match edit {
        Edit::AddTheme { date, day_count } => {
            themes.push(Theme::new(*date, *day_count));
        }
        Edit::RemoveTheme { theme } => {
            if *theme >= themes.len() {
                return Err(OutOfRange);
            }
            themes.remove(*theme);
        }
        Edit::UpdateTheme { theme, field } => {
            let theme = theme_mut(themes, *theme)?;
            match field {
                ThemeField::Title(title) => theme.title = title.clone(),
                ThemeField::Date(date) => theme.date = *date,
            }
        }
        Edit::AddDay { theme } => {
            let theme = theme_mut(themes, *theme)?;
            theme.days.push(String::new());
            for task in &mut theme.tasks {
                task.days.push(Default::default());
            }
        }
        Edit::RemoveDay { theme, day } => {
            let theme = theme_mut(themes, *theme)?;
            if *day >= theme.days.len() {
                return Err(OutOfRange);
            }
            theme.days.remove(*day);
            // Tasks that drifted short may not have this column
            for task in &mut theme.tasks {
                if *day < task.days.len() {
                    task.days.remove(*day);
                }
            }
        }
        Edit::AddTask { theme } => {
            let theme = theme_mut(themes, *theme)?;
            let day_count = theme.days.len();
            theme.tasks.push(Task::new(day_count));
        }
        Edit::RemoveTask { theme, task } => {
            let theme = theme_mut(themes, *theme)?;
            if *task >= theme.tasks.len() {
                return Err(OutOfRange);
            }
            theme.tasks.remove(*task);
        }
        Edit::UpdateTask { theme, task, field } => {
            let task = theme_mut(themes, *theme)?
                .tasks
                .get_mut(*task)
                .ok_or(OutOfRange)?;
            match field {
                TaskField::Title(title) => task.title = title.clone(),
            }
        }
        Edit::UpdateDay { theme, task, day } => {
            let theme = theme_mut(themes, *theme)?;
            if *day >= theme.days.len() {
                return Err(OutOfRange);
            }
            let task = theme.tasks.get_mut(*task).ok_or(OutOfRange)?;
            if task.days.len() <= *day {
                task.days.resize(*day + 1, Default::default());
            }
            task.days[*day] = task.days[*day].next();
        }
        Edit::UpdateLabel { theme, day, value } => {
            let label = theme_mut(themes, *theme)?
                .days
                .get_mut(*day)
                .ok_or(OutOfRange)?;
            *label = value.clone();
        }
    }
    Ok(())
}

fn theme_mut(themes: &mut [Theme], index: usize) -> Result<&mut Theme, OutOfRange> {
    themes.get_mut(index).ok_or(OutOfRange)
}
