//! UI Components
//!
//! The rendering tree: theme card → day headings / task rows → day cells.
//! Every component gets the `JournalHandle` as a prop.

mod day_cell;
mod day_heading;
mod task_row;
mod theme_card;

pub use day_cell::DayCell;
pub use day_heading::DayHeading;
pub use task_row::TaskRow;
pub use theme_card::ThemeCard;
