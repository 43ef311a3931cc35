//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod add_todo_form;
mod todo_list;
mod todo_item;
mod delete_confirm_button;
mod loading_spinner;
mod error_message;
mod empty_state;
mod footer;

pub use header::Header;
pub use add_todo_form::AddTodoForm;
pub use todo_list::TodoList;
pub use todo_item::TodoItem;
pub use delete_confirm_button::DeleteConfirmButton;
pub use loading_spinner::LoadingSpinner;
pub use error_message::ErrorMessage;
pub use empty_state::EmptyState;
pub use footer::Footer;
