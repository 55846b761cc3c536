//! UI Components

mod delete_confirm_button;
mod item_list;
mod item_row;
mod new_item_input;
mod title_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_list::ItemListView;
pub use item_row::ItemRow;
pub use new_item_input::NewItemInput;
pub use title_bar::TitleBar;
