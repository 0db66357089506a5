mod controller;
mod input_box;
mod intent;
mod reducer;
mod state;
mod widget;

pub use controller::{DateSelect, DateSelectOptions, SelectField};
pub use input_box::DateInputBox;
pub use intent::DateSelectIntent;
pub use reducer::DateSelectReducer;
pub use state::DateSelectState;
pub use widget::{Control, DateSelectView};
