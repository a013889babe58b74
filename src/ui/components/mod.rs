//! Reusable UI Components
//!
//! - `TabSelector` - Navigation bar with a marker on the current tab
//! - `InputField` - Text input with focus, masking and inline errors
//! - `StatusIndicator` - Spinner, success and error lines
//! - `DialogFrame` - Centered overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{
    get_spinner_char, render_status_indicator, truncate_to_width, StatusIndicatorType,
};
pub use tab_selector::{render_tab_selector, TabItem};
