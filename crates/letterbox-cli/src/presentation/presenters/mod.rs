pub mod letter;
pub mod system;

pub use letter::{
    present_cleared, present_letter_card, present_letter_detail, present_letter_list, present_letter_shown,
    present_saved,
};
pub use system::{present_demo, present_guidance, present_init};
