pub mod button;
pub mod select;

pub use button::Button;
pub use select::Select;
