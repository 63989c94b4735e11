mod border;
mod color;
mod content;

pub use border::{BorderSide, BorderStyle};
pub use color::Color;
pub use content::ContentStreamBuilder;
