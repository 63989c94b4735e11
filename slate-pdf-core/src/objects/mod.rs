mod dictionary;
mod indirect;
mod primitive;
mod stream;

pub use dictionary::Dictionary;
pub use indirect::{IndirectObject, ObjectBody};
pub use primitive::{format_real, Object, ObjectId};
pub use stream::Stream;

// Type alias matching PDF terminology
pub type IndirectReference = ObjectId;
