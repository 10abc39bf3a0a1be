mod language_code;
mod message_table;
mod message_tree;
mod value;

pub use language_code::{DEFAULT_LANGUAGE, LanguageCode, UnknownLanguage};
pub use message_table::{MessageTable, TableError};
pub use message_tree::{MessageNode, MessageTree};
pub use value::{Params, Value};
