//! Minimal JSON codec: a value model, a parser and compact/pretty stringifiers.

mod array;
mod cursor;
mod object;
mod parse;
mod stringify;
mod value;

pub use array::JsonArray;
use cursor::ByteCursor;
pub use object::JsonObject;
pub use parse::parse_json_str;
pub use stringify::*;
pub use value::JsonValue;
