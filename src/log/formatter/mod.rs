mod content;
mod frame;
mod json;
mod xml;

pub use content::{render_body, NULL, NULL_TIPS};
pub use frame::{frame, BOTTOM_BORDER, LEFT_BORDER, TOP_BORDER};
pub use json::pretty_json;
pub use xml::{pretty_xml, XML_DECLARATION};
