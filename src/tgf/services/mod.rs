pub mod line_decoder;
pub mod tgf_parser;
pub mod tgf_splitter;

pub use line_decoder::{decode_edge_line, decode_node_line};
pub use tgf_parser::{parse_document, TgfParser};
pub use tgf_splitter::{split_sections, SourceLine, TgfSections};
