pub mod bootstrap_parser;

pub use bootstrap_parser::{BootstrapData, BootstrapParser, Element, Event, Parser, Team};
