// This file contains the implementation of the parser module, responsible for reading and serializing the specification document.

pub mod openapi;

pub use openapi::{
    parse_spec_file,
    parse_spec_string,
    to_yaml_string,
    ParserError,
    Result,
};
