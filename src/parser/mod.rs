pub mod rut_parser;
