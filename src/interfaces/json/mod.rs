pub mod receipt_reader;
