//! Integration tests for the cinedex catalog, query engine and CLI

mod catalog_loading;
mod cli_contracts;
mod support;
