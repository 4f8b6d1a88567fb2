//! Integration tests for ansi-html.

mod cli_test;
