//! Tests for the sheet tokenizer
