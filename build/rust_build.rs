/**
 * Generates the protobuf bindings for the bundled country dataset and
 * sanity-checks the dataset text before it gets compiled into the crate.
 */

use std::{fs::File, io::{BufRead, BufReader}};

use thiserror::Error;

const DATASET_PATH: &str = "resources/country_data.textproto";
const SCHEMA_PATH: &str = "resources/country_data.proto";

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num}: dial code '{dial_code}' must be a non-empty digit string")]
    InvalidDialCode {
        line_num: usize,
        dial_code: String,
    },

    #[error("Line {line_num}: iso2 '{iso2}' must be two lowercase ascii letters")]
    InvalidIso2 {
        line_num: usize,
        iso2: String,
    },
}

/// Returns every quoted value of `field` found on the line.
fn quoted_values<'a>(line: &'a str, field: &str) -> Vec<&'a str> {
    let mut values = Vec::new();
    let needle = format!("{}: \"", field);
    let mut rest = line;
    while let Some(start) = rest.find(&needle) {
        // make sure we don't match a suffix of another field name
        let is_field_start = start == 0 || rest.as_bytes()[start - 1] == b' ';
        let after = &rest[start + needle.len()..];
        let Some(end) = after.find('"') else {
            break;
        };
        if is_field_start {
            values.push(&after[..end]);
        }
        rest = &after[end + 1..];
    }
    values
}

fn check_dataset(path: &str) -> Result<usize, BuildError> {
    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;
    let mut entries = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for dial_code in quoted_values(line, "dial_code") {
            if dial_code.is_empty() || !dial_code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BuildError::InvalidDialCode {
                    line_num: line_number,
                    dial_code: dial_code.to_string(),
                });
            }
            entries += 1;
        }
        for iso2 in quoted_values(line, "iso2") {
            if iso2.len() != 2 || !iso2.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(BuildError::InvalidIso2 {
                    line_num: line_number,
                    iso2: iso2.to_string(),
                });
            }
        }
    }

    Ok(entries)
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", SCHEMA_PATH);
    println!("cargo:rerun-if-changed={}", DATASET_PATH);

    let entries = check_dataset(DATASET_PATH)?;
    if entries == 0 {
        println!("cargo:warning=country dataset at {} is empty", DATASET_PATH);
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input(SCHEMA_PATH)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
