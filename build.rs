//! Build script to generate the embedded sample corpus
//!
//! Reads the sample word list and frequency table and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("sample.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated sample corpus").unwrap();
    writeln!(output).unwrap();

    generate_word_list(&mut output, "data/sample_words.txt");
    generate_frequency_table(&mut output, "data/sample_frequencies.csv");

    // Rebuild if the sample data changes
    println!("cargo:rerun-if-changed=data/sample_words.txt");
    println!("cargo:rerun-if-changed=data/sample_frequencies.csv");
}

fn generate_word_list(output: &mut fs::File, input_path: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// Sample word list ({} words)", words.len()).unwrap();
    writeln!(output, "pub const SAMPLE_WORDS: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn generate_frequency_table(output: &mut fs::File, input_path: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    writeln!(output, "/// Sample word frequency table").unwrap();
    writeln!(output, "pub const SAMPLE_FREQUENCIES: &[(&str, u64)] = &[").unwrap();

    // First line is the CSV header
    for line in content.lines().skip(1).filter(|line| !line.trim().is_empty()) {
        let (word, count) = line
            .trim()
            .split_once(',')
            .unwrap_or_else(|| panic!("Malformed frequency row in {input_path}: {line}"));
        let count: u64 = count
            .parse()
            .unwrap_or_else(|e| panic!("Bad frequency for {word} in {input_path}: {e}"));
        writeln!(output, "    (\"{word}\", {count}),").unwrap();
    }

    writeln!(output, "];").unwrap();
}
