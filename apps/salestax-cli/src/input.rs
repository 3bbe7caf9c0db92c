//! Input reading: files, stdin and the built-in sample carts.
//!
//! ## Input Format
//! ```text
//! # first cart
//! 1 book at 12.49
//! 1 music CD at 14.99
//!                                  ◄── blank line ends a cart
//! 1 imported box of chocolates at 10.00
//! ```
//! Lines starting with `#` are comments. Runs of blank lines count as one.

use anyhow::Context;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// One cart's worth of raw lines and where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartInput {
    /// File name, `<stdin>` or `<sample>`.
    pub source: String,
    /// 1-based position of the cart within its source.
    pub index: usize,
    pub lines: Vec<String>,
}

impl CartInput {
    /// `"orders.txt cart 2"`.
    pub fn label(&self) -> String {
        format!("{} cart {}", self.source, self.index)
    }
}

const SAMPLE_CARTS: [&[&str]; 3] = [
    &["1 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"],
    &[
        "1 imported box of chocolates at 10.00",
        "1 imported bottle of perfume at 47.50",
    ],
    &[
        "1 imported bottle of perfume at 27.99",
        "1 bottle of perfume at 18.99",
        "1 packet of headache pills at 9.75",
        "1 box of imported chocolates at 11.25",
    ],
];

/// The three reference carts, used when no input is given.
pub fn sample_carts() -> Vec<CartInput> {
    SAMPLE_CARTS
        .iter()
        .enumerate()
        .map(|(idx, lines)| CartInput {
            source: "<sample>".to_string(),
            index: idx + 1,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        })
        .collect()
}

/// Splits text into carts on blank lines, dropping `#` comments.
pub fn split_carts(source: &str, text: &str) -> Vec<CartInput> {
    let mut carts = Vec::new();
    let mut current: Vec<String> = Vec::new();

    let mut flush = |current: &mut Vec<String>| {
        if !current.is_empty() {
            let index = carts.len() + 1;
            carts.push(CartInput {
                source: source.to_string(),
                index,
                lines: std::mem::take(current),
            });
        }
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut current);
        } else if !trimmed.starts_with('#') {
            current.push(line.to_string());
        }
    }
    flush(&mut current);

    carts
}

/// Reads every cart from `path`, or from stdin when `path` is `-`.
pub fn read_carts(path: &Path) -> anyhow::Result<Vec<CartInput>> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(split_carts("<stdin>", &text));
    }

    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(split_carts(&path.display().to_string(), &text))
}
