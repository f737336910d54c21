// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, pieces};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    // const WORDS = [...]; const PIECES = { "piece": frequency, ... };
    Js,
    // const WORDS = [...]; const PIECES = [...]; (unweighted)
    JsList,
    Json,
    // piece,words,frequency
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" => Ok(ExportFormat::Js),
            "js-list" => Ok(ExportFormat::JsList),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(error::new(format!("invalid export format {:?}", s))),
        }
    }
}

const JS_EXPORT_GUARD: &str =
    "\nif (typeof module !== 'undefined') module.exports = { WORDS, PIECES };\n";

// Renders the whole file in memory; the caller writes it in one go.
pub fn export(artifact: &pieces::Artifact, format: ExportFormat) -> error::Returns<String> {
    match format {
        ExportFormat::Js => to_js(artifact, true),
        ExportFormat::JsList => to_js(artifact, false),
        ExportFormat::Json => to_json(artifact),
        ExportFormat::Csv => to_csv(artifact),
    }
}

// A JS string literal. For plain uppercase words this is just the word in double quotes.
#[inline(always)]
fn js_string(s: &str) -> error::Returns<String> {
    Ok(serde_json::to_string(s)?)
}

// Shortest round-trip digits, and integral values keep their ".0".
#[inline(always)]
fn js_number(x: f64) -> error::Returns<String> {
    Ok(serde_json::to_string(&x)?)
}

// One entry per line, commas between entries but not after the last.
fn write_js_entries<I: ExactSizeIterator<Item = String>>(out: &mut String, entries: I) {
    let num_entries = entries.len();
    for (i, entry) in (1..).zip(entries) {
        out.push_str(&entry);
        if i < num_entries {
            out.push(',');
        }
        out.push('\n');
    }
}

fn to_js(artifact: &pieces::Artifact, weighted: bool) -> error::Returns<String> {
    let mut out = String::new();
    out.push_str("const WORDS = [\n");
    write_js_entries(
        &mut out,
        artifact
            .words
            .iter()
            .map(|w| js_string(w))
            .collect::<error::Returns<Vec<_>>>()?
            .into_iter(),
    );
    out.push_str("];\n\n");

    if weighted {
        out.push_str("const PIECES = {\n");
        write_js_entries(
            &mut out,
            artifact
                .pieces
                .iter()
                .map(|(piece, coverage)| -> error::Returns<String> {
                    let mut entry = js_string(piece)?;
                    write!(entry, ": {}", js_number(coverage.frequency)?)?;
                    Ok(entry)
                })
                .collect::<error::Returns<Vec<_>>>()?
                .into_iter(),
        );
        out.push_str("};\n");
    } else {
        out.push_str("const PIECES = [\n");
        write_js_entries(
            &mut out,
            artifact
                .piece_list()
                .map(js_string)
                .collect::<error::Returns<Vec<_>>>()?
                .into_iter(),
        );
        out.push_str("];\n");
    }

    out.push_str(JS_EXPORT_GUARD);
    Ok(out)
}

#[derive(serde::Serialize)]
struct JsonExport<'a> {
    words: &'a [String],
    pieces: std::collections::BTreeMap<&'a str, f64>,
}

fn to_json(artifact: &pieces::Artifact) -> error::Returns<String> {
    let mut out = serde_json::to_string_pretty(&JsonExport {
        words: &artifact.words,
        pieces: artifact
            .pieces
            .iter()
            .map(|(piece, coverage)| (piece.as_str(), coverage.frequency))
            .collect(),
    })?;
    out.push('\n');
    Ok(out)
}

fn to_csv(artifact: &pieces::Artifact) -> error::Returns<String> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    csv_writer.write_record(["piece", "words", "frequency"])?;
    for (piece, coverage) in artifact.pieces.iter() {
        let num_words = coverage.num_words.to_string();
        let frequency = js_number(coverage.frequency)?;
        csv_writer.write_record([piece.as_str(), num_words.as_str(), frequency.as_str()])?;
    }
    let bytes = csv_writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
