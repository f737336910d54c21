// Copyright (C) 2020-2026 Andy Kurnia.

use std::str::FromStr;
use yuwaki::{error, lexport, piece_config, wordcell};

fn generate_pieces(
    input_filename: &str,
    output_filename: &str,
    config: &piece_config::PieceConfig,
    format: lexport::ExportFormat,
) -> error::Returns<()> {
    wordcell::generate_file(input_filename, output_filename, config, format)?;
    Ok(())
}

fn parse_max_piece_length(s: &str) -> error::Returns<Option<usize>> {
    if s == "unbounded" {
        Ok(None)
    } else {
        Ok(Some(usize::from_str(s)?))
    }
}

pub fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        generate_pieces(
            "enable1.txt",
            "words_and_pieces.js",
            &piece_config::make_wordcell_piece_config(),
            lexport::ExportFormat::Js,
        )
    } else if args.len() >= 4 && args.len() <= 6 {
        let format = lexport::ExportFormat::from_str(&args[1])?;
        let mut config = piece_config::make_wordcell_piece_config();
        if let Some(s) = args.get(4) {
            config.min_word_length = usize::from_str(s)?;
        }
        if let Some(s) = args.get(5) {
            config.max_piece_length = parse_max_piece_length(s)?;
        }
        generate_pieces(&args[2], &args[3], &config, format)
    } else {
        println!(
            "args:
  (no args)
    same as: js enable1.txt words_and_pieces.js 3 3
  js|js-list|json|csv input.txt output [min_word_length] [max_piece_length|unbounded]
    js: words, and pieces with the fraction of words containing them
    js-list: words, and pieces without frequencies
    json: the same as js, as json
    csv: piece,words,frequency"
        );
        Ok(())
    }
}
