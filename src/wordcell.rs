// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dictionary, error, lexport, piece_config, pieces};

// Dictionary file in, words and pieces file out. Nothing is written unless
// everything before the final write succeeded.
pub fn generate_file(
    input_filename: &str,
    output_filename: &str,
    config: &piece_config::PieceConfig,
    format: lexport::ExportFormat,
) -> error::Returns<pieces::Artifact> {
    println!("Reading {}...", input_filename);
    let t0 = std::time::Instant::now();
    let words = dictionary::read_dictionary(input_filename, config.min_word_length)?;
    let t1 = std::time::Instant::now();
    println!("Loaded {} unique words in {:?}.", words.len(), t1 - t0);

    println!(
        "Generating pieces (length {})...",
        config.describe_piece_lengths()
    );
    let artifact = pieces::generate(words, config);
    let t2 = std::time::Instant::now();
    println!("Found {} pieces in {:?}.", artifact.pieces.len(), t2 - t1);

    let contents = lexport::export(&artifact, format)?;
    println!("Writing to {}...", output_filename);
    std::fs::write(output_filename, contents)?;
    let t3 = std::time::Instant::now();
    println!("Done in {:?}.", t3 - t0);
    Ok(artifact)
}
