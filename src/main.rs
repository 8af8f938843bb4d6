use std::fs;

use clap::Parser;
use serde::Serialize;

use jpegmap_rust::bytestreams::ByteReader;
use jpegmap_rust::huffman_tables::HuffmanTableSet;
use jpegmap_rust::segments::{Segment, SegmentScanner};

#[derive(Parser, Debug)]
#[command(about = "Walk the segments of a JPEG file and extract its Huffman tables")]
struct Args {
    /// The JPEG file to scan
    source_name: String,
    /// Print the report as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct SegmentRow {
    marker: u16,
    name: &'static str,
    offset: u64,
}

#[derive(Serialize)]
struct TableRow {
    table: u8,
    length: u8,
    code: u16,
    symbol: u8,
}

#[derive(Serialize)]
struct Report {
    segments: Vec<SegmentRow>,
    tables: Vec<TableRow>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let data = fs::read(&args.source_name)
        .unwrap_or_else(|_| panic!("Could not read {}", args.source_name));

    let mut reader = ByteReader::new(data.into_boxed_slice());
    let mut tables = HuffmanTableSet::new();

    let mut segments: Vec<Segment> = Vec::new();
    for segment in SegmentScanner::new(&mut reader, &mut tables) {
        match segment {
            Ok(segment) => segments.push(segment),
            Err(e) => {
                eprintln!("Failed scanning {}: {}", args.source_name, e);
                std::process::exit(1);
            }
        }
    }

    if args.json {
        let report = Report {
            segments: segments
                .iter()
                .map(|s| SegmentRow {
                    marker: s.marker.0,
                    name: s.marker.name(),
                    offset: s.offset,
                })
                .collect(),
            tables: tables
                .iter()
                .flat_map(|(&table, codes)| {
                    codes.iter().map(move |(&(length, code), &symbol)| TableRow {
                        table,
                        length,
                        code,
                        symbol,
                    })
                })
                .collect(),
        };

        println!("{}", serde_json::to_string_pretty(&report).expect("Failed serializing the report"));
        return;
    }

    let mut out = String::new();

    for segment in &segments {
        out.push_str(&format!("Found segment {} at {}\n", segment.marker.name(), segment.offset));
    }

    out.push_str("Huffman Tables:\n");
    for (table, codes) in tables.iter() {
        out.push_str(&format!("  {}:\n", table));
        for ((length, code), symbol) in codes.iter() {
            out.push_str(&format!("    ({}, {}): {}\n", length, code, symbol));
        }
    }

    print!("{}", out);
}
