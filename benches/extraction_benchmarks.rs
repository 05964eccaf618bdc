//! Extraction Performance Benchmarks
//!
//! Measures path parsing and value extraction against a small ADT message:
//! - Path text parsing
//! - Shallow and deep extraction
//! - Late segment occurrences

use std::hint::black_box;
use std::time::Instant;

use hl7path::{Hl7, parse_path};

const MESSAGE: &str = "MSH|^~\\&|HIS|RIH|EKG|EKG|20060529090131||ADT^A01|MSG00001|P|2.5\rPID|||555-44-4444^^^^SSN~123^^^^MRN||EVERYWOMAN^EVE^E^^^^L~QUE^SUZY^^^^^N||19610615|F\rPV1||I|2000^2012^01||||004777^LEBAUER^JAMES^A^^^^MD\rOBX|1|ST|^Body Height||1.80|m\rOBX|2|ST|^Body Weight||79|kg\rZZZ||This is~a^custom&segment&with^custom&fields";

fn main() {
    println!("Extraction Performance Benchmarks\n");

    bench_parse();
    bench_extract("shallow field", "MSH-9");
    bench_extract("deep subcomponent", "ZZZ-2[2].2.2");
    bench_extract("second occurrence", "OBX[2].5");
    bench_extract("absent occurrence", "OBX[9].5");
}

fn bench_parse() {
    let iterations = 100_000;
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(parse_path(black_box("PID[2]-3[4].5.6")));
    }
    report("path parsing", iterations, start);
}

fn bench_extract(label: &str, path: &str) {
    let hl7 = Hl7::new();
    let Ok(parsed) = parse_path(path) else {
        println!("  skipping {label}: invalid path {path}");
        return;
    };

    let iterations = 100_000;
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(hl7.extract_path(black_box(MESSAGE), &parsed));
    }
    report(label, iterations, start);
}

fn report(label: &str, iterations: u32, start: Instant) {
    let elapsed = start.elapsed();
    println!(
        "  {label}: {iterations} iterations in {elapsed:?} ({:?}/op)",
        elapsed / iterations
    );
}
