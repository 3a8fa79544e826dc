//! Decode firmware status codes captured from logs or a debug UART.
//!
//! ```text
//! status-decode 0x8102 -32510 0
//! status-decode --catalog
//! ```
//!
//! # Environment Variables
//!
//! - `FWSTATUS_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `FWSTATUS_FLUSH_EPRINT=1` - Flush stderr after each log line

use std::process::ExitCode;

use fwstatus::{codes, kdebug, kerror, Facility, StatusCode};

fn print_header() {
    println!("{:<8} {:<8} {:<16} {:<5} {}", "raw", "severity", "facility", "code", "name");
}

fn print_row(status: StatusCode) {
    println!(
        "{:<8} {:<8} {:<16} {:<5} {}",
        format!("{:#06x}", status),
        status.severity().to_string(),
        status.facility().to_string(),
        status.code(),
        codes::name_of(status).unwrap_or("-"),
    );
}

fn print_catalog() {
    print_header();
    print_row(StatusCode::SUCCESS);
    for facility in Facility::KNOWN {
        for (status, _) in codes::catalog(facility) {
            print_row(*status);
        }
    }
}

const EXIT_OK: u8 = 0;
const EXIT_BAD_INPUT: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Decode every argument; returns the process exit code.
fn run(args: &[String]) -> u8 {
    if args.is_empty() {
        eprintln!("usage: status-decode <value>... | --catalog");
        return EXIT_USAGE;
    }
    if args.iter().any(|a| a == "--catalog") {
        print_catalog();
        return EXIT_OK;
    }

    let mut bad = 0usize;
    print_header();
    for arg in args {
        match arg.parse::<StatusCode>() {
            Ok(status) => {
                kdebug!("{} -> {:?}", arg, status);
                print_row(status);
            }
            Err(e) => {
                kerror!("{:?}: {}", arg, e);
                bad += 1;
            }
        }
    }

    if bad == 0 {
        EXIT_OK
    } else {
        EXIT_BAD_INPUT
    }
}

fn main() -> ExitCode {
    fwstatus::kprint::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(run(&args))
}
