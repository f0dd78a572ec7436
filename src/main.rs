mod center;
mod dump_reader;
mod error;
mod model;
mod report;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;

/// Reads an AFNI 3dmaskdump coordinate/intensity dump and prints the
/// peak-intensity location, the centroid and the intensity-weighted
/// centroid, one `x y z` triple per line.
#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// 3dmaskdump output file, one `x y z intensity` record per line
	input_file: PathBuf,
}

fn main() {
	env_logger::init();
	let args = Args::parse();

	match report::run(&args.input_file) {
		Ok(report) => println!("{report}"),
		Err(err) => {
			error!("{err}");
			process::exit(1);
		}
	}
}
