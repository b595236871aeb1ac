use anyhow::Result;
use clap::Args;
use log::info;
use ogc_tms::check::{check_json, read_input};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file to check, or "-" for standard input.
	/// It may contain one entry, an array of entries,
	/// or a tile matrix with a "variableMatrixWidths" array.
	#[arg(required = true, verbatim_doc_comment)]
	filename: String,

	/// print one compact JSON line per entry
	#[arg(long, short)]
	compact: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("checking {:?}", arguments.filename);

	let text = read_input(&arguments.filename)?;
	let widths = check_json(&text)?;

	for entry in &widths {
		if arguments.compact {
			println!("{entry}");
		} else {
			println!("{}", entry.to_pretty_string());
		}
	}
	info!("{} valid variable matrix width(s)", widths.len());

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::{NamedTempFile, prelude::*};

	#[test]
	fn valid_file() {
		let file = NamedTempFile::new("widths.json").unwrap();
		file.write_str(r#"{"coalesce":2,"minTileRow":0,"maxTileRow":5}"#).unwrap();
		run_command(vec!["ogc_tms", "check", "-c", file.path().to_str().unwrap()]).unwrap();
	}

	#[test]
	fn invalid_file() {
		let file = NamedTempFile::new("widths.json").unwrap();
		file.write_str(r#"[{"coalesce":1,"minTileRow":0,"maxTileRow":5}]"#).unwrap();
		let error = run_command(vec!["ogc_tms", "check", file.path().to_str().unwrap()]).unwrap_err();
		assert_eq!(error.to_string(), "variable matrix width at index 0");
	}

	#[test]
	fn missing_file() {
		let error = run_command(vec!["ogc_tms", "check", "does/not/exist.json"]).unwrap_err();
		assert!(error.to_string().starts_with("reading file"));
	}
}
