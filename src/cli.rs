//! Argument handling shared by the binaries.

use std::process;

use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::error::{Error, Result};

pub fn init_logging() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Positional arguments, program name excluded. Fails with
/// [`Error::Usage`] when there are fewer than `required` or more than
/// `required + optional`.
pub fn args<I>(args: I, required: usize, optional: usize, usage: &'static str) -> Result<Vec<String>>
where
	I: IntoIterator<Item = String>,
{
	let args = args.into_iter().collect::<Vec<_>>();

	if args.len() < required || args.len() > required + optional {
		return Err(Error::Usage(usage));
	}

	Ok(args)
}

/// Parses `arg` when given, otherwise draws a fresh seed.
pub fn seed(arg: Option<&str>, usage: &'static str) -> Result<u64> {
	match arg {
		Some(arg) => arg.parse::<u64>().map_err(|_| Error::Usage(usage)),
		None => Ok(thread_rng().gen()),
	}
}

/// The seed is logged so a run can be repeated.
pub fn rng(seed: u64) -> StdRng {
	info!("Using seed {}", seed);
	StdRng::seed_from_u64(seed)
}

/// Usage errors print the usage line on stdout, anything else goes to
/// stderr. Both exit with status 1.
pub fn exit_on_error<T>(result: Result<T>) -> T {
	match result {
		Ok(value) => value,
		Err(Error::Usage(usage)) => {
			println!("{}", usage);
			process::exit(1);
		},
		Err(e) => {
			eprintln!("error: {}", e);
			process::exit(1);
		},
	}
}
