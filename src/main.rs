mod argsets;
mod command;
mod helpers;

use anyhow::{anyhow, Result};
use env_logger::Env;

use nsdoc::constants::{defaults, envvars};

const CMD_DEVICESTATUS: &str = "devicestatus";
const CMD_PROFILE: &str = "profile";
const CMD_PROFILES: &str = "profiles";

const FLAG_PRETTY: &str = "--pretty";

fn main() -> Result<()> {
    let env_files = helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in env_files {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_DEVICESTATUS) => command::devicestatus(doc_args(&mut args)?),
        Some(CMD_PROFILE) => command::profile(doc_args(&mut args)?),
        Some(CMD_PROFILES) => command::profiles(doc_args(&mut args)?),
        _ => Err(anyhow!(
            "Subcommand must be one of 'devicestatus', 'profile', 'profiles'"
        )),
    }
}

fn doc_args(args: &mut pico_args::Arguments) -> Result<argsets::DocArgs> {
    Ok(argsets::DocArgs {
        pretty: args.contains(FLAG_PRETTY),
        path: args.free_from_str()?,
    })
}
