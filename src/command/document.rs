//! Decode a document and print it back out in canonical form
//!
//! Decoding is strict: a document that does not match its declared shape
//! fails the command with the schema error.

use anyhow::{Context, Result};

use nsdoc::{codec, device_status, profile};

use crate::argsets::DocArgs;
use crate::helpers::read_input;

pub fn devicestatus(args: DocArgs) -> Result<()> {
    let raw = read_input(&args.path)?;
    let statuses = device_status::from_slice(&raw)
        .with_context(|| format!("Invalid device status document {}", args.path.display()))?;
    log::info!("Decoded {} device status records", statuses.len());
    for status in &statuses {
        log::debug!(
            "Device status {} from '{}' at {} (loop: {})",
            status.id,
            status.device,
            status.created_at,
            status.loop_state.is_some()
        );
    }
    print_document(&statuses, args.pretty)
}

pub fn profile(args: DocArgs) -> Result<()> {
    let raw = read_input(&args.path)?;
    let profile = profile::from_slice(&raw)
        .with_context(|| format!("Invalid profile document {}", args.path.display()))?;
    log::info!(
        "Decoded profile {} with stores: {}",
        profile.id,
        profile.store.names().collect::<Vec<_>>().join(", ")
    );
    print_document(&profile, args.pretty)
}

pub fn profiles(args: DocArgs) -> Result<()> {
    let raw = read_input(&args.path)?;
    let profiles = profile::list_from_slice(&raw)
        .with_context(|| format!("Invalid profile list document {}", args.path.display()))?;
    log::info!("Decoded {} profiles", profiles.len());
    print_document(&profiles, args.pretty)
}

fn print_document<T: serde::Serialize + ?Sized>(doc: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        codec::encode_pretty(doc)?
    } else {
        codec::encode(doc)?
    };
    println!("{out}");
    Ok(())
}
