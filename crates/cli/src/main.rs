// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interactive roster manager for a football club.
//!
//! Loads users and players from the data directory, asks for a login and
//! runs the text menu. Logs go to stderr so they never interleave with the
//! menu on stdout.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod data;
mod menu;
mod prompt;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use club_roster_persistence::FileStore;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_log::AsTrace;

use crate::data::{ClubData, Defaults, LoadSummary};
use crate::menu::{Menu, log_in};
use crate::prompt::Prompter;

/// Club Roster - manage the squad, contracts and transfers of a football club
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding `users.txt` and `players.txt`
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Club name used when no roster file exists yet
    #[arg(long, default_value = "FC Dynamo")]
    club_name: String,

    /// Transfer budget used when no roster file exists yet
    #[arg(long, default_value_t = 50_000_000.0)]
    budget: f64,

    /// bcrypt work factor for new password hashes
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    bcrypt_cost: u32,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .with_writer(io::stderr)
        .init();

    info!(data_dir = %args.data_dir.display(), "Starting club roster");

    let defaults: Defaults = Defaults {
        club_name: args.club_name,
        transfer_budget: args.budget,
        bcrypt_cost: args.bcrypt_cost,
    };
    let (data, summary) = ClubData::load(FileStore::new(args.data_dir), &defaults)?;

    let stdin: io::Stdin = io::stdin();
    let mut prompter: Prompter<io::StdinLock<'_>, io::Stdout> =
        Prompter::new(stdin.lock(), io::stdout());
    report_load(&mut prompter, &summary)?;
    if run_session(&mut prompter, data)?.is_none() {
        prompter.say("[ERROR] Session closed.")?;
    }

    info!("Club roster finished");
    Ok(())
}

/// Tells the user what the load step found.
fn report_load<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    summary: &LoadSummary,
) -> io::Result<()> {
    if summary.default_admin_created {
        prompter.say("[INFO] Default administrator account created.")?;
    }
    if summary.skipped_users > 0 {
        prompter.say(&format!(
            "[WARN] {} user record(s) could not be loaded.",
            summary.skipped_users
        ))?;
    }
    for failure in &summary.roster.failures {
        prompter.say(&format!(
            "[WARN] players line {}: {}",
            failure.line, failure.reason
        ))?;
    }
    prompter.say(&format!(
        "[INFO] {} player(s) loaded.",
        summary.roster.loaded
    ))
}

/// Logs in and runs the menu.
///
/// # Returns
///
/// The data as the menu left it, or `None` when login failed.
fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    data: ClubData,
) -> io::Result<Option<ClubData>> {
    let Some(actor) = log_in(prompter, &data.users)? else {
        warn!("Login attempts exhausted");
        return Ok(None);
    };
    info!(username = %actor.username, role = %actor.role, "Logged in");

    let mut menu: Menu<'_, R, W> = Menu::new(prompter, data, actor);
    menu.run()?;
    Ok(Some(menu.into_data()))
}
