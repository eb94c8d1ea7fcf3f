//! Compute a gamified developer level from public GitHub activity.
//!
//! # Overview
//!
//! `devlevel` looks up a GitHub user, gathers their public repositories, recent events, issues
//! and pull requests, and condenses them into a handful of metrics and a level between 0 and
//! 100 with a tier from Rookie to Legend.
//!
//! # Quick Start
//!
//! ```bash
//! devlevel profile octocat
//! ```
//!
//! Unauthenticated requests are heavily rate limited by GitHub. Provide a token with
//! `--github-token` or the `GITHUB_TOKEN` environment variable.
//!
//! **Machine readable output:**
//! ```bash
//! devlevel profile octocat --format json
//! ```
//!
//! # Configuration
//!
//! Settings are read from `devlevel.toml` in the current directory or in the user's
//! configuration directory:
//!
//! ```bash
//! devlevel init
//! devlevel validate
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use devlevel::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that runs real OS commands.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
