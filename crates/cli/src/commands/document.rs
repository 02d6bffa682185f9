// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document metadata commands

use super::Context;
use crate::output;
use anyhow::Context as _;
use clap::Args;
use diskdb_storage::{Document, Meta, SystemClock};

#[derive(Args)]
pub struct StampArgs {
    /// Document fields as a JSON object
    pub json: String,
}

pub fn meta(ctx: &Context) -> anyhow::Result<()> {
    output::print(&Meta::now(), ctx.format)?;
    Ok(())
}

pub fn stamp(ctx: &Context, args: StampArgs) -> anyhow::Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(&args.json).context("document must be valid JSON")?;
    let Some(document) = Document::from_value(value, &SystemClock) else {
        anyhow::bail!("document must be a JSON object");
    };
    output::print(&document, ctx.format)?;
    Ok(())
}
