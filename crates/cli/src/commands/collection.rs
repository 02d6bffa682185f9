// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection file commands
//!
//! Each command maps to one store operation and prints its result as JSON.
//! Soft failures print their sentinel (`false` or `null`) and still exit 0.

use super::Context;
use crate::output;
use anyhow::Context as _;
use clap::Args;
use diskdb_storage::parse_collection;
use std::path::PathBuf;

#[derive(Args)]
pub struct PathArgs {
    /// Collection file
    pub path: PathBuf,
}

#[derive(Args)]
pub struct WriteArgs {
    /// Collection file
    pub path: PathBuf,
    /// Collection contents as JSON
    pub json: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Storage directory
    pub dir: PathBuf,
}

pub async fn exists(ctx: &Context, args: PathArgs) -> anyhow::Result<()> {
    let found = ctx.store.exists(&args.path).await;
    output::print(&found, ctx.format)?;
    Ok(())
}

pub async fn read(ctx: &Context, args: PathArgs) -> anyhow::Result<()> {
    let collection = ctx.store.read(&args.path, &ctx.options).await?;
    output::print(&collection, ctx.format)?;
    Ok(())
}

pub async fn write(ctx: &Context, args: WriteArgs) -> anyhow::Result<()> {
    let collection = parse_collection(args.json.as_bytes())
        .context("collection contents must be valid JSON")?;
    let written = ctx
        .store
        .write_collection(&args.path, &collection, &ctx.options)
        .await;
    output::print(&written, ctx.format)?;
    Ok(())
}

pub async fn remove(ctx: &Context, args: PathArgs) -> anyhow::Result<()> {
    let removed = ctx.store.remove(&args.path).await;
    output::print(&removed, ctx.format)?;
    Ok(())
}

pub async fn list(ctx: &Context, args: ListArgs) -> anyhow::Result<()> {
    let names = ctx
        .store
        .list_collections(&args.dir)
        .await
        .with_context(|| format!("cannot list {}", args.dir.display()))?;
    output::print(&names, ctx.format)?;
    Ok(())
}
