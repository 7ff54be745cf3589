//! Handlers behind the `aghpb` subcommands.
//!
//! Each handler writes to the given writer so output can be checked in tests.

use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{Bookshelf, ContentsSource, RequestOptions};

/// Print the books, one name per line.
#[tracing::instrument(skip(shelf, options, out))]
pub async fn books<S: ContentsSource, W: Write>(
    shelf: &Bookshelf<S>,
    options: &RequestOptions,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let books = shelf
        .list_categories(options)
        .await
        .context("Failed to list books")?;

    debug!("Printing {} book(s)", books.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &books)?;
        writeln!(out)?;
        return Ok(());
    }

    for book in books {
        writeln!(out, "{}", book.name)?;
    }
    Ok(())
}

/// Print the images of a book as `name<TAB>size<TAB>download_url`.
#[tracing::instrument(skip(shelf, options, out))]
pub async fn images<S: ContentsSource, W: Write>(
    shelf: &Bookshelf<S>,
    book: &str,
    options: &RequestOptions,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let images = shelf
        .list_images(book, options)
        .await
        .with_context(|| format!("Failed to list images of \"{}\"", book))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &images)?;
        writeln!(out)?;
        return Ok(());
    }

    if images.is_empty() {
        writeln!(out, "No images in \"{}\".", book)?;
        return Ok(());
    }

    for image in images {
        writeln!(out, "{}\t{}\t{}", image.name, image.size, image.download_url)?;
    }
    Ok(())
}

/// Print the download URL of one random image of a book.
#[tracing::instrument(skip(shelf, options, out))]
pub async fn random<S: ContentsSource, W: Write>(
    shelf: &Bookshelf<S>,
    book: &str,
    options: &RequestOptions,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let image = shelf
        .pick_random_image(book, options)
        .await
        .with_context(|| format!("Failed to pick an image from \"{}\"", book))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &image)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", image.download_url)?;
    }
    Ok(())
}
