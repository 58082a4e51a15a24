// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flashcard and category commands.

use lingo_core::{CardUpdate, NewCard};

use crate::app::App;
use crate::cli::OutputFormat;
use crate::display::{format_card_line, format_category_line};
use crate::error::{Error, Result};
use crate::sync::Backend;

use super::emit;

pub async fn list<B: Backend + 'static>(
    app: &App<B>,
    category: Option<u64>,
    output: OutputFormat,
) -> Result<()> {
    let cards = app.repository().flashcards(category).await;
    if cards.is_empty() && output == OutputFormat::Text {
        println!("No cards");
        return Ok(());
    }
    emit(output, &cards, cards.iter().map(format_card_line))
}

pub async fn categories<B: Backend + 'static>(app: &App<B>, output: OutputFormat) -> Result<()> {
    let categories = app.repository().categories().await;
    emit(output, &categories, categories.iter().map(format_category_line))
}

pub async fn create<B: Backend + 'static>(
    app: &App<B>,
    input: NewCard,
    output: OutputFormat,
) -> Result<()> {
    let card = app.repository().create_card(input).await?;
    let line = if card.created_offline {
        format!("Created card {} ({}), queued for sync", card.id, card.word)
    } else {
        format!("Created card {} ({})", card.id, card.word)
    };
    emit(output, &card, [line])
}

pub async fn edit<B: Backend + 'static>(app: &App<B>, id: u64, update: CardUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(Error::Config("nothing to change\n  hint: pass at least one field flag".into()));
    }
    let card = app.repository().update_card(id, update).await?.ok_or(Error::CardNotFound(id))?;
    println!("Updated {}", format_card_line(&card));
    Ok(())
}

pub async fn review<B: Backend + 'static>(app: &App<B>, id: u64, correct: bool) -> Result<()> {
    let card = app.repository().review_card(id, correct).await?.ok_or(Error::CardNotFound(id))?;
    println!("Reviewed {} ({} reviews)", card.word, card.review_count);
    Ok(())
}
