// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flashcard and category operations.

use lingo_core::{catalog, CardUpdate, Category, ChangePayload, FlashCard, NewCard};

use super::OfflineRepository;
use crate::error::Result;
use crate::store::{keys, CachedCards};
use crate::sync::Backend;

impl<B: Backend> OfflineRepository<B> {
    /// All cards, optionally limited to one category.
    ///
    /// Online reads refresh the cache. Queued card changes are laid over
    /// the fetched list so offline work stays visible until it syncs.
    pub async fn flashcards(&self, category: Option<u64>) -> Vec<FlashCard> {
        let cards = if self.monitor.is_online() {
            match self.backend.fetch_flashcards().await {
                Ok(fetched) => {
                    let cards = self.overlay_pending(fetched);
                    self.store_cards(&cards);
                    cards
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to fetch flashcards, using cache");
                    self.cached_cards()
                }
            }
        } else {
            self.cached_cards()
        };

        match category {
            Some(id) => cards.into_iter().filter(|c| c.category_id == id).collect(),
            None => cards,
        }
    }

    /// All categories.
    pub async fn categories(&self) -> Vec<Category> {
        if self.monitor.is_online() {
            match self.backend.fetch_categories().await {
                Ok(categories) => {
                    self.storage.set_or_warn(keys::CATEGORIES, &categories);
                    return categories;
                }
                Err(e) => tracing::warn!(error = %e, "failed to fetch categories, using cache"),
            }
        }
        self.cached_categories()
    }

    /// Creates a custom card.
    ///
    /// The card always lands in the custom category with empty review
    /// state, and is marked as created offline when connectivity is down.
    pub async fn create_card(&self, input: NewCard) -> Result<FlashCard> {
        input.validate()?;

        let mut cards = self.cached_cards();
        for card in &cards {
            self.ids.observe(card.id);
        }
        let card = FlashCard::from_new(self.ids.next_id(), input, !self.monitor.is_online());
        cards.push(card.clone());
        self.write_cards(&cards)?;
        tracing::info!(card = card.id, word = %card.word, offline = card.created_offline, "card created");

        self.push_or_queue(ChangePayload::CardCreate(card.clone())).await;
        Ok(card)
    }

    /// Applies `update` to the card with `id`.
    ///
    /// Returns `None` without writing anything if no such card is cached.
    pub async fn update_card(&self, id: u64, update: CardUpdate) -> Result<Option<FlashCard>> {
        let mut cards = self.cached_cards();
        let Some(card) = cards.iter_mut().find(|c| c.id == id) else {
            tracing::debug!(card = id, "update for unknown card ignored");
            return Ok(None);
        };
        card.apply(&update);
        let updated = card.clone();
        self.write_cards(&cards)?;

        self.push_or_queue(ChangePayload::CardUpdate { card_id: id, update }).await;
        Ok(Some(updated))
    }

    /// Records one review of a card.
    pub async fn review_card(&self, id: u64, correct: bool) -> Result<Option<FlashCard>> {
        let Some(card) = self.cached_cards().into_iter().find(|c| c.id == id) else {
            tracing::debug!(card = id, "review for unknown card ignored");
            return Ok(None);
        };
        let update = CardUpdate {
            mastered: Some(correct),
            review_count: Some(card.review_count.saturating_add(1)),
            last_reviewed: Some(self.now()),
            ..Default::default()
        };
        self.update_card(id, update).await
    }

    pub(super) fn cached_cards(&self) -> Vec<FlashCard> {
        self.storage
            .get_or_warn::<CachedCards>(keys::FLASHCARDS)
            .map(|cached| cached.cards)
            .unwrap_or_else(catalog::flashcards)
    }

    pub(super) fn cached_categories(&self) -> Vec<Category> {
        self.storage.get_or_warn(keys::CATEGORIES).unwrap_or_else(catalog::categories)
    }

    fn write_cards(&self, cards: &[FlashCard]) -> Result<()> {
        let cached = CachedCards { cards: cards.to_vec(), last_updated: self.now() };
        self.storage.set(keys::FLASHCARDS, &cached)?;
        Ok(())
    }

    fn store_cards(&self, cards: &[FlashCard]) {
        let cached = CachedCards { cards: cards.to_vec(), last_updated: self.now() };
        self.storage.set_or_warn(keys::FLASHCARDS, &cached);
    }

    fn overlay_pending(&self, mut cards: Vec<FlashCard>) -> Vec<FlashCard> {
        for change in self.queue.peek_all() {
            match change.payload {
                ChangePayload::CardCreate(card) => {
                    match cards.iter_mut().find(|c| c.id == card.id) {
                        Some(existing) => *existing = card,
                        None => cards.push(card),
                    }
                }
                ChangePayload::CardUpdate { card_id, update } => {
                    if let Some(card) = cards.iter_mut().find(|c| c.id == card_id) {
                        card.apply(&update);
                    }
                }
                ChangePayload::SessionSave(_) | ChangePayload::ProgressUpdate(_) => {}
            }
        }
        cards
    }
}
