use crate::cards::{Card, Rank, Suit};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("known card {0} listed more than once")]
    DuplicateKnownCard(Card),
    #[error("deck ran out of cards")]
    Exhausted,
}

/// The cards still available to be dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, rank-major then suit-minor.
    ///
    /// ```
    /// use poker_equity::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// The standard deck minus every card in `known`.
    ///
    /// A card listed twice in `known` is rejected instead of silently removed once.
    ///
    /// ```
    /// use poker_equity::cards::parse_cards;
    /// use poker_equity::deck::{Deck, DeckError};
    ///
    /// let known = parse_cards("AhKh QsQd").unwrap();
    /// assert_eq!(Deck::without(&known).unwrap().len(), 48);
    ///
    /// let twice = parse_cards("AhKh Ah").unwrap();
    /// assert!(matches!(Deck::without(&twice), Err(DeckError::DuplicateKnownCard(_))));
    /// ```
    pub fn without(known: &[Card]) -> Result<Self, DeckError> {
        for (i, card) in known.iter().enumerate() {
            if known[..i].contains(card) {
                return Err(DeckError::DuplicateKnownCard(*card));
            }
        }
        let mut deck = Self::standard();
        deck.cards.retain(|c| !known.contains(c));
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return a card chosen uniformly among those left.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(i))
    }
}
