use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Board sizes a caller may supply: preflop, flop, turn, river.
pub const KNOWN_BOARD_SIZES: [usize; 4] = [0, 3, 4, 5];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("board must hold 0, 3, 4 or 5 cards, got {0}")]
    BoardSize(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use poker_equity::cards::{Card, Rank, Suit};
/// use poker_equity::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

impl FromStr for HoleCards {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Known community cards: empty, flop, turn or river.
///
/// ```
/// use poker_equity::hand::Board;
///
/// let flop: Board = "2c3c4c".parse().unwrap();
/// assert_eq!(flop.len(), 3);
/// assert!("2c3c".parse::<Board>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if !KNOWN_BOARD_SIZES.contains(&cards.len()) {
            return Err(HandError::BoardSize(cards.len()));
        }
        if let Some(card) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(card));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == 5
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Hero and villain hole cards plus the known board. No card appears twice
/// across the three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    hero: HoleCards,
    villain: HoleCards,
    board: Board,
}

impl Matchup {
    pub fn try_new(hero: HoleCards, villain: HoleCards, board: Board) -> Result<Self, HandError> {
        let matchup = Self { hero, villain, board };
        if let Some(card) = first_duplicate(&matchup.known_cards()) {
            return Err(HandError::DuplicateCard(card));
        }
        Ok(matchup)
    }

    /// Build a matchup from card-code strings, e.g. `("AhKh", "QsQd", "2c7d9s")`.
    ///
    /// ```
    /// use poker_equity::hand::{HandError, Matchup};
    ///
    /// let m = Matchup::parse("AhKh", "QsQd", "").unwrap();
    /// assert_eq!(m.known_cards().len(), 4);
    ///
    /// let err = Matchup::parse("AsKh", "QsQd", "As7d9c").unwrap_err();
    /// assert!(matches!(err, HandError::DuplicateCard(_)));
    /// ```
    pub fn parse(hero: &str, villain: &str, board: &str) -> Result<Self, HandError> {
        Self::try_new(hero.parse()?, villain.parse()?, board.parse()?)
    }

    pub fn hero(&self) -> &HoleCards {
        &self.hero
    }

    pub fn villain(&self) -> &HoleCards {
        &self.villain
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Same matchup seen from the villain's seat.
    pub fn swapped(&self) -> Self {
        Self { hero: self.villain, villain: self.hero, board: self.board.clone() }
    }

    /// Every card already dealt: both hands, then the board.
    pub fn known_cards(&self) -> Vec<Card> {
        let mut known = Vec::with_capacity(4 + self.board.len());
        known.extend(self.hero.as_array());
        known.extend(self.villain.as_array());
        known.extend_from_slice(self.board.as_slice());
        known
    }
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}
