//! Table configuration options.

use crate::shoe::ShoeVariant;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{ShoeVariant, TableOptions};
///
/// let options = TableOptions::default()
///     .with_variant(ShoeVariant::Modern)
///     .with_max_players(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Shoe composition rebuilt at the start of every round.
    pub variant: ShoeVariant,
    /// The dealer keeps hitting while below this total.
    pub dealer_stands_at: u8,
    /// Maximum number of seated players.
    pub max_players: usize,
    /// Smallest accepted bet.
    pub min_bet: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            variant: ShoeVariant::Traditional,
            dealer_stands_at: 17,
            max_players: 7,
            min_bet: 1,
        }
    }
}

impl TableOptions {
    /// Sets the shoe variant.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{ShoeVariant, TableOptions};
    ///
    /// let options = TableOptions::default().with_variant(ShoeVariant::Modern);
    /// assert_eq!(options.variant, ShoeVariant::Modern);
    /// ```
    #[must_use]
    pub const fn with_variant(mut self, variant: ShoeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the maximum number of seated players.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the minimum bet. A value of zero is treated as one.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = if min_bet == 0 { 1 } else { min_bet };
        self
    }
}
