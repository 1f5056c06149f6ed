//! Investment suggestion engine
//!
//! A pure mapping from (savings, short-term goal, long-term goal) to an
//! ordered list of suggestions, driven by a fixed threshold/keyword rule
//! table. No state, no I/O; identical inputs always produce identical,
//! identically-ordered output.
//!
//! Two independent threshold tiers are evaluated in order. Within a tier the
//! short-term branch takes priority: the long-term branch is only consulted
//! when the short-term keywords did not match.

use crate::models::Money;

/// Tier 1 threshold: suggestions require savings strictly above this
const TIER_ONE_THRESHOLD: Money = Money::from_dollars(10_000);

/// Tier 2 threshold: evaluated independently of tier 1
const TIER_TWO_THRESHOLD: Money = Money::from_dollars(5_000);

/// A single investment suggestion: a category and its rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub category: &'static str,
    pub rationale: &'static str,
}

const CDS: Suggestion = Suggestion {
    category: "Certificates of Deposit (CDs)",
    rationale: "Lock funds in CDs for higher interest rates over a fixed term.",
};

const HIGH_YIELD_SAVINGS: Suggestion = Suggestion {
    category: "High-Yield Savings Accounts",
    rationale: "Use high-yield savings accounts for secure short-term savings.",
};

const STOCKS: Suggestion = Suggestion {
    category: "Stocks",
    rationale: "Invest in diversified stocks for potential higher returns over the long term.",
};

const MUTUAL_FUNDS: Suggestion = Suggestion {
    category: "Mutual Funds",
    rationale: "Consider mutual funds for balanced investment across sectors.",
};

const SAVINGS_ACCOUNTS: Suggestion = Suggestion {
    category: "Savings Accounts",
    rationale: "Use high-yield savings accounts for short-term goals with flexibility.",
};

const REITS: Suggestion = Suggestion {
    category: "Real Estate Investment Trusts (REITs)",
    rationale: "Invest in REITs for potential income from real estate investments.",
};

/// Case-insensitive substring match against any of the given keywords
fn matches_any(goal: &str, keywords: &[&str]) -> bool {
    let goal = goal.to_lowercase();
    keywords.iter().any(|k| goal.contains(k))
}

/// Compute investment suggestions for the given savings and goals
///
/// Savings at or below $5,000.00 always yield an empty list; both tiers use
/// strict greater-than, so landing exactly on a threshold does not unlock
/// that tier.
pub fn suggest(savings: Money, short_term_goal: &str, long_term_goal: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if savings > TIER_ONE_THRESHOLD {
        if matches_any(short_term_goal, &["emergency fund", "vacation"]) {
            suggestions.push(CDS);
            suggestions.push(HIGH_YIELD_SAVINGS);
        } else if matches_any(long_term_goal, &["retirement", "investment portfolio"]) {
            suggestions.push(STOCKS);
            suggestions.push(MUTUAL_FUNDS);
        }
    }

    if savings > TIER_TWO_THRESHOLD {
        if matches_any(short_term_goal, &["home renovation", "education fund"]) {
            suggestions.push(SAVINGS_ACCOUNTS);
        } else if matches_any(long_term_goal, &["home purchase", "children's education"]) {
            suggestions.push(REITS);
        }
    }

    suggestions
}
