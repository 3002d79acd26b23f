//! ABC (Pareto) classification of cost items.
//!
//! Items are ranked by amount, largest first, and bucketed by the cumulative
//! share of the total they reach *after* being added: up to 80 % is class A,
//! up to 95 % class B, the rest class C.

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

pub const CLASS_A_LIMIT: f64 = 80.0;
pub const CLASS_B_LIMIT: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumIter)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    /// Class for a cumulative percentage (inclusive upper bounds).
    pub fn for_cumulative(percentage: f64) -> Self {
        if percentage <= CLASS_A_LIMIT {
            AbcClass::A
        } else if percentage <= CLASS_B_LIMIT {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}

/// One classified item.
#[derive(Debug, Clone, PartialEq)]
pub struct AbcEntry<T> {
    pub item: T,
    pub amount: f64,
    pub class: AbcClass,
    pub cumulative_percentage: f64,
}

/// Classifies `items` by the amount `amount_of` returns.
///
/// The result is sorted by amount descending; equal amounts keep their input
/// order. Non-finite or negative amounts count as zero. When the total is
/// zero every item is class C at 0 %.
pub fn classify<T, F>(items: impl IntoIterator<Item = T>, amount_of: F) -> Vec<AbcEntry<T>>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<(T, f64)> = items
        .into_iter()
        .map(|item| {
            let amount = amount_of(&item);
            let amount = if amount.is_finite() && amount > 0.0 {
                amount
            } else {
                0.0
            };
            (item, amount)
        })
        .collect();

    // Stable: ties stay in input order.
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    let total: f64 = ranked.iter().map(|(_, amount)| amount).sum();
    if total <= 0.0 {
        return ranked
            .into_iter()
            .map(|(item, amount)| AbcEntry {
                item,
                amount,
                class: AbcClass::C,
                cumulative_percentage: 0.0,
            })
            .collect();
    }

    let last = ranked.len().saturating_sub(1);
    let mut running = 0.0;
    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (item, amount))| {
            running += amount;
            // Pin the tail to exactly 100 so float drift never leaves it below.
            let cumulative_percentage = if index == last {
                100.0
            } else {
                (running / total * 100.0).min(100.0)
            };
            AbcEntry {
                item,
                amount,
                class: AbcClass::for_cumulative(cumulative_percentage),
                cumulative_percentage,
            }
        })
        .collect()
}

/// Totals for one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbcClassSummary {
    pub class: AbcClass,
    pub count: usize,
    pub amount: f64,
    /// Share of the grand total, in percent.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbcSummary {
    pub total: f64,
    pub classes: Vec<AbcClassSummary>,
}

impl AbcSummary {
    pub fn from_entries<T>(entries: &[AbcEntry<T>]) -> Self {
        let total: f64 = entries.iter().map(|entry| entry.amount).sum();
        let classes = AbcClass::iter()
            .map(|class| {
                let (count, amount) = entries
                    .iter()
                    .filter(|entry| entry.class == class)
                    .fold((0, 0.0), |(count, amount), entry| {
                        (count + 1, amount + entry.amount)
                    });
                AbcClassSummary {
                    class,
                    count,
                    amount,
                    share: if total > 0.0 {
                        amount / total * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        Self { total, classes }
    }

    pub fn class(&self, class: AbcClass) -> Option<&AbcClassSummary> {
        self.classes.iter().find(|summary| summary.class == class)
    }
}

/// The `n` largest items.
pub fn top<T: Clone>(entries: &[AbcEntry<T>], n: usize) -> Vec<AbcEntry<T>> {
    entries.iter().take(n).cloned().collect()
}
