//! Built-in sample join hypergraphs.
//!
//! Cyclic queries of the kind worst-case optimal joins are benchmarked on.
//! Relations are labelled `R1..Rn` in list order.

use crate::error::Result;
use crate::{Hypergraph, Relation};

/// A named sample query.
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub hypergraph: Hypergraph,
}

fn relations(edges: &[&[usize]]) -> Vec<Relation> {
    edges
        .iter()
        .enumerate()
        .map(|(idx, attrs)| Relation::new(format!("R{}", idx + 1), attrs.iter().copied()))
        .collect()
}

fn sample(name: &'static str, universe: usize, edges: &[&[usize]]) -> Result<Sample> {
    Ok(Sample {
        name,
        hypergraph: Hypergraph::new(1..=universe, relations(edges))?,
    })
}

/// Triangle query `R1(a,b) ⋈ R2(b,c) ⋈ R3(a,c)`.
pub fn triangle() -> Result<Sample> {
    sample("triangle", 3, &[&[1, 2], &[2, 3], &[1, 3]])
}

pub fn four_cycle() -> Result<Sample> {
    sample("four_cycle", 4, &[&[1, 2], &[2, 3], &[3, 4], &[4, 1]])
}

pub fn five_cycle() -> Result<Sample> {
    sample("five_cycle", 5, &[&[1, 2], &[2, 3], &[3, 4], &[4, 5], &[5, 1]])
}

/// Five relations over six attributes, mixing arities 3 and 4.
pub fn six_attribute_mixed() -> Result<Sample> {
    sample(
        "six_attribute_mixed",
        6,
        &[&[1, 2, 4, 5], &[1, 3, 4, 6], &[1, 2, 3], &[2, 4, 6], &[3, 5, 6]],
    )
}

/// Four arity-4 relations over eight attributes.
pub fn eight_attribute_ring() -> Result<Sample> {
    sample(
        "eight_attribute_ring",
        8,
        &[&[1, 2, 4, 5], &[1, 3, 4, 6], &[2, 3, 6, 7], &[7, 4, 5, 8]],
    )
}

/// Five-cycle where consecutive relations share two attributes.
pub fn wide_five_cycle() -> Result<Sample> {
    sample(
        "wide_five_cycle",
        10,
        &[
            &[1, 2, 3, 4],
            &[3, 4, 5, 6],
            &[5, 6, 7, 8],
            &[7, 8, 9, 10],
            &[9, 10, 1, 2],
        ],
    )
}

/// Six relations over sixteen attributes; attribute 9 is bound by no relation.
pub fn sixteen_attribute_chain() -> Result<Sample> {
    sample(
        "sixteen_attribute_chain",
        16,
        &[
            &[1, 2, 3, 4, 5],
            &[3, 4, 6],
            &[3, 5, 6],
            &[6, 8, 10],
            &[7, 8, 10, 11],
            &[11, 1, 12, 13, 14, 15, 16],
        ],
    )
}

/// All samples, in a fixed order.
pub fn all() -> Result<Vec<Sample>> {
    Ok(vec![
        triangle()?,
        four_cycle()?,
        five_cycle()?,
        six_attribute_mixed()?,
        eight_attribute_ring()?,
        wide_five_cycle()?,
        sixteen_attribute_chain()?,
    ])
}
