use crate::mvi::Intent;
use crate::optimistic::Item;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    QueryChanged { query: String },
    ResultsArrived { generation: u64, results: Vec<Item> },
}

impl Intent for SearchIntent {}
