//! Query parameters accepted by the list endpoints

use crate::domain::BatchStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Ascending => "asc",
            OrderDirection::Descending => "desc",
        }
    }
}

/// Optional list filters. Unset fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub inventory_negative: Option<bool>,
    /// Return detail documents instead of the list shape
    pub complete: Option<bool>,
    pub inventory_exists: Option<bool>,
    pub limit: Option<u32>,
    /// `_id` of the last document of the previous page
    pub start_after: Option<String>,
    pub order_by: Option<String>,
    pub order_by_direction: Option<OrderDirection>,
    pub status: Option<BatchStatus>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete(mut self) -> Self {
        self.complete = Some(true);
        self
    }

    /// Only items with an inventory amount set
    pub fn in_stock(mut self) -> Self {
        self.inventory_exists = Some(true);
        self
    }

    pub fn with_status(mut self, status: BatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.start_after = Some(id.into());
        self
    }

    pub fn ordered_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some(field.into());
        self.order_by_direction = Some(direction);
        self
    }

    /// Key/value pairs in a stable order; encoding is left to the HTTP client.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        if let Some(flag) = self.inventory_negative {
            push("inventory_negative", flag.to_string());
        }
        if let Some(flag) = self.complete {
            push("complete", flag.to_string());
        }
        if let Some(flag) = self.inventory_exists {
            push("inventory_exists", flag.to_string());
        }
        if let Some(limit) = self.limit {
            push("limit", limit.to_string());
        }
        if let Some(id) = &self.start_after {
            push("start_after", id.clone());
        }
        if let Some(field) = &self.order_by {
            push("order_by", field.clone());
        }
        if let Some(direction) = self.order_by_direction {
            push("order_by_direction", direction.as_str().to_string());
        }
        if let Some(status) = self.status {
            push("status", status.as_str().to_string());
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(ListQuery::new().to_pairs().is_empty());
    }

    #[test]
    fn every_set_field_becomes_its_own_pair() {
        let query = ListQuery {
            inventory_negative: Some(false),
            ..ListQuery::new()
                .in_stock()
                .complete()
                .with_limit(50)
                .starting_after("abc 123")
                .ordered_by("name", OrderDirection::Descending)
                .with_status(BatchStatus::Fermenting)
        };
        assert_eq!(
            query.to_pairs(),
            owned(&[
                ("inventory_negative", "false"),
                ("complete", "true"),
                ("inventory_exists", "true"),
                ("limit", "50"),
                ("start_after", "abc 123"),
                ("order_by", "name"),
                ("order_by_direction", "desc"),
                ("status", "Fermenting"),
            ])
        );
    }
}
