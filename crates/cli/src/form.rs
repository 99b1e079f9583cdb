//! The JSON form file: everything a user would type into the three steps.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use apex_invoicing::{BusinessInput, DetailsInput, ItemRowInput, ItemRows};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceForm {
    pub business: BusinessInput,
    pub details: DetailsInput,
    pub items: Vec<ItemRowInput>,
}

impl InvoiceForm {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read form {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid form {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn item_rows(&self) -> ItemRows {
        ItemRows::from_rows(self.items.clone())
    }
}
