use crate::Catalog;

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tripane_core::{Candidate, CatalogError, Error, ExecuteRequest, IconKind, Parent, Result};

/// An item entry in a static catalog file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub detail: String,
    /// Free-form kind matched against `ActionDef::applies_to`
    #[serde(default)]
    pub kind: String,
    /// Parent item id; omitted for root items
    #[serde(default)]
    pub parent: Option<String>,
    /// Value substituted for `{item}` / `{indirect}` in commands (defaults to `id`)
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ItemDef {
    fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.id)
    }
}

/// An action entry in a static catalog file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub detail: String,
    /// Item kinds this action applies to; empty means every item
    #[serde(default)]
    pub applies_to: Vec<String>,
    /// Item ids offered as root indirects
    #[serde(default)]
    pub indirects: Vec<String>,
    /// Shell command template with `{item}` and `{indirect}` placeholders
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ActionDef {
    fn matches_item(&self, item: &ItemDef) -> bool {
        self.applies_to.is_empty() || self.applies_to.iter().any(|kind| *kind == item.kind)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ItemDef>,
    #[serde(default)]
    actions: Vec<ActionDef>,
}

/// Catalog backed by a TOML file
///
/// ```toml
/// [[items]]
/// id = "docs"
/// name = "Documents"
/// kind = "folder"
///
/// [[items]]
/// id = "report"
/// name = "report.pdf"
/// kind = "file"
/// parent = "docs"
///
/// [[actions]]
/// id = "move-to"
/// name = "Move to"
/// applies_to = ["file"]
/// indirects = ["docs"]
/// command = "mv {item} {indirect}"
/// ```
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<ItemDef>,
    actions: Vec<ActionDef>,
    item_index: HashMap<String, usize>,
    action_index: HashMap<String, usize>,
    with_children: HashSet<String>,
}

impl StaticCatalog {
    /// Load a catalog from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Self::new(file.items, file.actions)
    }

    /// Load a catalog from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build and validate a catalog from item and action definitions
    pub fn new(items: Vec<ItemDef>, actions: Vec<ActionDef>) -> Result<Self> {
        let mut item_index = HashMap::new();
        for (idx, item) in items.iter().enumerate() {
            if item_index.insert(item.id.clone(), idx).is_some() {
                return Err(Error::Parse(format!("duplicate item id: {}", item.id)));
            }
        }

        let mut action_index = HashMap::new();
        for (idx, action) in actions.iter().enumerate() {
            if action_index.insert(action.id.clone(), idx).is_some() {
                return Err(Error::Parse(format!("duplicate action id: {}", action.id)));
            }
            if let Some(unknown) = action.indirects.iter().find(|id| !item_index.contains_key(*id)) {
                return Err(Error::Parse(format!(
                    "action '{}' offers unknown indirect '{}'",
                    action.id, unknown
                )));
            }
        }

        let mut with_children = HashSet::new();
        for item in &items {
            if let Some(parent) = &item.parent {
                if !item_index.contains_key(parent) {
                    return Err(Error::Parse(format!("item '{}' has unknown parent '{}'", item.id, parent)));
                }
                with_children.insert(parent.clone());
            }
        }

        Ok(Self { items, actions, item_index, action_index, with_children })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    fn item(&self, id: &str) -> Result<&ItemDef> {
        self.item_index
            .get(id)
            .map(|idx| &self.items[*idx])
            .ok_or_else(|| CatalogError::not_found(id).into())
    }

    fn action(&self, id: &str) -> Result<&ActionDef> {
        self.action_index
            .get(id)
            .map(|idx| &self.actions[*idx])
            .ok_or_else(|| CatalogError::not_found(id).into())
    }

    fn item_candidate(&self, item: &ItemDef) -> Candidate {
        let mut candidate = Candidate::new(&item.id, &item.name).with_detail(&item.detail);
        if self.with_children.contains(&item.id) {
            candidate = candidate.with_children();
        }
        if let Some(icon) = &item.icon {
            candidate = candidate.with_icon(icon);
        }
        candidate
    }

    fn action_candidate(&self, action: &ActionDef) -> Candidate {
        let indirect_types = if action.indirects.is_empty() { 0 } else { 1 };
        let mut candidate = Candidate::new(&action.id, &action.name)
            .with_detail(&action.detail)
            .with_indirect_types(indirect_types);
        if let Some(icon) = &action.icon {
            candidate = candidate.with_icon(icon);
        }
        candidate
    }

    /// Expand a command template for a request
    fn render_command(&self, template: &str, request: &ExecuteRequest) -> Result<String> {
        let item = self.item(&request.direct)?;
        let mut command = template.replace("{item}", &shell_quote(item.target()));

        if template.contains("{indirect}") {
            let indirect_id = request
                .indirect
                .as_deref()
                .ok_or_else(|| CatalogError::execution(&request.action, "action requires an indirect"))?;
            let indirect = self.item(indirect_id)?;
            command = command.replace("{indirect}", &shell_quote(indirect.target()));
        }

        Ok(command)
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[async_trait::async_trait]
impl Catalog for StaticCatalog {
    async fn list_children(&self, parent: &Parent) -> Result<Vec<Candidate>> {
        let parent_id = parent.id();
        if let Some(id) = parent_id {
            self.item(id)?;
        }

        Ok(self
            .items
            .iter()
            .filter(|item| item.parent.as_deref() == parent_id)
            .map(|item| self.item_candidate(item))
            .collect())
    }

    async fn list_actions(&self, item: &str) -> Result<Vec<Candidate>> {
        let item = self.item(item)?;
        Ok(self
            .actions
            .iter()
            .filter(|action| action.matches_item(item))
            .map(|action| self.action_candidate(action))
            .collect())
    }

    async fn list_indirects(&self, item: &str, action: &str) -> Result<Vec<Candidate>> {
        self.item(item)?;
        let action = self.action(action)?;
        action
            .indirects
            .iter()
            .map(|id| self.item(id).map(|def| self.item_candidate(def)))
            .collect()
    }

    async fn parent_of(&self, id: &str) -> Result<Parent> {
        Ok(Parent::from(self.item(id)?.parent.clone()))
    }

    async fn execute(&self, request: &ExecuteRequest) -> Result<()> {
        let action = self.action(&request.action)?;
        let item = self.item(&request.direct)?;
        if !action.matches_item(item) {
            return Err(CatalogError::execution(&action.id, format!("does not apply to '{}'", item.id)).into());
        }

        let Some(template) = &action.command else {
            tracing::info!(action = %action.id, item = %item.id, "action has no command, nothing to run");
            return Ok(());
        };

        let command = self.render_command(template, request)?;
        tracing::debug!(action = %action.id, %command, "running action command");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| CatalogError::execution(&action.id, format!("failed to spawn '{}': {}", command, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);
            let message = if stderr.is_empty() {
                format!("exit code {}", exit_code)
            } else {
                format!("exit code {}: {}", exit_code, stderr)
            };
            Err(CatalogError::execution(&action.id, message).into())
        }
    }

    fn icon_url(&self, id: &str, kind: IconKind) -> String {
        let icon = match kind {
            IconKind::Item => self.item(id).ok().and_then(|item| item.icon.clone()),
            IconKind::Action => self.action(id).ok().and_then(|action| action.icon.clone()),
        };
        icon.unwrap_or_else(|| match kind {
            IconKind::Item => "item".to_string(),
            IconKind::Action => "action".to_string(),
        })
    }
}
