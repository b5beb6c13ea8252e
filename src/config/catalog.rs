use crate::{
    config::settings::LinkSettings,
    domain::template::{TemplateParser, UriTemplate},
};
use anyhow::{bail, Context, Result};
use std::collections::HashMap;

const DEFAULT_CONFIG_FILE: &str = "links.yml";

/// A named link relation with its parsed template.
#[derive(Debug, Clone)]
pub struct Link {
    pub rel: String,
    pub description: String,
    pub template: UriTemplate,
    /// Render collection values as repeated `name=value` pairs.
    pub composite: bool,
}

impl TryFrom<LinkSettings> for Link {
    type Error = anyhow::Error;

    fn try_from(value: LinkSettings) -> Result<Self> {
        let template = TemplateParser::parse(&value.template)
            .with_context(|| format!("Invalid template for link '{}'", value.rel))?;
        Ok(Self {
            rel: value.rel,
            description: value.description,
            template,
            composite: value.composite.unwrap_or(false),
        })
    }
}

/// LinkCatalog holds the link relations the service can expand, in the
/// order they were configured.
#[derive(Debug, Clone, Default)]
pub struct LinkCatalog {
    links: Vec<Link>,
    by_rel: HashMap<String, usize>,
}

impl LinkCatalog {
    pub fn from_settings(settings: Vec<LinkSettings>) -> Result<Self> {
        let mut catalog = Self::default();
        for entry in settings {
            let link = Link::try_from(entry)?;
            if catalog.by_rel.contains_key(&link.rel) {
                bail!("Duplicate rel: {}", link.rel);
            }
            catalog.by_rel.insert(link.rel.clone(), catalog.links.len());
            catalog.links.push(link);
        }
        Ok(catalog)
    }

    /// Load the catalog from `maybe_yml`, or from `links.yml` when no path is given.
    pub fn load(maybe_yml: Option<&str>) -> Result<Self> {
        let path = maybe_yml.unwrap_or(DEFAULT_CONFIG_FILE);
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read link catalog '{}'", path))?;
        let settings: Vec<LinkSettings> =
            serde_yaml::from_str(&yml).with_context(|| format!("Invalid yaml configuration in '{}'", path))?;
        let catalog = Self::from_settings(settings)?;
        tracing::info!(path, links = catalog.len(), "loaded link catalog");
        Ok(catalog)
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.by_rel.get(rel).map(|&index| &self.links[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
