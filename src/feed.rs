use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const NO_TITLE: &str = "No Title";
const NO_URL: &str = "#";
const UNKNOWN_SOURCE: &str = "Unknown Source";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub title: Option<String>,
    pub traffic: Option<String>,
    pub pub_date: Option<String>,
    pub main_picture: Option<String>,
    pub description: Option<String>,
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub picture: Option<String>,
}

/// Parses a daily-trends RSS document into trend records.
///
/// Only malformed XML is an error. A document without `rss`, without a
/// `channel` or without items simply yields no records.
pub fn parse_trends(xml: &str) -> Result<Vec<TrendRecord>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    if !is_named(&root, "rss") {
        return Ok(Vec::new());
    }
    let Some(channel) = child_elements(&root, "channel").next() else {
        return Ok(Vec::new());
    };
    Ok(child_elements(&channel, "item").map(|item| trend_record(&item)).collect())
}

/// Text of the first child element called `key`, or `None` when there is
/// no such child. A present but empty element yields `Some("")`.
///
/// `key` may carry a namespace prefix (`ht:picture`); the prefix is resolved
/// against the declarations in scope at `node`.
pub fn field(node: &Node<'_, '_>, key: &str) -> Option<String> {
    child_elements(node, key).next().map(|child| element_text(&child))
}

fn trend_record(item: &Node<'_, '_>) -> TrendRecord {
    TrendRecord {
        title: field(item, "title"),
        traffic: field(item, "ht:approx_traffic"),
        pub_date: field(item, "pubDate"),
        main_picture: field(item, "ht:picture"),
        description: field(item, "description"),
        news: child_elements(item, "ht:news_item")
            .map(|news| news_item(&news))
            .collect(),
    }
}

fn news_item(node: &Node<'_, '_>) -> NewsItem {
    NewsItem {
        title: field(node, "ht:news_item_title").unwrap_or_else(|| NO_TITLE.to_string()),
        url: field(node, "ht:news_item_url")
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| NO_URL.to_string()),
        source: field(node, "ht:news_item_source").unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        picture: field(node, "ht:news_item_picture"),
    }
}

/// Pretty JSON for a list of records, as printed by `--dump`.
pub fn to_json(trends: &[TrendRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(trends)?)
}

fn child_elements<'a, 'input: 'a>(
    node: &Node<'a, 'input>,
    key: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    let scope = *node;
    node.children()
        .filter(|child| child.is_element())
        .filter(move |child| matches_key(&scope, child, key))
}

fn matches_key(scope: &Node<'_, '_>, child: &Node<'_, '_>, key: &str) -> bool {
    let tag = child.tag_name();
    match key.split_once(':') {
        Some((prefix, local)) => {
            tag.name() == local
                && tag.namespace().is_some()
                && tag.namespace() == scope.lookup_namespace_uri(Some(prefix))
        }
        None => tag.name() == key && tag.namespace() == scope.lookup_namespace_uri(None),
    }
}

fn is_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn element_text(node: &Node<'_, '_>) -> String {
    node.descendants()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
