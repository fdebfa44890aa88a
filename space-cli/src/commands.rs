// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use space_hierarchy::{FlatFormatOptions, FlatItem, SpaceIndex};
use space_types::{ConvertOptions, DisplayItem, HierarchyNode, Space, SpaceId, convert};
use tracing::{debug, info};

use crate::cli::Command;
use crate::config::Config;

pub(crate) fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Format { input, json } => {
            let forest: Vec<HierarchyNode> = read_json(&input)?;
            let items = space_hierarchy::format(&forest);
            if json {
                print_json(&items)
            } else {
                print!("{}", render_items(items.iter(), config.indent));
                Ok(())
            }
        }
        Command::Search {
            input,
            query,
            ranked,
            json,
        } => {
            let forest: Vec<HierarchyNode> = read_json(&input)?;
            let items = space_hierarchy::format(&forest);
            let hits = if ranked {
                space_hierarchy::search_ranked(&items, &query)
            } else {
                space_hierarchy::search(&items, &query)
            };
            info!(query = %query, hits = hits.len(), "search finished");

            if json {
                print_json(&hits)
            } else {
                print!("{}", render_items(hits.into_iter(), config.indent));
                Ok(())
            }
        }
        Command::Convert {
            magnitude,
            from,
            to,
            round,
        } => {
            let options = ConvertOptions::round_to(round.unwrap_or(config.round));
            let value = convert(magnitude, from, to, options)?;
            println!("{} {}", value, to.label());
            Ok(())
        }
        Command::Parents { input, id, lenient } => {
            let spaces: Vec<Space> = read_json(&input)?;
            let index = SpaceIndex::new(&spaces);
            let id = SpaceId::from(id);
            let space = index
                .get(&id)
                .ok_or_else(|| anyhow!("no space with id {id} in {}", input.display()))?;

            for ancestor in index.parents_of(space, !lenient)? {
                let name = index.get(&ancestor).map(|s| s.name.as_str()).unwrap_or("");
                println!("{ancestor}\t{name}");
            }
            Ok(())
        }
        Command::Tree { input, json } => {
            let spaces: Vec<Space> = read_json(&input)?;
            let tree = space_hierarchy::build_tree(&spaces);
            if json {
                print_json(&tree)
            } else {
                let items = space_hierarchy::format(&tree);
                print!("{}", render_items(items.iter(), config.indent));
                Ok(())
            }
        }
        Command::Flat {
            input,
            no_placeholders,
            json,
        } => {
            let spaces: Vec<Space> = read_json(&input)?;
            let options = FlatFormatOptions {
                render_placeholders: config.render_placeholders && !no_placeholders,
            };
            let items = space_hierarchy::format_flat(&spaces, options);
            if json {
                let rows: Vec<_> = items
                    .iter()
                    .map(|item| {
                        serde_json::json!({
                            "depth": item.depth,
                            "space": item.space,
                            "disabled": item.placeholder,
                        })
                    })
                    .collect();
                print_json(&rows)
            } else {
                print!("{}", render_flat(&items, config.indent));
                Ok(())
            }
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("read stdin")?;
        raw
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };

    debug!(bytes = raw.len(), "read input");
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_items<'a>(items: impl Iterator<Item = &'a DisplayItem>, indent: usize) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{:width$}{}  {}\n",
            "",
            item.space.name,
            item.space.space_type.label(),
            width = item.depth * indent
        ));
    }
    out
}

fn render_flat(items: &[FlatItem], indent: usize) -> String {
    let mut out = String::new();
    for item in items {
        let tag = if item.placeholder {
            "(0)"
        } else {
            item.space.space_type.label()
        };
        out.push_str(&format!(
            "{:width$}{}  {}\n",
            "",
            item.space.name,
            tag,
            width = item.depth * indent
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_types::SpaceType;

    #[test]
    fn rows_are_indented_by_depth() {
        let forest = vec![
            HierarchyNode::new("b", "Tower", SpaceType::Building)
                .with_children(vec![HierarchyNode::new("f", "Ground", SpaceType::Floor)]),
        ];
        let items = space_hierarchy::format(&forest);

        assert_eq!(
            render_items(items.iter(), 4),
            "Tower  Building\n    Ground  Floor\n"
        );
    }

    #[test]
    fn placeholders_render_as_empty_counts() {
        let spaces = vec![Space::new("s", "Kiosk", SpaceType::Space)];
        let items = space_hierarchy::format_flat(&spaces, FlatFormatOptions::default());

        let text = render_flat(&items, 2);
        assert!(text.starts_with("Campus  (0)\nBuilding  (0)\nFloor  (0)\n"));
        assert!(text.ends_with("Kiosk  Space\n"));
    }
}
